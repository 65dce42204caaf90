use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        classroom_object::ClassroomObjectDto,
        layout_template::{CreateLayoutTemplateDto, LayoutTemplateWithObjectsDto},
    },
    server::{
        error::AppError, model::layout_template::CreateLayoutTemplateParams,
        service::layout_template::LayoutTemplateService, state::AppState,
    },
};

/// Tag for grouping layout template endpoints in OpenAPI documentation
pub static LAYOUT_TEMPLATE_TAG: &str = "layout_template";

/// Create a reusable layout template.
///
/// The template and all of its blueprint objects are stored together; if any object
/// is invalid nothing is stored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Template metadata and blueprint objects
///
/// # Returns
/// - `201 Created` - The template with its objects
/// - `400 Bad Request` - Invalid metadata or blueprint object
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/templates",
    tag = LAYOUT_TEMPLATE_TAG,
    request_body = CreateLayoutTemplateDto,
    responses(
        (status = 201, description = "Successfully created template", body = LayoutTemplateWithObjectsDto),
        (status = 400, description = "Invalid template data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_layout_template(
    State(state): State<AppState>,
    Json(payload): Json<CreateLayoutTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateLayoutTemplateParams::from_dto(payload);
    let template = LayoutTemplateService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(template.into_dto())))
}

/// List every template with its objects.
///
/// `is_public` is informational; all templates are listed.
#[utoipa::path(
    get,
    path = "/api/templates",
    tag = LAYOUT_TEMPLATE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved templates", body = Vec<LayoutTemplateWithObjectsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_layout_templates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let templates = LayoutTemplateService::new(&state.db).get_all().await?;
    let dtos: Vec<LayoutTemplateWithObjectsDto> =
        templates.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one template with its objects.
#[utoipa::path(
    get,
    path = "/api/templates/{id}",
    tag = LAYOUT_TEMPLATE_TAG,
    params(
        ("id" = i32, Path, description = "Layout template ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved template", body = LayoutTemplateWithObjectsDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_layout_template(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let template = LayoutTemplateService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(template.into_dto())))
}

/// Delete a template and its blueprint objects.
///
/// Classroom objects previously created from the template are kept.
#[utoipa::path(
    delete,
    path = "/api/templates/{id}",
    tag = LAYOUT_TEMPLATE_TAG,
    params(
        ("id" = i32, Path, description = "Layout template ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted template"),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_layout_template(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    LayoutTemplateService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Copy a template's objects into a classroom.
///
/// Adds one new classroom object per blueprint object, in template order. Existing
/// objects in the classroom are kept and the canvas size is unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Layout template ID
/// - `classroom_id` - Classroom receiving the objects
///
/// # Returns
/// - `201 Created` - The created classroom objects
/// - `404 Not Found` - Template or classroom doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/templates/{id}/load/{classroom_id}",
    tag = LAYOUT_TEMPLATE_TAG,
    params(
        ("id" = i32, Path, description = "Layout template ID"),
        ("classroom_id" = i32, Path, description = "Classroom ID")
    ),
    responses(
        (status = 201, description = "Successfully loaded template", body = Vec<ClassroomObjectDto>),
        (status = 404, description = "Template or classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn load_layout_template(
    State(state): State<AppState>,
    Path((id, classroom_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let objects = LayoutTemplateService::new(&state.db)
        .load_into_classroom(id, classroom_id)
        .await?;
    let dtos: Vec<ClassroomObjectDto> = objects.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::CREATED, Json(dtos)))
}
