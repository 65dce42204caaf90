use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        classroom::{ClassroomDto, ClassroomWithDetailsDto, CreateClassroomDto, UpdateClassroomDto},
    },
    server::{
        error::AppError,
        model::classroom::{CreateClassroomParams, UpdateClassroomParams},
        service::classroom::ClassroomService,
        state::AppState,
    },
};

/// Tag for grouping classroom endpoints in OpenAPI documentation
pub static CLASSROOM_TAG: &str = "classroom";

/// Create a new classroom.
///
/// The classroom starts with an empty canvas of the given size. Objects are placed
/// afterwards, either one by one or by loading a layout template.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Classroom name, teacher and canvas dimensions
///
/// # Returns
/// - `201 Created` - Successfully created classroom
/// - `400 Bad Request` - Empty name or non-positive canvas dimension
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classrooms",
    tag = CLASSROOM_TAG,
    request_body = CreateClassroomDto,
    responses(
        (status = 201, description = "Successfully created classroom", body = ClassroomDto),
        (status = 400, description = "Invalid classroom data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_classroom(
    State(state): State<AppState>,
    Json(payload): Json<CreateClassroomDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateClassroomParams::from_dto(payload);
    let classroom = ClassroomService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(classroom.into_dto())))
}

/// List all classrooms ordered by ID, without objects or assignments.
#[utoipa::path(
    get,
    path = "/api/classrooms",
    tag = CLASSROOM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved classrooms", body = Vec<ClassroomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classrooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let classrooms = ClassroomService::new(&state.db).get_all().await?;
    let dtos: Vec<ClassroomDto> = classrooms.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a classroom with its objects and seated students.
///
/// Each assignment in the response embeds the seated student and the desk object.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Classroom ID
///
/// # Returns
/// - `200 OK` - Classroom with objects and assignments
/// - `404 Not Found` - No classroom with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/classrooms/{id}",
    tag = CLASSROOM_TAG,
    params(
        ("id" = i32, Path, description = "Classroom ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved classroom", body = ClassroomWithDetailsDto),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classroom(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let classroom = ClassroomService::new(&state.db).get_with_details(id).await?;

    Ok((StatusCode::OK, Json(classroom.into_dto())))
}

/// Update classroom metadata.
///
/// Only fields present in the body are changed. Send `"description": null` to clear
/// the description.
///
/// # Returns
/// - `200 OK` - Updated classroom
/// - `400 Bad Request` - Empty name or non-positive canvas dimension
/// - `404 Not Found` - No classroom with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/classrooms/{id}",
    tag = CLASSROOM_TAG,
    params(
        ("id" = i32, Path, description = "Classroom ID")
    ),
    request_body = UpdateClassroomDto,
    responses(
        (status = 200, description = "Successfully updated classroom", body = ClassroomDto),
        (status = 400, description = "Invalid classroom data", body = ErrorDto),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_classroom(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClassroomDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateClassroomParams::from_dto(id, payload);
    let classroom = ClassroomService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(classroom.into_dto())))
}

/// Delete a classroom together with its objects and assignments.
#[utoipa::path(
    delete,
    path = "/api/classrooms/{id}",
    tag = CLASSROOM_TAG,
    params(
        ("id" = i32, Path, description = "Classroom ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted classroom"),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_classroom(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ClassroomService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
