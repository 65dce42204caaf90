use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        classroom_object::{ClassroomObjectDto, CreateClassroomObjectDto, UpdateClassroomObjectDto},
    },
    server::{
        error::AppError,
        model::classroom_object::{CreateClassroomObjectParams, UpdateClassroomObjectParams},
        service::classroom_object::ClassroomObjectService,
        state::AppState,
    },
};

/// Tag for grouping classroom object endpoints in OpenAPI documentation
pub static CLASSROOM_OBJECT_TAG: &str = "classroom_object";

/// Place a new object in a classroom.
///
/// `rotation` defaults to 0 and `is_assignable` to false when omitted. Only
/// assignable objects can hold a student.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `classroom_id` - Classroom receiving the object
/// - `payload` - Object type, name, geometry and seating flag
///
/// # Returns
/// - `201 Created` - Successfully created object
/// - `400 Bad Request` - Empty name, non-positive size or non-finite number
/// - `404 Not Found` - No classroom with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classrooms/{classroom_id}/objects",
    tag = CLASSROOM_OBJECT_TAG,
    params(
        ("classroom_id" = i32, Path, description = "Classroom ID")
    ),
    request_body = CreateClassroomObjectDto,
    responses(
        (status = 201, description = "Successfully created object", body = ClassroomObjectDto),
        (status = 400, description = "Invalid object data", body = ErrorDto),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_classroom_object(
    State(state): State<AppState>,
    Path(classroom_id): Path<i32>,
    Json(payload): Json<CreateClassroomObjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateClassroomObjectParams::from_dto(classroom_id, payload);
    let object = ClassroomObjectService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(object.into_dto())))
}

/// Move, resize, rename or recolor an object.
///
/// Only fields present in the body are changed. Send `"color": null` to clear the
/// color. Type and assignability cannot be changed.
///
/// # Returns
/// - `200 OK` - Updated object
/// - `400 Bad Request` - Empty name, non-positive size or non-finite number
/// - `404 Not Found` - No object with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/objects/{id}",
    tag = CLASSROOM_OBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Classroom object ID")
    ),
    request_body = UpdateClassroomObjectDto,
    responses(
        (status = 200, description = "Successfully updated object", body = ClassroomObjectDto),
        (status = 400, description = "Invalid object data", body = ErrorDto),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_classroom_object(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClassroomObjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateClassroomObjectParams::from_dto(id, payload);
    let object = ClassroomObjectService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(object.into_dto())))
}

/// Delete an object; a student seated at it loses the seat.
#[utoipa::path(
    delete,
    path = "/api/objects/{id}",
    tag = CLASSROOM_OBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Classroom object ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted object"),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_classroom_object(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ClassroomObjectService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
