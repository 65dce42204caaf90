use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        assignment::{CreateStudentAssignmentDto, RandomizeAssignmentsDto, StudentAssignmentDto},
    },
    server::{
        error::AppError,
        model::assignment::{CreateStudentAssignmentParams, RandomizeAssignmentsParams},
        service::assignment::AssignmentService,
        state::AppState,
    },
};

/// Tag for grouping seating endpoints in OpenAPI documentation
pub static ASSIGNMENT_TAG: &str = "assignment";

/// Seat a student at a desk.
///
/// Any assignment in the classroom that occupies the desk or seats the student is
/// replaced.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `classroom_id` - Classroom owning the desk
/// - `payload` - Student and desk IDs
///
/// # Returns
/// - `201 Created` - The new assignment
/// - `400 Bad Request` - Desk is in another classroom or not assignable
/// - `404 Not Found` - Classroom, student or desk doesn't exist
/// - `409 Conflict` - A concurrent request claimed the desk or student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classrooms/{classroom_id}/assignments",
    tag = ASSIGNMENT_TAG,
    params(
        ("classroom_id" = i32, Path, description = "Classroom ID")
    ),
    request_body = CreateStudentAssignmentDto,
    responses(
        (status = 201, description = "Successfully seated student", body = StudentAssignmentDto),
        (status = 400, description = "Desk cannot hold this assignment", body = ErrorDto),
        (status = 404, description = "Classroom, student or desk not found", body = ErrorDto),
        (status = 409, description = "Seating changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student_assignment(
    State(state): State<AppState>,
    Path(classroom_id): Path<i32>,
    Json(payload): Json<CreateStudentAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStudentAssignmentParams::from_dto(classroom_id, payload);
    let assignment = AssignmentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

/// Randomly seat the given students at the given desks.
///
/// Pairs as many students as there are desks (or vice versa); the surplus is left
/// unseated. Existing assignments in the classroom for any listed desk or student are
/// replaced. Calling this twice gives a different seating.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `classroom_id` - Classroom being seated
/// - `payload` - Student IDs and desk object IDs
///
/// # Returns
/// - `200 OK` - The newly created assignments
/// - `400 Bad Request` - Duplicate, unknown, foreign or unassignable IDs
/// - `404 Not Found` - No classroom with that ID
/// - `409 Conflict` - A concurrent request claimed a desk or student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classrooms/{classroom_id}/assignments/randomize",
    tag = ASSIGNMENT_TAG,
    params(
        ("classroom_id" = i32, Path, description = "Classroom ID")
    ),
    request_body = RandomizeAssignmentsDto,
    responses(
        (status = 200, description = "Successfully randomized seating", body = Vec<StudentAssignmentDto>),
        (status = 400, description = "Invalid student or desk IDs", body = ErrorDto),
        (status = 404, description = "Classroom not found", body = ErrorDto),
        (status = 409, description = "Seating changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn randomize_assignments(
    State(state): State<AppState>,
    Path(classroom_id): Path<i32>,
    Json(payload): Json<RandomizeAssignmentsDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RandomizeAssignmentsParams::from_dto(classroom_id, payload);
    let assignments = AssignmentService::new(&state.db).randomize(params).await?;
    let dtos: Vec<StudentAssignmentDto> = assignments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Unseat a student by removing the assignment.
#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    tag = ASSIGNMENT_TAG,
    params(
        ("id" = i32, Path, description = "Student assignment ID")
    ),
    responses(
        (status = 204, description = "Successfully removed assignment"),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student_assignment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AssignmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
