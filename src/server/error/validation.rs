use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input rejected before any write reached the database.
///
/// Every variant maps to 400 Bad Request. Messages are safe to show to clients since
/// they only echo the caller's own input.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A width, height or canvas dimension was zero or negative.
    #[error("{field} must be greater than 0 (got {value})")]
    NonPositiveDimension {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A numeric field was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFiniteNumber {
        /// Name of the offending field
        field: &'static str,
    },

    /// A required text field was empty or whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Email did not have the `local@domain` shape.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// The same ID appeared more than once in an input list.
    #[error("{field} contains duplicate id {id}")]
    DuplicateId {
        /// Name of the list containing the duplicate
        field: &'static str,
        /// The repeated ID
        id: i32,
    },

    /// One or more student IDs do not exist.
    #[error("Unknown student ids: {0:?}")]
    UnknownStudents(Vec<i32>),

    /// One or more desk object IDs do not exist.
    #[error("Unknown desk object ids: {0:?}")]
    UnknownDesks(Vec<i32>),

    /// A desk belongs to a different classroom than the one being seated.
    #[error("Desk object {desk_id} does not belong to classroom {classroom_id}")]
    DeskNotInClassroom {
        /// The desk object ID
        desk_id: i32,
        /// The classroom being seated
        classroom_id: i32,
    },

    /// A student was pointed at an object that cannot hold one.
    #[error("Object {0} is not assignable")]
    DeskNotAssignable(i32),
}

/// Converts validation errors into 400 Bad Request responses carrying the error message.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
