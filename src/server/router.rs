//! Route table and OpenAPI document.
//!
//! Routes are registered through `utoipa-axum`, which takes each handler's path and
//! method from its `utoipa::path` annotation, so the served routes and the OpenAPI
//! document cannot drift apart. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        assignment::{self, ASSIGNMENT_TAG},
        classroom::{self, CLASSROOM_TAG},
        classroom_object::{self, CLASSROOM_OBJECT_TAG},
        health::{self, HEALTH_TAG},
        layout_template::{self, LAYOUT_TEMPLATE_TAG},
        student::{self, STUDENT_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Seatplan API", description = "Classroom seating layouts and assignments"),
    tags(
        (name = HEALTH_TAG, description = "Service health"),
        (name = STUDENT_TAG, description = "Students"),
        (name = CLASSROOM_TAG, description = "Classrooms"),
        (name = CLASSROOM_OBJECT_TAG, description = "Objects placed on a classroom canvas"),
        (name = ASSIGNMENT_TAG, description = "Seating students at desks"),
        (name = LAYOUT_TEMPLATE_TAG, description = "Reusable classroom layouts"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI, bound to the given state.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(student::create_student, student::get_students))
        .routes(routes!(student::delete_student))
        .routes(routes!(classroom::create_classroom, classroom::get_classrooms))
        .routes(routes!(
            classroom::get_classroom,
            classroom::update_classroom,
            classroom::delete_classroom
        ))
        .routes(routes!(classroom_object::create_classroom_object))
        .routes(routes!(
            classroom_object::update_classroom_object,
            classroom_object::delete_classroom_object
        ))
        .routes(routes!(assignment::create_student_assignment))
        .routes(routes!(assignment::randomize_assignments))
        .routes(routes!(assignment::delete_student_assignment))
        .routes(routes!(
            layout_template::create_layout_template,
            layout_template::get_layout_templates
        ))
        .routes(routes!(
            layout_template::get_layout_template,
            layout_template::delete_layout_template
        ))
        .routes(routes!(layout_template::load_layout_template))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .with_state(state)
}
