//! HTTP request handlers for the JSON API.
//!
//! Controllers convert request DTOs into parameter models, call the matching service,
//! and convert the resulting domain models back into DTOs. Each handler carries a
//! `utoipa::path` annotation used both for the OpenAPI document and for route
//! registration in `server::router`.

pub mod assignment;
pub mod classroom;
pub mod classroom_object;
pub mod health;
pub mod layout_template;
pub mod student;
