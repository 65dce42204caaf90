//! Request and response DTOs shared by the HTTP API.
//!
//! These types define the JSON wire format. The server converts them to and from its
//! own domain models in `server::model`, so the API shape can evolve separately from
//! storage.

pub mod api;
pub mod assignment;
pub mod classroom;
pub mod classroom_object;
pub mod layout_template;
pub mod student;
