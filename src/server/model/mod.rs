//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types carry their own `validate()` rules so services can reject bad input
//! before touching the database.

pub mod assignment;
pub mod classroom;
pub mod classroom_object;
pub mod layout_template;
pub mod student;
