//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run against the
//! pooled `DatabaseConnection` or inside a `DatabaseTransaction` when a service needs
//! several writes to commit together.

pub mod classroom;
pub mod classroom_object;
pub mod layout_template;
pub mod student;
pub mod student_assignment;
