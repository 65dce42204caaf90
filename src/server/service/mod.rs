//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Seating rules, template instantiation, input validation
//! - **Orchestration**: Coordinating multiple repository calls into one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes inside one transaction
//!
//! Validation and existence checks always run before the first write, so a rejected
//! request leaves the database untouched.

pub mod assignment;
pub mod classroom;
pub mod classroom_object;
pub mod layout_template;
pub mod student;

#[cfg(test)]
mod test;
