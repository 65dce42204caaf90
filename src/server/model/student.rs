//! Domain models for student data operations.

use chrono::{DateTime, Utc};

use crate::{
    model::student::{CreateStudentDto, StudentDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_email, require_non_empty},
    },
};

/// A student who can be seated in any classroom.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Unique identifier for the student.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Optional external (school-issued) identifier.
    pub student_id: Option<String>,
    /// Timestamp when the student was created.
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            student_id: entity.student_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the student to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            email: self.email,
            student_id: self.student_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new student.
///
/// No uniqueness is enforced on `email` or `student_id`.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
}

impl CreateStudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            student_id: dto.student_id,
        }
    }

    /// Checks that the name is present and the email, if any, is well formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_email(self.email.as_deref())?;

        Ok(())
    }
}
