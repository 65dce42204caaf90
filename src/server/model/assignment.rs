//! Domain models for seating students at desks.

use chrono::{DateTime, Utc};

use crate::{
    model::assignment::{
        CreateStudentAssignmentDto, RandomizeAssignmentsDto, StudentAssignmentDetailsDto,
        StudentAssignmentDto,
    },
    server::{
        error::validation::ValidationError,
        model::{classroom_object::ClassroomObject, student::Student},
        util::validate::require_unique_ids,
    },
};

/// A student seated at one desk of one classroom.
///
/// A desk holds at most one student, and a student holds at most one desk per classroom.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAssignment {
    /// Unique identifier for the assignment.
    pub id: i32,
    /// ID of the classroom the desk belongs to.
    pub classroom_id: i32,
    /// ID of the seated student.
    pub student_id: i32,
    /// ID of the occupied desk object.
    pub desk_object_id: i32,
    /// Timestamp when the student was seated.
    pub assigned_at: DateTime<Utc>,
}

impl StudentAssignment {
    /// Converts an entity model to an assignment domain model at the repository boundary.
    pub fn from_entity(entity: entity::student_assignment::Model) -> Self {
        Self {
            id: entity.id,
            classroom_id: entity.classroom_id,
            student_id: entity.student_id,
            desk_object_id: entity.desk_object_id,
            assigned_at: entity.assigned_at,
        }
    }

    pub fn into_dto(self) -> StudentAssignmentDto {
        StudentAssignmentDto {
            id: self.id,
            classroom_id: self.classroom_id,
            student_id: self.student_id,
            desk_object_id: self.desk_object_id,
            assigned_at: self.assigned_at,
        }
    }
}

/// An assignment joined with its student and desk object.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAssignmentDetails {
    pub assignment: StudentAssignment,
    pub student: Student,
    pub desk_object: ClassroomObject,
}

impl StudentAssignmentDetails {
    pub fn into_dto(self) -> StudentAssignmentDetailsDto {
        StudentAssignmentDetailsDto {
            assignment: self.assignment.into_dto(),
            student: self.student.into_dto(),
            desk_object: self.desk_object.into_dto(),
        }
    }
}

/// Parameters for seating a single student.
#[derive(Debug, Clone)]
pub struct CreateStudentAssignmentParams {
    pub classroom_id: i32,
    pub student_id: i32,
    pub desk_object_id: i32,
}

impl CreateStudentAssignmentParams {
    pub fn from_dto(classroom_id: i32, dto: CreateStudentAssignmentDto) -> Self {
        Self {
            classroom_id,
            student_id: dto.student_id,
            desk_object_id: dto.desk_object_id,
        }
    }
}

/// Parameters for replacing a classroom's seating with a random pairing.
#[derive(Debug, Clone)]
pub struct RandomizeAssignmentsParams {
    pub classroom_id: i32,
    /// Students to seat, in caller order.
    pub student_ids: Vec<i32>,
    /// Desks to fill, in caller order.
    pub desk_object_ids: Vec<i32>,
}

impl RandomizeAssignmentsParams {
    pub fn from_dto(classroom_id: i32, dto: RandomizeAssignmentsDto) -> Self {
        Self {
            classroom_id,
            student_ids: dto.student_ids,
            desk_object_ids: dto.desk_object_ids,
        }
    }

    /// Rejects repeated IDs in either list.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_unique_ids("student_ids", &self.student_ids)?;
        require_unique_ids("desk_object_ids", &self.desk_object_ids)?;

        Ok(())
    }
}
