//! Domain models for classrooms and the composed classroom detail view.

use chrono::{DateTime, Utc};

use crate::{
    model::classroom::{
        ClassroomDto, ClassroomWithDetailsDto, CreateClassroomDto, UpdateClassroomDto,
    },
    server::{
        error::validation::ValidationError,
        model::{assignment::StudentAssignmentDetails, classroom_object::ClassroomObject},
        util::validate::{require_non_empty, require_positive},
    },
};

/// A classroom with its canvas dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Classroom {
    /// Unique identifier for the classroom.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Name of the teacher who owns the room.
    pub teacher_name: String,
    /// Canvas width in canvas units.
    pub canvas_width: f64,
    /// Canvas height in canvas units.
    pub canvas_height: f64,
    /// Timestamp when the classroom was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last metadata update.
    pub updated_at: DateTime<Utc>,
}

impl Classroom {
    /// Converts an entity model to a classroom domain model at the repository boundary.
    pub fn from_entity(entity: entity::classroom::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            teacher_name: entity.teacher_name,
            canvas_width: entity.canvas_width,
            canvas_height: entity.canvas_height,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the classroom to a DTO for API responses.
    pub fn into_dto(self) -> ClassroomDto {
        ClassroomDto {
            id: self.id,
            name: self.name,
            description: self.description,
            teacher_name: self.teacher_name,
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A classroom together with every object on its canvas and every seated student.
///
/// Objects are ordered by ID. Assignments are ordered by assignment time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomWithDetails {
    pub classroom: Classroom,
    pub objects: Vec<ClassroomObject>,
    pub assignments: Vec<StudentAssignmentDetails>,
}

impl ClassroomWithDetails {
    pub fn into_dto(self) -> ClassroomWithDetailsDto {
        ClassroomWithDetailsDto {
            classroom: self.classroom.into_dto(),
            objects: self
                .objects
                .into_iter()
                .map(ClassroomObject::into_dto)
                .collect(),
            assignments: self
                .assignments
                .into_iter()
                .map(StudentAssignmentDetails::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a new classroom.
#[derive(Debug, Clone)]
pub struct CreateClassroomParams {
    pub name: String,
    pub description: Option<String>,
    pub teacher_name: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl CreateClassroomParams {
    pub fn from_dto(dto: CreateClassroomDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            teacher_name: dto.teacher_name,
            canvas_width: dto.canvas_width,
            canvas_height: dto.canvas_height,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("teacher_name", &self.teacher_name)?;
        require_positive("canvas_width", self.canvas_width)?;
        require_positive("canvas_height", self.canvas_height)?;

        Ok(())
    }
}

/// Parameters for updating classroom metadata.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateClassroomParams {
    /// ID of the classroom to update.
    pub id: i32,
    pub name: Option<String>,
    /// New description (outer Option indicates field presence, inner for nullable value).
    pub description: Option<Option<String>>,
    pub teacher_name: Option<String>,
    pub canvas_width: Option<f64>,
    pub canvas_height: Option<f64>,
}

impl UpdateClassroomParams {
    pub fn from_dto(id: i32, dto: UpdateClassroomDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            teacher_name: dto.teacher_name,
            canvas_width: dto.canvas_width,
            canvas_height: dto.canvas_height,
        }
    }

    /// Checks only the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(teacher_name) = &self.teacher_name {
            require_non_empty("teacher_name", teacher_name)?;
        }
        if let Some(width) = self.canvas_width {
            require_positive("canvas_width", width)?;
        }
        if let Some(height) = self.canvas_height {
            require_positive("canvas_height", height)?;
        }

        Ok(())
    }
}
