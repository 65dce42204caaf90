//! Domain models for objects placed on a classroom canvas.
//!
//! Classroom objects and layout template objects share the same attribute set, captured
//! by `ObjectAttributes`. Template instantiation copies these attributes verbatim from a
//! blueprint row into a new classroom object.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ClassroomObjectType as ClassroomObjectTypeEntity;

use crate::{
    model::classroom_object::{
        ClassroomObjectDto, ClassroomObjectType, CreateClassroomObjectDto,
        UpdateClassroomObjectDto,
    },
    server::{
        error::validation::ValidationError,
        util::validate::{require_finite, require_non_empty, require_positive},
    },
};

impl From<ClassroomObjectTypeEntity> for ClassroomObjectType {
    fn from(value: ClassroomObjectTypeEntity) -> Self {
        match value {
            ClassroomObjectTypeEntity::Desk => Self::Desk,
            ClassroomObjectTypeEntity::TeacherDesk => Self::TeacherDesk,
            ClassroomObjectTypeEntity::Whiteboard => Self::Whiteboard,
            ClassroomObjectTypeEntity::Projector => Self::Projector,
            ClassroomObjectTypeEntity::Bookshelf => Self::Bookshelf,
            ClassroomObjectTypeEntity::Cabinet => Self::Cabinet,
            ClassroomObjectTypeEntity::Plant => Self::Plant,
            ClassroomObjectTypeEntity::TrashCan => Self::TrashCan,
        }
    }
}

impl From<ClassroomObjectType> for ClassroomObjectTypeEntity {
    fn from(value: ClassroomObjectType) -> Self {
        match value {
            ClassroomObjectType::Desk => Self::Desk,
            ClassroomObjectType::TeacherDesk => Self::TeacherDesk,
            ClassroomObjectType::Whiteboard => Self::Whiteboard,
            ClassroomObjectType::Projector => Self::Projector,
            ClassroomObjectType::Bookshelf => Self::Bookshelf,
            ClassroomObjectType::Cabinet => Self::Cabinet,
            ClassroomObjectType::Plant => Self::Plant,
            ClassroomObjectType::TrashCan => Self::TrashCan,
        }
    }
}

/// Type, geometry and seating attributes of a placeable object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectAttributes {
    /// Kind of object (desk, whiteboard, ...).
    pub object_type: ClassroomObjectType,
    /// Display name.
    pub name: String,
    /// Horizontal position in canvas units.
    pub position_x: f64,
    /// Vertical position in canvas units.
    pub position_y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Width in canvas units, strictly positive.
    pub width: f64,
    /// Height in canvas units, strictly positive.
    pub height: f64,
    /// Optional display color.
    pub color: Option<String>,
    /// Whether a student can be seated at this object.
    pub is_assignable: bool,
}

impl ObjectAttributes {
    pub fn from_dto(dto: CreateClassroomObjectDto) -> Self {
        Self {
            object_type: dto.object_type,
            name: dto.name,
            position_x: dto.position_x,
            position_y: dto.position_y,
            rotation: dto.rotation,
            width: dto.width,
            height: dto.height,
            color: dto.color,
            is_assignable: dto.is_assignable,
        }
    }

    /// Copies the attributes of a layout template blueprint row.
    pub fn from_template_object(entity: entity::layout_template_object::Model) -> Self {
        Self {
            object_type: entity.object_type.into(),
            name: entity.name,
            position_x: entity.position_x,
            position_y: entity.position_y,
            rotation: entity.rotation,
            width: entity.width,
            height: entity.height,
            color: entity.color,
            is_assignable: entity.is_assignable,
        }
    }

    /// Checks the name and geometry of the object.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_finite("position_x", self.position_x)?;
        require_finite("position_y", self.position_y)?;
        require_finite("rotation", self.rotation)?;
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;

        Ok(())
    }
}

/// An object placed on a classroom canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomObject {
    /// Unique identifier for the object.
    pub id: i32,
    /// ID of the owning classroom.
    pub classroom_id: i32,
    /// Type, geometry and seating attributes.
    pub attributes: ObjectAttributes,
    /// Timestamp when the object was created.
    pub created_at: DateTime<Utc>,
}

impl ClassroomObject {
    /// Converts an entity model to a classroom object domain model at the repository boundary.
    pub fn from_entity(entity: entity::classroom_object::Model) -> Self {
        Self {
            id: entity.id,
            classroom_id: entity.classroom_id,
            attributes: ObjectAttributes {
                object_type: entity.object_type.into(),
                name: entity.name,
                position_x: entity.position_x,
                position_y: entity.position_y,
                rotation: entity.rotation,
                width: entity.width,
                height: entity.height,
                color: entity.color,
                is_assignable: entity.is_assignable,
            },
            created_at: entity.created_at,
        }
    }

    /// Converts the classroom object to a DTO for API responses.
    pub fn into_dto(self) -> ClassroomObjectDto {
        let attributes = self.attributes;
        ClassroomObjectDto {
            id: self.id,
            classroom_id: self.classroom_id,
            object_type: attributes.object_type,
            name: attributes.name,
            position_x: attributes.position_x,
            position_y: attributes.position_y,
            rotation: attributes.rotation,
            width: attributes.width,
            height: attributes.height,
            color: attributes.color,
            is_assignable: attributes.is_assignable,
            created_at: self.created_at,
        }
    }
}

/// Parameters for placing a new object in a classroom.
#[derive(Debug, Clone)]
pub struct CreateClassroomObjectParams {
    /// ID of the classroom receiving the object.
    pub classroom_id: i32,
    /// Attributes of the new object.
    pub attributes: ObjectAttributes,
}

impl CreateClassroomObjectParams {
    pub fn from_dto(classroom_id: i32, dto: CreateClassroomObjectDto) -> Self {
        Self {
            classroom_id,
            attributes: ObjectAttributes::from_dto(dto),
        }
    }
}

/// Parameters for updating an existing classroom object.
///
/// All fields are optional - only provided fields will be updated. Type and
/// assignability are fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct UpdateClassroomObjectParams {
    /// ID of the object to update.
    pub id: i32,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub rotation: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// New color (outer Option indicates field presence, inner for nullable value).
    pub color: Option<Option<String>>,
    pub name: Option<String>,
}

impl UpdateClassroomObjectParams {
    pub fn from_dto(id: i32, dto: UpdateClassroomObjectDto) -> Self {
        Self {
            id,
            position_x: dto.position_x,
            position_y: dto.position_y,
            rotation: dto.rotation,
            width: dto.width,
            height: dto.height,
            color: dto.color,
            name: dto.name,
        }
    }

    /// Checks only the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(x) = self.position_x {
            require_finite("position_x", x)?;
        }
        if let Some(y) = self.position_y {
            require_finite("position_y", y)?;
        }
        if let Some(rotation) = self.rotation {
            require_finite("rotation", rotation)?;
        }
        if let Some(width) = self.width {
            require_positive("width", width)?;
        }
        if let Some(height) = self.height {
            require_positive("height", height)?;
        }

        Ok(())
    }
}
