//! Domain models for reusable layout templates.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::LayoutType as LayoutTypeEntity;

use crate::{
    model::layout_template::{
        CreateLayoutTemplateDto, LayoutTemplateObjectDto, LayoutTemplateWithObjectsDto,
        LayoutType,
    },
    server::{
        error::validation::ValidationError,
        model::classroom_object::ObjectAttributes,
        util::validate::{require_non_empty, require_positive},
    },
};

impl From<LayoutTypeEntity> for LayoutType {
    fn from(value: LayoutTypeEntity) -> Self {
        match value {
            LayoutTypeEntity::TraditionalRows => Self::TraditionalRows,
            LayoutTypeEntity::UShape => Self::UShape,
            LayoutTypeEntity::GroupedTables => Self::GroupedTables,
            LayoutTypeEntity::Circle => Self::Circle,
            LayoutTypeEntity::Horseshoe => Self::Horseshoe,
            LayoutTypeEntity::Custom => Self::Custom,
        }
    }
}

impl From<LayoutType> for LayoutTypeEntity {
    fn from(value: LayoutType) -> Self {
        match value {
            LayoutType::TraditionalRows => Self::TraditionalRows,
            LayoutType::UShape => Self::UShape,
            LayoutType::GroupedTables => Self::GroupedTables,
            LayoutType::Circle => Self::Circle,
            LayoutType::Horseshoe => Self::Horseshoe,
            LayoutType::Custom => Self::Custom,
        }
    }
}

/// Metadata of a reusable classroom layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTemplate {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub layout_type: LayoutType,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Informational only; every template is listed.
    pub is_public: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl LayoutTemplate {
    /// Converts an entity model to a template domain model at the repository boundary.
    pub fn from_entity(entity: entity::layout_template::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            layout_type: entity.layout_type.into(),
            canvas_width: entity.canvas_width,
            canvas_height: entity.canvas_height,
            is_public: entity.is_public,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }
}

/// A blueprint object owned by a layout template.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTemplateObject {
    pub id: i32,
    pub template_id: i32,
    pub attributes: ObjectAttributes,
}

impl LayoutTemplateObject {
    pub fn from_entity(entity: entity::layout_template_object::Model) -> Self {
        Self {
            id: entity.id,
            template_id: entity.template_id,
            attributes: ObjectAttributes::from_template_object(entity),
        }
    }

    pub fn into_dto(self) -> LayoutTemplateObjectDto {
        let attributes = self.attributes;
        LayoutTemplateObjectDto {
            id: self.id,
            template_id: self.template_id,
            object_type: attributes.object_type,
            name: attributes.name,
            position_x: attributes.position_x,
            position_y: attributes.position_y,
            rotation: attributes.rotation,
            width: attributes.width,
            height: attributes.height,
            color: attributes.color,
            is_assignable: attributes.is_assignable,
        }
    }
}

/// A layout template with its blueprint objects ordered by ID.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTemplateWithObjects {
    pub template: LayoutTemplate,
    pub objects: Vec<LayoutTemplateObject>,
}

impl LayoutTemplateWithObjects {
    pub fn into_dto(self) -> LayoutTemplateWithObjectsDto {
        let template = self.template;
        LayoutTemplateWithObjectsDto {
            id: template.id,
            name: template.name,
            description: template.description,
            layout_type: template.layout_type,
            canvas_width: template.canvas_width,
            canvas_height: template.canvas_height,
            is_public: template.is_public,
            created_by: template.created_by,
            created_at: template.created_at,
            objects: self
                .objects
                .into_iter()
                .map(LayoutTemplateObject::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a template together with its blueprint objects.
#[derive(Debug, Clone)]
pub struct CreateLayoutTemplateParams {
    pub name: String,
    pub description: Option<String>,
    pub layout_type: LayoutType,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub is_public: bool,
    pub created_by: String,
    pub objects: Vec<ObjectAttributes>,
}

impl CreateLayoutTemplateParams {
    pub fn from_dto(dto: CreateLayoutTemplateDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            layout_type: dto.layout_type,
            canvas_width: dto.canvas_width,
            canvas_height: dto.canvas_height,
            is_public: dto.is_public,
            created_by: dto.created_by,
            objects: dto
                .objects
                .into_iter()
                .map(ObjectAttributes::from_dto)
                .collect(),
        }
    }

    /// Checks template metadata and every blueprint object.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("created_by", &self.created_by)?;
        require_positive("canvas_width", self.canvas_width)?;
        require_positive("canvas_height", self.canvas_height)?;
        for object in &self.objects {
            object.validate()?;
        }

        Ok(())
    }
}
