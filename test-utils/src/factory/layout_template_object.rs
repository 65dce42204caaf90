//! Layout template object factory for creating blueprint rows.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::ClassroomObjectType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test template objects with customizable fields.
///
/// Defaults to an assignable desk blueprint.
pub struct LayoutTemplateObjectFactory<'a> {
    db: &'a DatabaseConnection,
    template_id: i32,
    object_type: ClassroomObjectType,
    name: String,
    position_x: f64,
    position_y: f64,
    rotation: f64,
    width: f64,
    height: f64,
    color: Option<String>,
    is_assignable: bool,
}

impl<'a> LayoutTemplateObjectFactory<'a> {
    /// Creates a new LayoutTemplateObjectFactory with default values.
    ///
    /// Defaults:
    /// - object_type: `Desk`
    /// - name: `"Template Desk {id}"` where id is auto-incremented
    /// - position: (0, 0), rotation 0
    /// - size: 50 x 30
    /// - color: `None`
    /// - is_assignable: `true`
    pub fn new(db: &'a DatabaseConnection, template_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            template_id,
            object_type: ClassroomObjectType::Desk,
            name: format!("Template Desk {}", id),
            position_x: 0.0,
            position_y: 0.0,
            rotation: 0.0,
            width: 50.0,
            height: 30.0,
            color: None,
            is_assignable: true,
        }
    }

    /// Sets the object type.
    pub fn object_type(mut self, object_type: ClassroomObjectType) -> Self {
        self.object_type = object_type;
        self
    }

    /// Sets the object name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the blueprint position.
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position_x = x;
        self.position_y = y;
        self
    }

    /// Sets the rotation in degrees.
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the object size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the display color.
    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    /// Sets whether instantiated copies accept a student.
    pub fn assignable(mut self, is_assignable: bool) -> Self {
        self.is_assignable = is_assignable;
        self
    }

    /// Builds and inserts the template object entity into the database.
    pub async fn build(self) -> Result<entity::layout_template_object::Model, DbErr> {
        entity::layout_template_object::ActiveModel {
            template_id: ActiveValue::Set(self.template_id),
            object_type: ActiveValue::Set(self.object_type),
            name: ActiveValue::Set(self.name),
            position_x: ActiveValue::Set(self.position_x),
            position_y: ActiveValue::Set(self.position_y),
            rotation: ActiveValue::Set(self.rotation),
            width: ActiveValue::Set(self.width),
            height: ActiveValue::Set(self.height),
            color: ActiveValue::Set(self.color),
            is_assignable: ActiveValue::Set(self.is_assignable),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an assignable desk blueprint in the given template.
pub async fn create_template_object(
    db: &DatabaseConnection,
    template_id: i32,
) -> Result<entity::layout_template_object::Model, DbErr> {
    LayoutTemplateObjectFactory::new(db, template_id).build().await
}
