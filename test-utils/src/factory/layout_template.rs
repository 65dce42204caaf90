//! Layout template factory for creating test template entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::LayoutType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test layout templates with customizable fields.
pub struct LayoutTemplateFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    layout_type: LayoutType,
    canvas_width: f64,
    canvas_height: f64,
    is_public: bool,
    created_by: String,
}

impl<'a> LayoutTemplateFactory<'a> {
    /// Creates a new LayoutTemplateFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Template {id}"` where id is auto-incremented
    /// - layout_type: `TraditionalRows`
    /// - canvas: 800 x 600
    /// - is_public: `false`
    /// - created_by: `"Test Teacher"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Template {}", id),
            description: None,
            layout_type: LayoutType::TraditionalRows,
            canvas_width: 800.0,
            canvas_height: 600.0,
            is_public: false,
            created_by: "Test Teacher".to_string(),
        }
    }

    /// Sets the template name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the template description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the layout type tag.
    pub fn layout_type(mut self, layout_type: LayoutType) -> Self {
        self.layout_type = layout_type;
        self
    }

    /// Sets whether the template is visible to everyone.
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Builds and inserts the layout template entity into the database.
    pub async fn build(self) -> Result<entity::layout_template::Model, DbErr> {
        entity::layout_template::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            layout_type: ActiveValue::Set(self.layout_type),
            canvas_width: ActiveValue::Set(self.canvas_width),
            canvas_height: ActiveValue::Set(self.canvas_height),
            is_public: ActiveValue::Set(self.is_public),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a layout template with default values.
pub async fn create_layout_template(
    db: &DatabaseConnection,
) -> Result<entity::layout_template::Model, DbErr> {
    LayoutTemplateFactory::new(db).build().await
}
