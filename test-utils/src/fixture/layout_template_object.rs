//! Layout template object fixtures for creating in-memory test data.

use entity::{layout_template_object, sea_orm_active_enums::ClassroomObjectType};

/// Default test blueprint name.
pub const DEFAULT_NAME: &str = "Front Desk";

/// Creates a template object entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - template_id: `1`
/// - object_type: `Desk`
/// - name: `"Front Desk"`
/// - position: (40, 80), rotation 0
/// - size: 60 x 40
/// - color: `None`
/// - is_assignable: `true`
pub fn entity() -> layout_template_object::Model {
    entity_builder().build()
}

/// Creates a template object entity builder for customization.
pub fn entity_builder() -> LayoutTemplateObjectEntityBuilder {
    LayoutTemplateObjectEntityBuilder::default()
}

/// Builder for creating customized template object entity models.
pub struct LayoutTemplateObjectEntityBuilder {
    id: i32,
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

impl Default for LayoutTemplateObjectEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            template_id: 1,
            object_type: ClassroomObjectType::Desk,
            name: DEFAULT_NAME.to_string(),
            position_x: 40.0,
            position_y: 80.0,
            rotation: 0.0,
            width: 60.0,
            height: 40.0,
            color: None,
            is_assignable: true,
        }
    }
}

impl LayoutTemplateObjectEntityBuilder {
    /// Sets the object ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning template ID.
    pub fn template_id(mut self, template_id: i32) -> Self {
        self.template_id = template_id;
        self
    }

    /// Sets the object type.
    pub fn object_type(mut self, object_type: ClassroomObjectType) -> Self {
        self.object_type = object_type;
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

    /// Builds and returns the template object entity model.
    pub fn build(self) -> layout_template_object::Model {
        layout_template_object::Model {
            id: self.id,
            template_id: self.template_id,
            object_type: self.object_type,
            name: self.name,
            position_x: self.position_x,
            position_y: self.position_y,
            rotation: self.rotation,
            width: self.width,
            height: self.height,
            color: self.color,
            is_assignable: self.is_assignable,
        }
    }
}
