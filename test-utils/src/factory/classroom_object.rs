//! Classroom object factory for creating desks and other placed objects.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ClassroomObjectType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classroom objects with customizable fields.
///
/// Defaults to an assignable desk so seating tests need no extra setup.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::classroom_object::ClassroomObjectFactory;
///
/// let board = ClassroomObjectFactory::new(&db, classroom.id)
///     .object_type(ClassroomObjectType::Whiteboard)
///     .assignable(false)
///     .build()
///     .await?;
/// ```
pub struct ClassroomObjectFactory<'a> {
    db: &'a DatabaseConnection,
    classroom_id: i32,
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

impl<'a> ClassroomObjectFactory<'a> {
    /// Creates a new ClassroomObjectFactory with default values.
    ///
    /// Defaults:
    /// - object_type: `Desk`
    /// - name: `"Desk {id}"` where id is auto-incremented
    /// - position: (0, 0), rotation 0
    /// - size: 50 x 30
    /// - color: `None`
    /// - is_assignable: `true`
    pub fn new(db: &'a DatabaseConnection, classroom_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            classroom_id,
            object_type: ClassroomObjectType::Desk,
            name: format!("Desk {}", id),
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

    /// Sets the position on the classroom canvas.
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

    /// Sets whether a student can be seated at this object.
    pub fn assignable(mut self, is_assignable: bool) -> Self {
        self.is_assignable = is_assignable;
        self
    }

    /// Builds and inserts the classroom object entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::classroom_object::Model)` - Created object entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::classroom_object::Model, DbErr> {
        entity::classroom_object::ActiveModel {
            classroom_id: ActiveValue::Set(self.classroom_id),
            object_type: ActiveValue::Set(self.object_type),
            name: ActiveValue::Set(self.name),
            position_x: ActiveValue::Set(self.position_x),
            position_y: ActiveValue::Set(self.position_y),
            rotation: ActiveValue::Set(self.rotation),
            width: ActiveValue::Set(self.width),
            height: ActiveValue::Set(self.height),
            color: ActiveValue::Set(self.color),
            is_assignable: ActiveValue::Set(self.is_assignable),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an assignable desk in the given classroom.
pub async fn create_desk(
    db: &DatabaseConnection,
    classroom_id: i32,
) -> Result<entity::classroom_object::Model, DbErr> {
    ClassroomObjectFactory::new(db, classroom_id).build().await
}

/// Creates a non-assignable object of the given type in the given classroom.
pub async fn create_object(
    db: &DatabaseConnection,
    classroom_id: i32,
    object_type: ClassroomObjectType,
) -> Result<entity::classroom_object::Model, DbErr> {
    ClassroomObjectFactory::new(db, classroom_id)
        .object_type(object_type)
        .assignable(false)
        .build()
        .await
}
