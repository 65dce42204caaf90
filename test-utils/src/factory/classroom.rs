//! Classroom factory for creating test classroom entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classrooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::classroom::ClassroomFactory;
///
/// let classroom = ClassroomFactory::new(&db)
///     .name("Room 101")
///     .canvas(1200.0, 800.0)
///     .build()
///     .await?;
/// ```
pub struct ClassroomFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    teacher_name: String,
    canvas_width: f64,
    canvas_height: f64,
}

impl<'a> ClassroomFactory<'a> {
    /// Creates a new ClassroomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Classroom {id}"` where id is auto-incremented
    /// - description: `None`
    /// - teacher_name: `"Test Teacher"`
    /// - canvas: 800 x 600
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Classroom {}", id),
            description: None,
            teacher_name: "Test Teacher".to_string(),
            canvas_width: 800.0,
            canvas_height: 600.0,
        }
    }

    /// Sets the classroom name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the classroom description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the teacher name.
    pub fn teacher_name(mut self, teacher_name: impl Into<String>) -> Self {
        self.teacher_name = teacher_name.into();
        self
    }

    /// Sets the canvas dimensions.
    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Builds and inserts the classroom entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::classroom::Model)` - Created classroom entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::classroom::Model, DbErr> {
        let now = Utc::now();
        entity::classroom::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            teacher_name: ActiveValue::Set(self.teacher_name),
            canvas_width: ActiveValue::Set(self.canvas_width),
            canvas_height: ActiveValue::Set(self.canvas_height),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a classroom with default values.
///
/// Shorthand for `ClassroomFactory::new(db).build().await`.
pub async fn create_classroom(db: &DatabaseConnection) -> Result<entity::classroom::Model, DbErr> {
    ClassroomFactory::new(db).build().await
}
