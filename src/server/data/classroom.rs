//! Classroom data repository for database operations.
//!
//! This module provides the `ClassroomRepository` for managing classroom records. Objects
//! and assignments owned by a classroom live in their own repositories; this one only
//! touches the `classrooms` table and relies on foreign key cascades for cleanup.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::classroom::{Classroom, CreateClassroomParams, UpdateClassroomParams};

/// Repository providing database operations for classroom management.
pub struct ClassroomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassroomRepository<'a, C> {
    /// Creates a new ClassroomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ClassroomRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new classroom.
    ///
    /// Both `created_at` and `updated_at` are set to the current time.
    ///
    /// # Arguments
    /// - `params` - Validated classroom fields
    ///
    /// # Returns
    /// - `Ok(Classroom)` - The created classroom with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateClassroomParams) -> Result<Classroom, DbErr> {
        let now = Utc::now();
        let entity = entity::classroom::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            teacher_name: ActiveValue::Set(params.teacher_name),
            canvas_width: ActiveValue::Set(params.canvas_width),
            canvas_height: ActiveValue::Set(params.canvas_height),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Classroom::from_entity(entity))
    }

    /// Gets all classrooms ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Classroom>, DbErr> {
        let entities = entity::prelude::Classroom::find()
            .order_by_asc(entity::classroom::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Classroom::from_entity).collect())
    }

    /// Finds a classroom by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Classroom))` - Classroom found
    /// - `Ok(None)` - No classroom with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Classroom>, DbErr> {
        let entity = entity::prelude::Classroom::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Classroom::from_entity))
    }

    /// Finds a classroom by ID and locks its row until the surrounding transaction ends.
    ///
    /// Issues `SELECT ... FOR UPDATE` on backends with row locks. SQLite has none and
    /// already serializes writers, so the lock clause is omitted there.
    ///
    /// # Returns
    /// - `Ok(Some(Classroom))` - Classroom found and locked
    /// - `Ok(None)` - No classroom with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_for_update(&self, id: i32) -> Result<Option<Classroom>, DbErr> {
        let entity = entity::prelude::Classroom::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(entity.map(Classroom::from_entity))
    }

    /// Updates classroom metadata.
    ///
    /// Only fields present in `params` are changed. `updated_at` is refreshed on every
    /// call, even when no field was supplied.
    ///
    /// # Returns
    /// - `Ok(Some(Classroom))` - The updated classroom
    /// - `Ok(None)` - No classroom with that ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, params: UpdateClassroomParams) -> Result<Option<Classroom>, DbErr> {
        let Some(classroom) = entity::prelude::Classroom::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::classroom::ActiveModel = classroom.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(teacher_name) = params.teacher_name {
            active_model.teacher_name = ActiveValue::Set(teacher_name);
        }
        if let Some(canvas_width) = params.canvas_width {
            active_model.canvas_width = ActiveValue::Set(canvas_width);
        }
        if let Some(canvas_height) = params.canvas_height {
            active_model.canvas_height = ActiveValue::Set(canvas_height);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Classroom::from_entity(entity)))
    }

    /// Deletes a classroom.
    ///
    /// Objects and assignments of the classroom are removed by the foreign key cascade
    /// within the same statement.
    ///
    /// # Returns
    /// - `Ok(true)` - Classroom deleted
    /// - `Ok(false)` - No classroom with that ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Classroom::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
