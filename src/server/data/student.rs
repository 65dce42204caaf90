//! Student data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::student::{CreateStudentParams, Student};

/// Repository providing database operations for students.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student.
    ///
    /// # Arguments
    /// - `params` - Validated student fields
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            student_id: ActiveValue::Set(params.student_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Gets all students ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Finds a student by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets every student with an ID in `ids`, ordered by ID.
    ///
    /// IDs that don't exist are simply absent from the result, letting callers report
    /// every missing student of a batch at once.
    ///
    /// # Arguments
    /// - `ids` - Student IDs to look up
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Students that exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Student>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Deletes a student.
    ///
    /// The student's assignments in every classroom are removed by the foreign key
    /// cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No student with that ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
