//! Student assignment data repository for database operations.
//!
//! Writes here do not check the seating invariant themselves. Callers clear conflicting
//! rows with `delete_conflicting` first; the unique indexes on `desk_object_id` and
//! `(classroom_id, student_id)` reject anything that slips through.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::assignment::StudentAssignment;

/// Repository providing database operations for student seat assignments.
pub struct StudentAssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentAssignmentRepository<'a, C> {
    /// Creates a new StudentAssignmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `StudentAssignmentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Seats one student at one desk.
    ///
    /// # Arguments
    /// - `classroom_id` - Classroom owning the desk
    /// - `student_id` - Student to seat
    /// - `desk_object_id` - Desk to occupy
    /// - `assigned_at` - Assignment timestamp
    ///
    /// # Returns
    /// - `Ok(StudentAssignment)` - The created assignment
    /// - `Err(DbErr)` - Database error, including unique index violations
    pub async fn create(
        &self,
        classroom_id: i32,
        student_id: i32,
        desk_object_id: i32,
        assigned_at: DateTime<Utc>,
    ) -> Result<StudentAssignment, DbErr> {
        let entity = entity::student_assignment::ActiveModel {
            classroom_id: ActiveValue::Set(classroom_id),
            student_id: ActiveValue::Set(student_id),
            desk_object_id: ActiveValue::Set(desk_object_id),
            assigned_at: ActiveValue::Set(assigned_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StudentAssignment::from_entity(entity))
    }

    /// Seats several `(student_id, desk_object_id)` pairs with a shared timestamp.
    ///
    /// Rows are inserted in the order given and returned in that order.
    pub async fn create_many(
        &self,
        classroom_id: i32,
        pairs: &[(i32, i32)],
        assigned_at: DateTime<Utc>,
    ) -> Result<Vec<StudentAssignment>, DbErr> {
        let mut assignments = Vec::with_capacity(pairs.len());
        for &(student_id, desk_object_id) in pairs {
            assignments.push(
                self.create(classroom_id, student_id, desk_object_id, assigned_at)
                    .await?,
            );
        }

        Ok(assignments)
    }

    /// Gets all assignments of a classroom ordered by assignment time, then ID.
    pub async fn get_by_classroom_id(
        &self,
        classroom_id: i32,
    ) -> Result<Vec<StudentAssignment>, DbErr> {
        let entities = entity::prelude::StudentAssignment::find()
            .filter(entity::student_assignment::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(entity::student_assignment::Column::AssignedAt)
            .order_by_asc(entity::student_assignment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(StudentAssignment::from_entity)
            .collect())
    }

    /// Deletes every assignment in a classroom that occupies one of `desk_object_ids`
    /// or seats one of `student_ids`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of assignments removed
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_conflicting(
        &self,
        classroom_id: i32,
        student_ids: &[i32],
        desk_object_ids: &[i32],
    ) -> Result<u64, DbErr> {
        if student_ids.is_empty() && desk_object_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::StudentAssignment::delete_many()
            .filter(entity::student_assignment::Column::ClassroomId.eq(classroom_id))
            .filter(
                Condition::any()
                    .add(
                        entity::student_assignment::Column::DeskObjectId
                            .is_in(desk_object_ids.iter().copied()),
                    )
                    .add(
                        entity::student_assignment::Column::StudentId
                            .is_in(student_ids.iter().copied()),
                    ),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an assignment.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment deleted
    /// - `Ok(false)` - No assignment with that ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudentAssignment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
