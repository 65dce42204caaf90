//! Student assignment factory for seating a student at a desk.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an assignment row directly, bypassing service-level validation.
///
/// # Arguments
/// - `db` - Database connection
/// - `classroom_id` - Classroom the assignment belongs to
/// - `student_id` - Seated student
/// - `desk_object_id` - Desk the student sits at
///
/// # Returns
/// - `Ok(entity::student_assignment::Model)` - Created assignment entity
/// - `Err(DbErr)` - Database error during insert (including unique desk violations)
pub async fn create_assignment(
    db: &DatabaseConnection,
    classroom_id: i32,
    student_id: i32,
    desk_object_id: i32,
) -> Result<entity::student_assignment::Model, DbErr> {
    entity::student_assignment::ActiveModel {
        classroom_id: ActiveValue::Set(classroom_id),
        student_id: ActiveValue::Set(student_id),
        desk_object_id: ActiveValue::Set(desk_object_id),
        assigned_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
