//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a classroom holding `desk_count` assignable desks.
///
/// Desks are laid out in a single row so their positions are distinct.
///
/// # Arguments
/// - `db` - Database connection
/// - `desk_count` - Number of assignable desks to create
///
/// # Returns
/// - `Ok((classroom, desks))` - The classroom and its desks in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_classroom_with_desks(
    db: &DatabaseConnection,
    desk_count: usize,
) -> Result<(entity::classroom::Model, Vec<entity::classroom_object::Model>), DbErr> {
    let classroom = crate::factory::classroom::create_classroom(db).await?;

    let mut desks = Vec::with_capacity(desk_count);
    for i in 0..desk_count {
        let desk = crate::factory::classroom_object::ClassroomObjectFactory::new(db, classroom.id)
            .position(60.0 * i as f64, 0.0)
            .build()
            .await?;
        desks.push(desk);
    }

    Ok((classroom, desks))
}

/// Creates `count` students with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of students to create
///
/// # Returns
/// - `Ok(Vec<entity::student::Model>)` - Created students in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_students(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::student::Model>, DbErr> {
    let mut students = Vec::with_capacity(count);
    for _ in 0..count {
        students.push(crate::factory::student::create_student(db).await?);
    }

    Ok(students)
}

/// Creates a layout template with `object_count` assignable desk blueprints.
///
/// # Arguments
/// - `db` - Database connection
/// - `object_count` - Number of template objects to create
///
/// # Returns
/// - `Ok((template, objects))` - The template and its objects in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_template_with_objects(
    db: &DatabaseConnection,
    object_count: usize,
) -> Result<
    (
        entity::layout_template::Model,
        Vec<entity::layout_template_object::Model>,
    ),
    DbErr,
> {
    let template = crate::factory::layout_template::create_layout_template(db).await?;

    let mut objects = Vec::with_capacity(object_count);
    for i in 0..object_count {
        let object =
            crate::factory::layout_template_object::LayoutTemplateObjectFactory::new(db, template.id)
                .position(0.0, 60.0 * i as f64)
                .build()
                .await?;
        objects.push(object);
    }

    Ok((template, objects))
}
