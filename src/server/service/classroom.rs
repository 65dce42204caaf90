//! Classroom management and the composed classroom detail view.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        classroom::ClassroomRepository, classroom_object::ClassroomObjectRepository,
        student::StudentRepository, student_assignment::StudentAssignmentRepository,
    },
    error::AppError,
    model::{
        assignment::StudentAssignmentDetails,
        classroom::{Classroom, ClassroomWithDetails, CreateClassroomParams, UpdateClassroomParams},
    },
};

pub struct ClassroomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassroomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and creates a new classroom with an empty canvas
    pub async fn create(&self, params: CreateClassroomParams) -> Result<Classroom, AppError> {
        params.validate()?;

        let classroom = ClassroomRepository::new(self.db).create(params).await?;
        tracing::info!("Created classroom {} ({})", classroom.id, classroom.name);

        Ok(classroom)
    }

    /// Gets all classrooms ordered by ID, without objects or assignments
    pub async fn get_all(&self) -> Result<Vec<Classroom>, AppError> {
        Ok(ClassroomRepository::new(self.db).get_all().await?)
    }

    /// Gets a classroom with its objects and assignments.
    ///
    /// Each assignment is joined with its student and desk object. Students are loaded
    /// in a single query; desks come from the classroom's own object list since an
    /// assignment's desk always belongs to its classroom.
    ///
    /// # Arguments
    /// - `id` - Classroom ID
    ///
    /// # Returns
    /// - `Ok(ClassroomWithDetails)` - Classroom with objects and enriched assignments
    /// - `Err(AppError::NotFound)` - No classroom with that ID
    /// - `Err(AppError::DbErr)` - Database error during queries
    pub async fn get_with_details(&self, id: i32) -> Result<ClassroomWithDetails, AppError> {
        let classroom = ClassroomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Classroom", id))?;

        let objects = ClassroomObjectRepository::new(self.db)
            .get_by_classroom_id(id)
            .await?;
        let assignments = StudentAssignmentRepository::new(self.db)
            .get_by_classroom_id(id)
            .await?;

        let student_ids: Vec<i32> = assignments.iter().map(|a| a.student_id).collect();
        let students_map: HashMap<i32, _> = StudentRepository::new(self.db)
            .find_by_ids(&student_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let objects_map: HashMap<i32, _> = objects.iter().map(|o| (o.id, o)).collect();

        let assignments = assignments
            .into_iter()
            .map(|assignment| {
                let student = students_map.get(&assignment.student_id).cloned();
                let desk_object = objects_map
                    .get(&assignment.desk_object_id)
                    .map(|o| (*o).clone());

                match (student, desk_object) {
                    (Some(student), Some(desk_object)) => Ok(StudentAssignmentDetails {
                        assignment,
                        student,
                        desk_object,
                    }),
                    _ => Err(AppError::InternalError(format!(
                        "Assignment {} references a missing student or desk",
                        assignment.id
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClassroomWithDetails {
            classroom,
            objects,
            assignments,
        })
    }

    /// Validates and applies a partial metadata update
    pub async fn update(&self, params: UpdateClassroomParams) -> Result<Classroom, AppError> {
        params.validate()?;

        let id = params.id;
        ClassroomRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::not_found("Classroom", id))
    }

    /// Deletes a classroom together with its objects and assignments
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ClassroomRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Classroom", id));
        }

        tracing::info!("Deleted classroom {}", id);

        Ok(())
    }
}
