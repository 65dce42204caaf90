use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParams, Student},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and creates a new student
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        params.validate()?;

        let student = StudentRepository::new(self.db).create(params).await?;
        tracing::info!("Created student {} ({})", student.id, student.name);

        Ok(student)
    }

    /// Gets all students ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all().await?)
    }

    /// Deletes a student along with their assignments in every classroom
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StudentRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Student", id));
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }
}
