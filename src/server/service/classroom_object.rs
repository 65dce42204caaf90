use sea_orm::DatabaseConnection;

use crate::server::{
    data::{classroom::ClassroomRepository, classroom_object::ClassroomObjectRepository},
    error::AppError,
    model::classroom_object::{
        ClassroomObject, CreateClassroomObjectParams, UpdateClassroomObjectParams,
    },
};

pub struct ClassroomObjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassroomObjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and places a new object in an existing classroom
    pub async fn create(
        &self,
        params: CreateClassroomObjectParams,
    ) -> Result<ClassroomObject, AppError> {
        params.attributes.validate()?;

        if ClassroomRepository::new(self.db)
            .find_by_id(params.classroom_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Classroom", params.classroom_id));
        }

        Ok(ClassroomObjectRepository::new(self.db).create(params).await?)
    }

    /// Validates and applies a partial update to an object
    pub async fn update(
        &self,
        params: UpdateClassroomObjectParams,
    ) -> Result<ClassroomObject, AppError> {
        params.validate()?;

        let id = params.id;
        ClassroomObjectRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::not_found("Classroom object", id))
    }

    /// Deletes an object; a student seated at it loses the seat
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ClassroomObjectRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Classroom object", id));
        }

        Ok(())
    }
}
