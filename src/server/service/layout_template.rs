//! Layout template management and instantiation into classrooms.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        classroom::ClassroomRepository, classroom_object::ClassroomObjectRepository,
        layout_template::LayoutTemplateRepository,
    },
    error::AppError,
    model::{
        classroom_object::{ClassroomObject, CreateClassroomObjectParams},
        layout_template::{CreateLayoutTemplateParams, LayoutTemplateWithObjects},
    },
};

pub struct LayoutTemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LayoutTemplateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and creates a template together with its blueprint objects
    pub async fn create(
        &self,
        params: CreateLayoutTemplateParams,
    ) -> Result<LayoutTemplateWithObjects, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;
        let template = LayoutTemplateRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created layout template {} ({}) with {} objects",
            template.template.id,
            template.template.name,
            template.objects.len()
        );

        Ok(template)
    }

    /// Gets every template with its objects
    pub async fn get_all(&self) -> Result<Vec<LayoutTemplateWithObjects>, AppError> {
        Ok(LayoutTemplateRepository::new(self.db).get_all().await?)
    }

    /// Gets one template with its objects
    pub async fn get_by_id(&self, id: i32) -> Result<LayoutTemplateWithObjects, AppError> {
        LayoutTemplateRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Layout template", id))
    }

    /// Deletes a template and its blueprint objects.
    ///
    /// Objects previously instantiated from the template stay in their classrooms.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !LayoutTemplateRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Layout template", id));
        }

        Ok(())
    }

    /// Copies a template's objects into a classroom.
    ///
    /// Each blueprint object becomes a new classroom object with identical type,
    /// name, geometry, color and assignability. Existing objects in the classroom are
    /// left in place. The classroom's canvas size is not changed. All inserts share one
    /// transaction, so a failure leaves no partial layout behind.
    ///
    /// # Arguments
    /// - `template_id` - Template to instantiate
    /// - `classroom_id` - Classroom receiving the objects
    ///
    /// # Returns
    /// - `Ok(Vec<ClassroomObject>)` - Created objects in template order
    /// - `Err(AppError::NotFound)` - Template or classroom doesn't exist
    /// - `Err(AppError::DbErr)` - Database error during inserts
    pub async fn load_into_classroom(
        &self,
        template_id: i32,
        classroom_id: i32,
    ) -> Result<Vec<ClassroomObject>, AppError> {
        let txn = self.db.begin().await?;

        let template = LayoutTemplateRepository::new(&txn)
            .find_by_id(template_id)
            .await?
            .ok_or_else(|| AppError::not_found("Layout template", template_id))?;

        ClassroomRepository::new(&txn)
            .find_by_id(classroom_id)
            .await?
            .ok_or_else(|| AppError::not_found("Classroom", classroom_id))?;

        let object_repo = ClassroomObjectRepository::new(&txn);
        let mut created = Vec::with_capacity(template.objects.len());
        for blueprint in template.objects {
            let object = object_repo
                .create(CreateClassroomObjectParams {
                    classroom_id,
                    attributes: blueprint.attributes,
                })
                .await?;
            created.push(object);
        }

        txn.commit().await?;

        tracing::info!(
            "Loaded layout template {} into classroom {} ({} objects)",
            template_id,
            classroom_id,
            created.len()
        );

        Ok(created)
    }
}
