//! Classroom object data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::classroom_object::{
    ClassroomObject, CreateClassroomObjectParams, UpdateClassroomObjectParams,
};

/// Repository providing database operations for objects placed in classrooms.
pub struct ClassroomObjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassroomObjectRepository<'a, C> {
    /// Creates a new ClassroomObjectRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ClassroomObjectRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new object into a classroom.
    ///
    /// The caller is responsible for checking that the classroom exists; a missing
    /// classroom surfaces as a foreign key violation.
    ///
    /// # Arguments
    /// - `params` - Owning classroom and validated object attributes
    ///
    /// # Returns
    /// - `Ok(ClassroomObject)` - The created object with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateClassroomObjectParams) -> Result<ClassroomObject, DbErr> {
        let attributes = params.attributes;
        let entity = entity::classroom_object::ActiveModel {
            classroom_id: ActiveValue::Set(params.classroom_id),
            object_type: ActiveValue::Set(attributes.object_type.into()),
            name: ActiveValue::Set(attributes.name),
            position_x: ActiveValue::Set(attributes.position_x),
            position_y: ActiveValue::Set(attributes.position_y),
            rotation: ActiveValue::Set(attributes.rotation),
            width: ActiveValue::Set(attributes.width),
            height: ActiveValue::Set(attributes.height),
            color: ActiveValue::Set(attributes.color),
            is_assignable: ActiveValue::Set(attributes.is_assignable),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ClassroomObject::from_entity(entity))
    }

    /// Finds an object by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClassroomObject>, DbErr> {
        let entity = entity::prelude::ClassroomObject::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ClassroomObject::from_entity))
    }

    /// Gets every object with an ID in `ids`, in any classroom, ordered by ID.
    ///
    /// IDs that don't exist are simply absent from the result.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<ClassroomObject>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ClassroomObject::find()
            .filter(entity::classroom_object::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::classroom_object::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ClassroomObject::from_entity).collect())
    }

    /// Gets all objects of a classroom ordered by ID.
    pub async fn get_by_classroom_id(&self, classroom_id: i32) -> Result<Vec<ClassroomObject>, DbErr> {
        let entities = entity::prelude::ClassroomObject::find()
            .filter(entity::classroom_object::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(entity::classroom_object::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ClassroomObject::from_entity).collect())
    }

    /// Updates the geometry, name or color of an object.
    ///
    /// Only fields present in `params` are changed.
    ///
    /// # Returns
    /// - `Ok(Some(ClassroomObject))` - The updated object
    /// - `Ok(None)` - No object with that ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(
        &self,
        params: UpdateClassroomObjectParams,
    ) -> Result<Option<ClassroomObject>, DbErr> {
        let Some(object) = entity::prelude::ClassroomObject::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::classroom_object::ActiveModel = object.clone().into();
        if let Some(position_x) = params.position_x {
            active_model.position_x = ActiveValue::Set(position_x);
        }
        if let Some(position_y) = params.position_y {
            active_model.position_y = ActiveValue::Set(position_y);
        }
        if let Some(rotation) = params.rotation {
            active_model.rotation = ActiveValue::Set(rotation);
        }
        if let Some(width) = params.width {
            active_model.width = ActiveValue::Set(width);
        }
        if let Some(height) = params.height {
            active_model.height = ActiveValue::Set(height);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }

        // Nothing changed; SeaORM rejects an UPDATE without SET columns.
        if !active_model.is_changed() {
            return Ok(Some(ClassroomObject::from_entity(object)));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(ClassroomObject::from_entity(entity)))
    }

    /// Deletes an object.
    ///
    /// Any assignment seated at the object is removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Object deleted
    /// - `Ok(false)` - No object with that ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ClassroomObject::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
