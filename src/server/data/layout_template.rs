//! Layout template data repository for database operations.
//!
//! This module provides the `LayoutTemplateRepository` for managing templates and their
//! blueprint objects. Blueprint objects are always read in ascending ID order, which is
//! the order they were created in and the order they are instantiated in.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    classroom_object::ObjectAttributes,
    layout_template::{
        CreateLayoutTemplateParams, LayoutTemplate, LayoutTemplateObject,
        LayoutTemplateWithObjects,
    },
};

/// Repository providing database operations for layout templates.
pub struct LayoutTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LayoutTemplateRepository<'a, C> {
    /// Creates a new LayoutTemplateRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `LayoutTemplateRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a template and inserts its blueprint objects in the given order.
    ///
    /// Run inside a transaction to keep a failed object insert from leaving a template
    /// with only part of its objects.
    ///
    /// # Arguments
    /// - `params` - Validated template metadata and blueprint objects
    ///
    /// # Returns
    /// - `Ok(LayoutTemplateWithObjects)` - The created template with its objects
    /// - `Err(DbErr)` - Database error during insert operations
    pub async fn create(
        &self,
        params: CreateLayoutTemplateParams,
    ) -> Result<LayoutTemplateWithObjects, DbErr> {
        let template = entity::layout_template::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            layout_type: ActiveValue::Set(params.layout_type.into()),
            canvas_width: ActiveValue::Set(params.canvas_width),
            canvas_height: ActiveValue::Set(params.canvas_height),
            is_public: ActiveValue::Set(params.is_public),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut objects = Vec::with_capacity(params.objects.len());
        for attributes in params.objects {
            objects.push(self.create_object(template.id, attributes).await?);
        }

        Ok(LayoutTemplateWithObjects {
            template: LayoutTemplate::from_entity(template),
            objects,
        })
    }

    async fn create_object(
        &self,
        template_id: i32,
        attributes: ObjectAttributes,
    ) -> Result<LayoutTemplateObject, DbErr> {
        let entity = entity::layout_template_object::ActiveModel {
            template_id: ActiveValue::Set(template_id),
            object_type: ActiveValue::Set(attributes.object_type.into()),
            name: ActiveValue::Set(attributes.name),
            position_x: ActiveValue::Set(attributes.position_x),
            position_y: ActiveValue::Set(attributes.position_y),
            rotation: ActiveValue::Set(attributes.rotation),
            width: ActiveValue::Set(attributes.width),
            height: ActiveValue::Set(attributes.height),
            color: ActiveValue::Set(attributes.color),
            is_assignable: ActiveValue::Set(attributes.is_assignable),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LayoutTemplateObject::from_entity(entity))
    }

    /// Gets every template with its objects, templates ordered by ID.
    ///
    /// Loads all objects in one query and groups them in memory.
    pub async fn get_all(&self) -> Result<Vec<LayoutTemplateWithObjects>, DbErr> {
        let templates = entity::prelude::LayoutTemplate::find()
            .order_by_asc(entity::layout_template::Column::Id)
            .all(self.db)
            .await?;

        let mut objects_by_template: HashMap<i32, Vec<LayoutTemplateObject>> = HashMap::new();
        for object in entity::prelude::LayoutTemplateObject::find()
            .order_by_asc(entity::layout_template_object::Column::Id)
            .all(self.db)
            .await?
        {
            objects_by_template
                .entry(object.template_id)
                .or_default()
                .push(LayoutTemplateObject::from_entity(object));
        }

        Ok(templates
            .into_iter()
            .map(|template| LayoutTemplateWithObjects {
                objects: objects_by_template.remove(&template.id).unwrap_or_default(),
                template: LayoutTemplate::from_entity(template),
            })
            .collect())
    }

    /// Gets one template with its objects.
    ///
    /// # Returns
    /// - `Ok(Some(LayoutTemplateWithObjects))` - Template found
    /// - `Ok(None)` - No template with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<LayoutTemplateWithObjects>, DbErr> {
        let Some(template) = entity::prelude::LayoutTemplate::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let objects = self.get_objects(id).await?;

        Ok(Some(LayoutTemplateWithObjects {
            template: LayoutTemplate::from_entity(template),
            objects,
        }))
    }

    /// Gets the blueprint objects of a template ordered by ID.
    pub async fn get_objects(&self, template_id: i32) -> Result<Vec<LayoutTemplateObject>, DbErr> {
        let entities = entity::prelude::LayoutTemplateObject::find()
            .filter(entity::layout_template_object::Column::TemplateId.eq(template_id))
            .order_by_asc(entity::layout_template_object::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(LayoutTemplateObject::from_entity)
            .collect())
    }

    /// Deletes a template; its objects are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Template deleted
    /// - `Ok(false)` - No template with that ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LayoutTemplate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
