use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_nullable_update;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClassroomObjectType {
    Desk,
    TeacherDesk,
    Whiteboard,
    Projector,
    Bookshelf,
    Cabinet,
    Plant,
    TrashCan,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClassroomObjectDto {
    pub id: i32,
    pub classroom_id: i32,
    #[serde(rename = "type")]
    pub object_type: ClassroomObjectType,
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    pub color: Option<String>,
    pub is_assignable: bool,
    pub created_at: DateTime<Utc>,
}

/// Object attributes shared by classroom object creation and template blueprints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateClassroomObjectDto {
    #[serde(rename = "type")]
    pub object_type: ClassroomObjectType,
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
    #[serde(default)]
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_assignable: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateClassroomObjectDto {
    #[serde(default)]
    pub position_x: Option<f64>,
    #[serde(default)]
    pub position_y: Option<f64>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable_update",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub color: Option<Option<String>>,
    #[serde(default)]
    pub name: Option<String>,
}
