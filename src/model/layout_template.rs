use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::classroom_object::{ClassroomObjectType, CreateClassroomObjectDto};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    TraditionalRows,
    UShape,
    GroupedTables,
    Circle,
    Horseshoe,
    Custom,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LayoutTemplateObjectDto {
    pub id: i32,
    pub template_id: i32,
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
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LayoutTemplateWithObjectsDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub layout_type: LayoutType,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub is_public: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub objects: Vec<LayoutTemplateObjectDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateLayoutTemplateDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub layout_type: LayoutType,
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub is_public: bool,
    pub created_by: String,
    #[serde(default)]
    pub objects: Vec<CreateClassroomObjectDto>,
}
