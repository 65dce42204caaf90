use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::deserialize_nullable_update, assignment::StudentAssignmentDetailsDto,
    classroom_object::ClassroomObjectDto,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClassroomDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub teacher_name: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClassroomWithDetailsDto {
    #[serde(flatten)]
    pub classroom: ClassroomDto,
    pub objects: Vec<ClassroomObjectDto>,
    pub assignments: Vec<StudentAssignmentDetailsDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateClassroomDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub teacher_name: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateClassroomDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable_update",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub canvas_width: Option<f64>,
    #[serde(default)]
    pub canvas_height: Option<f64>,
}
