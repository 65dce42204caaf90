use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{classroom_object::ClassroomObjectDto, student::StudentDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentAssignmentDto {
    pub id: i32,
    pub classroom_id: i32,
    pub student_id: i32,
    pub desk_object_id: i32,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentAssignmentDetailsDto {
    #[serde(flatten)]
    pub assignment: StudentAssignmentDto,
    pub student: StudentDto,
    pub desk_object: ClassroomObjectDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateStudentAssignmentDto {
    pub student_id: i32,
    pub desk_object_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RandomizeAssignmentsDto {
    pub student_ids: Vec<i32>,
    pub desk_object_ids: Vec<i32>,
}
