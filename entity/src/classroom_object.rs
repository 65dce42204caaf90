use super::sea_orm_active_enums::ClassroomObjectType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classroom_objects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub classroom_id: i32,
    #[sea_orm(column_name = "type")]
    pub object_type: ClassroomObjectType,
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    pub color: Option<String>,
    pub is_assignable: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classroom::Entity",
        from = "Column::ClassroomId",
        to = "super::classroom::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Classroom,
    #[sea_orm(has_many = "super::student_assignment::Entity")]
    StudentAssignment,
}

impl Related<super::classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl Related<super::student_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
