use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub teacher_name: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::classroom_object::Entity")]
    ClassroomObject,
    #[sea_orm(has_many = "super::student_assignment::Entity")]
    StudentAssignment,
}

impl Related<super::classroom_object::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomObject.def()
    }
}

impl Related<super::student_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
