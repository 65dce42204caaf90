use super::sea_orm_active_enums::ClassroomObjectType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "layout_template_objects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_id: i32,
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
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::layout_template::Entity",
        from = "Column::TemplateId",
        to = "super::layout_template::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LayoutTemplate,
}

impl Related<super::layout_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LayoutTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
