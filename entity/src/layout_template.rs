use super::sea_orm_active_enums::LayoutType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "layout_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub layout_type: LayoutType,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub is_public: bool,
    pub created_by: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::layout_template_object::Entity")]
    LayoutTemplateObject,
}

impl Related<super::layout_template_object::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LayoutTemplateObject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
