use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ClassroomObjectType {
    #[sea_orm(string_value = "desk")]
    Desk,
    #[sea_orm(string_value = "teacher_desk")]
    TeacherDesk,
    #[sea_orm(string_value = "whiteboard")]
    Whiteboard,
    #[sea_orm(string_value = "projector")]
    Projector,
    #[sea_orm(string_value = "bookshelf")]
    Bookshelf,
    #[sea_orm(string_value = "cabinet")]
    Cabinet,
    #[sea_orm(string_value = "plant")]
    Plant,
    #[sea_orm(string_value = "trash_can")]
    TrashCan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LayoutType {
    #[sea_orm(string_value = "traditional_rows")]
    TraditionalRows,
    #[sea_orm(string_value = "u_shape")]
    UShape,
    #[sea_orm(string_value = "grouped_tables")]
    GroupedTables,
    #[sea_orm(string_value = "circle")]
    Circle,
    #[sea_orm(string_value = "horseshoe")]
    Horseshoe,
    #[sea_orm(string_value = "custom")]
    Custom,
}
