use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_layout_template_table::LayoutTemplate;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LayoutTemplateObject::Table)
                    .if_not_exists()
                    .col(pk_auto(LayoutTemplateObject::Id))
                    .col(integer(LayoutTemplateObject::TemplateId))
                    .col(string(LayoutTemplateObject::Type))
                    .col(string(LayoutTemplateObject::Name))
                    .col(double(LayoutTemplateObject::PositionX))
                    .col(double(LayoutTemplateObject::PositionY))
                    .col(double(LayoutTemplateObject::Rotation).default(0.0))
                    .col(double(LayoutTemplateObject::Width))
                    .col(double(LayoutTemplateObject::Height))
                    .col(string_null(LayoutTemplateObject::Color))
                    .col(boolean(LayoutTemplateObject::IsAssignable).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_layout_template_object_template_id")
                            .from(LayoutTemplateObject::Table, LayoutTemplateObject::TemplateId)
                            .to(LayoutTemplate::Table, LayoutTemplate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LayoutTemplateObject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LayoutTemplateObject {
    #[sea_orm(iden = "layout_template_objects")]
    Table,
    Id,
    TemplateId,
    Type,
    Name,
    PositionX,
    PositionY,
    Rotation,
    Width,
    Height,
    Color,
    IsAssignable,
}
