use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LayoutTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(LayoutTemplate::Id))
                    .col(string(LayoutTemplate::Name))
                    .col(text_null(LayoutTemplate::Description))
                    .col(string(LayoutTemplate::LayoutType))
                    .col(double(LayoutTemplate::CanvasWidth))
                    .col(double(LayoutTemplate::CanvasHeight))
                    .col(boolean(LayoutTemplate::IsPublic).default(false))
                    .col(string(LayoutTemplate::CreatedBy))
                    .col(
                        timestamp_with_time_zone(LayoutTemplate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LayoutTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LayoutTemplate {
    #[sea_orm(iden = "layout_templates")]
    Table,
    Id,
    Name,
    Description,
    LayoutType,
    CanvasWidth,
    CanvasHeight,
    IsPublic,
    CreatedBy,
    CreatedAt,
}
