use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classroom::Table)
                    .if_not_exists()
                    .col(pk_auto(Classroom::Id))
                    .col(string(Classroom::Name))
                    .col(text_null(Classroom::Description))
                    .col(string(Classroom::TeacherName))
                    .col(double(Classroom::CanvasWidth))
                    .col(double(Classroom::CanvasHeight))
                    .col(
                        timestamp_with_time_zone(Classroom::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Classroom::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Classroom {
    #[sea_orm(iden = "classrooms")]
    Table,
    Id,
    Name,
    Description,
    TeacherName,
    CanvasWidth,
    CanvasHeight,
    CreatedAt,
    UpdatedAt,
}
