use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_classroom_table::Classroom;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassroomObject::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassroomObject::Id))
                    .col(integer(ClassroomObject::ClassroomId))
                    .col(string(ClassroomObject::Type))
                    .col(string(ClassroomObject::Name))
                    .col(double(ClassroomObject::PositionX))
                    .col(double(ClassroomObject::PositionY))
                    .col(double(ClassroomObject::Rotation).default(0.0))
                    .col(double(ClassroomObject::Width))
                    .col(double(ClassroomObject::Height))
                    .col(string_null(ClassroomObject::Color))
                    .col(boolean(ClassroomObject::IsAssignable).default(false))
                    .col(
                        timestamp_with_time_zone(ClassroomObject::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classroom_object_classroom_id")
                            .from(ClassroomObject::Table, ClassroomObject::ClassroomId)
                            .to(Classroom::Table, Classroom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_classroom_object_classroom_id")
                    .table(ClassroomObject::Table)
                    .col(ClassroomObject::ClassroomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassroomObject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassroomObject {
    #[sea_orm(iden = "classroom_objects")]
    Table,
    Id,
    ClassroomId,
    Type,
    Name,
    PositionX,
    PositionY,
    Rotation,
    Width,
    Height,
    Color,
    IsAssignable,
    CreatedAt,
}
