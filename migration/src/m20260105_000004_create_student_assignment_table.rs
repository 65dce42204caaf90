use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_student_table::Student,
    m20260105_000002_create_classroom_table::Classroom,
    m20260105_000003_create_classroom_object_table::ClassroomObject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentAssignment::Id))
                    .col(integer(StudentAssignment::ClassroomId))
                    .col(integer(StudentAssignment::StudentId))
                    .col(integer(StudentAssignment::DeskObjectId))
                    .col(
                        timestamp_with_time_zone(StudentAssignment::AssignedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_assignment_classroom_id")
                            .from(StudentAssignment::Table, StudentAssignment::ClassroomId)
                            .to(Classroom::Table, Classroom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_assignment_student_id")
                            .from(StudentAssignment::Table, StudentAssignment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_assignment_desk_object_id")
                            .from(StudentAssignment::Table, StudentAssignment::DeskObjectId)
                            .to(ClassroomObject::Table, ClassroomObject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One student per desk
        manager
            .create_index(
                Index::create()
                    .name("idx_student_assignment_desk_unique")
                    .table(StudentAssignment::Table)
                    .col(StudentAssignment::DeskObjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // One desk per student within a classroom
        manager
            .create_index(
                Index::create()
                    .name("idx_student_assignment_classroom_student_unique")
                    .table(StudentAssignment::Table)
                    .col(StudentAssignment::ClassroomId)
                    .col(StudentAssignment::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentAssignment {
    #[sea_orm(iden = "student_assignments")]
    Table,
    Id,
    ClassroomId,
    StudentId,
    DeskObjectId,
    AssignedAt,
}
