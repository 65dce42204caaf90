pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_student_table;
mod m20260105_000002_create_classroom_table;
mod m20260105_000003_create_classroom_object_table;
mod m20260105_000004_create_student_assignment_table;
mod m20260105_000005_create_layout_template_table;
mod m20260105_000006_create_layout_template_object_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_student_table::Migration),
            Box::new(m20260105_000002_create_classroom_table::Migration),
            Box::new(m20260105_000003_create_classroom_object_table::Migration),
            Box::new(m20260105_000004_create_student_assignment_table::Migration),
            Box::new(m20260105_000005_create_layout_template_table::Migration),
            Box::new(m20260105_000006_create_layout_template_object_table::Migration),
        ]
    }
}
