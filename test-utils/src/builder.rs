use entity::{prelude::*, student_assignment};
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Classroom, ClassroomObject};
///
/// let test = TestBuilder::new()
///     .with_table(Classroom)
///     .with_table(ClassroomObject)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including foreign keys declared on `belongs_to` relations. Tables
    /// should be added in dependency order (referenced tables first).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index the entity definitions cannot express.
    ///
    /// Used for composite unique indexes that the migrations create, so the test schema
    /// rejects the same writes the production schema does.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement to run after the tables are created
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for classroom and seating operations.
    ///
    /// Adds, in dependency order:
    /// - Student
    /// - Classroom
    /// - ClassroomObject
    /// - StudentAssignment, plus the unique index on `(classroom_id, student_id)`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_classroom_tables(self) -> Self {
        self.with_table(Student)
            .with_table(Classroom)
            .with_table(ClassroomObject)
            .with_table(StudentAssignment)
            .with_index(
                Index::create()
                    .name("idx_student_assignment_classroom_student_unique")
                    .table(StudentAssignment)
                    .col(student_assignment::Column::ClassroomId)
                    .col(student_assignment::Column::StudentId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds the layout template tables.
    ///
    /// Adds LayoutTemplate and LayoutTemplateObject. Combine with
    /// `with_classroom_tables()` when loading templates into classrooms.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_template_tables(self) -> Self {
        self.with_table(LayoutTemplate)
            .with_table(LayoutTemplateObject)
    }

    /// Adds every table in the schema.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_classroom_tables().with_template_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements in the order they were added, followed by the extra indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
