//! Seatplan Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the seatplan
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of the following components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories that insert rows with sensible defaults
//! - **fixture**: In-memory entity models for tests that don't touch the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Classroom;
//!
//! #[tokio::test]
//! async fn test_classroom_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Classroom)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
