//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database and take the
//! IDs of their parent rows explicitly, so foreign keys are always satisfied.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::create_student(&db).await?;
//!     let classroom = factory::create_classroom(&db).await?;
//!     let desk = factory::create_desk(&db, classroom.id).await?;
//!
//!     // Create with all dependencies
//!     let (classroom, desks) = factory::helpers::create_classroom_with_desks(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::classroom_object::ClassroomObjectFactory;
//!
//! let whiteboard = ClassroomObjectFactory::new(&db, classroom.id)
//!     .object_type(ClassroomObjectType::Whiteboard)
//!     .assignable(false)
//!     .build()
//!     .await?;
//! ```

pub mod classroom;
pub mod classroom_object;
pub mod helpers;
pub mod layout_template;
pub mod layout_template_object;
pub mod student;
pub mod student_assignment;

// Re-export commonly used factory functions for concise usage
pub use classroom::create_classroom;
pub use classroom_object::{create_desk, create_object};
pub use layout_template::create_layout_template;
pub use layout_template_object::create_template_object;
pub use student::create_student;
pub use student_assignment::create_assignment;
