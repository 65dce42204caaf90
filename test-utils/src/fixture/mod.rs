//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and pure logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let desk = fixture::classroom_object::entity();
//! let blueprint = fixture::layout_template_object::entity_builder()
//!     .color(Some("#ff0000".to_string()))
//!     .build();
//! ```

pub mod classroom;
pub mod classroom_object;
pub mod layout_template_object;

pub use classroom::entity as classroom_entity;
pub use classroom_object::entity as classroom_object_entity;
pub use layout_template_object::{
    entity as layout_template_object_entity,
    entity_builder as layout_template_object_entity_builder,
};
