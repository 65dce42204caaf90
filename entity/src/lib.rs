//! SeaORM entity models for the seating plan database.

pub mod prelude;

pub mod classroom;
pub mod classroom_object;
pub mod layout_template;
pub mod layout_template_object;
pub mod sea_orm_active_enums;
pub mod student;
pub mod student_assignment;
