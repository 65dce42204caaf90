//! Classroom object fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{classroom_object, sea_orm_active_enums::ClassroomObjectType};

/// Default test desk name.
pub const DEFAULT_NAME: &str = "Desk A1";

/// Creates an assignable desk entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - classroom_id: `1`
/// - object_type: `Desk`
/// - position: (100, 200), rotation 90
/// - size: 50 x 30
/// - color: `Some("#00aaff")`
/// - is_assignable: `true`
pub fn entity() -> classroom_object::Model {
    classroom_object::Model {
        id: 1,
        classroom_id: 1,
        object_type: ClassroomObjectType::Desk,
        name: DEFAULT_NAME.to_string(),
        position_x: 100.0,
        position_y: 200.0,
        rotation: 90.0,
        width: 50.0,
        height: 30.0,
        color: Some("#00aaff".to_string()),
        is_assignable: true,
        created_at: Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
    }
}
