//! Classroom fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::classroom;

/// Default test classroom name.
pub const DEFAULT_NAME: &str = "Room 101";

/// Default test teacher name.
pub const DEFAULT_TEACHER_NAME: &str = "Test Teacher";

/// Creates a classroom entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Room 101"`
/// - description: `None`
/// - teacher_name: `"Test Teacher"`
/// - canvas: 800 x 600
/// - created_at / updated_at: 2026-01-05T00:00:00Z
pub fn entity() -> classroom::Model {
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
    classroom::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: None,
        teacher_name: DEFAULT_TEACHER_NAME.to_string(),
        canvas_width: 800.0,
        canvas_height: 600.0,
        created_at: timestamp,
        updated_at: timestamp,
    }
}
