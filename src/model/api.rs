use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Deserializes a nullable field of a partial update.
///
/// Used with `#[serde(default)]`: a missing key stays `None` (keep the stored value),
/// an explicit `null` becomes `Some(None)` (clear it), and a value becomes
/// `Some(Some(value))`.
pub fn deserialize_nullable_update<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
