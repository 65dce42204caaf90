//! Field-level validation helpers shared by the parameter models.
//!
//! Each helper checks one input rule and returns the matching `ValidationError`, so
//! parameter `validate()` methods read as a list of rules applied with `?`.

use std::collections::HashSet;

use validator::ValidateEmail;

use crate::server::error::validation::ValidationError;

/// Requires a finite, strictly positive dimension.
///
/// # Arguments
/// - `field` - Field name reported in the error
/// - `value` - Value to check
///
/// # Returns
/// - `Ok(())` - Value is finite and greater than zero
/// - `Err(ValidationError::NonFiniteNumber)` - Value is NaN or infinite
/// - `Err(ValidationError::NonPositiveDimension)` - Value is zero or negative
pub fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveDimension { field, value });
    }

    Ok(())
}

/// Requires a finite number (positions and rotation may be negative).
pub fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteNumber { field });
    }

    Ok(())
}

/// Requires text with at least one non-whitespace character.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(())
}

/// Requires an optional email to be well formed (HTML5 address syntax).
///
/// Deliverability is not checked.
pub fn require_email(value: Option<&str>) -> Result<(), ValidationError> {
    let Some(email) = value else {
        return Ok(());
    };

    if !email.validate_email() {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Requires every ID in the list to appear once.
pub fn require_unique_ids(field: &'static str, ids: &[i32]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(ids.len());
    for &id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId { field, id });
        }
    }

    Ok(())
}
