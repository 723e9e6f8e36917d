//! Field checks shared by every create operation.

use crate::error::ValidationError;

/// Returns the value unchanged if it has any non-whitespace content.
pub fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value)
}

/// Accepts counts of one or more.
pub fn require_positive(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value < 1 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

/// Accepts finite, non-negative prices.
pub fn require_price(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidPrice { field, value });
    }
    Ok(value)
}
