//! Reusable numeric validation helpers.
//!
//! Configuration values are checked once, up front; the synthesis core itself
//! never rejects input and clamps instead.

use std::fmt;

/// Error type for numeric validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is finite.
///
/// # Example
/// ```
/// use phonowave_spec::validation::validate_finite;
///
/// assert!(validate_finite("speed", 1.0).is_ok());
/// assert!(validate_finite("speed", f64::INFINITY).is_err());
/// ```
pub fn validate_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is positive (> 0) and finite.
///
/// # Example
/// ```
/// use phonowave_spec::validation::validate_positive;
///
/// assert!(validate_positive("frame_rate", 30.0).is_ok());
/// assert!(validate_positive("frame_rate", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is non-negative (>= 0) and finite.
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value lies strictly inside `(min, max)`.
///
/// # Example
/// ```
/// use phonowave_spec::validation::validate_open_range;
///
/// assert!(validate_open_range("angle", 0.5, 0.0, 1.0).is_ok());
/// assert!(validate_open_range("angle", 1.0, 0.0, 1.0).is_err());
/// ```
pub fn validate_open_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= min || value >= max {
        return Err(CommonValidationError::new(format!(
            "{} must be in ({}, {}), got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_nan() {
        let err = validate_positive("rate", f64::NAN).unwrap_err();
        assert!(err.message.contains("finite"));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert!(validate_non_negative("width", 0.0).is_ok());
        assert!(validate_non_negative("width", -0.1).is_err());
    }

    #[test]
    fn test_open_range_bounds() {
        assert!(validate_open_range("x", 0.0, 0.0, 1.0).is_err());
        assert!(validate_open_range("x", 0.999, 0.0, 1.0).is_ok());
        assert!(validate_open_range("x", f64::NEG_INFINITY, 0.0, 1.0).is_err());
    }
}
