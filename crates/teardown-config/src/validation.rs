//! Validation trait and range helpers shared by parameter types

use crate::error::{ConfigError, Result};

/// Types that can validate their own field values
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Check that a float lies within an inclusive range
pub fn validate_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check that an integer is strictly greater than `min`
pub fn validate_positive(field: &str, value: usize, min: usize) -> Result<()> {
    if value <= min {
        return Err(ConfigError::InvalidInteger {
            field: field.to_string(),
            value,
            min,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(validate_range("x", 0.0, 0.0, 1.0).is_ok());
        assert!(validate_range("x", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("x", 1.1, 0.0, 1.0).is_err());
        assert!(validate_range("x", -0.1, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_positive() {
        assert!(validate_positive("n", 1, 0).is_ok());
        assert!(validate_positive("n", 0, 0).is_err());
    }
}
