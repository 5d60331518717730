//! Error types for curve operations.

use std::fmt;

/// Error type for curve operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The range does not span at least one unit.
    ///
    /// Curve mapping divides by `max - min`, so an empty or inverted range
    /// cannot be mapped.
    InvalidRange {
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(
                    f,
                    "Invalid curve range [{}, {}]: max must be greater than min",
                    min, max
                )
            }
        }
    }
}

impl std::error::Error for CurveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_range() {
        let err = CurveError::InvalidRange { min: 10, max: 10 };
        let msg = format!("{}", err);
        assert!(msg.contains("[10, 10]"));
        assert!(msg.contains("max must be greater than min"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = CurveError::InvalidRange { min: 1, max: 0 };
        let _: &dyn std::error::Error = &err;
    }
}
