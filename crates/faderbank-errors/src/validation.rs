//! Input validation error types.
//!
//! This module provides error types for configuration validation failures
//! including range checks, required fields and non-finite numbers.

use core::fmt;

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Minimum allowed value
        min: String,
        /// Maximum allowed value
        max: String,
    },

    /// Value is required but missing
    #[error("Required field '{0}' is missing")]
    Required(String),

    /// Range bounds do not describe a non-empty interval
    #[error("{field} range [{min}, {max}] is empty: max must be greater than min")]
    InvalidRange {
        /// Field name
        field: String,
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },

    /// Floating point value is NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Field name
        field: String,
        /// The offending value, formatted
        value: String,
    },

    /// Value not unique
    #[error("Value for field '{field}' must be unique but '{value}' already exists")]
    NotUnique {
        /// Field name
        field: String,
        /// The duplicate value
        value: String,
    },
}

impl ValidationError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create a required field error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required(field.into())
    }

    /// Create an empty range error.
    pub fn invalid_range(field: impl Into<String>, min: impl Into<i64>, max: impl Into<i64>) -> Self {
        ValidationError::InvalidRange {
            field: field.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a non-finite number error.
    pub fn non_finite<T: fmt::Debug>(field: impl Into<String>, value: T) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
            value: format!("{value:?}"),
        }
    }

    /// Create a uniqueness error.
    pub fn not_unique(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::NotUnique {
            field: field.into(),
            value: value.into(),
        }
    }
}
