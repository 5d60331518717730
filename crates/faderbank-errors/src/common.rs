//! Common error types and utilities used across all fader bank crates.
//!
//! This module provides the top-level error enum that wraps sub-errors,
//! along with error classification and severity levels.

use core::fmt;

use crate::ValidationError;

/// Top-level error type for the fader bank.
#[derive(Debug, thiserror::Error)]
pub enum FaderError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A control id that is not bound in a bank
    #[error("Unknown control '{0}'")]
    UnknownControl(String),
}

impl FaderError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FaderError::Validation(_) => ErrorCategory::Validation,
            FaderError::UnknownControl(_) => ErrorCategory::Control,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FaderError::Validation(e) => e.severity(),
            FaderError::UnknownControl(_) => ErrorSeverity::Warning,
        }
    }

    /// Check if this error is recoverable.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }

    /// Create an unknown control error.
    pub fn unknown_control(id: impl Into<String>) -> Self {
        FaderError::UnknownControl(id.into())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Configuration and input validation errors
    Validation = 0,
    /// Control lookup errors
    Control = 1,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::Control => write!(f, "Control"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, system may be in unstable state
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
