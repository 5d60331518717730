//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use faderbank_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_some, must_with};

#[cfg(feature = "mock")]
pub use crate::mock::{MockTransport, SentMessage};

#[cfg(feature = "logging")]
pub use crate::logging::init_test_tracing;

/// Result type for tests that use `?`.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;
