//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use faderbank_errors::prelude::*;
//!
//! fn require_address(address: &str) -> Result<&str> {
//!     if address.is_empty() {
//!         return Err(ValidationError::required("address").into());
//!     }
//!     Ok(address)
//! }
//!
//! assert!(require_address("/volume").is_ok());
//! ```

pub use crate::{
    Result,
    common::{ErrorCategory, ErrorSeverity, FaderError},
    validation::ValidationError,
};
