//! Centralized error types for the fader bank
//!
//! This crate provides the error vocabulary shared by every fader bank crate.
//! Configuration problems are detected when a control is bound and surfaced as
//! construction-time errors; transport failures never reach the engine.
//!
//! # Architecture
//!
//! - [`common`]: Top-level [`FaderError`], categories and severities
//! - [`validation`]: Configuration and input validation errors
//!
//! # Example
//!
//! ```
//! use faderbank_errors::prelude::*;
//!
//! fn check_range(min: i32, max: i32) -> Result<i32> {
//!     if max <= min {
//!         return Err(ValidationError::invalid_range("range", min, max).into());
//!     }
//!     Ok(max - min)
//! }
//!
//! assert!(check_range(0, 127).is_ok());
//! assert!(check_range(5, 5).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod prelude;
pub mod validation;

pub use common::{ErrorCategory, ErrorSeverity, FaderError};
pub use validation::ValidationError;

/// A specialized `Result` type for fader bank operations.
pub type Result<T> = std::result::Result<T, FaderError>;
