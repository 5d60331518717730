//! Response Curves for Fader Bank Controls
//!
//! This crate maps a control's raw value to and from the value that is
//! actually transmitted, through a response curve applied over the control's
//! integer range.
//!
//! # Overview
//!
//! The curve system supports:
//! - **Linear**: Identity mapping, the value is only truncated
//! - **Logarithmic**: `sqrt` shaping forward, `x^2` inverse (fine control at the top)
//! - **Exponential**: `x^2` shaping forward, `sqrt` inverse (fine control at the bottom)
//!
//! Forward mapping converts an internal control value into the transmitted
//! value. Inverse mapping converts a nominal value (such as a configured
//! default) into the raw value that forward-maps back onto it.
//!
//! All results are truncated toward zero, never rounded.
//!
//! # Example
//!
//! ```
//! use faderbank_curves::{CurveDirection, CurveMapper, CurveType, ValueRange};
//!
//! let range = ValueRange::new(0, 100)?;
//! let mapper = CurveMapper::new(CurveType::Logarithmic, range);
//!
//! let raw = mapper.map(50.0, CurveDirection::Inverse);
//! assert_eq!(raw, 25);
//! assert_eq!(mapper.map(raw as f32, CurveDirection::Forward), 50);
//! # Ok::<(), faderbank_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve_type;
pub mod error;
pub mod mapper;
pub mod prelude;
pub mod range;

pub use curve_type::{CurveDirection, CurveType};
pub use error::CurveError;
pub use mapper::{CurveMapper, map_value, truncate_to_int};
pub use range::ValueRange;
