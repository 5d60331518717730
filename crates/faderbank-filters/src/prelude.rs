//! Prelude for the filters crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use faderbank_curves::ValueRange;
//! use faderbank_filters::prelude::*;
//!
//! let range = ValueRange::new(0, 127)?;
//! let mut value = SmoothedValue::new(0.0);
//! let mut gate = TransmitGate::new();
//!
//! value.set_target(127.0, range);
//! advance_smoothed(&mut value, range, 0.5, 0.016);
//! assert!(transmit_gate(&value, &mut gate));
//! # Ok::<(), faderbank_curves::CurveError>(())
//! ```

pub use crate::smoothing::{SmoothedValue, Step, advance_smoothed, same_value, smoothing_step};
pub use crate::state::FilterState;
pub use crate::transmit_gate::{DUPLICATE_GRACE_TICKS, TransmitGate, transmit_gate};
