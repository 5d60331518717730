//! Tick-Driven Filters for Fader Bank Controls
//!
//! This crate provides the per-control state machines run once per frame:
//!
//! - **Smoothing**: moves a control toward its target at a constant rate so
//!   the full range is traversed in a configured time, snapping on arrival
//! - **Transmit gate**: sends every tick while the value moves, keeps sending
//!   for a short grace window after it settles, then goes quiet
//!
//! # RT Safety
//!
//! Both filters are allocation-free and O(1) per tick. State types are
//! `#[repr(C)]` and `Copy`.
//!
//! # Example
//!
//! ```
//! use faderbank_curves::ValueRange;
//! use faderbank_filters::prelude::*;
//!
//! let range = ValueRange::new(0, 100)?;
//! let mut value = SmoothedValue::new(50.0);
//! let mut gate = TransmitGate::new();
//!
//! value.set_target(100.0, range);
//! let mut sends = 0;
//! for _ in 0..30 {
//!     advance_smoothed(&mut value, range, 1.0, 0.1);
//!     if transmit_gate(&value, &mut gate) {
//!         sends += 1;
//!     }
//! }
//! assert_eq!(sends, 14);
//! # Ok::<(), faderbank_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod prelude;
pub mod smoothing;
pub mod state;
pub mod transmit_gate;

pub use smoothing::{SmoothedValue, Step, advance_smoothed, same_value, smoothing_step};
pub use state::FilterState;
pub use transmit_gate::{DUPLICATE_GRACE_TICKS, TransmitGate, transmit_gate};
