//! Axis control engine for OSC-style fader banks.
//!
//! Each control is an [`AxisController`]: once per frame the host calls
//! [`AxisController::tick`] with the elapsed time and a [`Transport`]. The
//! controller smooths its value toward the user's target, decides through a
//! duplicate gate whether this frame should transmit, maps the value through
//! its response curve, and hands the integer to the transport.
//!
//! # Overview
//!
//! - [`ControlConfig`]: per-control range, default, smoothing, curve and type
//! - [`ControlBehavior`]: what release does (spring-back for wheels)
//! - [`AxisController`]: one control, ticked once per frame
//! - [`XyPad`]: two independent axes driven together
//! - [`ControlBank`]: ordered set of controls with enable/disable and reordering
//! - [`ControlData`]: UI metadata with change subscriptions
//! - [`Transport`], [`ConnectionFlag`], [`StatusGatedTransport`]: the outbound seam
//! - [`TransmitCounters`]: lock-free send statistics
//!
//! The engine is single-threaded per controller and performs no I/O, timers
//! or sleeps of its own.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod axis;
pub mod bank;
pub mod behavior;
pub mod config;
pub mod counters;
pub mod events;
pub mod pad;
pub mod prelude;
pub mod transport;

pub use axis::{AxisController, TickOutcome};
pub use bank::{BankTickReport, Control, ControlBank, ControlId};
pub use behavior::ControlBehavior;
pub use config::{
    BankSettings, ControlConfig, ControlType, MAX_CONTROLLER_VALUE, MIN_CONTROLLER_VALUE,
};
pub use counters::{CounterSnapshot, TransmitCounters};
pub use events::{ControlData, ControlEvent, SubscriptionId};
pub use pad::{PadTickOutcome, XyPad};
pub use transport::{ConnectionFlag, ConnectionStatus, MessageSink, StatusGatedTransport, Transport};

pub use faderbank_curves::{CurveDirection, CurveType};
pub use faderbank_errors::{FaderError, Result};
