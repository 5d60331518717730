//! Prelude for the engine crate.
//!
//! ```
//! use faderbank_engine::prelude::*;
//!
//! let mut axis = AxisController::new(ControlConfig::new("/mod"))?;
//! axis.set_target_percentage(0.5);
//! # Ok::<(), FaderError>(())
//! ```

pub use crate::axis::{AxisController, TickOutcome};
pub use crate::bank::{BankTickReport, Control, ControlBank, ControlId};
pub use crate::behavior::ControlBehavior;
pub use crate::config::{BankSettings, ControlConfig, ControlType};
pub use crate::events::{ControlData, ControlEvent};
pub use crate::pad::XyPad;
pub use crate::transport::{ConnectionFlag, ConnectionStatus, MessageSink, StatusGatedTransport, Transport};
pub use faderbank_curves::CurveType;
pub use faderbank_errors::FaderError;
