//! A bank of controls ticked together.
//!
//! The bank owns every bound control in display order, skips hidden controls
//! when ticking, and tallies what each frame transmitted.

use std::fmt;
use std::sync::Arc;

use faderbank_errors::{FaderError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axis::{AxisController, TickOutcome};
use crate::config::{BankSettings, ControlConfig};
use crate::counters::TransmitCounters;
use crate::events::ControlData;
use crate::pad::XyPad;
use crate::transport::Transport;

/// Identifier of a control within a bank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ControlId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Totals for one [`ControlBank::tick_all`] call.
///
/// Counts are per axis: a pad contributes two ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BankTickReport {
    /// Axes advanced.
    pub ticked: usize,
    /// Values handed to the transport.
    pub sent: usize,
    /// Sends skipped because the transport was disconnected.
    pub suppressed: usize,
}

impl BankTickReport {
    fn record(&mut self, outcome: TickOutcome, counters: &TransmitCounters) {
        self.ticked += 1;
        counters.inc_tick();
        match outcome {
            TickOutcome::Quiet => {}
            TickOutcome::Sent(_) => {
                self.sent += 1;
                counters.inc_send();
            }
            TickOutcome::Disconnected(_) => {
                self.suppressed += 1;
                counters.inc_suppressed();
            }
        }
    }
}

/// A control owned by a bank.
#[derive(Clone, Debug)]
pub enum Control {
    /// Single fader or wheel.
    Axis(AxisController),
    /// Two-axis pad.
    Pad(XyPad),
}

impl Control {
    /// The axis, if this is a single-axis control.
    pub fn as_axis(&self) -> Option<&AxisController> {
        match self {
            Control::Axis(axis) => Some(axis),
            Control::Pad(_) => None,
        }
    }

    /// Mutable axis, if this is a single-axis control.
    pub fn as_axis_mut(&mut self) -> Option<&mut AxisController> {
        match self {
            Control::Axis(axis) => Some(axis),
            Control::Pad(_) => None,
        }
    }

    /// The pad, if this is a two-axis control.
    pub fn as_pad(&self) -> Option<&XyPad> {
        match self {
            Control::Pad(pad) => Some(pad),
            Control::Axis(_) => None,
        }
    }

    /// Mutable pad, if this is a two-axis control.
    pub fn as_pad_mut(&mut self) -> Option<&mut XyPad> {
        match self {
            Control::Pad(pad) => Some(pad),
            Control::Axis(_) => None,
        }
    }

    /// Release every axis of the control.
    pub fn release(&mut self) {
        match self {
            Control::Axis(axis) => axis.release(),
            Control::Pad(pad) => pad.release(),
        }
    }

    fn tick<T: Transport + ?Sized>(
        &mut self,
        dt: f32,
        transport: &mut T,
        report: &mut BankTickReport,
        counters: &TransmitCounters,
    ) {
        match self {
            Control::Axis(axis) => report.record(axis.tick(dt, transport), counters),
            Control::Pad(pad) => {
                let outcome = pad.tick(dt, transport);
                report.record(outcome.horizontal, counters);
                report.record(outcome.vertical, counters);
            }
        }
    }
}

#[derive(Debug)]
struct Entry {
    id: ControlId,
    control: Control,
    data: ControlData,
}

/// An ordered collection of controls sharing bank settings.
///
/// # Example
///
/// ```
/// use faderbank_engine::{BankSettings, ConnectionFlag, ControlBank, ControlConfig, MessageSink, StatusGatedTransport};
///
/// #[derive(Default)]
/// struct Collect(Vec<(String, i32)>);
/// impl MessageSink for Collect {
///     fn send(&mut self, address: &str, value: i32) {
///         self.0.push((address.to_string(), value));
///     }
/// }
///
/// let settings = BankSettings { address_prefix: Some("/synth".into()), ..BankSettings::default() };
/// let mut bank = ControlBank::new(settings)?;
/// bank.add_axis("cutoff", ControlConfig::new("/cutoff"))?;
///
/// if let Some(axis) = bank.axis_mut(&"cutoff".into()) {
///     axis.set_target(64.0);
/// }
///
/// let mut transport = StatusGatedTransport::new(ConnectionFlag::with_state(true), Collect::default());
/// let report = bank.tick_all(0.016, &mut transport);
/// assert_eq!(report.sent, 1);
///
/// let (_, sink) = transport.into_parts();
/// assert_eq!(sink.0, vec![("/synth/cutoff".to_string(), 64)]);
/// # Ok::<(), faderbank_errors::FaderError>(())
/// ```
#[derive(Debug)]
pub struct ControlBank {
    settings: BankSettings,
    entries: Vec<Entry>,
    counters: Arc<TransmitCounters>,
}

impl ControlBank {
    /// An empty bank.
    ///
    /// # Errors
    ///
    /// Fails when the settings do not validate.
    pub fn new(settings: BankSettings) -> Result<Self> {
        if let Err(e) = settings.validate() {
            warn!(error = %e, category = %e.category(), "rejected bank settings");
            return Err(e);
        }
        Ok(Self {
            settings,
            entries: Vec::new(),
            counters: Arc::new(TransmitCounters::new()),
        })
    }

    /// Bank settings.
    pub fn settings(&self) -> &BankSettings {
        &self.settings
    }

    /// Shared transmit counters.
    pub fn counters(&self) -> Arc<TransmitCounters> {
        Arc::clone(&self.counters)
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bank has no controls.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Control ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &ControlId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    /// Bind a single-axis control.
    ///
    /// The bank's address prefix is applied to the configured address.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate id or an invalid configuration.
    pub fn add_axis(&mut self, id: impl Into<ControlId>, config: ControlConfig) -> Result<()> {
        let id = id.into();
        self.ensure_unique(&id)?;
        let axis = self.bind(&id, config)?;
        self.push(id, Control::Axis(axis));
        Ok(())
    }

    /// Bind a two-axis pad.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate id or if either configuration is invalid.
    pub fn add_pad(
        &mut self,
        id: impl Into<ControlId>,
        horizontal: ControlConfig,
        vertical: ControlConfig,
    ) -> Result<()> {
        let id = id.into();
        self.ensure_unique(&id)?;
        let horizontal = self.bind(&id, horizontal)?;
        let vertical = self.bind(&id, vertical)?;
        self.push(id, Control::Pad(XyPad::from_axes(horizontal, vertical)));
        Ok(())
    }

    /// Unbind a control and hand it back.
    ///
    /// # Errors
    ///
    /// Returns [`FaderError::UnknownControl`] when the id is not bound.
    pub fn remove(&mut self, id: &ControlId) -> Result<Control> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        debug!(id = %entry.id, "removed control");
        Ok(entry.control)
    }

    /// A bound control.
    pub fn get(&self, id: &ControlId) -> Option<&Control> {
        self.entry(id).map(|entry| &entry.control)
    }

    /// A bound control, mutably.
    pub fn get_mut(&mut self, id: &ControlId) -> Option<&mut Control> {
        self.entry_mut(id).map(|entry| &mut entry.control)
    }

    /// A bound single-axis control.
    pub fn axis(&self, id: &ControlId) -> Option<&AxisController> {
        self.get(id).and_then(Control::as_axis)
    }

    /// A bound single-axis control, mutably.
    pub fn axis_mut(&mut self, id: &ControlId) -> Option<&mut AxisController> {
        self.get_mut(id).and_then(Control::as_axis_mut)
    }

    /// A bound pad.
    pub fn pad(&self, id: &ControlId) -> Option<&XyPad> {
        self.get(id).and_then(Control::as_pad)
    }

    /// A bound pad, mutably.
    pub fn pad_mut(&mut self, id: &ControlId) -> Option<&mut XyPad> {
        self.get_mut(id).and_then(Control::as_pad_mut)
    }

    /// UI metadata of a control.
    pub fn data(&self, id: &ControlId) -> Option<&ControlData> {
        self.entry(id).map(|entry| &entry.data)
    }

    /// UI metadata of a control, mutably, for subscribing or renaming.
    pub fn data_mut(&mut self, id: &ControlId) -> Option<&mut ControlData> {
        self.entry_mut(id).map(|entry| &mut entry.data)
    }

    /// Whether a control is ticked by [`ControlBank::tick_all`].
    pub fn is_enabled(&self, id: &ControlId) -> Option<bool> {
        self.data(id).map(ControlData::enabled)
    }

    /// Show or hide a control. Hidden controls are not ticked.
    ///
    /// # Errors
    ///
    /// Returns [`FaderError::UnknownControl`] when the id is not bound.
    pub fn set_enabled(&mut self, id: &ControlId, enabled: bool) -> Result<()> {
        let index = self.index_of(id)?;
        if let Some(entry) = self.entries.get_mut(index) {
            entry.data.set_enabled(enabled);
        }
        Ok(())
    }

    /// Shorthand for `set_enabled(id, true)`.
    ///
    /// # Errors
    ///
    /// Same as [`ControlBank::set_enabled`].
    pub fn enable(&mut self, id: &ControlId) -> Result<()> {
        self.set_enabled(id, true)
    }

    /// Shorthand for `set_enabled(id, false)`.
    ///
    /// # Errors
    ///
    /// Same as [`ControlBank::set_enabled`].
    pub fn disable(&mut self, id: &ControlId) -> Result<()> {
        self.set_enabled(id, false)
    }

    /// Swap a control with its left neighbour. Returns `false` at the left edge.
    ///
    /// # Errors
    ///
    /// Returns [`FaderError::UnknownControl`] when the id is not bound.
    pub fn move_left(&mut self, id: &ControlId) -> Result<bool> {
        let index = self.index_of(id)?;
        match index.checked_sub(1) {
            Some(left) => {
                self.entries.swap(left, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Swap a control with its right neighbour. Returns `false` at the right edge.
    ///
    /// # Errors
    ///
    /// Returns [`FaderError::UnknownControl`] when the id is not bound.
    pub fn move_right(&mut self, id: &ControlId) -> Result<bool> {
        let index = self.index_of(id)?;
        let right = index + 1;
        if right >= self.entries.len() {
            return Ok(false);
        }
        self.entries.swap(index, right);
        Ok(true)
    }

    /// Tick every enabled control once, in display order.
    pub fn tick_all<T: Transport + ?Sized>(&mut self, dt: f32, transport: &mut T) -> BankTickReport {
        let mut report = BankTickReport::default();
        for entry in self.entries.iter_mut().filter(|entry| entry.data.enabled()) {
            entry.control.tick(dt, transport, &mut report, &self.counters);
        }
        report
    }

    fn bind(&self, id: &ControlId, mut config: ControlConfig) -> Result<AxisController> {
        config.address = self.settings.resolve_address(&config.address);
        AxisController::with_grace(config, self.settings.grace_ticks).inspect_err(|e| {
            warn!(id = %id, error = %e, category = %e.category(), "rejected control configuration");
        })
    }

    fn push(&mut self, id: ControlId, control: Control) {
        debug!(id = %id, index = self.entries.len(), "added control");
        let data = ControlData::new(id.as_str());
        self.entries.push(Entry { id, control, data });
    }

    fn ensure_unique(&self, id: &ControlId) -> Result<()> {
        if self.entry(id).is_some() {
            warn!(id = %id, "duplicate control id");
            return Err(ValidationError::not_unique("control id", id.as_str()).into());
        }
        Ok(())
    }

    fn index_of(&self, id: &ControlId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| FaderError::unknown_control(id.as_str()))
    }

    fn entry(&self, id: &ControlId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    fn entry_mut(&mut self, id: &ControlId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| &entry.id == id)
    }
}
