//! Single-axis controller.
//!
//! [`AxisController`] is the unit a UI binds to. It owns one control's
//! runtime state and, once per frame, runs
//! smoothing → duplicate gate → curve mapping → send.

use faderbank_curves::{CurveMapper, ValueRange};
use faderbank_errors::Result;
use faderbank_filters::{
    DUPLICATE_GRACE_TICKS, FilterState, SmoothedValue, TransmitGate, advance_smoothed,
    transmit_gate,
};
use tracing::{debug, trace};

use crate::behavior::ControlBehavior;
use crate::config::{ControlConfig, validate_grace_ticks};
use crate::transport::Transport;

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The gate held the value back; nothing was attempted.
    Quiet,
    /// The value was handed to the transport.
    Sent(i32),
    /// The gate allowed a send but the transport was disconnected.
    Disconnected(i32),
}

impl TickOutcome {
    /// Whether a value reached the transport.
    pub fn is_sent(self) -> bool {
        matches!(self, TickOutcome::Sent(_))
    }

    /// The mapped value that was sent or would have been sent.
    pub fn value(self) -> Option<i32> {
        match self {
            TickOutcome::Quiet => None,
            TickOutcome::Sent(v) | TickOutcome::Disconnected(v) => Some(v),
        }
    }
}

/// One control axis driven once per frame.
///
/// # Example
///
/// ```
/// use faderbank_engine::{AxisController, ConnectionFlag, ControlConfig, MessageSink, StatusGatedTransport};
///
/// #[derive(Default)]
/// struct Collect(Vec<i32>);
/// impl MessageSink for Collect {
///     fn send(&mut self, _address: &str, value: i32) {
///         self.0.push(value);
///     }
/// }
///
/// let config = ControlConfig::new("/volume")
///     .with_range(0, 100)
///     .with_default(50)
///     .with_smooth_time(1.0);
/// let mut axis = AxisController::new(config)?;
/// let mut transport = StatusGatedTransport::new(ConnectionFlag::with_state(true), Collect::default());
///
/// axis.set_target(100.0);
/// for _ in 0..30 {
///     axis.tick(0.1, &mut transport);
/// }
///
/// let (_, sink) = transport.into_parts();
/// assert_eq!(sink.0.len(), 14);
/// assert_eq!(axis.latest_sent_value(), Some(100));
/// # Ok::<(), faderbank_errors::FaderError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AxisController {
    config: ControlConfig,
    mapper: CurveMapper,
    behavior: ControlBehavior,
    value: SmoothedValue,
    gate: TransmitGate,
    latest_sent: Option<i32>,
    latest_sent_text: String,
}

impl AxisController {
    /// Bind a controller to a configuration.
    ///
    /// All three values start at `default_value` and the gate starts
    /// saturated, so an untouched control never transmits.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the configuration is unusable, see
    /// [`ControlConfig::validate`].
    pub fn new(config: ControlConfig) -> Result<Self> {
        Self::with_grace(config, DUPLICATE_GRACE_TICKS)
    }

    /// Bind a controller with a custom duplicate grace window.
    ///
    /// # Errors
    ///
    /// Same as [`AxisController::new`], plus
    /// [`ValidationError::OutOfRange`](faderbank_errors::ValidationError::OutOfRange)
    /// when `grace_ticks` is zero.
    pub fn with_grace(config: ControlConfig, grace_ticks: u32) -> Result<Self> {
        let range = config.validate()?;
        validate_grace_ticks(grace_ticks)?;
        let mapper = CurveMapper::new(config.curve_type, range);
        let behavior = ControlBehavior::from(config.control_type);

        debug!(
            address = %config.address,
            min = config.min,
            max = config.max,
            default_value = config.default_value,
            curve = ?config.curve_type,
            control_type = ?config.control_type,
            "bound axis controller"
        );

        Ok(Self {
            value: SmoothedValue::new(config.default_value as f32),
            gate: TransmitGate::with_grace(grace_ticks),
            config,
            mapper,
            behavior,
            latest_sent: None,
            latest_sent_text: String::new(),
        })
    }

    /// The bound configuration.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Destination address.
    pub fn address(&self) -> &str {
        &self.config.address
    }

    /// Validated value range.
    pub fn range(&self) -> ValueRange {
        self.mapper.range()
    }

    /// Release policy.
    pub fn behavior(&self) -> ControlBehavior {
        self.behavior
    }

    /// Current smoothing state.
    pub fn state(&self) -> &SmoothedValue {
        &self.value
    }

    /// Current duplicate gate state.
    pub fn gate(&self) -> &TransmitGate {
        &self.gate
    }

    /// The smoothed value, for slider display.
    pub fn smooth_value(&self) -> f32 {
        self.value.current
    }

    /// The value being approached.
    pub fn target_value(&self) -> f32 {
        self.value.target
    }

    /// The current value after forward curve mapping.
    pub fn mapped_value(&self) -> i32 {
        self.mapper.forward(self.value.current)
    }

    /// The last value handed to the transport.
    pub fn latest_sent_value(&self) -> Option<i32> {
        self.latest_sent
    }

    /// Display label of the last sent value, empty until the first send.
    pub fn latest_sent_text(&self) -> &str {
        &self.latest_sent_text
    }

    /// Set the target from user input, clamped into range.
    pub fn set_target(&mut self, value: f32) {
        let range = self.range();
        self.value.set_target(value, range);
    }

    /// Set the target as a fraction of the range. `p` is clamped to `[0, 1]`.
    pub fn set_target_percentage(&mut self, p: f32) {
        let range = self.range();
        self.value.set_target(range.lerp(p), range);
    }

    /// Pointer or touch pressed.
    pub fn press(&mut self) {
        if let Some(target) = self.behavior.on_press() {
            self.set_target(target);
        }
    }

    /// Pointer or touch released. Spring controls retarget their default.
    pub fn release(&mut self) {
        if let Some(target) = self.behavior.on_release(&self.mapper, self.config.default_value) {
            debug!(
                address = %self.config.address,
                spring_target = target,
                behavior = ?self.behavior,
                "spring back on release"
            );
            self.set_target(target);
        }
    }

    /// Advance smoothing and the gate by one tick without sending.
    ///
    /// Returns whether this tick should transmit.
    pub fn advance(&mut self, dt: f32) -> bool {
        let range = self.range();
        advance_smoothed(&mut self.value, range, self.config.smooth_time, dt);
        transmit_gate(&self.value, &mut self.gate)
    }

    /// Run one frame: advance, gate and, if allowed and connected, send.
    ///
    /// A disconnected transport still lets the state advance; only the send
    /// is skipped.
    pub fn tick<T: Transport + ?Sized>(&mut self, dt: f32, transport: &mut T) -> TickOutcome {
        if !self.advance(dt) {
            return TickOutcome::Quiet;
        }

        let mapped = self.mapped_value();
        if !transport.is_connected() {
            trace!(address = %self.config.address, value = mapped, "transport disconnected, send skipped");
            return TickOutcome::Disconnected(mapped);
        }

        transport.send(&self.config.address, mapped);
        trace!(address = %self.config.address, value = mapped, "sent");

        if self.latest_sent != Some(mapped) {
            self.latest_sent_text = mapped.to_string();
        }
        self.latest_sent = Some(mapped);
        TickOutcome::Sent(mapped)
    }

    /// Return to the freshly bound state.
    pub fn reset(&mut self) {
        self.value.current = self.config.default_value as f32;
        self.value.reset();
        self.gate.reset();
        self.latest_sent = None;
        self.latest_sent_text.clear();
    }
}
