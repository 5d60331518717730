//! Control configuration.
//!
//! A [`ControlConfig`] is supplied by the host for each control and is
//! immutable once a controller is bound to it. Configurations deserialize from
//! JSON (or any serde format) and are checked with [`ControlConfig::validate`]
//! before use.

use faderbank_curves::{CurveError, CurveType, ValueRange};
use faderbank_errors::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use crate::behavior::ControlBehavior;

/// Lowest value of the default controller range.
pub const MIN_CONTROLLER_VALUE: i32 = 0;

/// Highest value of the default controller range.
pub const MAX_CONTROLLER_VALUE: i32 = 127;

/// How a control reacts when the user lets go of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControlType {
    /// Stays where it was left.
    #[default]
    Normal,
    /// Springs back to its default, like a pitch wheel.
    Wheel,
    /// Springs back to its default when the input is released.
    ReturnToCenter,
}

impl ControlType {
    /// The release policy for this control type.
    pub fn behavior(self) -> ControlBehavior {
        ControlBehavior::from(self)
    }
}

/// Configuration of one addressable control.
///
/// # Example
///
/// ```
/// use faderbank_curves::CurveType;
/// use faderbank_engine::{ControlConfig, ControlType};
///
/// let config = ControlConfig::new("/synth/pitch")
///     .with_range(0, 100)
///     .with_default(50)
///     .with_smooth_time(0.25)
///     .with_curve(CurveType::Logarithmic)
///     .with_control_type(ControlType::Wheel);
///
/// let range = config.validate()?;
/// assert_eq!(range.max(), 100);
/// # Ok::<(), faderbank_errors::FaderError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Protocol destination, e.g. an OSC address.
    pub address: String,
    /// Inclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
    /// Initial value and spring-back target.
    pub default_value: i32,
    /// Seconds to traverse the full range. Zero or less disables smoothing.
    #[serde(default)]
    pub smooth_time: f32,
    /// Response curve applied before transmitting.
    #[serde(default)]
    pub curve_type: CurveType,
    /// Release policy.
    #[serde(default)]
    pub control_type: ControlType,
}

impl ControlConfig {
    /// A linear, unsmoothed control over the default controller range,
    /// resting at its minimum.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            min: MIN_CONTROLLER_VALUE,
            max: MAX_CONTROLLER_VALUE,
            default_value: MIN_CONTROLLER_VALUE,
            smooth_time: 0.0,
            curve_type: CurveType::Linear,
            control_type: ControlType::Normal,
        }
    }

    /// Set the inclusive range.
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default_value: i32) -> Self {
        self.default_value = default_value;
        self
    }

    /// Set the smoothing time in seconds.
    pub fn with_smooth_time(mut self, smooth_time: f32) -> Self {
        self.smooth_time = smooth_time;
        self
    }

    /// Set the response curve.
    pub fn with_curve(mut self, curve_type: CurveType) -> Self {
        self.curve_type = curve_type;
        self
    }

    /// Set the release policy.
    pub fn with_control_type(mut self, control_type: ControlType) -> Self {
        self.control_type = control_type;
        self
    }

    /// Check the configuration and return its value range.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Required`] for an empty address
    /// - [`ValidationError::InvalidRange`] when `max <= min`
    /// - [`ValidationError::OutOfRange`] when the default lies outside the range
    /// - [`ValidationError::NonFinite`] for a NaN or infinite smoothing time
    pub fn validate(&self) -> Result<ValueRange> {
        if self.address.trim().is_empty() {
            return Err(ValidationError::required("address").into());
        }

        let range = ValueRange::new(self.min, self.max).map_err(|e| match e {
            CurveError::InvalidRange { min, max } => ValidationError::invalid_range("range", min, max),
        })?;

        if !range.contains(self.default_value) {
            return Err(ValidationError::out_of_range(
                "default_value",
                self.default_value,
                self.min,
                self.max,
            )
            .into());
        }

        if !self.smooth_time.is_finite() {
            return Err(ValidationError::non_finite("smooth_time", self.smooth_time).into());
        }

        Ok(range)
    }
}

/// A controller must transmit a change at least once.
pub(crate) fn validate_grace_ticks(grace_ticks: u32) -> Result<()> {
    if grace_ticks == 0 {
        return Err(ValidationError::out_of_range("grace_ticks", 0, 1, u32::MAX).into());
    }
    Ok(())
}

/// Settings shared by every control in a bank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankSettings {
    /// Idle ticks a settled value keeps being sent for.
    pub grace_ticks: u32,
    /// Prepended to every control address when the bank binds it.
    pub address_prefix: Option<String>,
}

impl Default for BankSettings {
    fn default() -> Self {
        Self {
            grace_ticks: faderbank_filters::DUPLICATE_GRACE_TICKS,
            address_prefix: None,
        }
    }
}

impl BankSettings {
    /// Check the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `grace_ticks` is zero.
    pub fn validate(&self) -> Result<()> {
        validate_grace_ticks(self.grace_ticks)
    }

    /// The address a control is sent to once the prefix is applied.
    pub fn resolve_address(&self, address: &str) -> String {
        match &self.address_prefix {
            Some(prefix) => format!("{prefix}{address}"),
            None => address.to_string(),
        }
    }
}
