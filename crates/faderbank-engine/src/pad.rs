//! Two-axis pad.

use faderbank_errors::Result;

use crate::axis::{AxisController, TickOutcome};
use crate::config::ControlConfig;
use crate::transport::Transport;

/// Outcome of ticking both axes of a pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadTickOutcome {
    /// Horizontal axis outcome.
    pub horizontal: TickOutcome,
    /// Vertical axis outcome.
    pub vertical: TickOutcome,
}

/// An XY pad made of two independent axes.
///
/// Each axis has its own configuration, address and smoothing. The pad only
/// fans input out to both and ticks them horizontal first.
#[derive(Clone, Debug)]
pub struct XyPad {
    horizontal: AxisController,
    vertical: AxisController,
}

impl XyPad {
    /// Bind both axes.
    ///
    /// # Errors
    ///
    /// Fails if either configuration is invalid.
    pub fn new(horizontal: ControlConfig, vertical: ControlConfig) -> Result<Self> {
        Ok(Self {
            horizontal: AxisController::new(horizontal)?,
            vertical: AxisController::new(vertical)?,
        })
    }

    /// Build a pad from already bound axes.
    pub fn from_axes(horizontal: AxisController, vertical: AxisController) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Horizontal axis.
    pub fn horizontal(&self) -> &AxisController {
        &self.horizontal
    }

    /// Vertical axis.
    pub fn vertical(&self) -> &AxisController {
        &self.vertical
    }

    /// Mutable horizontal axis.
    pub fn horizontal_mut(&mut self) -> &mut AxisController {
        &mut self.horizontal
    }

    /// Mutable vertical axis.
    pub fn vertical_mut(&mut self) -> &mut AxisController {
        &mut self.vertical
    }

    /// Set both targets, each clamped into its own range.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.horizontal.set_target(x);
        self.vertical.set_target(y);
    }

    /// Set both targets as fractions of their ranges.
    pub fn set_position_percentage(&mut self, x: f32, y: f32) {
        self.horizontal.set_target_percentage(x);
        self.vertical.set_target_percentage(y);
    }

    /// Smoothed position as `(x, y)`.
    pub fn position(&self) -> (f32, f32) {
        (self.horizontal.smooth_value(), self.vertical.smooth_value())
    }

    /// Press both axes.
    pub fn press(&mut self) {
        self.horizontal.press();
        self.vertical.press();
    }

    /// Release both axes.
    pub fn release(&mut self) {
        self.horizontal.release();
        self.vertical.release();
    }

    /// Tick both axes, horizontal first.
    pub fn tick<T: Transport + ?Sized>(&mut self, dt: f32, transport: &mut T) -> PadTickOutcome {
        let horizontal = self.horizontal.tick(dt, transport);
        let vertical = self.vertical.tick(dt, transport);
        PadTickOutcome {
            horizontal,
            vertical,
        }
    }

    /// Return both axes to their bound state.
    pub fn reset(&mut self) {
        self.horizontal.reset();
        self.vertical.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlType;
    use faderbank_filters::same_value;
    use faderbank_test_helpers::must;

    #[derive(Default)]
    struct Recorder(Vec<(String, i32)>);

    impl Transport for Recorder {
        fn is_connected(&self) -> bool {
            true
        }

        fn send(&mut self, address: &str, value: i32) {
            self.0.push((address.to_string(), value));
        }
    }

    fn pad() -> XyPad {
        let x = ControlConfig::new("/pad/x")
            .with_range(-64, 63)
            .with_control_type(ControlType::ReturnToCenter);
        let y = ControlConfig::new("/pad/y").with_range(0, 127);
        must(XyPad::new(x, y))
    }

    #[test]
    fn test_new_rejects_invalid_axis() {
        let x = ControlConfig::new("/x");
        let y = ControlConfig::new("").with_range(0, 1);
        assert!(XyPad::new(x, y).is_err());
    }

    #[test]
    fn test_ticks_horizontal_first() {
        let mut p = pad();
        let mut transport = Recorder::default();
        p.set_position(10.0, 20.0);

        let outcome = p.tick(0.016, &mut transport);

        assert_eq!(outcome.horizontal, TickOutcome::Sent(10));
        assert_eq!(outcome.vertical, TickOutcome::Sent(20));
        assert_eq!(
            transport.0,
            vec![("/pad/x".to_string(), 10), ("/pad/y".to_string(), 20)]
        );
    }

    #[test]
    fn test_position_is_clamped_per_axis() {
        let mut p = pad();
        p.set_position(100.0, -1.0);
        assert!(same_value(p.horizontal().target_value(), 63.0));
        assert!(same_value(p.vertical().target_value(), 0.0));
    }

    #[test]
    fn test_position_percentage() {
        let mut p = pad();
        let mut transport = Recorder::default();
        p.set_position_percentage(1.0, 1.0);
        p.tick(0.016, &mut transport);
        let (x, y) = p.position();
        assert!(same_value(x, 63.0));
        assert!(same_value(y, 127.0));
    }

    #[test]
    fn test_release_only_springs_configured_axes() {
        let mut p = pad();
        p.set_position(40.0, 90.0);
        p.release();
        assert!(same_value(p.horizontal().target_value(), 0.0));
        assert!(same_value(p.vertical().target_value(), 90.0));
    }
}
