//! Release policies.
//!
//! A control's behavior decides what happens to its target when the user lets
//! go. Spring-back targets are inverse-mapped through the control's curve so
//! that, once forward-mapped for sending, the transmitted value equals the
//! configured default.

use faderbank_curves::CurveMapper;

use crate::config::ControlType;

/// Response to press and release events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ControlBehavior {
    /// Release leaves the target alone.
    #[default]
    Normal,
    /// Release springs the target back to the default.
    Wheel,
    /// Release springs the target back to the default.
    ///
    /// Same arithmetic as [`ControlBehavior::Wheel`]; kept separate because
    /// the two controls differ in input affordance.
    ReturnToCenter,
}

impl From<ControlType> for ControlBehavior {
    fn from(control_type: ControlType) -> Self {
        match control_type {
            ControlType::Normal => ControlBehavior::Normal,
            ControlType::Wheel => ControlBehavior::Wheel,
            ControlType::ReturnToCenter => ControlBehavior::ReturnToCenter,
        }
    }
}

impl ControlBehavior {
    /// Whether release moves the target.
    pub fn springs_back(self) -> bool {
        match self {
            ControlBehavior::Normal => false,
            ControlBehavior::Wheel | ControlBehavior::ReturnToCenter => true,
        }
    }

    /// New target after a release, or `None` when the target is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use faderbank_curves::{CurveMapper, CurveType, ValueRange};
    /// use faderbank_engine::ControlBehavior;
    ///
    /// let mapper = CurveMapper::new(CurveType::Logarithmic, ValueRange::new(0, 100)?);
    /// assert_eq!(ControlBehavior::Wheel.on_release(&mapper, 50), Some(25.0));
    /// assert_eq!(ControlBehavior::Normal.on_release(&mapper, 50), None);
    /// # Ok::<(), faderbank_curves::CurveError>(())
    /// ```
    pub fn on_release(self, mapper: &CurveMapper, default_value: i32) -> Option<f32> {
        if !self.springs_back() {
            return None;
        }
        Some(mapper.inverse(default_value as f32) as f32)
    }

    /// New target after a press. No current behavior reacts to presses.
    pub fn on_press(self) -> Option<f32> {
        None
    }
}
