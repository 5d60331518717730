//! Constant-rate value smoothing
//!
//! This module moves a control's current value toward its target at a rate
//! that traverses the full range in `smooth_time` seconds, independent of
//! where the value starts or which way it travels.

use faderbank_curves::ValueRange;
use serde::{Deserialize, Serialize};

/// Exact float comparison.
///
/// Smoothing snaps onto the target instead of approaching it asymptotically,
/// so settled values compare equal bit-for-bit.
#[inline]
#[expect(
    clippy::float_cmp,
    reason = "settled values are assigned from the target, never computed"
)]
pub fn same_value(a: f32, b: f32) -> bool {
    a == b
}

/// Smoothed value state for one control axis.
///
/// Holds the value shown to the user (`current`), the value from the prior
/// tick (`previous`, kept only for change detection) and the value being
/// approached (`target`).
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmoothedValue {
    /// Smoothed, user-visible value.
    pub current: f32,
    /// Value at the prior tick.
    pub previous: f32,
    /// Value `current` is advancing toward.
    pub target: f32,
}

impl SmoothedValue {
    /// Create a state resting at `initial`.
    ///
    /// # Example
    ///
    /// ```
    /// use faderbank_filters::SmoothedValue;
    ///
    /// let value = SmoothedValue::new(64.0);
    /// assert!(value.is_settled());
    /// assert!(!value.has_changed());
    /// ```
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            previous: initial,
            target: initial,
        }
    }

    /// Create a state resting at `initial` clamped into `range`.
    pub fn within(range: ValueRange, initial: f32) -> Self {
        Self::new(range.clamp(initial))
    }

    /// Store a new target, clamped into `range`. NaN clamps to the range minimum.
    pub fn set_target(&mut self, target: f32, range: ValueRange) {
        self.target = range.clamp(target);
    }

    /// Whether the current value has reached the target.
    pub fn is_settled(&self) -> bool {
        same_value(self.current, self.target)
    }

    /// Whether the last advance moved the value.
    pub fn has_changed(&self) -> bool {
        !same_value(self.current, self.previous)
    }

    /// Advance one tick. See [`advance_smoothed`].
    #[inline]
    pub fn advance(&mut self, range: ValueRange, smooth_time: f32, dt: f32) -> f32 {
        advance_smoothed(self, range, smooth_time, dt)
    }
}

/// How far a single tick may move the value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// Jump straight to the target.
    Snap,
    /// Stay put this tick.
    Hold,
    /// Move at most this far toward the target.
    Move(f32),
}

/// Per-tick step for a range traversed in `smooth_time` seconds.
///
/// - `smooth_time <= 0` (or NaN) snaps.
/// - A non-finite or non-positive `dt` holds, so a broken clock never moves a
///   control.
/// - A step that overflows to infinity snaps.
///
/// # Example
///
/// ```
/// use faderbank_curves::ValueRange;
/// use faderbank_filters::{Step, smoothing_step};
///
/// let range = ValueRange::new(0, 100)?;
/// assert_eq!(smoothing_step(range, 1.0, 0.1), Step::Move(10.0));
/// assert_eq!(smoothing_step(range, 0.0, 0.1), Step::Snap);
/// assert_eq!(smoothing_step(range, 1.0, f32::NAN), Step::Hold);
/// # Ok::<(), faderbank_curves::CurveError>(())
/// ```
#[inline]
pub fn smoothing_step(range: ValueRange, smooth_time: f32, dt: f32) -> Step {
    if smooth_time.is_nan() || smooth_time <= 0.0 {
        return Step::Snap;
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Step::Hold;
    }

    let step = range.span_f32() * dt / smooth_time;
    if step.is_finite() {
        Step::Move(step)
    } else {
        Step::Snap
    }
}

/// Advance `state.current` one tick toward `state.target`.
///
/// `previous` always takes the old `current`, even when nothing moves, so a
/// tick without movement reads as unchanged. The value never overshoots: when
/// the remaining distance is shorter than one step it lands exactly on the
/// target.
///
/// Returns the new current value.
///
/// # Example
///
/// ```
/// use faderbank_curves::ValueRange;
/// use faderbank_filters::prelude::*;
///
/// let range = ValueRange::new(0, 100)?;
/// let mut value = SmoothedValue::new(50.0);
/// value.set_target(100.0, range);
///
/// assert!((advance_smoothed(&mut value, range, 1.0, 0.1) - 60.0).abs() < 1e-6);
/// assert!(value.has_changed());
/// # Ok::<(), faderbank_curves::CurveError>(())
/// ```
#[inline]
pub fn advance_smoothed(
    state: &mut SmoothedValue,
    range: ValueRange,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    state.previous = state.current;

    if state.is_settled() {
        return state.current;
    }

    match smoothing_step(range, smooth_time, dt) {
        Step::Snap => state.current = state.target,
        Step::Hold => {}
        Step::Move(step) => {
            let distance = state.target - state.current;
            if distance.abs() < step {
                state.current = state.target;
            } else if distance > 0.0 {
                state.current = range.clamp(state.current + step);
            } else {
                state.current = range.clamp(state.current - step);
            }
        }
    }

    state.current
}
