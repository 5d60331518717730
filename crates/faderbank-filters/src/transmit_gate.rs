//! Duplicate Suppression
//!
//! This module decides, once per tick, whether a control's value should be
//! transmitted. Moving values are always sent. Once a value settles it keeps
//! being sent for a fixed number of idle ticks to cover packet loss, then goes
//! quiet until it moves again.

use crate::smoothing::SmoothedValue;

/// Idle ticks a settled value is still transmitted for.
pub const DUPLICATE_GRACE_TICKS: u32 = 10;

/// Duplicate-suppression state for one control.
///
/// The idle counter saturates at the grace window, so a control that stays
/// still forever never overflows back into sending.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransmitGate {
    grace_ticks: u32,
    idle_ticks: u32,
}

impl TransmitGate {
    /// Create a gate with the default grace window of
    /// [`DUPLICATE_GRACE_TICKS`].
    ///
    /// The gate starts saturated: nothing is sent until the value first moves.
    ///
    /// # Example
    ///
    /// ```
    /// use faderbank_filters::TransmitGate;
    ///
    /// let mut gate = TransmitGate::new();
    /// assert!(!gate.should_send(false));
    /// assert!(gate.should_send(true));
    /// ```
    pub fn new() -> Self {
        Self::with_grace(DUPLICATE_GRACE_TICKS)
    }

    /// Create a gate with a custom grace window.
    ///
    /// Zero is raised to one tick here. Controllers reject a zero window when
    /// they are bound, so only direct users of the gate see the raise.
    pub fn with_grace(grace_ticks: u32) -> Self {
        let grace_ticks = grace_ticks.max(1);
        Self {
            grace_ticks,
            idle_ticks: grace_ticks,
        }
    }

    /// Length of the grace window in ticks.
    pub fn grace_ticks(&self) -> u32 {
        self.grace_ticks
    }

    /// Consecutive ticks without a change, saturated at the grace window.
    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    /// Whether the grace window has run out.
    pub fn is_quiet(&self) -> bool {
        self.idle_ticks >= self.grace_ticks
    }

    /// Record one tick and report whether it should transmit.
    ///
    /// A change resets the idle count; otherwise it grows by one up to the
    /// grace window.
    #[inline]
    pub fn should_send(&mut self, changed: bool) -> bool {
        if changed {
            self.idle_ticks = 0;
        } else if self.idle_ticks < self.grace_ticks {
            self.idle_ticks += 1;
        }
        !self.is_quiet()
    }
}

impl Default for TransmitGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate a freshly advanced value.
///
/// Must be called once per tick, right after the value was advanced, so that
/// `current` and `previous` describe this tick's movement.
///
/// # Example
///
/// ```
/// use faderbank_curves::ValueRange;
/// use faderbank_filters::prelude::*;
///
/// let range = ValueRange::new(0, 100)?;
/// let mut value = SmoothedValue::new(0.0);
/// let mut gate = TransmitGate::new();
///
/// value.set_target(100.0, range);
/// value.advance(range, 0.0, 0.016);
/// assert!(transmit_gate(&value, &mut gate));
/// # Ok::<(), faderbank_curves::CurveError>(())
/// ```
#[inline]
pub fn transmit_gate(value: &SmoothedValue, gate: &mut TransmitGate) -> bool {
    gate.should_send(value.has_changed())
}
