//! Filter State Types
//!
//! This module aggregates the per-control filter states and the reset trait
//! they share.

pub use crate::smoothing::SmoothedValue;
pub use crate::transmit_gate::TransmitGate;

/// Filter trait for common filter operations.
///
/// All filters implement this trait for consistent interface.
pub trait FilterState: Copy + Clone + std::fmt::Debug {
    /// Reset the filter state to its resting values.
    fn reset(&mut self);
}

impl FilterState for SmoothedValue {
    /// Settle in place: the target and previous value take the current value.
    fn reset(&mut self) {
        self.previous = self.current;
        self.target = self.current;
    }
}

impl FilterState for TransmitGate {
    /// Saturate the idle counter so nothing is sent until the value moves.
    fn reset(&mut self) {
        *self = TransmitGate::with_grace(self.grace_ticks());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::same_value;

    #[test]
    fn test_smoothed_value_reset_settles_in_place() {
        let mut value = SmoothedValue {
            current: 30.0,
            previous: 20.0,
            target: 90.0,
        };
        value.reset();
        assert!(same_value(value.current, 30.0));
        assert!(value.is_settled());
        assert!(!value.has_changed());
    }

    #[test]
    fn test_gate_reset_keeps_grace_and_goes_quiet() {
        let mut gate = TransmitGate::with_grace(4);
        gate.should_send(true);
        gate.reset();
        assert_eq!(gate.grace_ticks(), 4);
        assert!(gate.is_quiet());
        assert!(!gate.should_send(false));
    }
}
