//! Property-Based Tests for Filters
//!
//! This module contains property tests that verify smoothing and gating
//! behavior across a wide range of inputs.

use faderbank_curves::ValueRange;
use faderbank_filters::prelude::*;

fn range_from(min: i32, span: i32) -> Option<ValueRange> {
    ValueRange::new(min, min.checked_add(span)?).ok()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_positive_smooth_time_snaps_in_one_tick(
            min in -1000i32..1000,
            span in 1i32..1000,
            start in 0.0f32..=1.0,
            target in 0.0f32..=1.0,
            smooth_time in -10.0f32..=0.0,
            dt in 0.0001f32..1.0,
        ) {
            let Some(range) = range_from(min, span) else {
                return Ok(());
            };
            let mut value = SmoothedValue::new(range.lerp(start));
            value.set_target(range.lerp(target), range);

            advance_smoothed(&mut value, range, smooth_time, dt);

            prop_assert!(value.is_settled());
        }

        #[test]
        fn smoothing_reaches_target_without_overshoot(
            min in -1000i32..1000,
            span in 10i32..1000,
            start in 0.0f32..=1.0,
            target in 0.0f32..=1.0,
            smooth_time in 0.05f32..5.0,
            dt in 0.001f32..0.1,
        ) {
            let Some(range) = range_from(min, span) else {
                return Ok(());
            };
            let mut value = SmoothedValue::new(range.lerp(start));
            value.set_target(range.lerp(target), range);
            let goal = value.target;

            // Full traversal takes smooth_time / dt ticks; allow slack for rounding.
            let budget = 2 * (smooth_time / dt).ceil() as usize + 2;
            let mut distance = (value.current - goal).abs();
            for _ in 0..budget {
                advance_smoothed(&mut value, range, smooth_time, dt);
                let next = (value.current - goal).abs();
                prop_assert!(next <= distance, "moved away: {next} > {distance}");
                prop_assert!(value.current >= range.min() as f32);
                prop_assert!(value.current <= range.max() as f32);
                distance = next;
                if value.is_settled() {
                    break;
                }
            }
            prop_assert!(value.is_settled());
        }

        #[test]
        fn first_step_covers_span_per_smooth_time(
            min in -100i32..100,
            span in 10i32..1000,
            smooth_time in 0.1f32..5.0,
            dt in 0.001f32..0.05,
        ) {
            let Some(range) = range_from(min, span) else {
                return Ok(());
            };
            let mut value = SmoothedValue::new(range.min() as f32);
            value.set_target(range.max() as f32, range);

            advance_smoothed(&mut value, range, smooth_time, dt);

            let step = range.span_f32() * dt / smooth_time;
            prop_assume!(step < range.span_f32());
            let moved = value.current - range.min() as f32;
            prop_assert!(
                approx::abs_diff_eq!(moved, step, epsilon = 1e-3),
                "moved {} expected {}", moved, step
            );
        }

        #[test]
        fn settled_value_is_idempotent(
            start in 0.0f32..=1.0,
            smooth_time in -1.0f32..5.0,
            dt in -1.0f32..1.0,
            ticks in 1usize..50,
        ) {
            let range = ValueRange::new(0, 127).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let mut value = SmoothedValue::new(range.lerp(start));
            let before = value.current;
            for _ in 0..ticks {
                advance_smoothed(&mut value, range, smooth_time, dt);
            }
            prop_assert!(same_value(value.current, before));
            prop_assert!(!value.has_changed());
        }

        #[test]
        fn gate_sends_exactly_grace_ticks_after_change(grace in 1u32..50, idle in 0usize..200) {
            let mut gate = TransmitGate::with_grace(grace);
            let mut sent = usize::from(gate.should_send(true));
            for _ in 0..idle {
                sent += usize::from(gate.should_send(false));
            }
            let expected = (grace as usize).min(idle + 1);
            prop_assert_eq!(sent, expected);
            prop_assert!(gate.idle_ticks() <= grace);
        }
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn sanitize_f32(v: f32) -> f32 {
        if v.is_nan() {
            0.5
        } else if v.is_infinite() {
            if v > 0.0 { 1.0 } else { 0.0 }
        } else {
            v
        }
    }

    #[quickcheck]
    fn prop_current_stays_in_range(target: f32, dt: f32, smooth_time: f32) -> TestResult {
        let Ok(range) = ValueRange::new(-64, 63) else {
            return TestResult::discard();
        };
        let mut value = SmoothedValue::new(0.0);
        value.set_target(sanitize_f32(target), range);
        for _ in 0..20 {
            advance_smoothed(&mut value, range, sanitize_f32(smooth_time), sanitize_f32(dt));
            if value.current < -64.0 || value.current > 63.0 {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    #[quickcheck]
    fn prop_gate_never_sends_without_change(grace: u8, ticks: u8) -> bool {
        let mut gate = TransmitGate::with_grace(u32::from(grace));
        (0..ticks).all(|_| !gate.should_send(false))
    }

    #[quickcheck]
    fn prop_reset_gate_is_quiet(grace: u8, changes: Vec<bool>) -> bool {
        let mut gate = TransmitGate::with_grace(u32::from(grace));
        for changed in changes {
            gate.should_send(changed);
        }
        gate.reset();
        gate.is_quiet() && !gate.should_send(false)
    }
}
