//! Property-Based Tests for Axis Controllers
//!
//! Checks the controller contract over arbitrary configurations: values stay
//! in range, untouched controls stay silent, and a settled change is sent for
//! exactly the grace window.

use faderbank_engine::prelude::*;
use faderbank_test_helpers::prelude::*;
use proptest::prelude::*;

fn curve() -> impl Strategy<Value = CurveType> {
    prop_oneof![
        Just(CurveType::Linear),
        Just(CurveType::Logarithmic),
        Just(CurveType::Exponential),
    ]
}

fn config(min: i32, span: i32, default_ratio: f32, smooth_time: f32, curve: CurveType) -> ControlConfig {
    let max = min + span;
    let default_value = min + (span as f32 * default_ratio) as i32;
    ControlConfig::new("/prop")
        .with_range(min, max)
        .with_default(default_value.clamp(min, max))
        .with_smooth_time(smooth_time)
        .with_curve(curve)
}

proptest! {
    #[test]
    fn untouched_controller_never_sends(
        min in -1000i32..1000,
        span in 1i32..2000,
        default_ratio in 0.0f32..=1.0,
        smooth_time in 0.0f32..2.0,
        curve in curve(),
        dt in 0.001f32..0.1,
    ) {
        let mut axis = must(AxisController::new(config(min, span, default_ratio, smooth_time, curve)));
        let mut transport = MockTransport::connected();

        for _ in 0..30 {
            prop_assert_eq!(axis.tick(dt, &mut transport), TickOutcome::Quiet);
        }
        prop_assert!(transport.is_empty());
    }

    #[test]
    fn values_stay_in_range(
        min in -1000i32..1000,
        span in 1i32..2000,
        default_ratio in 0.0f32..=1.0,
        smooth_time in 0.0f32..2.0,
        curve in curve(),
        input in proptest::num::f32::ANY,
        dt in 0.001f32..0.1,
    ) {
        let mut axis = must(AxisController::new(config(min, span, default_ratio, smooth_time, curve)));
        let mut transport = MockTransport::connected();

        axis.set_target(input);
        let range = axis.range();
        prop_assert!(axis.target_value() >= range.min() as f32);
        prop_assert!(axis.target_value() <= range.max() as f32);

        for _ in 0..20 {
            axis.tick(dt, &mut transport);
            prop_assert!(axis.smooth_value() >= range.min() as f32);
            prop_assert!(axis.smooth_value() <= range.max() as f32);
        }
        for value in transport.values() {
            prop_assert!(range.contains(value), "{} outside {:?}", value, range);
        }
    }

    #[test]
    fn snapped_change_is_sent_for_the_grace_window(
        min in -1000i32..1000,
        span in 1i32..2000,
        default_ratio in 0.0f32..=1.0,
        target_ratio in 0.0f32..=1.0,
        grace in 1u32..20,
    ) {
        let config = config(min, span, default_ratio, 0.0, CurveType::Linear);
        let default_value = config.default_value as f32;
        let mut axis = must(AxisController::with_grace(config, grace));
        let target = axis.range().lerp(target_ratio);
        prop_assume!((target - default_value).abs() > f32::EPSILON);

        let mut transport = MockTransport::connected();
        axis.set_target(target);
        for _ in 0..(grace + 10) {
            axis.tick(0.016, &mut transport);
        }

        prop_assert_eq!(transport.len(), grace as usize);
        let first = transport.values().first().copied();
        prop_assert!(transport.values().iter().all(|v| Some(*v) == first));
    }

    #[test]
    fn disconnected_transport_never_receives(
        span in 1i32..500,
        target_ratio in 0.0f32..=1.0,
        smooth_time in 0.0f32..1.0,
    ) {
        let mut axis = must(AxisController::new(config(0, span, 0.0, smooth_time, CurveType::Linear)));
        let mut transport = MockTransport::disconnected();

        axis.set_target_percentage(target_ratio);
        for _ in 0..50 {
            prop_assert!(!axis.tick(0.05, &mut transport).is_sent());
        }
        prop_assert!(transport.is_empty());
        prop_assert_eq!(axis.latest_sent_value(), None);
    }

    #[test]
    fn linear_wheel_returns_to_default(
        min in -1000i32..1000,
        span in 1i32..2000,
        default_ratio in 0.0f32..=1.0,
        target_ratio in 0.0f32..=1.0,
    ) {
        let config = config(min, span, default_ratio, 0.0, CurveType::Linear)
            .with_control_type(ControlType::Wheel);
        let default_value = config.default_value;
        let mut axis = must(AxisController::new(config));
        let mut transport = MockTransport::connected();

        axis.set_target_percentage(target_ratio);
        axis.tick(0.016, &mut transport);
        axis.release();
        axis.tick(0.016, &mut transport);

        prop_assert_eq!(axis.mapped_value(), default_value);
    }
}
