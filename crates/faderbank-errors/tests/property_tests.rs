//! Property-based tests for error classification and messages.

use faderbank_errors::{
    common::{ErrorCategory, ErrorSeverity, FaderError},
    validation::ValidationError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_error_severity_ordering(a in 0u8..=3, b in 0u8..=3) {
        let to_severity = |v: u8| match v {
            0 => ErrorSeverity::Info,
            1 => ErrorSeverity::Warning,
            2 => ErrorSeverity::Error,
            _ => ErrorSeverity::Critical,
        };

        prop_assert_eq!(a.cmp(&b), to_severity(a).cmp(&to_severity(b)));
    }

    #[test]
    fn test_invalid_range_reports_bounds(min in -10_000i32..10_000, shortfall in 0i32..100) {
        let max = min - shortfall;
        let err = ValidationError::invalid_range("range", min, max);
        let msg = err.to_string();
        prop_assert!(msg.contains(&min.to_string()));
        prop_assert!(msg.contains(&max.to_string()));
    }

    #[test]
    fn test_validation_converts_to_validation_category(field in "[a-z_]{1,16}") {
        let err: FaderError = ValidationError::required(&field).into();
        prop_assert_eq!(err.category(), ErrorCategory::Validation);
        prop_assert!(err.to_string().contains(&field));
    }

    #[test]
    fn test_unknown_control_names_the_id(id in "[a-z_]{1,16}") {
        let err = FaderError::unknown_control(&id);
        prop_assert_eq!(err.category(), ErrorCategory::Control);
        prop_assert!(err.to_string().contains(&id));
        prop_assert!(err.is_recoverable());
    }
}
