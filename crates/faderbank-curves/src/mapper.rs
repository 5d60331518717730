//! Curve mapping over an integer range.
//!
//! [`map_value`] is the single mapping routine shared by every control type.
//! Results are truncated toward zero, so a value of `48.99` maps to `48` and
//! `-0.25` maps to `0`.

use serde::{Deserialize, Serialize};

use crate::curve_type::{CurveDirection, CurveType};
use crate::range::ValueRange;

/// Truncate toward zero into an `i32`.
///
/// Saturates at the `i32` bounds; NaN becomes `0`.
#[inline]
pub fn truncate_to_int(value: f32) -> i32 {
    value as i32
}

/// Map `value` through `curve` over `range`.
///
/// - `Linear` truncates the value as-is and ignores `direction`.
/// - Other curves compute the value's ratio within the range, clamp it to
///   `[0,1]`, shape it, and scale it back into the range before truncating.
///
/// # Example
///
/// ```
/// use faderbank_curves::{CurveDirection, CurveType, ValueRange, map_value};
///
/// let range = ValueRange::new(0, 100)?;
/// assert_eq!(map_value(70.0, CurveType::Logarithmic, range, CurveDirection::Inverse), 48);
/// assert_eq!(map_value(99.9, CurveType::Linear, range, CurveDirection::Forward), 99);
/// # Ok::<(), faderbank_curves::CurveError>(())
/// ```
#[inline]
pub fn map_value(
    value: f32,
    curve: CurveType,
    range: ValueRange,
    direction: CurveDirection,
) -> i32 {
    if curve.is_linear() {
        return truncate_to_int(value);
    }

    let ratio = range.ratio(value);
    let shaped = curve.shape(ratio, direction);
    truncate_to_int(shaped * range.span_f32() + range.min() as f32)
}

/// A curve bound to the range it maps over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveMapper {
    curve: CurveType,
    range: ValueRange,
}

impl CurveMapper {
    /// Bind a curve to a range.
    pub fn new(curve: CurveType, range: ValueRange) -> Self {
        Self { curve, range }
    }

    /// The bound curve.
    pub fn curve(&self) -> CurveType {
        self.curve
    }

    /// The bound range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Map in the given direction.
    #[inline]
    pub fn map(&self, value: f32, direction: CurveDirection) -> i32 {
        map_value(value, self.curve, self.range, direction)
    }

    /// Internal value to transmitted value.
    #[inline]
    pub fn forward(&self, value: f32) -> i32 {
        self.map(value, CurveDirection::Forward)
    }

    /// Nominal value to the raw value that forward-maps onto it.
    #[inline]
    pub fn inverse(&self, value: f32) -> i32 {
        self.map(value, CurveDirection::Inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faderbank_test_helpers::must;

    fn range(min: i32, max: i32) -> ValueRange {
        must(ValueRange::new(min, max))
    }

    #[test]
    fn test_linear_truncates_and_ignores_direction() {
        let mapper = CurveMapper::new(CurveType::Linear, range(0, 100));
        assert_eq!(mapper.forward(42.9), 42);
        assert_eq!(mapper.inverse(42.9), 42);
        assert_eq!(mapper.forward(-3.7), -3);
    }

    #[test]
    fn test_linear_does_not_clamp() {
        let mapper = CurveMapper::new(CurveType::Linear, range(0, 100));
        assert_eq!(mapper.forward(150.0), 150);
    }

    #[test]
    fn test_wheel_default_inverse() {
        let mapper = CurveMapper::new(CurveType::Logarithmic, range(0, 100));
        assert_eq!(mapper.inverse(50.0), 25);
        assert_eq!(mapper.forward(25.0), 50);
    }

    #[test]
    fn test_exponential_default_inverse() {
        let mapper = CurveMapper::new(CurveType::Exponential, range(0, 100));
        assert_eq!(mapper.inverse(25.0), 50);
        assert_eq!(mapper.forward(50.0), 25);
    }

    #[test]
    fn test_truncation_not_rounding() {
        let mapper = CurveMapper::new(CurveType::Logarithmic, range(0, 100));
        // 0.7^2 * 100 lands just under 49
        assert_eq!(mapper.inverse(70.0), 48);
        // sqrt(0.1) * 100 = 31.62
        assert_eq!(mapper.forward(10.0), 31);
    }

    #[test]
    fn test_truncation_toward_zero_for_negative_ranges() {
        let mapper = CurveMapper::new(CurveType::Logarithmic, range(-64, 63));
        // sqrt(32/127) * 127 - 64 = -0.25
        assert_eq!(mapper.forward(-32.0), 0);
    }

    #[test]
    fn test_out_of_range_input_is_clamped_for_curves() {
        let mapper = CurveMapper::new(CurveType::Exponential, range(0, 127));
        assert_eq!(mapper.forward(-20.0), 0);
        assert_eq!(mapper.forward(500.0), 127);
    }

    #[test]
    fn test_endpoints_map_to_bounds() {
        for curve in CurveType::ALL {
            let mapper = CurveMapper::new(curve, range(-10, 245));
            for direction in [CurveDirection::Forward, CurveDirection::Inverse] {
                assert_eq!(mapper.map(-10.0, direction), -10, "{curve:?}");
                assert_eq!(mapper.map(245.0, direction), 245, "{curve:?}");
            }
        }
    }

    #[test]
    fn test_truncate_saturates() {
        assert_eq!(truncate_to_int(f32::NAN), 0);
        assert_eq!(truncate_to_int(f32::INFINITY), i32::MAX);
        assert_eq!(truncate_to_int(-0.9), 0);
    }
}
