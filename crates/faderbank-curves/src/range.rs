//! Inclusive integer value ranges.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Inclusive integer range `[min, max]` with `max > min`.
///
/// Construction validates the bounds, so every `ValueRange` has a
/// strictly positive span and ratios are always defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct ValueRange {
    min: i32,
    max: i32,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    min: i32,
    max: i32,
}

impl TryFrom<RawRange> for ValueRange {
    type Error = CurveError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        ValueRange::new(raw.min, raw.max)
    }
}

impl From<ValueRange> for RawRange {
    fn from(range: ValueRange) -> Self {
        RawRange {
            min: range.min,
            max: range.max,
        }
    }
}

impl ValueRange {
    /// Create a range, rejecting empty or inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidRange`] when `max <= min`.
    pub fn new(min: i32, max: i32) -> Result<Self, CurveError> {
        if max <= min {
            return Err(CurveError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// `max - min`, computed without overflow.
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }

    /// Span as a float, for curve arithmetic.
    pub fn span_f32(&self) -> f32 {
        self.span() as f32
    }

    /// Whether an integer value lies inside the range.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp a float into `[min, max]`. NaN clamps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min as f32;
        }
        value.clamp(self.min as f32, self.max as f32)
    }

    /// Position of `value` within the range, `0` at `min` and `1` at `max`.
    ///
    /// Values outside the range produce ratios outside `[0,1]`.
    pub fn ratio(&self, value: f32) -> f32 {
        (value - self.min as f32) / self.span_f32()
    }

    /// Linear interpolation from `min` to `max`, with `t` clamped to `[0,1]`.
    pub fn lerp(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.min as f32 + self.span_f32() * t
    }
}
