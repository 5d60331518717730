//! Supported curve types for control response mapping.

use serde::{Deserialize, Serialize};

/// Direction of a curve evaluation.
///
/// `Forward` turns an internal control value into the value that is
/// transmitted. `Inverse` undoes the forward shaping so a nominal value can
/// be expressed in the raw domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveDirection {
    /// Internal value to transmitted value.
    #[default]
    Forward,
    /// Nominal value to internal value.
    Inverse,
}

impl CurveDirection {
    /// Returns the opposite direction.
    pub fn flip(self) -> Self {
        match self {
            CurveDirection::Forward => CurveDirection::Inverse,
            CurveDirection::Inverse => CurveDirection::Forward,
        }
    }
}

/// Supported response curve shapes.
///
/// Every shape maps the unit interval `[0,1]` onto itself and is monotonic.
/// `Exponential` is the inverse shape of `Logarithmic`: the forward shaping of
/// one is the inverse shaping of the other.
///
/// # Example
///
/// ```
/// use faderbank_curves::{CurveDirection, CurveType};
///
/// let curve = CurveType::Logarithmic;
/// assert!((curve.shape(0.25, CurveDirection::Forward) - 0.5).abs() < 1e-6);
/// assert!((curve.shape(0.5, CurveDirection::Inverse) - 0.25).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveType {
    /// Identity mapping.
    #[default]
    Linear,

    /// Square-root forward shaping, square inverse shaping.
    Logarithmic,

    /// Square forward shaping, square-root inverse shaping.
    Exponential,
}

impl CurveType {
    /// All curve types, in declaration order.
    pub const ALL: [CurveType; 3] = [
        CurveType::Linear,
        CurveType::Logarithmic,
        CurveType::Exponential,
    ];

    /// Whether this curve leaves values unshaped.
    pub fn is_linear(self) -> bool {
        matches!(self, CurveType::Linear)
    }

    /// The curve whose forward shaping equals this curve's inverse shaping.
    pub fn mirrored(self) -> Self {
        match self {
            CurveType::Linear => CurveType::Linear,
            CurveType::Logarithmic => CurveType::Exponential,
            CurveType::Exponential => CurveType::Logarithmic,
        }
    }

    /// Apply the unit-interval shaping function.
    ///
    /// The ratio is clamped to `[0,1]` first; NaN is treated as `0`.
    pub fn shape(self, ratio: f32, direction: CurveDirection) -> f32 {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };

        match (self, direction) {
            (CurveType::Linear, _) => ratio,
            (CurveType::Logarithmic, CurveDirection::Forward)
            | (CurveType::Exponential, CurveDirection::Inverse) => ratio.sqrt(),
            (CurveType::Logarithmic, CurveDirection::Inverse)
            | (CurveType::Exponential, CurveDirection::Forward) => ratio * ratio,
        }
    }
}
