//! Prelude for the curves crate.
//!
//! # Example
//!
//! ```
//! use faderbank_curves::prelude::*;
//!
//! let mapper = CurveMapper::new(CurveType::Exponential, ValueRange::new(0, 127)?);
//! assert_eq!(mapper.forward(127.0), 127);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::curve_type::{CurveDirection, CurveType};
pub use crate::error::CurveError;
pub use crate::mapper::{CurveMapper, map_value};
pub use crate::range::ValueRange;
