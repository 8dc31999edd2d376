#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the crate.
pub mod error;

/// Outlier pruning and near-duplicate merging for drawn curves.
pub mod prefilter;

/// Dense spline resampling of a curve.
pub mod resample;

/// Natural cubic spline interpolation.
pub mod spline;

/// Minimum number of points below which the curve stages pass input through.
pub const MIN_CURVE_POINTS: usize = 3;

pub use crate::error::CurveError;
pub use crate::prefilter::prefilter_curve;
pub use crate::resample::resample_curve;
pub use crate::spline::CubicSpline;
