/// An error type for the curve processing stages.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CurveError {
    /// The curve does not have enough points for the operation.
    #[error("Not enough points to interpolate: got {0}, need at least {1}")]
    InsufficientPoints(usize, usize),

    /// The parameter and value sequences have different lengths.
    #[error("Parameters length ({0}) does not match the values length ({1})")]
    LengthMismatch(usize, usize),

    /// The interpolation parameters are not strictly increasing.
    #[error("Parameters must be strictly increasing, violated at index {0}")]
    NonIncreasingParameters(usize),
}
