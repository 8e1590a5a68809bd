use thiserror::Error;

pub type Result<T> = core::result::Result<T, MathError>;

/// Which operand of a two-vector operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorOperand {
    First,
    Second,
}

/// Degenerate input reported by the `try_*` helpers.
///
/// The plain helpers never produce this; they let NaN or Infinity through.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("range [{min}, {max}] has zero width")]
    ZeroRange { min: f64, max: f64 },
    #[error("range is inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("{which:?} vector has zero length")]
    ZeroLengthVector { which: VectorOperand },
    #[error("square root of negative number {0}")]
    NegativeSqrt(f64),
    #[error("square root of {value} did not converge after {iterations} iterations")]
    NotConverged { value: f64, iterations: u32 },
    #[error("non-finite input: {0}")]
    NonFinite(f64),
    #[error("invalid config value for `{field}`: {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}
