//! Fallible counterparts of the helpers whose plain versions let degenerate
//! input turn into NaN or Infinity.

use crate::config::SqrtConfig;
use crate::error::{MathError, Result, VectorOperand};
use crate::float::Float;
use crate::geometry::{angle_between_vectors, newton};
use crate::utils::{clamp, smooth_step, wrap};

fn finite<T: Float>(values: &[T]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => {
            log::trace!("rejecting non-finite input {v:?}");
            Err(MathError::NonFinite(v.to_f64()))
        }
        None => Ok(()),
    }
}

fn ordered<T: Float>(min: T, max: T) -> Result<()> {
    if min > max {
        log::trace!("rejecting inverted range [{min:?}, {max:?}]");
        return Err(MathError::InvertedRange {
            min: min.to_f64(),
            max: max.to_f64(),
        });
    }
    Ok(())
}

/// [`clamp`] that rejects `min > max`.
pub fn try_clamp<T: Float>(value: T, min: T, max: T) -> Result<T> {
    finite(&[value, min, max])?;
    ordered(min, max)?;
    Ok(clamp(value, min, max))
}

/// [`smooth_step`] that rejects a zero-width edge.
///
/// ```
/// use scalar_helpers::{checked::try_smooth_step, MathError};
/// assert_eq!(try_smooth_step(0.0, 1.0, 0.5), Ok(0.5));
/// assert!(matches!(try_smooth_step(1.0, 1.0, 0.5), Err(MathError::ZeroRange { .. })));
/// ```
pub fn try_smooth_step<T: Float>(a: T, b: T, t: T) -> Result<T> {
    finite(&[a, b, t])?;
    if a == b {
        log::trace!("rejecting zero-width smooth step edge at {a:?}");
        return Err(MathError::ZeroRange {
            min: a.to_f64(),
            max: b.to_f64(),
        });
    }
    Ok(smooth_step(a, b, t))
}

/// [`wrap`] that rejects an empty or inverted range.
pub fn try_wrap<T: Float>(value: T, min: T, max: T) -> Result<T> {
    finite(&[value, min, max])?;
    ordered(min, max)?;
    if min == max {
        log::trace!("rejecting zero-width wrap range at {min:?}");
        return Err(MathError::ZeroRange {
            min: min.to_f64(),
            max: max.to_f64(),
        });
    }
    Ok(wrap(value, min, max))
}

/// [`angle_between_vectors`] that rejects zero-length vectors.
pub fn try_angle_between_vectors<T: Float>(x1: T, y1: T, x2: T, y2: T) -> Result<T> {
    finite(&[x1, y1, x2, y2])?;
    for (which, x, y) in [
        (VectorOperand::First, x1, y1),
        (VectorOperand::Second, x2, y2),
    ] {
        if x == T::ZERO && y == T::ZERO {
            log::trace!("rejecting zero-length {which:?} vector");
            return Err(MathError::ZeroLengthVector { which });
        }
    }
    Ok(angle_between_vectors(x1, y1, x2, y2))
}

/// Newton square root that reports negative input and a run that hits the
/// iteration cap without meeting the tolerance.
///
/// ```
/// use scalar_helpers::{checked::try_sqrt_newton, SqrtConfig};
/// let root = try_sqrt_newton(16.0, &SqrtConfig::default()).unwrap();
/// assert!((root - 4.0).abs() < 1e-4);
/// ```
pub fn try_sqrt_newton(x: f64, config: &SqrtConfig) -> Result<f64> {
    config.validate()?;
    finite(&[x])?;
    if x < 0.0 {
        log::trace!("rejecting square root of {x}");
        return Err(MathError::NegativeSqrt(x));
    }
    let n = newton(x, config.tolerance, config.initial_guess, config.max_iterations);
    if !n.converged {
        log::trace!("square root of {x} stopped after {} iterations", config.max_iterations);
        return Err(MathError::NotConverged {
            value: x,
            iterations: config.max_iterations,
        });
    }
    Ok(n.root)
}
