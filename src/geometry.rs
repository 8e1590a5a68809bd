//! 2D distance and angle helpers, plus the const-evaluable square root.

use crate::config::SqrtConfig;
use crate::consts::{SQRT_INITIAL_GUESS, SQRT_MAX_ITERATIONS, SQRT_TOLERANCE};
use crate::float::Float;
use crate::utils::clamp;

pub(crate) struct Newton {
    pub root: f64,
    pub converged: bool,
}

// Newton-Raphson on g² = x, bounded by `max_iterations`
pub(crate) const fn newton(
    x: f64,
    tolerance: f64,
    initial_guess: f64,
    max_iterations: u32,
) -> Newton {
    if x.is_nan() || x < 0.0 {
        return Newton {
            root: f64::NAN,
            converged: false,
        };
    }
    if x.is_infinite() {
        return Newton {
            root: x,
            converged: true,
        };
    }

    let mut guess = initial_guess;
    let mut i = 0;
    while i < max_iterations {
        let diff = guess * guess - x;
        if diff < tolerance && diff > -tolerance {
            return Newton {
                root: guess,
                converged: true,
            };
        }
        guess = (guess + x / guess) / 2.0;
        i += 1;
    }
    Newton {
        root: guess,
        converged: false,
    }
}

/// Square root by Newton-Raphson iteration, evaluable in `const` items.
///
/// Starts from 1.0 and stops once `|guess² - x| < 0.0001`. The tolerance is
/// absolute, so results for very small inputs are coarse
/// (`sqrt_newton(0.0)` is about 0.008) and very large inputs stop at the
/// iteration cap instead. Negative or NaN input yields NaN.
///
/// ```
/// use scalar_helpers::sqrt_newton;
/// const ROOT: f64 = sqrt_newton(2.0);
/// assert!((ROOT - 2.0_f64.sqrt()).abs() < 1e-4);
/// ```
pub const fn sqrt_newton(x: f64) -> f64 {
    newton(x, SQRT_TOLERANCE, SQRT_INITIAL_GUESS, SQRT_MAX_ITERATIONS).root
}

/// Same iteration as [`sqrt_newton`] with caller-supplied settings.
pub fn sqrt_with(x: f64, config: &SqrtConfig) -> f64 {
    newton(x, config.tolerance, config.initial_guess, config.max_iterations).root
}

/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
///
/// ```
/// use scalar_helpers::hypotenuse;
/// const H: f64 = hypotenuse(3.0, 4.0);
/// assert!((H - 5.0).abs() < 1e-4);
/// ```
pub const fn hypotenuse(a: f64, b: f64) -> f64 {
    sqrt_newton(a * a + b * b)
}

pub fn hypotenuse_with(a: f64, b: f64, config: &SqrtConfig) -> f64 {
    sqrt_with(a * a + b * b, config)
}

/// Euclidean distance between the points `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn distance<T: Float>(x1: T, y1: T, x2: T, y2: T) -> T {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Unsigned angle in radians, in `[0, π]`, between the vectors `(x1, y1)`
/// and `(x2, y2)`.
///
/// NaN if either vector has zero length. See
/// [`crate::checked::try_angle_between_vectors`].
///
/// ```
/// use scalar_helpers::{angle_between_vectors, PI_F64};
/// let a = angle_between_vectors(1.0, 0.0, 0.0, 1.0);
/// assert!((a - PI_F64 / 2.0).abs() < 1e-12);
/// ```
pub fn angle_between_vectors<T: Float>(x1: T, y1: T, x2: T, y2: T) -> T {
    let dot = x1 * x2 + y1 * y2;
    let magnitude1 = (x1 * x1 + y1 * y1).sqrt();
    let magnitude2 = (x2 * x2 + y2 * y2).sqrt();
    // rounding can push parallel vectors just past ±1; NaN passes through
    clamp(dot / (magnitude1 * magnitude2), -T::ONE, T::ONE).acos()
}
