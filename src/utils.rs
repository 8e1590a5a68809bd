use crate::consts::{TO_DEGREE_F32, TO_DEGREE_F64, TO_RADIAN_F32, TO_RADIAN_F64};
use crate::float::Float;

/// Restricts `value` to `[min, max]`.
///
/// With `min > max` the comparisons still run in order, so the result is
/// `min` for values below `min` and `max` for values above `max`.
///
/// ```
/// use scalar_helpers::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-3, 0, 10), 0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation `a + t * (b - a)`. `t` is not clamped.
///
/// ```
/// use scalar_helpers::lerp;
/// assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// Cubic ease of `t` across the edge `[a, b]`: 0 at or below `a`, 1 at or
/// above `b`, `3n² - 2n³` in between.
///
/// Returns NaN when `a == b`. See [`crate::checked::try_smooth_step`].
///
/// ```
/// use scalar_helpers::smooth_step;
/// assert_eq!(smooth_step(0.0, 2.0, 1.0), 0.5);
/// assert_eq!(smooth_step(0.0, 2.0, 5.0), 1.0);
/// ```
#[inline]
pub fn smooth_step<T: Float>(a: T, b: T, t: T) -> T {
    let n = clamp((t - a) / (b - a), T::ZERO, T::ONE);
    n * n * (T::THREE - T::TWO * n)
}

/// Maps `value` into the half-open range `[min, max)` periodically.
///
/// A zero range yields NaN, an inverted one yields a value outside the
/// bounds. See [`crate::checked::try_wrap`].
///
/// ```
/// use scalar_helpers::wrap;
/// assert_eq!(wrap(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(wrap(-90.0, -180.0, 180.0), -90.0);
/// assert_eq!(wrap(-190.0, -180.0, 180.0), 170.0);
/// ```
#[inline]
pub fn wrap<T: Float>(value: T, min: T, max: T) -> T {
    let range = max - min;
    let rem = (value - min).fmod(range);
    let wrapped = if rem < T::ZERO { rem + max } else { rem + min };
    // a tiny negative remainder can round up onto `max`
    if wrapped >= max && max > min {
        min
    } else {
        wrapped
    }
}

/// Rounds half away from zero.
///
/// ```
/// use scalar_helpers::round;
/// assert_eq!(round(2.5_f64), 3.0);
/// assert_eq!(round(-2.5_f32), -3.0);
/// ```
#[inline]
pub fn round<T: Float>(value: T) -> T {
    value.round()
}

/// Degrees to radians in the precision of the argument.
///
/// ```
/// use scalar_helpers::{deg_to_rad, PI_F32};
/// assert!((deg_to_rad(180.0_f32) - PI_F32).abs() < 1e-6);
/// ```
#[inline]
pub fn deg_to_rad<T: Float>(degrees: T) -> T {
    degrees * T::TO_RADIAN
}

/// Radians to degrees in the precision of the argument.
#[inline]
pub fn rad_to_deg<T: Float>(radians: T) -> T {
    radians * T::TO_DEGREE
}

// Degrees to radians, usable in const items
pub const fn deg_to_rad_f64(degrees: f64) -> f64 {
    degrees * TO_RADIAN_F64
}

// Degrees to radians, usable in const items
pub const fn deg_to_rad_f32(degrees: f32) -> f32 {
    degrees * TO_RADIAN_F32
}

// Radians to degrees, usable in const items
pub const fn rad_to_deg_f64(radians: f64) -> f64 {
    radians * TO_DEGREE_F64
}

// Radians to degrees, usable in const items
pub const fn rad_to_deg_f32(radians: f32) -> f32 {
    radians * TO_DEGREE_F32
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT_ANGLE: f64 = deg_to_rad_f64(90.0);

    #[test]
    fn clamp_with_inverted_bounds_checks_min_first() {
        assert_eq!(clamp(-1.0, 1.0, 0.0), 1.0);
        assert_eq!(clamp(2.0, 1.0, 0.0), 0.0);
        assert_eq!(clamp(0.5, 1.0, 0.0), 1.0);
    }

    #[test]
    fn smooth_step_is_nan_on_zero_width_edge() {
        assert!(smooth_step(1.0_f64, 1.0, 0.5).is_nan());
    }

    #[test]
    fn wrap_is_nan_on_zero_range() {
        assert!(wrap(3.0_f64, 2.0, 2.0).is_nan());
    }

    #[test]
    fn wrap_never_returns_max() {
        let v = wrap(-1e-20_f64, 0.0, 10.0);
        assert!((0.0..10.0).contains(&v), "{v}");
    }

    #[test]
    fn const_conversion_matches_generic() {
        assert_eq!(RIGHT_ANGLE, deg_to_rad(90.0_f64));
        assert_eq!(rad_to_deg_f32(1.0), rad_to_deg(1.0_f32));
    }
}
