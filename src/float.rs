//! Precision abstraction shared by the generic helpers.
//!
//! [`Float`] is implemented for `f32` and `f64` only. The transcendental
//! functions go through `libm` so the crate keeps working without `std`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::consts::{PI_F32, PI_F64, TO_DEGREE_F32, TO_DEGREE_F64, TO_RADIAN_F32, TO_RADIAN_F64};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point scalar accepted by the generic helpers.
///
/// Sealed: the helpers rely on IEEE-754 semantics for their NaN/Infinity
/// behavior on degenerate input.
pub trait Float:
    sealed::Sealed
    + Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const PI: Self;
    /// Multiply degrees by this to get radians.
    const TO_RADIAN: Self;
    /// Multiply radians by this to get degrees.
    const TO_DEGREE: Self;

    fn sqrt(self) -> Self;
    fn acos(self) -> Self;
    /// Remainder of `self / rhs`, carrying the sign of `self` (C `fmod`).
    fn fmod(self, rhs: Self) -> Self;
    /// Rounds half away from zero.
    fn round(self) -> Self;
    fn is_finite(self) -> bool;
    /// Widens to `f64` for error reporting.
    fn to_f64(self) -> f64;
}

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const PI: Self = PI_F32;
    const TO_RADIAN: Self = TO_RADIAN_F32;
    const TO_DEGREE: Self = TO_DEGREE_F32;

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline]
    fn acos(self) -> Self {
        libm::acosf(self)
    }

    #[inline]
    fn fmod(self, rhs: Self) -> Self {
        libm::fmodf(self, rhs)
    }

    #[inline]
    fn round(self) -> Self {
        libm::roundf(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const PI: Self = PI_F64;
    const TO_RADIAN: Self = TO_RADIAN_F64;
    const TO_DEGREE: Self = TO_DEGREE_F64;

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline]
    fn acos(self) -> Self {
        libm::acos(self)
    }

    #[inline]
    fn fmod(self, rhs: Self) -> Self {
        libm::fmod(self, rhs)
    }

    #[inline]
    fn round(self) -> Self {
        libm::round(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
