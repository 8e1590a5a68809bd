//! Scalar math helpers for game and simulation code.
//!
//! Everything here is a free function over plain floats: clamping,
//! interpolation, periodic wrapping, angle conversion, 2D distance and
//! angle, rounding, and uniform random ranges. Degenerate input (a zero
//! range, a zero-length vector) propagates as NaN or Infinity; the
//! [`checked`] module has variants that report it as [`MathError`] instead.
//!
//! The crate is `no_std` when built without the default `std` feature. The
//! process-wide [`random`] helper needs `std`; [`Random`] does not.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod checked;
mod config;
mod consts;
mod error;
mod float;
mod geometry;
mod random;
mod utils;

pub use config::SqrtConfig;
pub use consts::*;
pub use error::{MathError, Result, VectorOperand};
pub use float::Float;
pub use geometry::{
    angle_between_vectors, distance, hypotenuse, hypotenuse_with, sqrt_newton, sqrt_with,
};
pub use random::Random;
#[cfg(feature = "std")]
pub use random::{random, seed_global};
pub use utils::{
    clamp, deg_to_rad, deg_to_rad_f32, deg_to_rad_f64, lerp, rad_to_deg, rad_to_deg_f32,
    rad_to_deg_f64, round, smooth_step, wrap,
};
