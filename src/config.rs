#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::{SQRT_INITIAL_GUESS, SQRT_MAX_ITERATIONS, SQRT_TOLERANCE};
use crate::error::{MathError, Result};

/// Tuning for the Newton-Raphson square root behind [`crate::hypotenuse_with`].
///
/// The default reproduces [`crate::sqrt_newton`]: guess 1.0, stop once
/// `|guess² - x| < 0.0001`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SqrtConfig {
    /// Absolute bound on `|guess² - x|`.
    pub tolerance: f64,
    pub initial_guess: f64,
    /// Iterations before giving up and returning the last guess.
    pub max_iterations: u32,
}

impl Default for SqrtConfig {
    fn default() -> Self {
        Self {
            tolerance: SQRT_TOLERANCE,
            initial_guess: SQRT_INITIAL_GUESS,
            max_iterations: SQRT_MAX_ITERATIONS,
        }
    }
}

impl SqrtConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Rejects settings the iteration cannot work with: a non-positive or
    /// non-finite tolerance or guess, or zero iterations.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::InvalidConfig {
                field: "tolerance",
                value: self.tolerance,
            });
        }
        if !(self.initial_guess.is_finite() && self.initial_guess > 0.0) {
            return Err(MathError::InvalidConfig {
                field: "initial_guess",
                value: self.initial_guess,
            });
        }
        if self.max_iterations == 0 {
            return Err(MathError::InvalidConfig {
                field: "max_iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SqrtConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_guess_is_rejected() {
        let err = SqrtConfig::default()
            .with_initial_guess(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            MathError::InvalidConfig {
                field: "initial_guess",
                value: 0.0
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let cfg: SqrtConfig = serde_json::from_str(r#"{ "tolerance": 1e-8 }"#).unwrap();
        assert_eq!(cfg, SqrtConfig::default().with_tolerance(1e-8));

        let json = serde_json::to_string(&cfg).unwrap();
        let back: SqrtConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let cfg = SqrtConfig::default().with_max_iterations(0);
        assert!(matches!(
            cfg.validate(),
            Err(MathError::InvalidConfig {
                field: "max_iterations",
                ..
            })
        ));
    }
}
