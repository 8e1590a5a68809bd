//! Uniform random values in a closed range.
//!
//! [`Random`] owns its generator, so callers that need reproducible or
//! per-thread sequences keep one of their own. The free function [`random`]
//! (feature `std`) draws from a single process-wide generator that is seeded
//! from the wall clock the first time any thread uses it.

use rand::{rngs::SmallRng, RngCore, SeedableRng};

use crate::utils::clamp;

/// Uniform range sampler over any `rand` generator.
#[derive(Debug, Clone)]
pub struct Random<R = SmallRng> {
    rng: R,
}

impl Random<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Seeds from the current time, like the process-wide generator.
    #[cfg(feature = "std")]
    pub fn from_time() -> Self {
        Self::from_seed(global::time_seed())
    }
}

impl<R: RngCore> Random<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform in `[0, 1]`; both ends are reachable.
    pub fn unit(&mut self) -> f64 {
        f64::from(self.rng.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform in `[min, max]`.
    ///
    /// ```
    /// use scalar_helpers::Random;
    /// let mut rng = Random::from_seed(7);
    /// let v = rng.range(-1.0, 1.0);
    /// assert!((-1.0..=1.0).contains(&v));
    /// ```
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        let v = min + (max - min) * self.unit();
        // `min + (max - min)` may round past `max`
        if min <= max {
            clamp(v, min, max)
        } else {
            clamp(v, max, min)
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let v = min + (max - min) * self.unit() as f32;
        if min <= max {
            clamp(v, min, max)
        } else {
            clamp(v, max, min)
        }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "std")]
pub use global::{random, seed_global};

#[cfg(feature = "std")]
mod global {
    use std::sync::{Mutex, OnceLock, PoisonError};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Random;

    static GLOBAL: OnceLock<Mutex<Random>> = OnceLock::new();

    // Used when the clock reads before the epoch
    const FALLBACK_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn time_seed() -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as u64,
            Err(err) => {
                log::warn!("system clock before unix epoch ({err}), using fallback seed");
                FALLBACK_SEED
            }
        }
    }

    fn seeded(seed: u64) -> Mutex<Random> {
        log::debug!("seeding global random generator with {seed:#x}");
        Mutex::new(Random::from_seed(seed))
    }

    /// Uniform in `[min, max]` from the process-wide generator.
    ///
    /// The first call on any thread seeds the generator from the current
    /// time; it is never reseeded afterwards.
    ///
    /// ```
    /// let v = scalar_helpers::random(10.0, 20.0);
    /// assert!((10.0..=20.0).contains(&v));
    /// ```
    pub fn random(min: f64, max: f64) -> f64 {
        let global = GLOBAL.get_or_init(|| seeded(time_seed()));
        let mut rng = global.lock().unwrap_or_else(PoisonError::into_inner);
        rng.range(min, max)
    }

    /// Seeds the process-wide generator with `seed` if nothing has used it
    /// yet. Returns `false`, leaving the sequence untouched, otherwise.
    pub fn seed_global(seed: u64) -> bool {
        let mut installed = false;
        GLOBAL.get_or_init(|| {
            installed = true;
            seeded(seed)
        });
        installed
    }
}
