//! Abandonment modelling.
//!
//! A waiting client's patience follows a geometric distribution over whole
//! minutes.  The library exposes its survival complement,
//!
//!   survival(t) = 1 − GeomCDF(t; p) = (1 − p)^t
//!
//! and a test that turns it into a stay/leave decision.

use office_core::RunRng;

use crate::{RandomError, RandomResult};

/// Geometric survival curve with per-minute leave probability `p`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Survival {
    p: f64,
}

impl Survival {
    pub fn geometric(p: f64) -> RandomResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(RandomError::BadProbability(p));
        }
        Ok(Self { p })
    }

    /// Nobody ever leaves.
    pub fn never() -> Self {
        Self { p: 0.0 }
    }

    /// Probability that a client is still waiting after `minutes`.
    #[inline]
    pub fn survival(self, minutes: u32) -> f64 {
        let exponent = minutes.min(i32::MAX as u32) as i32;
        (1.0 - self.p).powi(exponent)
    }

    /// Draw `u` from `(0, 1)`; the client stays iff `u > 1 − survival(t)`.
    ///
    /// Consumes exactly one draw from `rng`.
    #[inline]
    pub fn stays(self, minutes: u32, rng: &mut RunRng) -> bool {
        let u = rng.open01();
        u > 1.0 - self.survival(minutes)
    }
}
