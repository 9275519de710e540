//! Deterministic per-run RNG.
//!
//! # Determinism strategy
//!
//! Every simulation run owns exactly one `RunRng`, and every sampling call in
//! the office takes it by `&mut`.  There is no process-wide generator, so two
//! runs never share state and can be executed on separate threads.
//!
//! Replications derive their seed from a base seed and the run index:
//!
//!   seed = base_seed XOR (run_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive run indices uniformly across the seed space.

use rand::distributions::{Distribution, Open01};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The pseudo-random stream of one simulation run.
pub struct RunRng(SmallRng);

impl RunRng {
    pub fn new(seed: u64) -> Self {
        RunRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed replication `run_index` of a batch sharing `base_seed`.
    pub fn for_run(base_seed: u64, run_index: u64) -> Self {
        Self::new(Self::run_seed(base_seed, run_index))
    }

    /// The seed [`for_run`][Self::for_run] uses, exposed so callers can log it.
    #[inline]
    pub fn run_seed(base_seed: u64, run_index: u64) -> u64 {
        base_seed ^ run_index.wrapping_mul(MIXING_CONSTANT)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform draw on the open interval `(0, 1)`.
    ///
    /// Abandonment tests use this so that a survival probability of exactly
    /// 1 always keeps the client and exactly 0 always loses it.
    #[inline]
    pub fn open01(&mut self) -> f64 {
        Open01.sample(&mut self.0)
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}
