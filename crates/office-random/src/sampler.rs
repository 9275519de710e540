//! Single-value samplers.

use office_core::RunRng;
use rand::distributions::{Distribution, Uniform};
use rand_distr::{Exp, LogNormal};

use crate::{RandomError, RandomResult};

#[derive(Clone, Debug)]
enum Law {
    Exponential(Exp<f64>),
    Uniform { dist: Uniform<f64>, low: f64 },
    LogNormal(LogNormal<f64>),
    Constant(f64),
}

/// A validated distribution plus a multiplicative scale factor.
///
/// The factor is how refunds and costs are modelled: a claim's price is a
/// log-normal draw negated with [`negated`][Self::negated].
#[derive(Clone, Debug)]
pub struct Sampler {
    law:    Law,
    factor: f64,
}

impl Sampler {
    /// Exponential with `rate` events per hour (mean `1 / rate` hours).
    pub fn exponential(rate: f64) -> RandomResult<Self> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(RandomError::BadRate(rate));
        }
        let exp = Exp::new(rate).map_err(|_| RandomError::BadRate(rate))?;
        Ok(Self::from_law(Law::Exponential(exp)))
    }

    /// Uniform on `[low, high)`.
    pub fn uniform(low: f64, high: f64) -> RandomResult<Self> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(RandomError::BadRange { low, high });
        }
        Ok(Self::from_law(Law::Uniform { dist: Uniform::new(low, high), low }))
    }

    /// `exp(N(mu, sigma))`, i.e. a log-normal with median `exp(mu)`.
    pub fn log_normal(mu: f64, sigma: f64) -> RandomResult<Self> {
        if !mu.is_finite() {
            return Err(RandomError::NotFinite { what: "log-normal mu", value: mu });
        }
        if !sigma.is_finite() {
            return Err(RandomError::NotFinite { what: "log-normal sigma", value: sigma });
        }
        Ok(Self::from_law(Law::LogNormal(LogNormal::new(mu, sigma)?)))
    }

    /// Always `value`.
    pub fn constant(value: f64) -> RandomResult<Self> {
        if !value.is_finite() {
            return Err(RandomError::NotFinite { what: "constant", value });
        }
        Ok(Self::from_law(Law::Constant(value)))
    }

    /// Multiply every draw by `factor`.
    pub fn scaled(mut self, factor: f64) -> RandomResult<Self> {
        if !factor.is_finite() {
            return Err(RandomError::NotFinite { what: "scale factor", value: factor });
        }
        self.factor *= factor;
        Ok(self)
    }

    /// Flip the sign of every draw.
    pub fn negated(mut self) -> Self {
        self.factor = -self.factor;
        self
    }

    /// Draw one value.
    #[inline]
    pub fn sample(&self, rng: &mut RunRng) -> f64 {
        let raw = match &self.law {
            Law::Exponential(d)       => d.sample(rng.inner()),
            Law::Uniform { dist, .. } => dist.sample(rng.inner()),
            Law::LogNormal(d)         => d.sample(rng.inner()),
            Law::Constant(v)          => *v,
        };
        self.factor * raw
    }

    /// `true` for [`constant`][Self::constant] samplers, which consume no
    /// randomness.
    pub fn is_constant(&self) -> bool {
        matches!(self.law, Law::Constant(_))
    }

    /// `true` when every draw is strictly positive, which is what a clock
    /// delay needs.
    pub fn is_positive_delay(&self) -> bool {
        match self.law {
            Law::Exponential(_) | Law::LogNormal(_) => self.factor > 0.0,
            Law::Uniform { low, .. }                => self.factor > 0.0 && low > 0.0,
            Law::Constant(v)                        => self.factor * v > 0.0,
        }
    }

    fn from_law(law: Law) -> Self {
        Self { law, factor: 1.0 }
    }
}
