//! Requirement classification at ticketing time.

use office_core::{Requirement, RunRng};
use rand::distributions::{Distribution, WeightedIndex};

use crate::{RandomError, RandomResult};

/// Discrete choice over the three requirement classes.
#[derive(Clone, Debug)]
pub enum RequirementChooser {
    /// Weighted draw; `weights[i]` belongs to `Requirement::ALL[i]`.
    Weighted {
        index:   WeightedIndex<f64>,
        weights: [f64; 3],
    },
    /// Degenerate: every client of the class gets the same requirement.
    Fixed(Requirement),
}

impl RequirementChooser {
    /// Weights for (sale, claim, inquiry).  They need not sum to one.
    pub fn weighted(weights: [f64; 3]) -> RandomResult<Self> {
        if let Some(&bad) = weights.iter().find(|w| !w.is_finite()) {
            return Err(RandomError::NotFinite { what: "requirement weight", value: bad });
        }
        let index = WeightedIndex::new(weights)?;
        Ok(RequirementChooser::Weighted { index, weights })
    }

    pub fn fixed(requirement: Requirement) -> Self {
        RequirementChooser::Fixed(requirement)
    }

    pub fn choose(&self, rng: &mut RunRng) -> Requirement {
        match self {
            RequirementChooser::Weighted { index, .. } => {
                Requirement::ALL[index.sample(rng.inner())]
            }
            RequirementChooser::Fixed(r) => *r,
        }
    }

    /// Whether `requirement` has a non-zero chance of being chosen.
    pub fn can_produce(&self, requirement: Requirement) -> bool {
        match self {
            RequirementChooser::Weighted { weights, .. } => weights[requirement.index()] > 0.0,
            RequirementChooser::Fixed(r) => *r == requirement,
        }
    }
}
