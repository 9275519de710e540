use office_core::{ClientClass, Requirement};
use thiserror::Error;

/// Malformed distribution parameters, caught when a sampler or profile is
/// built.
#[derive(Debug, Error)]
pub enum RandomError {
    #[error("exponential rate must be positive and finite, got {0}")]
    BadRate(f64),

    #[error("uniform range [{low}, {high}) is empty or not finite")]
    BadRange { low: f64, high: f64 },

    #[error("{what} must be finite, got {value}")]
    NotFinite { what: &'static str, value: f64 },

    #[error("log-normal parameters rejected: {0}")]
    LogNormal(#[from] rand_distr::NormalError),

    #[error("probability must lie in [0, 1], got {0}")]
    BadProbability(f64),

    #[error("requirement weights rejected: {0}")]
    Weights(#[from] rand::distributions::WeightedError),

    #[error("class {class} {what} can produce a zero or negative delay")]
    NonPositiveDelay { class: ClientClass, what: &'static str },

    #[error("class {class} can be classified as requirement {requirement} but has no service profile for it")]
    MissingService { class: ClientClass, requirement: Requirement },
}

pub type RandomResult<T> = Result<T, RandomError>;
