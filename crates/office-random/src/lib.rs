//! `office-random` — the stochastic process library.
//!
//! Every value the simulation draws comes from here: inter-arrival gaps,
//! kiosk issuance delays, requirement classification, service durations,
//! prices, and abandonment decisions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sampler`]  | `Sampler`: exponential, uniform, log-normal, constant      |
//! | [`choice`]   | `RequirementChooser`: weighted or fixed classification     |
//! | [`survival`] | `Survival`: geometric survival curve and abandonment test  |
//! | [`profile`]  | `ClientProfile`, `ServiceProfile`, `ArrivalRates`, `ProfileTable` |
//! | [`error`]    | `RandomError`, `RandomResult<T>`                           |
//!
//! # Determinism
//!
//! No type here owns randomness.  Every draw takes the run's
//! [`RunRng`][office_core::RunRng] by `&mut`, so a fixed seed reproduces a
//! run exactly.  All parameters are checked when a sampler is built; drawing
//! never fails.

pub mod choice;
pub mod error;
pub mod profile;
pub mod sampler;
pub mod survival;

#[cfg(test)]
mod tests;

pub use choice::RequirementChooser;
pub use error::{RandomError, RandomResult};
pub use profile::{ArrivalRates, ClientProfile, ProfileTable, ServiceProfile};
pub use sampler::Sampler;
pub use survival::Survival;
