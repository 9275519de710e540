//! `office-core` — foundational types for the office service simulation.
//!
//! This crate is a dependency of every other `office-*` crate.  It has no
//! `office-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `ClientId`, `WorkerId`                                    |
//! | [`kind`]    | `ClientClass`, `Requirement`, `Capability`                |
//! | [`time`]    | `SimTime` (fractional hours), `DaySegment`                |
//! | [`rng`]     | `RunRng` (one per simulation run)                         |
//! | [`config`]  | `OfficeConfig`, `WorkerSpec`                              |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{OfficeConfig, WorkerSpec};
pub use error::{CoreError, CoreResult};
pub use ids::{ClientId, WorkerId};
pub use kind::{Capability, ClientClass, Requirement};
pub use rng::RunRng;
pub use time::{DaySegment, SimTime};
