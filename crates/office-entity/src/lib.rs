//! `office-entity` — state holders and their small state machines.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`client`]   | `Client`, `Stage`, `ExitKind`                             |
//! | [`worker`]   | `Worker`, `WorkerStatus`, `CallQueue`                     |
//! | [`totem`]    | `Totem` (ticketing kiosk), `TotemStatus`                  |
//! | [`room`]     | `WaitingRoom`                                             |
//! | [`priority`] | `priority_cmp`: the order workers pick clients in         |
//!
//! Entities never draw random numbers and never schedule events.  The
//! scheduler in `office-sim` makes those decisions and drives the state
//! transitions exposed here.

pub mod client;
pub mod priority;
pub mod room;
pub mod totem;
pub mod worker;

#[cfg(test)]
mod tests;

pub use client::{Client, ExitKind, Stage};
pub use priority::priority_cmp;
pub use room::WaitingRoom;
pub use totem::{Totem, TotemStatus};
pub use worker::{CallQueue, Worker, WorkerStatus};
