//! `office-sim` — the discrete-event scheduler for the office.
//!
//! # Main loop
//!
//! ```text
//! while let Some(event) = queue.pop():    // earliest time, FIFO on ties
//!   ① Discard: arrivals scheduled after closing are dropped; the arrival
//!              chain of that class ends there.
//!   ② Handle:  advance the clock and run the event's handler:
//!                Arrival            → join kiosk line, schedule next arrival
//!                TicketingComplete  → ticket + requirement, enter room
//!                ServiceComplete    → client leaves served; break or next
//!                WorkerReturn       → back from break; serve queued head
//!                SpaceFreed         → un-halt the kiosk
//!   ③ Kiosk:   drop abandoning clients at the head of the kiosk line,
//!              start ticketing the next one.
//!   ④ Workers: in configured order, call waiting-room clients by
//!              priority into each free call queue.
//! ```
//!
//! Steps ③ and ④ run after every event, whichever event fired.  The run
//! ends when the queue is empty.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use office_core::OfficeConfig;
//! use office_random::ProfileTable;
//! use office_sim::{NoopObserver, OfficeBuilder};
//!
//! let mut office = OfficeBuilder::new(OfficeConfig::reference(), ProfileTable::standard()?)
//!     .run_index(0)
//!     .build()?;
//! let summary = office.run(&mut NoopObserver)?;
//! let records = office.records(); // one ClientRecord per visitor
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod office;
pub mod record;


pub use builder::OfficeBuilder;
pub use error::{SimError, SimResult};
pub use event::{EventKind, EventQueue, EventTag, ScheduledEvent};
pub use observer::{NoopObserver, SimObserver};
pub use office::Office;
pub use record::{ClientRecord, RunSummary};
