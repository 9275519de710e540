//! `office-output` — writers for simulation results.
//!
//! | Backend | Files created               |
//! |---------|-----------------------------|
//! | CSV     | `clients.csv`, `runs.csv`   |
//!
//! Backends implement [`OutputWriter`].  [`RunOutputObserver`] implements
//! `office_sim::SimObserver` and writes one `runs.csv` row per finished run;
//! client rows are written from [`Office::records`][office_sim::Office::records]
//! once the run returns.
//!
//! # Usage
//!
//! ```rust,ignore
//! use office_output::{CsvWriter, OutputWriter, RunOutputObserver};
//!
//! let mut obs = RunOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! office.run(&mut obs)?;
//! obs.writer_mut().write_clients(&office.records())?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! obs.into_writer().finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use writer::OutputWriter;
