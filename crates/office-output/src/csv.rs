//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `clients.csv`: one row per client, empty cells for stages never reached
//! - `runs.csv`: one row per run

use std::fs::File;
use std::path::Path;

use csv::Writer;
use office_sim::{ClientRecord, RunSummary};

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const CLIENT_HEADERS: [&str; 11] = [
    "run",
    "class",
    "arrival",
    "requirement",
    "room_entry",
    "ticket",
    "service_start",
    "price",
    "exit_time",
    "exit_kind",
    "worker",
];

pub const RUN_HEADERS: [&str; 8] = [
    "run",
    "clients",
    "served",
    "abandoned",
    "discarded",
    "events",
    "end_time",
    "net_price",
];

/// Render an optional value, `None` as an empty cell.
fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    clients:  Writer<File>,
    runs:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut clients = Writer::from_path(dir.join("clients.csv"))?;
        clients.write_record(CLIENT_HEADERS)?;

        let mut runs = Writer::from_path(dir.join("runs.csv"))?;
        runs.write_record(RUN_HEADERS)?;

        Ok(Self { clients, runs, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_clients(&mut self, records: &[ClientRecord]) -> OutputResult<()> {
        for r in records {
            self.clients.write_record(&[
                r.run.to_string(),
                r.class.to_string(),
                r.arrival.to_string(),
                cell(r.requirement),
                cell(r.room_entry),
                cell(r.ticket),
                cell(r.service_start),
                cell(r.price),
                cell(r.exit_time),
                cell(r.exit_kind.map(|k| k.as_str())),
                cell(r.worker),
            ])?;
        }
        Ok(())
    }

    fn write_run_summary(&mut self, s: &RunSummary) -> OutputResult<()> {
        self.runs.write_record(&[
            s.run.to_string(),
            s.clients.to_string(),
            s.served.to_string(),
            s.abandoned.to_string(),
            s.discarded.to_string(),
            s.events.to_string(),
            s.end_time.hours().to_string(),
            s.net_price.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.clients.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
