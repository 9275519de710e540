//! The `OutputWriter` trait implemented by all backend writers.

use office_sim::{ClientRecord, RunSummary};

use crate::OutputResult;

pub trait OutputWriter {
    /// Append one row per client.
    fn write_clients(&mut self, records: &[ClientRecord]) -> OutputResult<()>;

    /// Append the totals of one finished run.
    fn write_run_summary(&mut self, summary: &RunSummary) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
