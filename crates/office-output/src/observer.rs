//! `RunOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use office_sim::{RunSummary, SimObserver};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes each run's summary row to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `office.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Borrow the writer, e.g. to append client rows between runs.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RunOutputObserver<W> {
    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self.writer.write_run_summary(summary);
        self.store_err(result);
    }
}
