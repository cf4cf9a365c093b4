//! `OutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tf_sim::{RunOutput, SimObserver, TickRecord};

use crate::row::{ResultRow, TellerRow, TickRow};
use crate::writer::OutputWriter;
use crate::{ReportError, ReportResult};

/// A [`SimObserver`] that streams tick rows to any [`OutputWriter`] as the
/// run progresses, then writes teller and result rows when it ends.
///
/// Every row takes its policy from the tick record or the run output, never
/// from `on_run_start`.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, call
/// [`finish`][Self::finish] to flush and collect the first error.
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<ReportError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Flush the writer.  Returns the first error seen during the run, if
    /// any, otherwise the flush result.
    pub fn finish(&mut self) -> ReportResult<()> {
        let flushed = self.writer.finish();
        match self.take_error() {
            Some(e) => Err(e),
            None => flushed,
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_tick_end(&mut self, record: &TickRecord) {
        let row = TickRow::from(record);
        let result = self.writer.write_ticks(&[row]);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, output: &RunOutput) {
        let policy = output.policy();
        let rows: Vec<TellerRow> = output.tellers.iter().map(|t| TellerRow::new(policy, t)).collect();
        let result = self.writer.write_tellers(&rows);
        self.store_err(result);

        let result = self.writer.write_result(&ResultRow::from(&output.result));
        self.store_err(result);
    }
}
