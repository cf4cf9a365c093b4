//! The `OutputWriter` trait implemented by all backend writers.

use tf_sim::RunOutput;

use crate::{ReportResult, ResultRow, TellerRow, TickRow};

/// Trait implemented by output backends.  One writer can hold several runs;
/// every row carries its policy name.
pub trait OutputWriter {
    /// Write a batch of tick rows.
    fn write_ticks(&mut self, rows: &[TickRow]) -> ReportResult<()>;

    /// Write a batch of teller rows.
    fn write_tellers(&mut self, rows: &[TellerRow]) -> ReportResult<()>;

    /// Write one run's aggregate result.
    fn write_result(&mut self, row: &ResultRow) -> ReportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> ReportResult<()>;

    /// Write everything a finished run produced.
    fn write_run(&mut self, run: &RunOutput) -> ReportResult<()> {
        let policy = run.policy();
        let ticks: Vec<TickRow> = run.log.iter().map(TickRow::from).collect();
        let tellers: Vec<TellerRow> = run.tellers.iter().map(|t| TellerRow::new(policy, t)).collect();
        self.write_ticks(&ticks)?;
        self.write_tellers(&tellers)?;
        self.write_result(&ResultRow::from(&run.result))
    }
}
