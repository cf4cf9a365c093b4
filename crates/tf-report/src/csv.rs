//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `ticks.csv`
//! - `tellers.csv`
//! - `results.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ReportResult, ResultRow, TellerRow, TickRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    ticks:    Writer<File>,
    tellers:  Writer<File>,
    results:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the three CSV files and
    /// write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        fs::create_dir_all(dir)?;

        let mut ticks = Writer::from_path(dir.join("ticks.csv"))?;
        ticks.write_record([
            "policy", "tick", "queued", "busy", "free", "utilization_percent", "arrived", "balked",
            "finished", "assigned",
        ])?;

        let mut tellers = Writer::from_path(dir.join("tellers.csv"))?;
        tellers.write_record([
            "policy", "teller", "customers_served", "total_busy_time", "total_free_time",
            "utilization_percent", "avg_transaction_time", "max_idle_period", "busy_at_end",
        ])?;

        let mut results = Writer::from_path(dir.join("results.csv"))?;
        results.write_record([
            "policy", "avg_wait", "max_wait", "avg_utilization", "queue_efficiency", "avg_service_time",
            "peak_queue_length", "avg_queue_length", "customers_arrived", "customers_served",
            "customers_balked", "customers_unserved",
        ])?;

        Ok(Self { ticks, tellers, results, finished: false })
    }
}

/// Empty string for `None`.
fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_ticks(&mut self, rows: &[TickRow]) -> ReportResult<()> {
        for row in rows {
            self.ticks.write_record(&[
                row.policy.to_string(),
                row.tick.to_string(),
                row.queued.to_string(),
                row.busy.to_string(),
                row.free.to_string(),
                row.utilization_percent.to_string(),
                (row.arrived as u8).to_string(),
                (row.balked as u8).to_string(),
                row.finished.to_string(),
                row.assigned.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tellers(&mut self, rows: &[TellerRow]) -> ReportResult<()> {
        for row in rows {
            self.tellers.write_record(&[
                row.policy.to_string(),
                row.teller.to_string(),
                row.customers_served.to_string(),
                row.total_busy_time.to_string(),
                row.total_free_time.to_string(),
                format!("{:.4}", row.utilization_percent),
                opt(row.avg_transaction_time.map(|v| format!("{v:.4}"))),
                opt(row.max_idle_period),
                (row.busy_at_end as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_result(&mut self, row: &ResultRow) -> ReportResult<()> {
        self.results.write_record(&[
            row.policy.to_string(),
            format!("{:.4}", row.avg_wait),
            row.max_wait.to_string(),
            format!("{:.4}", row.avg_utilization),
            format!("{:.4}", row.queue_efficiency),
            format!("{:.4}", row.avg_service_time),
            row.peak_queue_length.to_string(),
            format!("{:.4}", row.avg_queue_length),
            row.customers_arrived.to_string(),
            row.customers_served.to_string(),
            row.customers_balked.to_string(),
            row.customers_unserved.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.tellers.flush()?;
        self.results.flush()?;
        Ok(())
    }
}
