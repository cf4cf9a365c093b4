//! Error types for tf-report.

use thiserror::Error;

use tf_sim::SimError;

/// Errors from running comparisons or writing output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
