use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("cannot read replay file {path}: {source}")]
    ReplayFile {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
