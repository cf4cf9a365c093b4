//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `tf-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{field} = {value} is out of range (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min:   u64,
        max:   u64,
    },
}

/// Shorthand result type for `tf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
