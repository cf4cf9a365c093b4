//! `tf-report`: everything that happens after (or around) a run.
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`compare`]    | `compare` runs every policy on one feed, `Comparison`        |
//! | [`scoreboard`] | `Scoreboard` ranking and best-performer picks                 |
//! | [`text`]       | `RunReport`, the end-of-run text report                      |
//! | [`writer`]     | `OutputWriter` trait                                          |
//! | [`csv`]        | `CsvWriter` (`ticks.csv`, `tellers.csv`, `results.csv`)      |
//! | [`observer`]   | `OutputObserver`, streams a run into any `OutputWriter`      |
//! | [`advice`]     | `Recommender` boundary and response parsing                  |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the policies of a comparison on Rayon's pool.     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tf_report::{compare, CsvWriter, OutputWriter};
//!
//! let cmp = compare(&config, &feed)?;
//! if let Some(board) = &cmp.scoreboard {
//!     println!("{board}");
//! }
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! for run in &cmp.runs {
//!     writer.write_run(run)?;
//! }
//! writer.finish()?;
//! ```

pub mod advice;
pub mod compare;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod scoreboard;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use advice::{
    build_prompt, describe_scenario, parse_chat_response, parse_recommendation, recommend_or_default,
    AdviceError, Recommendation, Recommender, SavedResponse, DEFAULT_POLICY,
};
pub use compare::{compare, compare_policies, Comparison};
pub use csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use observer::OutputObserver;
pub use row::{ResultRow, TellerRow, TickRow};
pub use scoreboard::Scoreboard;
pub use text::RunReport;
pub use writer::OutputWriter;
