//! `tf-core`: foundational types for the `tellerflow` bank-floor simulator.
//!
//! This crate is a dependency of every other `tf-*` crate.  It has no `tf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `TellerId`                              |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig`, `DataSource`, parameter limits           |
//! | [`rng`]         | `SimRng` (seeded, per-run)                            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DataSource, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, TellerId};
pub use rng::SimRng;
pub use time::Tick;
