//! Run configuration and its boundary validation.
//!
//! A `SimConfig` is immutable for the duration of a run.  Validation happens
//! once, before the run starts ([`SimConfig::validate`]); an out-of-range
//! value is rejected as a whole and never partially applied.

use std::path::PathBuf;

use crate::{CoreError, CoreResult, Tick};

// ── Limits ────────────────────────────────────────────────────────────────────

pub const MAX_TOTAL_TICKS:      u64 = 10_000;
pub const MAX_SERVICE_TIME:     u64 = 500;
pub const MAX_TELLERS:          u32 = 10;
pub const MAX_QUEUE_CAPACITY:   u32 = 50;

// ── DataSource ────────────────────────────────────────────────────────────────

/// Where each tick's `(arrived?, service-time)` pair comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DataSource {
    /// Seeded pseudo-random draws (see [`SimConfig::seed`]).
    #[default]
    Random,
    /// Integer pairs replayed from a whitespace-separated text file.
    Replay { path: PathBuf },
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from command-line flags or loaded from a JSON file by the
/// application crate and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Ticks to simulate; the loop covers `0..total_ticks`.  Max 10 000.
    pub total_ticks: u64,

    /// Upper bound (inclusive) of a customer's service duration.  Max 500.
    /// Zero is accepted and behaves like 1.
    pub max_service_time: u64,

    /// Chance in percent (1..=100) that a customer arrives on a given tick.
    pub arrival_chance_percent: u32,

    /// Number of tellers, 0..=10.
    pub teller_count: u32,

    /// Waiting-queue capacity, 0..=50.
    pub queue_capacity: u32,

    /// Arrival data source.
    pub data_source: DataSource,

    /// Master RNG seed for [`DataSource::Random`].  `None` draws a fresh seed
    /// per feed; the same seed always produces identical results.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:            100,
            max_service_time:       20,
            arrival_chance_percent: 50,
            teller_count:           3,
            queue_capacity:         10,
            data_source:            DataSource::Random,
            seed:                   None,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Service-time bound actually used by the arrival generators.
    #[inline]
    pub fn effective_max_service(&self) -> u64 {
        self.max_service_time.max(1)
    }

    /// Check every parameter against its allowed range.
    pub fn validate(&self) -> CoreResult<()> {
        check("total_ticks", self.total_ticks, 0, MAX_TOTAL_TICKS)?;
        check("max_service_time", self.max_service_time, 0, MAX_SERVICE_TIME)?;
        check("arrival_chance_percent", self.arrival_chance_percent.into(), 1, 100)?;
        check("teller_count", self.teller_count.into(), 0, MAX_TELLERS.into())?;
        check("queue_capacity", self.queue_capacity.into(), 0, MAX_QUEUE_CAPACITY.into())?;
        Ok(())
    }
}

fn check(field: &'static str, value: u64, min: u64, max: u64) -> CoreResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::OutOfRange { field, value, min, max })
    }
}
