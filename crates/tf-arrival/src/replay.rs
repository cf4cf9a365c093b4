//! File replay of pre-recorded arrival data.
//!
//! # File format
//!
//! Whitespace-separated integers, consumed two at a time as `(a, b)`:
//!
//! ```text
//! 17 3
//! 85 240
//! 42 9
//! ```
//!
//! Each pair decodes to
//!
//! ```text
//! arrived = (a mod 100) + 1 ≤ arrival_chance_percent
//! service = (b mod max_service_time) + 1
//! ```
//!
//! `mod` is Euclidean, so negative inputs still give a service time ≥ 1.
//!
//! # Malformed input
//!
//! Parsing stops at the first token that is not an integer; everything
//! before it is kept.  An odd trailing value is paired with `0`.  Neither
//! case is an error.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use log::warn;

use tf_core::{SimConfig, Tick};

use crate::{Arrival, ArrivalError, ArrivalResult, ArrivalSource};

// ── ReplayTrace ───────────────────────────────────────────────────────────────

/// An immutable, cheaply cloneable sequence of `(a, b)` records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayTrace {
    records: Arc<[(i64, i64)]>,
}

impl ReplayTrace {
    pub fn from_pairs(pairs: Vec<(i64, i64)>) -> Self {
        Self { records: pairs.into() }
    }

    /// Parse whitespace-separated integers.  Never fails.
    pub fn parse(text: &str) -> Self {
        let mut values: Vec<i64> = Vec::new();
        for token in text.split_whitespace() {
            match token.parse::<i64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    warn!(
                        "replay data: stopping at non-integer token {token:?} after {} values",
                        values.len()
                    );
                    break;
                }
            }
        }

        let pairs = values
            .chunks(2)
            .map(|c| (c[0], c.get(1).copied().unwrap_or(0)))
            .collect();
        Self::from_pairs(pairs)
    }

    /// Like [`parse`](Self::parse) but reads from any `Read` source.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; only an I/O failure
    /// is an error.
    pub fn from_reader<R: Read>(mut reader: R) -> ArrivalResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Load a replay file.
    pub fn from_path(path: &Path) -> ArrivalResult<Self> {
        let file = std::fs::File::open(path).map_err(|source| ArrivalError::ReplayFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(i64, i64)> {
        self.records.get(index).copied()
    }
}

// ── ReplayFallback ────────────────────────────────────────────────────────────

/// What a replay source yields once its trace is exhausted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReplayFallback {
    /// Treat missing values as `a = b = 0`.  Because the arrival chance is at
    /// least 1 %, every exhausted tick becomes an arrival with service 1.
    #[default]
    ZeroPair,
    /// No arrivals after the trace ends.
    NoArrival,
}

// ── ReplayArrivals ────────────────────────────────────────────────────────────

/// An [`ArrivalSource`] reading one record of a [`ReplayTrace`] per tick.
#[derive(Clone, Debug)]
pub struct ReplayArrivals {
    trace:        ReplayTrace,
    cursor:       usize,
    chance:       u32,
    max_service:  u64,
    fallback:     ReplayFallback,
    exhausted_at: Option<Tick>,
}

impl ReplayArrivals {
    pub fn new(trace: ReplayTrace, fallback: ReplayFallback, config: &SimConfig) -> Self {
        Self {
            trace,
            cursor: 0,
            chance: config.arrival_chance_percent,
            max_service: config.effective_max_service(),
            fallback,
            exhausted_at: None,
        }
    }

    /// Records not yet consumed.
    pub fn remaining(&self) -> usize {
        self.trace.len().saturating_sub(self.cursor)
    }

    /// The first tick served by the fallback, if the trace ran out.
    pub fn exhausted_at(&self) -> Option<Tick> {
        self.exhausted_at
    }
}

impl ArrivalSource for ReplayArrivals {
    fn next(&mut self, tick: Tick) -> Arrival {
        if let Some((a, b)) = self.trace.get(self.cursor) {
            self.cursor += 1;
            return decode(a, b, self.chance, self.max_service);
        }

        if self.exhausted_at.is_none() {
            warn!(
                "replay data exhausted at {tick} after {} records; using {:?} fallback",
                self.trace.len(),
                self.fallback
            );
            self.exhausted_at = Some(tick);
        }

        match self.fallback {
            ReplayFallback::ZeroPair => decode(0, 0, self.chance, self.max_service),
            ReplayFallback::NoArrival => Arrival::NONE,
        }
    }
}

/// Map one raw `(a, b)` record to an [`Arrival`].
pub fn decode(a: i64, b: i64, chance: u32, max_service: u64) -> Arrival {
    let max_service = max_service.max(1) as i64;
    Arrival {
        arrived: a.rem_euclid(100) + 1 <= i64::from(chance),
        service: b.rem_euclid(max_service) as u64 + 1,
    }
}
