//! `BusyPool`: busy tellers keyed by the tick their interval ends.
//!
//! The release pass only needs the tellers finishing *this* tick, so the
//! pool maps end ticks to tellers and drains one key per tick instead of
//! scanning every teller.
//!
//! Tellers sharing an end tick are kept in the order they became busy, which
//! is also the order they are released and appended to the free pool.

use std::collections::BTreeMap;

use tf_core::{TellerId, Tick};

#[derive(Default, Clone, Debug)]
pub struct BusyPool {
    inner: BTreeMap<Tick, Vec<TellerId>>,
    /// Cached total teller count for O(1) `len()`.
    total: usize,
}

impl BusyPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `teller` is busy until `end`.
    pub fn push(&mut self, end: Tick, teller: TellerId) {
        self.inner.entry(end).or_default().push(teller);
        self.total += 1;
    }

    /// Remove and return all tellers whose interval ends exactly at `tick`.
    ///
    /// Returns `None` if nobody finishes that tick (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<TellerId>> {
        let tellers = self.inner.remove(&tick)?;
        self.total -= tellers.len();
        Some(tellers)
    }

    /// The earliest end tick in the pool, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// All busy tellers, earliest end first.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, TellerId)> + '_ {
        self.inner
            .iter()
            .flat_map(|(&end, tellers)| tellers.iter().map(move |&t| (end, t)))
    }

    pub fn contains(&self, teller: TellerId) -> bool {
        self.iter().any(|(_, t)| t == teller)
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
