//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every run owns its own `SimRng`, seeded from the configuration's master
//! seed.  Comparison mode opens one `SimRng` per policy from the *same* seed,
//! so all policies see an identical arrival stream without sharing state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only from the single thread driving one run.  Runs executed in
/// parallel each hold their own instance.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A fresh, non-reproducible seed for runs configured without one.
    pub fn entropy_seed() -> u64 {
        rand::random::<u64>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
