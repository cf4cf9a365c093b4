//! Seeded pseudo-random arrivals.

use tf_core::{SimConfig, SimRng, Tick};

use crate::{Arrival, ArrivalSource};

/// Bernoulli arrivals with uniformly distributed service times.
///
/// Each tick draws `roll ∈ 1..=100` (a customer arrives iff
/// `roll ≤ arrival_chance_percent`) and `service ∈ 1..=max_service_time`.
/// Both values are drawn every tick, so the stream position depends only on
/// the tick count.
#[derive(Clone, Debug)]
pub struct RandomArrivals {
    rng:         SimRng,
    chance:      u32,
    max_service: u64,
}

impl RandomArrivals {
    pub fn new(seed: u64, config: &SimConfig) -> Self {
        Self {
            rng:         SimRng::new(seed),
            chance:      config.arrival_chance_percent,
            max_service: config.effective_max_service(),
        }
    }
}

impl ArrivalSource for RandomArrivals {
    fn next(&mut self, _tick: Tick) -> Arrival {
        let roll: u32 = self.rng.gen_range(1..=100);
        let service: u64 = self.rng.gen_range(1..=self.max_service);
        Arrival {
            arrived: roll <= self.chance,
            service,
        }
    }
}
