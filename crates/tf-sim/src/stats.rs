//! `StatsCollector`: running counters for one run.

use tf_floor::AreaCounts;

use crate::{AlgorithmResult, Policy};

/// Accumulates per-tick samples and per-customer counters.
///
/// Nothing here is destructive: [`finish`](Self::finish) reads the counters
/// and leaves them in place.
#[derive(Clone, Debug, Default)]
pub struct StatsCollector {
    samples:          u64,
    queue_total:      u64,
    peak_queue:       usize,
    min_queue:        Option<usize>,
    busy_ticks:       u64,
    idle_ticks:       u64,
    arrived:          u64,
    served:           u64,
    wait_total:       u64,
    max_wait:         u64,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tick-start sample and return the utilization sample
    /// (`busy * 100 / tellers`, integer, 0 with no tellers).
    pub fn sample(&mut self, counts: AreaCounts) -> u32 {
        let tellers = counts.busy + counts.free;

        self.samples += 1;
        self.queue_total += counts.queued as u64;
        self.peak_queue = self.peak_queue.max(counts.queued);
        self.min_queue = Some(self.min_queue.map_or(counts.queued, |m| m.min(counts.queued)));
        self.busy_ticks += counts.busy as u64;
        self.idle_ticks += counts.free as u64;

        if tellers == 0 { 0 } else { (counts.busy * 100 / tellers) as u32 }
    }

    pub fn record_arrival(&mut self) {
        self.arrived += 1;
    }

    pub fn record_assignment(&mut self, wait: u64) {
        self.served += 1;
        self.wait_total += wait;
        self.max_wait = self.max_wait.max(wait);
    }

    pub fn arrived(&self) -> u64 {
        self.arrived
    }

    pub fn served(&self) -> u64 {
        self.served
    }

    /// Busy teller-ticks summed over all samples.
    pub fn busy_ticks(&self) -> u64 {
        self.busy_ticks
    }

    pub fn idle_ticks(&self) -> u64 {
        self.idle_ticks
    }

    /// Build the run's [`AlgorithmResult`].  `balked` and `unserved` come from
    /// the service area.
    pub fn finish(&self, policy: Policy, balked: u64, unserved: u64) -> AlgorithmResult {
        AlgorithmResult {
            policy,
            avg_wait:           ratio(self.wait_total, self.served),
            max_wait:           self.max_wait,
            avg_utilization:    100.0 * ratio(self.busy_ticks, self.busy_ticks + self.idle_ticks),
            queue_efficiency:   100.0 * ratio(self.served, self.arrived),
            avg_service_time:   ratio(self.busy_ticks, self.served),
            peak_queue_length:  self.peak_queue,
            min_queue_length:   self.min_queue,
            avg_queue_length:   ratio(self.queue_total, self.samples),
            customers_arrived:  self.arrived,
            customers_served:   self.served,
            customers_balked:   balked,
            customers_unserved: unserved,
        }
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
