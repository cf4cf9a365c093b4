//! `AlgorithmResult`: the aggregate outcome of one policy run.

use crate::Policy;

/// Aggregate metrics for one completed run.  Built once by
/// [`StatsCollector::finish`](crate::StatsCollector::finish).
///
/// Percentages are in `0.0..=100.0`.  Every ratio is 0 when its denominator
/// is 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmResult {
    pub policy:             Policy,
    /// Mean ticks between arrival and assignment, over assigned customers.
    pub avg_wait:           f64,
    pub max_wait:           u64,
    /// Busy teller-ticks over all teller-ticks, sampled at tick start.
    pub avg_utilization:    f64,
    /// `served / arrived`.
    pub queue_efficiency:   f64,
    /// Busy teller-ticks per served customer.
    pub avg_service_time:   f64,
    pub peak_queue_length:  usize,
    /// Shortest queue seen at a tick start; `None` if no tick ran.
    pub min_queue_length:   Option<usize>,
    pub avg_queue_length:   f64,
    pub customers_arrived:  u64,
    /// Customers assigned to a teller (not necessarily finished).
    pub customers_served:   u64,
    pub customers_balked:   u64,
    /// Customers still waiting in the queue when the run ended.
    pub customers_unserved: u64,
}

impl AlgorithmResult {
    /// `arrived == served + balked + unserved`.
    pub fn is_conserved(&self) -> bool {
        self.customers_arrived == self.customers_served + self.customers_balked + self.customers_unserved
    }
}
