//! Fluent builder for constructing a [`Sim`].

use tf_arrival::ArrivalSource;
use tf_core::{CustomerId, SimConfig, Tick};
use tf_floor::ServiceArea;

use crate::{Dispatcher, Policy, Sim, SimResult, StatsCollector};

/// Fluent builder for [`Sim<A>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: ticks, tellers, queue capacity, …
/// - [`Policy`]: the dispatch rule for this run
/// - `A: ArrivalSource`: usually an opened [`tf_arrival::ArrivalFeed`]
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default |
/// |---------------------|---------|
/// | `.keep_log(bool)`   | `true`  |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config, Policy::RoundRobin, feed.open(&config))
///     .keep_log(false)
///     .build()?;
/// let out = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<A: ArrivalSource> {
    config:   SimConfig,
    policy:   Policy,
    arrivals: A,
    keep_log: bool,
}

impl<A: ArrivalSource> SimBuilder<A> {
    pub fn new(config: SimConfig, policy: Policy, arrivals: A) -> Self {
        Self { config, policy, arrivals, keep_log: true }
    }

    /// Whether to retain a [`TickRecord`](crate::TickRecord) per tick in the
    /// run output.  Observers see every record either way.
    pub fn keep_log(mut self, keep: bool) -> Self {
        self.keep_log = keep;
        self
    }

    /// Validate the configuration and return a [`Sim`] positioned at tick 0.
    pub fn build(self) -> SimResult<Sim<A>> {
        self.config.validate()?;

        let area = ServiceArea::new(self.config.teller_count, self.config.queue_capacity);
        let log = if self.keep_log {
            Vec::with_capacity(self.config.total_ticks as usize)
        } else {
            Vec::new()
        };

        Ok(Sim {
            config:        self.config,
            dispatcher:    Dispatcher::new(self.policy),
            arrivals:      self.arrivals,
            area,
            stats:         StatsCollector::new(),
            next_customer: CustomerId::FIRST,
            now:           Tick::ZERO,
            keep_log:      self.keep_log,
            log,
        })
    }
}
