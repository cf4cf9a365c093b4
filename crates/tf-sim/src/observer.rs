//! Simulation observer trait for progress reporting and data collection.

use tf_core::{SimConfig, Tick};

use crate::{Policy, RunOutput, TickRecord};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: live log printer
///
/// ```rust,ignore
/// struct Echo;
///
/// impl SimObserver for Echo {
///     fn on_tick_end(&mut self, record: &TickRecord) {
///         println!("{record}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick of a run.
    fn on_run_start(&mut self, _policy: Policy, _config: &SimConfig) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with everything that happened in it.
    fn on_tick_end(&mut self, _record: &TickRecord) {}

    /// Called once after the final tick, with teller intervals closed.
    fn on_sim_end(&mut self, _output: &RunOutput) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fan out to two observers, first `.0` then `.1`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_run_start(&mut self, policy: Policy, config: &SimConfig) {
        self.0.on_run_start(policy, config);
        self.1.on_run_start(policy, config);
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, record: &TickRecord) {
        self.0.on_tick_end(record);
        self.1.on_tick_end(record);
    }

    fn on_sim_end(&mut self, output: &RunOutput) {
        self.0.on_sim_end(output);
        self.1.on_sim_end(output);
    }
}
