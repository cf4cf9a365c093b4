//! Run several policies against identical arrivals.

use log::info;

use tf_arrival::ArrivalFeed;
use tf_core::SimConfig;
use tf_sim::{run_policy, AlgorithmResult, Policy, RunOutput, SimResult};

use crate::{ReportResult, Scoreboard};

/// The outcome of [`compare`]: one run per policy, in policy order, and a
/// scoreboard when there are at least two runs.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub runs:       Vec<RunOutput>,
    pub scoreboard: Option<Scoreboard>,
}

impl Comparison {
    /// Aggregate results in run order.
    pub fn results(&self) -> impl Iterator<Item = &AlgorithmResult> + '_ {
        self.runs.iter().map(|r| &r.result)
    }

    pub fn run(&self, policy: Policy) -> Option<&RunOutput> {
        self.runs.iter().find(|r| r.policy() == policy)
    }
}

/// Run every policy in [`Policy::ALL`].
pub fn compare(config: &SimConfig, feed: &ArrivalFeed) -> ReportResult<Comparison> {
    compare_policies(config, feed, &Policy::ALL)
}

/// Run `policies` in order.  Each run opens its own generator from `feed`,
/// so all of them see the same arrivals.
pub fn compare_policies(
    config:   &SimConfig,
    feed:     &ArrivalFeed,
    policies: &[Policy],
) -> ReportResult<Comparison> {
    info!("comparing {} policies over {} ticks", policies.len(), config.total_ticks);

    let runs = run_all(config, feed, policies)?;
    let scoreboard = Scoreboard::new(runs.iter().map(|r| &r.result));
    if let Some(board) = &scoreboard {
        info!("lowest average wait: {}", board.lowest_wait);
    }
    Ok(Comparison { runs, scoreboard })
}

fn run_one(config: &SimConfig, feed: &ArrivalFeed, policy: Policy) -> SimResult<RunOutput> {
    run_policy(config, policy, feed.open(config))
}

fn run_all(config: &SimConfig, feed: &ArrivalFeed, policies: &[Policy]) -> SimResult<Vec<RunOutput>> {
    #[cfg(not(feature = "parallel"))]
    {
        policies.iter().map(|&p| run_one(config, feed, p)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed collect keeps policy order.
        policies.par_iter().map(|&p| run_one(config, feed, p)).collect()
    }
}
