//! `tf-sim`: tick loop orchestrator for the tellerflow simulator.
//!
//! # Tick skeleton
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Sample  : queue length and busy/free counts, before anything moves.
//!   ② Arrival : pull one Arrival from the ArrivalSource; a customer takes
//!                the next id whether or not the queue has room.
//!   ③ Enqueue : admit into the bounded queue, or balk.
//!   ④ Release : busy tellers whose interval ends this tick become free.
//!   ⑤ Dispatch: the run's Policy binds free tellers to waiting customers.
//! ```
//!
//! Release always precedes dispatch, so a teller finishing at tick `t` can
//! take a new customer at tick `t`.
//!
//! # Policies
//!
//! | Policy             | Rule                                                        |
//! |--------------------|-------------------------------------------------------------|
//! | `LeastFinishTime`  | Longest-free teller takes the front customer, until one side runs out |
//! | `RoundRobin`       | A persistent cursor offers each teller one chance per tick  |
//! | `LeastWorkLeft`    | Teller with the earliest finish point, stop if it is busy   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tf_arrival::ArrivalFeed;
//! use tf_sim::{run_policy, Policy};
//!
//! let feed = ArrivalFeed::from_config(&config)?;
//! let out = run_policy(&config, Policy::LeastWorkLeft, feed.open(&config))?;
//! println!("average wait {:.2}", out.result.avg_wait);
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod observer;
pub mod policy;
pub mod result;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use dispatch::{Assignment, Dispatcher};
pub use error::{SimError, SimResult};
pub use event::{SimEvent, TickRecord};
pub use observer::{NoopObserver, SimObserver};
pub use policy::{ParsePolicyError, Policy};
pub use result::AlgorithmResult;
pub use sim::{RunOutput, Sim};
pub use stats::StatsCollector;

use tf_arrival::ArrivalSource;
use tf_core::SimConfig;

/// Validate `config`, run `policy` to completion against `source`, and return
/// the tick log, teller snapshots, and aggregate result.
pub fn run_policy<A: ArrivalSource>(
    config: &SimConfig,
    policy: Policy,
    source: A,
) -> SimResult<RunOutput> {
    SimBuilder::new(config.clone(), policy, source)
        .build()?
        .run(&mut NoopObserver)
}
