//! `ArrivalFeed`: a reusable recipe for opening arrival generators.

use log::debug;

use tf_core::{DataSource, SimConfig, SimRng, Tick};

use crate::{
    Arrival, ArrivalResult, ArrivalSource, RandomArrivals, ReplayArrivals, ReplayFallback,
    ReplayTrace,
};

/// Description of an arrival stream that can be opened any number of times.
///
/// Random feeds carry a resolved seed (never `None`), so every generator
/// opened from the same feed replays the same draws.  Replay feeds share the
/// parsed trace; each opened generator keeps its own cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrivalFeed {
    Random { seed: u64 },
    Replay { trace: ReplayTrace, fallback: ReplayFallback },
}

impl ArrivalFeed {
    /// Resolve the configured data source.
    ///
    /// A random source without a configured seed draws a fresh one here, once;
    /// a replay source reads its file.
    pub fn from_config(config: &SimConfig) -> ArrivalResult<Self> {
        match &config.data_source {
            DataSource::Random => {
                let seed = config.seed.unwrap_or_else(SimRng::entropy_seed);
                debug!("random arrival feed, seed {seed}");
                Ok(ArrivalFeed::Random { seed })
            }
            DataSource::Replay { path } => {
                let trace = ReplayTrace::from_path(path)?;
                debug!("replay arrival feed, {} records from {}", trace.len(), path.display());
                Ok(ArrivalFeed::Replay { trace, fallback: ReplayFallback::default() })
            }
        }
    }

    /// Replace the exhaustion fallback of a replay feed.  No effect on
    /// random feeds.
    pub fn with_fallback(self, fallback: ReplayFallback) -> Self {
        match self {
            ArrivalFeed::Replay { trace, .. } => ArrivalFeed::Replay { trace, fallback },
            random => random,
        }
    }

    /// Open a fresh generator positioned at the start of the stream.
    pub fn open(&self, config: &SimConfig) -> Arrivals {
        match self {
            ArrivalFeed::Random { seed } => Arrivals::Random(RandomArrivals::new(*seed, config)),
            ArrivalFeed::Replay { trace, fallback } => {
                Arrivals::Replay(ReplayArrivals::new(trace.clone(), *fallback, config))
            }
        }
    }
}

/// An opened [`ArrivalFeed`].
#[derive(Clone, Debug)]
pub enum Arrivals {
    Random(RandomArrivals),
    Replay(ReplayArrivals),
}

impl ArrivalSource for Arrivals {
    fn next(&mut self, tick: Tick) -> Arrival {
        match self {
            Arrivals::Random(r) => r.next(tick),
            Arrivals::Replay(r) => r.next(tick),
        }
    }
}
