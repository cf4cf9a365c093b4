//! tellerflow: bank teller floor simulator.
//!
//! Runs one dispatch policy (or all three, with `--compare`) against a
//! seeded random or replayed arrival stream and prints the tick log and an
//! end-of-run report.
//!
//! ```text
//! tellerflow --ticks 200 --tellers 4 --queue 8 --seed 7 --compare --out ./output
//! tellerflow --config scenario.json --replay data/sample_replay.txt -v
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};

use tf_arrival::{ArrivalError, ArrivalFeed, ReplayFallback};
use tf_core::{DataSource, SimConfig, SimRng};
use tf_report::{
    compare, describe_scenario, recommend_or_default, CsvWriter, OutputObserver, OutputWriter,
    RunReport, SavedResponse, DEFAULT_POLICY,
};
use tf_sim::{AlgorithmResult, Policy, RunOutput, SimBuilder, SimObserver, TickRecord};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Bank teller floor simulator.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// JSON configuration file.  Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate (0..=10000).
    #[arg(long)]
    ticks: Option<u64>,

    /// Longest transaction time in ticks (0..=500).
    #[arg(long)]
    max_service: Option<u64>,

    /// Arrival chance per tick in percent (1..=100).
    #[arg(long)]
    chance: Option<u32>,

    /// Number of tellers (0..=10).
    #[arg(long)]
    tellers: Option<u32>,

    /// Queue capacity (0..=50).
    #[arg(long)]
    queue: Option<u32>,

    /// Random seed.  Omit for a fresh seed each invocation.
    #[arg(long)]
    seed: Option<u64>,

    /// Replay arrivals from a file of whitespace-separated integer pairs.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Stop arrivals once the replay file is exhausted.
    #[arg(long)]
    no_arrival_on_exhaustion: bool,

    /// Dispatch policy: lft (greedy), rr (round-robin) or lwl (least work left).
    #[arg(long, short)]
    policy: Option<Policy>,

    /// Run every policy on the same arrivals and rank them.
    #[arg(long)]
    compare: bool,

    /// Saved recommendation response, consulted when --policy is absent.
    #[arg(long)]
    advice: Option<PathBuf>,

    /// Directory for ticks.csv, tellers.csv and results.csv.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print aggregate results as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Do not print the per-tick log.
    #[arg(long, short)]
    quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn apply_overrides(&self, config: &mut SimConfig) {
        if let Some(v) = self.ticks {
            config.total_ticks = v;
        }
        if let Some(v) = self.max_service {
            config.max_service_time = v;
        }
        if let Some(v) = self.chance {
            config.arrival_chance_percent = v;
        }
        if let Some(v) = self.tellers {
            config.teller_count = v;
        }
        if let Some(v) = self.queue {
            config.queue_capacity = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(path) = &self.replay {
            config.data_source = DataSource::Replay { path: path.clone() };
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

/// Prints every tick record as it is produced.
struct Echo {
    quiet: bool,
}

impl SimObserver for Echo {
    fn on_run_start(&mut self, policy: Policy, _config: &SimConfig) {
        if !self.quiet {
            println!("--- {policy} ---");
        }
    }

    fn on_tick_end(&mut self, record: &TickRecord) {
        if !self.quiet {
            println!("{record}");
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    args.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Open the configured arrival feed.  An unreadable replay file falls back
/// to random arrivals.
fn open_feed(args: &Args, config: &mut SimConfig) -> Result<ArrivalFeed> {
    let feed = match ArrivalFeed::from_config(config) {
        Ok(feed) => feed,
        Err(e @ ArrivalError::ReplayFile { .. }) => {
            warn!("{e}; falling back to random arrivals");
            config.data_source = DataSource::Random;
            let seed = config.seed.unwrap_or_else(SimRng::entropy_seed);
            ArrivalFeed::Random { seed }
        }
        Err(e) => return Err(e.into()),
    };

    let fallback = if args.no_arrival_on_exhaustion {
        ReplayFallback::NoArrival
    } else {
        ReplayFallback::ZeroPair
    };
    if let ArrivalFeed::Random { seed } = &feed {
        info!("arrival seed {seed}");
    }
    Ok(feed.with_fallback(fallback))
}

fn choose_policy(args: &Args, config: &SimConfig) -> Policy {
    if let Some(policy) = args.policy {
        return policy;
    }
    let Some(path) = &args.advice else {
        return DEFAULT_POLICY;
    };

    let rec = recommend_or_default(&SavedResponse::new(path), &describe_scenario(config));
    if !args.json {
        println!("Recommended policy: {}", rec.policy);
        if !rec.explanation.is_empty() {
            println!("  {}", rec.explanation);
        }
        println!();
    }
    rec.policy
}

// ── Modes ─────────────────────────────────────────────────────────────────────

fn run_single(args: &Args, config: &SimConfig, feed: &ArrivalFeed) -> Result<Vec<RunOutput>> {
    let policy = choose_policy(args, config);
    let sim = SimBuilder::new(config.clone(), policy, feed.open(config)).build()?;
    let echo = Echo { quiet: args.quiet || args.json };

    let output = match &args.out {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let mut observer = (echo, OutputObserver::new(writer));
            let output = sim.run(&mut observer)?;
            observer.1.finish().context("writing CSV output")?;
            info!("CSV output written to {}", dir.display());
            output
        }
        None => {
            let mut observer = echo;
            sim.run(&mut observer)?
        }
    };
    Ok(vec![output])
}

fn run_compare(args: &Args, config: &SimConfig, feed: &ArrivalFeed) -> Result<Vec<RunOutput>> {
    let comparison = compare(config, feed)?;

    if !args.quiet && !args.json {
        for run in &comparison.runs {
            println!("--- {} ---", run.policy());
            for record in &run.log {
                println!("{record}");
            }
        }
    }

    if let Some(dir) = &args.out {
        let mut writer = CsvWriter::new(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        for run in &comparison.runs {
            writer.write_run(run)?;
        }
        writer.finish().context("writing CSV output")?;
        info!("CSV output written to {}", dir.display());
    }

    if !args.json {
        if let Some(board) = &comparison.scoreboard {
            println!("{board}");
        }
    }
    Ok(comparison.runs)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let mut config = load_config(&args)?;
    let feed = open_feed(&args, &mut config)?;

    if !args.json {
        println!("=== tellerflow ===");
        println!("{}", describe_scenario(&config));
        println!();
    }

    let runs = if args.compare {
        run_compare(&args, &config, &feed)?
    } else {
        run_single(&args, &config, &feed)?
    };

    if args.json {
        let results: Vec<&AlgorithmResult> = runs.iter().map(|r| &r.result).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for run in &runs {
            println!();
            print!("{}", RunReport(run));
        }
    }
    Ok(())
}
