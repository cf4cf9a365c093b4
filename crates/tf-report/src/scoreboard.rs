//! `Scoreboard`: ranking and best performers across policy runs.

use std::fmt;

use tf_sim::{AlgorithmResult, Policy};

const RULE_WIDTH: usize = 96;

#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    /// Results ordered by average wait, lowest first.  Ties keep input order.
    pub ranking:             Vec<AlgorithmResult>,
    pub lowest_wait:         Policy,
    pub highest_utilization: Policy,
    pub best_efficiency:     Policy,
}

impl Scoreboard {
    /// Build a scoreboard from results in run order.  Returns `None` for
    /// fewer than two results, since there is nothing to compare.
    ///
    /// Each pick goes to the first result reaching the best value.
    pub fn new<'a, I>(results: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a AlgorithmResult>,
    {
        let results: Vec<AlgorithmResult> = results.into_iter().cloned().collect();
        if results.len() < 2 {
            return None;
        }

        let lowest_wait = pick(&results, |r, best| r.avg_wait < best.avg_wait);
        let highest_utilization = pick(&results, |r, best| r.avg_utilization > best.avg_utilization);
        let best_efficiency = pick(&results, |r, best| r.queue_efficiency > best.queue_efficiency);

        let mut ranking = results;
        ranking.sort_by(|a, b| a.avg_wait.total_cmp(&b.avg_wait));

        Some(Self { ranking, lowest_wait, highest_utilization, best_efficiency })
    }
}

fn pick(results: &[AlgorithmResult], better: impl Fn(&AlgorithmResult, &AlgorithmResult) -> bool) -> Policy {
    let mut best = &results[0];
    for r in &results[1..] {
        if better(r, best) {
            best = r;
        }
    }
    best.policy
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "{:^width$}", "ALGORITHM COMPARISON", width = RULE_WIDTH)?;
        writeln!(f, "{heavy}")?;
        writeln!(
            f,
            "{:<28} {:>9} {:>9} {:>12} {:>11} {:>11} {:>10}",
            "Algorithm", "Avg Wait", "Max Wait", "Utilization", "Queue Eff.", "Peak Queue", "Avg Queue",
        )?;
        writeln!(f, "{light}")?;
        for r in &self.ranking {
            writeln!(
                f,
                "{:<28} {:>9.2} {:>9} {:>11.2}% {:>10.2}% {:>11} {:>10.2}",
                r.policy.display_name(),
                r.avg_wait,
                r.max_wait,
                r.avg_utilization,
                r.queue_efficiency,
                r.peak_queue_length,
                r.avg_queue_length,
            )?;
        }
        writeln!(f, "{light}")?;
        writeln!(f, "Best performers")?;
        writeln!(f, "  Lowest avg wait time  : {}", self.lowest_wait)?;
        writeln!(f, "  Highest utilization   : {}", self.highest_utilization)?;
        writeln!(f, "  Best queue efficiency : {}", self.best_efficiency)?;
        write!(f, "{heavy}")
    }
}
