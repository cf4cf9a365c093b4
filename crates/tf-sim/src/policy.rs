//! The closed set of dispatch policies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How free tellers are matched with waiting customers each tick.
///
/// All tellers work at the same speed, so every policy is work-conserving in
/// the sense that matters for waits: no teller sits idle while the queue is
/// non-empty at the end of a tick.  The policies differ in *which* teller
/// takes a customer, which shows up in per-teller utilization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    /// "Greedy": the teller free the longest takes the front customer.
    LeastFinishTime,
    RoundRobin,
    LeastWorkLeft,
}

impl Policy {
    /// Every policy, in comparison order.
    pub const ALL: [Policy; 3] = [Policy::LeastFinishTime, Policy::RoundRobin, Policy::LeastWorkLeft];

    /// Short canonical name, used in CSV output and recommendations.
    pub fn name(self) -> &'static str {
        match self {
            Policy::LeastFinishTime => "LFT",
            Policy::RoundRobin => "RoundRobin",
            Policy::LeastWorkLeft => "LeastWorkLeft",
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Policy::LeastFinishTime => "Greedy (Least Finish Time)",
            Policy::RoundRobin => "Round Robin",
            Policy::LeastWorkLeft => "Least Work Left",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown policy `{0}` (expected LFT, RoundRobin or LeastWorkLeft)")]
pub struct ParsePolicyError(pub String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    /// Case-insensitive.  Spaces, dashes, underscores and parentheses are
    /// ignored, so `"Round Robin"`, `"round-robin"` and `"RoundRobin"` all
    /// parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "lft" | "greedy" | "leastfinishtime" | "greedyleastfinishtime" => Ok(Policy::LeastFinishTime),
            "rr" | "roundrobin" => Ok(Policy::RoundRobin),
            "lwl" | "leastworkleft" => Ok(Policy::LeastWorkLeft),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}
