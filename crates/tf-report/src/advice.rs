//! The recommendation boundary.
//!
//! An external adviser (typically a chat-completion model) suggests which
//! policy suits a scenario.  This module owns the prompt text and the parsing
//! of the reply; transport is left to [`Recommender`] implementations.
//! A failed recommendation never reaches the simulation:
//! [`recommend_or_default`] turns every error into the default policy.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use tf_core::SimConfig;
use tf_sim::Policy;

/// Policy used whenever no recommendation is available.
pub const DEFAULT_POLICY: Policy = Policy::LeastFinishTime;

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("response has no message content")]
    MissingContent,

    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("malformed recommendation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown algorithm `{0}`")]
    UnknownPolicy(String),

    #[error("recommender unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub policy:      Policy,
    pub explanation: String,
    /// `false` when this is the fallback after a failure.
    pub succeeded:   bool,
}

impl Recommendation {
    /// The default policy, with a note explaining why.
    pub fn fallback(reason: &AdviceError) -> Self {
        Recommendation {
            policy:      DEFAULT_POLICY,
            explanation: format!("No recommendation available ({reason}). Using the default policy."),
            succeeded:   false,
        }
    }
}

/// Something that can suggest a policy for a free-text scenario.
pub trait Recommender {
    fn recommend(&self, scenario: &str) -> Result<Recommendation, AdviceError>;
}

/// Ask `recommender`, falling back to [`DEFAULT_POLICY`] on any error.
pub fn recommend_or_default<R: Recommender + ?Sized>(recommender: &R, scenario: &str) -> Recommendation {
    match recommender.recommend(scenario) {
        Ok(rec) => rec,
        Err(e) => {
            warn!("recommendation failed: {e}; falling back to {DEFAULT_POLICY}");
            Recommendation::fallback(&e)
        }
    }
}

// ── Prompt ────────────────────────────────────────────────────────────────────

/// One-line description of a configuration, suitable as a scenario.
pub fn describe_scenario(config: &SimConfig) -> String {
    format!(
        "{} tellers, queue capacity {}, {}% chance of an arrival each tick, \
         transaction times 1-{} units, {} ticks.",
        config.teller_count,
        config.queue_capacity,
        config.arrival_chance_percent,
        config.effective_max_service(),
        config.total_ticks,
    )
}

/// The full prompt sent to a chat model for `scenario`.
pub fn build_prompt(scenario: &str) -> String {
    format!(
        r#"You advise banks on how to assign waiting customers to tellers.

Available algorithms:
1. Greedy (Least Finish Time): the teller that has been free the longest takes the next customer.
2. Round Robin: tellers are offered customers in a fixed cyclic order.
3. Least Work Left: the next customer goes to the teller that will finish its current work soonest.

Least Work Left copes best when transaction times vary widely or arrivals are bursty.
Greedy is adequate when transactions are uniform and the queue is usually short.

Scenario:
{scenario}

Which algorithm is best and why? Respond ONLY with a JSON object:
{{
  "algorithm": "Greedy|Round Robin|Least Work Left",
  "explanation": "..."
}}
"#
    )
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawAdvice {
    algorithm:   String,
    #[serde(default)]
    explanation: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Extract a recommendation from model output text.
///
/// Code fences are ignored; the JSON object is taken from the first `{` to
/// the last `}`.
pub fn parse_recommendation(text: &str) -> Result<Recommendation, AdviceError> {
    let text = strip_fences(text.trim());
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(AdviceError::NoJsonObject);
    };
    if end < start {
        return Err(AdviceError::NoJsonObject);
    }

    let raw: RawAdvice = serde_json::from_str(&text[start..=end])?;
    let policy = raw
        .algorithm
        .parse::<Policy>()
        .map_err(|_| AdviceError::UnknownPolicy(raw.algorithm.clone()))?;
    debug!("recommendation parsed: {}", policy.name());

    Ok(Recommendation { policy, explanation: raw.explanation, succeeded: true })
}

/// Parse an OpenAI-style chat completion body, reading
/// `choices[0].message.content`.
pub fn parse_chat_response(body: &str) -> Result<Recommendation, AdviceError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(AdviceError::MissingContent)?;
    parse_recommendation(&content)
}

fn strip_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body)
}

// ── SavedResponse ─────────────────────────────────────────────────────────────

/// A [`Recommender`] that reads a previously saved response from disk.
///
/// The file may hold either a full chat completion body or just the model's
/// message text.  It is read on every call, so a missing file surfaces as
/// [`AdviceError::Unavailable`] rather than failing at construction.
#[derive(Clone, Debug)]
pub struct SavedResponse {
    path: PathBuf,
}

impl SavedResponse {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Recommender for SavedResponse {
    fn recommend(&self, _scenario: &str) -> Result<Recommendation, AdviceError> {
        let body = fs::read_to_string(&self.path)
            .map_err(|e| AdviceError::Unavailable(format!("{}: {e}", self.path.display())))?;
        match parse_chat_response(&body) {
            Err(AdviceError::Json(_)) => parse_recommendation(&body),
            other => other,
        }
    }
}
