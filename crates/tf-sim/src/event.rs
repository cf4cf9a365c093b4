//! Per-tick event log.

use std::fmt;

use tf_core::{CustomerId, TellerId, Tick};

use crate::Policy;

/// Something that happened during a tick, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SimEvent {
    Arrived { customer: CustomerId, service: u64 },
    NoArrival,
    Queued { customer: CustomerId },
    /// The queue was full; the customer left without service.
    Balked { customer: CustomerId },
    Finished { customer: CustomerId, teller: TellerId },
    Assigned { customer: CustomerId, teller: TellerId, service: u64, wait: u64 },
}

impl SimEvent {
    /// Short lowercase tag, used as the CSV `event` column.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::Arrived { .. } => "arrived",
            SimEvent::NoArrival => "no_arrival",
            SimEvent::Queued { .. } => "queued",
            SimEvent::Balked { .. } => "balked",
            SimEvent::Finished { .. } => "finished",
            SimEvent::Assigned { .. } => "assigned",
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SimEvent::Arrived { customer, service } => {
                write!(f, "Customer {customer} arrives with transaction time {service} unit(s).")
            }
            SimEvent::NoArrival => f.write_str("No new customer!"),
            SimEvent::Queued { customer } => write!(f, "Customer {customer} waits in the customer queue."),
            SimEvent::Balked { customer } => write!(f, "Customer queue full. Customer {customer} leaves..."),
            SimEvent::Finished { customer, teller } => {
                write!(f, "Customer {customer} is done. Teller {teller} is free.")
            }
            SimEvent::Assigned { customer, teller, service, .. } => {
                write!(f, "Customer {customer} gets teller {teller} for {service} unit(s).")
            }
        }
    }
}

/// Everything observable about one tick.
///
/// The counts are sampled at the start of the tick, before the arrival.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRecord {
    /// Policy of the run that produced this tick.
    pub policy:   Policy,
    pub tick:     Tick,
    pub queued:   usize,
    pub capacity: usize,
    pub busy:     usize,
    pub free:     usize,
    /// `busy * 100 / tellers`, truncated; 0 with no tellers.
    pub utilization_percent: u32,
    pub events:   Vec<SimEvent>,
}

impl TickRecord {
    pub fn assignments(&self) -> impl Iterator<Item = &SimEvent> + '_ {
        self.events.iter().filter(|e| matches!(e, SimEvent::Assigned { .. }))
    }
}

/// Renders the tick as a block of log lines.  Time is shown 1-based.
impl fmt::Display for TickRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time {}: Queue {}/{}, Busy Tellers: {}, Free Tellers: {}",
            self.tick.0 + 1,
            self.queued,
            self.capacity,
            self.busy,
            self.free,
        )?;
        for event in &self.events {
            write!(f, "\n\t{event}")?;
        }
        Ok(())
    }
}
