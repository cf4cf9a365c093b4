//! Plain data row types written by output backends.

use tf_floor::TellerSnapshot;
use tf_sim::{AlgorithmResult, Policy, SimEvent, TickRecord};

/// One tick of one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRow {
    pub policy:              &'static str,
    pub tick:                u64,
    /// Sampled at tick start.
    pub queued:              usize,
    pub busy:                usize,
    pub free:                usize,
    pub utilization_percent: u32,
    pub arrived:             bool,
    pub balked:              bool,
    pub finished:            u32,
    pub assigned:            u32,
}

impl From<&TickRecord> for TickRow {
    fn from(record: &TickRecord) -> Self {
        let mut row = TickRow {
            policy:              record.policy.name(),
            tick:                record.tick.0,
            queued:              record.queued,
            busy:                record.busy,
            free:                record.free,
            utilization_percent: record.utilization_percent,
            arrived:             false,
            balked:              false,
            finished:            0,
            assigned:            0,
        };
        for event in &record.events {
            match event {
                SimEvent::Arrived { .. } => row.arrived = true,
                SimEvent::Balked { .. } => row.balked = true,
                SimEvent::Finished { .. } => row.finished += 1,
                SimEvent::Assigned { .. } => row.assigned += 1,
                SimEvent::NoArrival | SimEvent::Queued { .. } => {}
            }
        }
        row
    }
}

/// End-of-run summary of one teller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TellerRow {
    pub policy:               &'static str,
    pub teller:               u32,
    pub customers_served:     u32,
    pub total_busy_time:      u64,
    pub total_free_time:      u64,
    pub utilization_percent:  f64,
    /// `None` if the teller never served anyone.
    pub avg_transaction_time: Option<f64>,
    pub max_idle_period:      Option<u64>,
    pub busy_at_end:          bool,
}

impl TellerRow {
    pub fn new(policy: Policy, snap: &TellerSnapshot) -> Self {
        TellerRow {
            policy:               policy.name(),
            teller:               snap.id.0,
            customers_served:     snap.customers_served,
            total_busy_time:      snap.total_busy_time,
            total_free_time:      snap.total_free_time,
            utilization_percent:  snap.utilization_percent,
            avg_transaction_time: snap.avg_transaction_time,
            max_idle_period:      snap.max_idle_period,
            busy_at_end:          snap.busy_at_end,
        }
    }
}

/// One policy run's aggregate result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub policy:             &'static str,
    pub avg_wait:           f64,
    pub max_wait:           u64,
    pub avg_utilization:    f64,
    pub queue_efficiency:   f64,
    pub avg_service_time:   f64,
    pub peak_queue_length:  usize,
    pub avg_queue_length:   f64,
    pub customers_arrived:  u64,
    pub customers_served:   u64,
    pub customers_balked:   u64,
    pub customers_unserved: u64,
}

impl From<&AlgorithmResult> for ResultRow {
    fn from(r: &AlgorithmResult) -> Self {
        ResultRow {
            policy:             r.policy.name(),
            avg_wait:           r.avg_wait,
            max_wait:           r.max_wait,
            avg_utilization:    r.avg_utilization,
            queue_efficiency:   r.queue_efficiency,
            avg_service_time:   r.avg_service_time,
            peak_queue_length:  r.peak_queue_length,
            avg_queue_length:   r.avg_queue_length,
            customers_arrived:  r.customers_arrived,
            customers_served:   r.customers_served,
            customers_balked:   r.customers_balked,
            customers_unserved: r.customers_unserved,
        }
    }
}
