//! The teller state machine.
//!
//! ```text
//!            free_to_busy(customer, t)
//!   ┌──────┐ ─────────────────────────▶ ┌──────┐
//!   │ Free │                            │ Busy │
//!   └──────┘ ◀───────────────────────── └──────┘
//!                  busy_to_free()
//! ```
//!
//! A teller's life is a contiguous sequence of free and busy intervals
//! starting at tick 0.  Each transition closes the current interval and
//! credits its length to `total_free_time` or `total_busy_time`;
//! [`Teller::close_interval`] credits the interval still open when the run
//! ends, so `total_busy_time + total_free_time` equals the run length.

use tf_core::{CustomerId, TellerId, Tick};

use crate::{Customer, FloorError, FloorResult};

// ── TellerState ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TellerState {
    Free,
    Busy(Customer),
}

impl TellerState {
    fn label(&self) -> &'static str {
        match self {
            TellerState::Free => "free",
            TellerState::Busy(_) => "busy",
        }
    }
}

// ── Teller ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Teller {
    id:             TellerId,
    state:          TellerState,
    interval_start: Tick,
    /// End of the current busy interval.  Meaningless while free.
    interval_end:   Tick,
    total_busy:     u64,
    total_free:     u64,
    served:         u32,
    idle_periods:   Vec<u64>,
    busy_periods:   Vec<u64>,
    closed_at:      Option<Tick>,
}

impl Teller {
    /// A free teller whose first free interval starts at tick 0.
    pub fn new(id: TellerId) -> Self {
        Self {
            id,
            state:          TellerState::Free,
            interval_start: Tick::ZERO,
            interval_end:   Tick::ZERO,
            total_busy:     0,
            total_free:     0,
            served:         0,
            idle_periods:   Vec::new(),
            busy_periods:   Vec::new(),
            closed_at:      None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> TellerId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> &TellerState {
        &self.state
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.state, TellerState::Free)
    }

    /// The customer being served, if busy.
    pub fn customer(&self) -> Option<&Customer> {
        match &self.state {
            TellerState::Free => None,
            TellerState::Busy(c) => Some(c),
        }
    }

    #[inline]
    pub fn interval_start(&self) -> Tick {
        self.interval_start
    }

    #[inline]
    pub fn interval_end(&self) -> Tick {
        self.interval_end
    }

    /// The tick at which this teller can take a new customer: `now` if free,
    /// otherwise the end of its busy interval.
    #[inline]
    pub fn finish_point(&self, now: Tick) -> Tick {
        match self.state {
            TellerState::Free => now,
            TellerState::Busy(_) => self.interval_end,
        }
    }

    pub fn total_busy_time(&self) -> u64 {
        self.total_busy
    }

    pub fn total_free_time(&self) -> u64 {
        self.total_free
    }

    pub fn customers_served(&self) -> u32 {
        self.served
    }

    /// Lengths of completed free intervals, oldest first.  Zero-length
    /// intervals are not recorded.
    pub fn idle_periods(&self) -> &[u64] {
        &self.idle_periods
    }

    /// Lengths of completed busy intervals, oldest first.
    pub fn busy_periods(&self) -> &[u64] {
        &self.busy_periods
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// End the current free interval at `now` and start serving `customer`.
    pub fn free_to_busy(&mut self, customer: Customer, now: Tick) -> FloorResult<()> {
        if !self.is_free() {
            return Err(self.invalid("start serving a customer"));
        }

        let idle = now.since(self.interval_start);
        if idle > 0 {
            self.idle_periods.push(idle);
        }
        self.total_free += idle;

        self.interval_start = now;
        self.interval_end = now + customer.service();
        self.state = TellerState::Busy(customer);
        self.served += 1;
        Ok(())
    }

    /// End the current busy interval and hand back the finished customer.
    ///
    /// The next free interval starts where the busy interval ended.
    pub fn busy_to_free(&mut self) -> FloorResult<Customer> {
        let customer = match std::mem::replace(&mut self.state, TellerState::Free) {
            TellerState::Busy(c) => c,
            TellerState::Free => return Err(self.invalid("finish a customer")),
        };

        let busy = self.interval_end.since(self.interval_start);
        if busy > 0 {
            self.busy_periods.push(busy);
        }
        self.total_busy += busy;
        self.interval_start = self.interval_end;
        Ok(customer)
    }

    /// Credit the open interval up to `end` to the matching total.
    ///
    /// Idempotent: only the first call has an effect.
    pub fn close_interval(&mut self, end: Tick) {
        if self.closed_at.is_some() {
            return;
        }
        let open = end.since(self.interval_start);
        match self.state {
            TellerState::Free => self.total_free += open,
            TellerState::Busy(_) => self.total_busy += open,
        }
        self.closed_at = Some(end);
    }

    /// Busy share of all accounted time, in percent.  0 when nothing has been
    /// accounted yet.
    pub fn utilization_percent(&self) -> f64 {
        let total = self.total_busy + self.total_free;
        if total == 0 {
            0.0
        } else {
            100.0 * self.total_busy as f64 / total as f64
        }
    }

    /// A read-only summary of this teller.
    pub fn snapshot(&self) -> TellerSnapshot {
        TellerSnapshot {
            id:                   self.id,
            busy_at_end:          !self.is_free(),
            current_customer:     self.customer().map(Customer::id),
            total_busy_time:      self.total_busy,
            total_free_time:      self.total_free,
            customers_served:     self.served,
            avg_transaction_time: ratio(self.total_busy, u64::from(self.served)),
            avg_idle_period:      mean(&self.idle_periods),
            max_idle_period:      self.idle_periods.iter().copied().max(),
            avg_busy_period:      mean(&self.busy_periods),
            max_busy_period:      self.busy_periods.iter().copied().max(),
            utilization_percent:  self.utilization_percent(),
        }
    }

    fn invalid(&self, attempted: &'static str) -> FloorError {
        FloorError::InvalidTransition {
            teller: self.id,
            state: self.state.label(),
            attempted,
        }
    }
}

fn ratio(num: u64, den: u64) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

fn mean(values: &[u64]) -> Option<f64> {
    ratio(values.iter().sum(), values.len() as u64)
}

// ── TellerSnapshot ────────────────────────────────────────────────────────────

/// End-of-run view of one teller, ready for rendering as text or a chart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TellerSnapshot {
    pub id:                   TellerId,
    pub busy_at_end:          bool,
    pub current_customer:     Option<CustomerId>,
    pub total_busy_time:      u64,
    pub total_free_time:      u64,
    pub customers_served:     u32,
    /// `total_busy_time / customers_served`; `None` if nobody was served.
    pub avg_transaction_time: Option<f64>,
    pub avg_idle_period:      Option<f64>,
    pub max_idle_period:      Option<u64>,
    pub avg_busy_period:      Option<f64>,
    pub max_busy_period:      Option<u64>,
    pub utilization_percent:  f64,
}
