//! A customer's arrival record.

use tf_core::{CustomerId, Tick};

/// A customer accepted into the bank.
///
/// All fields are fixed at creation.  The customer is owned first by the
/// waiting queue, then by the teller serving it, and is dropped when that
/// teller becomes free again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    id:      CustomerId,
    arrival: Tick,
    service: u64,
}

impl Customer {
    /// `service` is clamped to at least one tick.
    pub fn new(id: CustomerId, arrival: Tick, service: u64) -> Self {
        Self { id, arrival, service: service.max(1) }
    }

    #[inline]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    #[inline]
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    /// Transaction length in ticks.
    #[inline]
    pub fn service(&self) -> u64 {
        self.service
    }

    /// Ticks spent waiting if service starts at `start`.
    #[inline]
    pub fn wait_until(&self, start: Tick) -> u64 {
        start.since(self.arrival)
    }
}
