//! `ServiceArea`: the waiting queue plus the free/busy teller partition.

use std::collections::VecDeque;

use tf_core::{TellerId, Tick};

use crate::{BusyPool, Customer, FloorError, FloorResult, Teller, TellerSnapshot};

/// Outcome of [`ServiceArea::enqueue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    /// The queue was full; the customer balked and is handed back.
    Rejected(Customer),
}

/// Queue and pool sizes at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaCounts {
    pub queued: usize,
    pub free:   usize,
    pub busy:   usize,
}

/// Holds waiting customers and partitions tellers into free and busy sets.
///
/// - The queue is FIFO and bounded by `capacity`.
/// - The free pool is FIFO in the order tellers became free (initially
///   `1..=N` ascending).
/// - The busy pool is ordered by interval end (see [`BusyPool`]).
///
/// Teller state itself lives in `tellers`, indexed by [`TellerId::slot`];
/// the pools hold ids only.
#[derive(Clone, Debug)]
pub struct ServiceArea {
    tellers:  Vec<Teller>,
    queue:    VecDeque<Customer>,
    capacity: usize,
    free:     VecDeque<TellerId>,
    busy:     BusyPool,
    balked:   u64,
}

impl ServiceArea {
    pub fn new(teller_count: u32, capacity: u32) -> Self {
        let tellers: Vec<Teller> = (1..=teller_count).map(|i| Teller::new(TellerId(i))).collect();
        let free = tellers.iter().map(Teller::id).collect();
        Self {
            tellers,
            queue: VecDeque::with_capacity(capacity as usize),
            capacity: capacity as usize,
            free,
            busy: BusyPool::new(),
            balked: 0,
        }
    }

    // ── Queue ─────────────────────────────────────────────────────────────

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    /// Admit `customer` unless the queue is at capacity.
    ///
    /// A rejection is final: the balk counter is incremented and the customer
    /// is returned to the caller to be dropped.
    pub fn enqueue(&mut self, customer: Customer) -> Admission {
        if self.is_full() {
            self.balked += 1;
            return Admission::Rejected(customer);
        }
        self.queue.push_back(customer);
        Admission::Accepted
    }

    /// Remove the customer at the front of the queue.
    pub fn dequeue_for_assignment(&mut self) -> Option<Customer> {
        self.queue.pop_front()
    }

    pub fn has_waiting(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Waiting customers, front first.
    pub fn queue(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.queue.iter()
    }

    /// Customers turned away because the queue was full.
    pub fn balked(&self) -> u64 {
        self.balked
    }

    // ── Tellers ───────────────────────────────────────────────────────────

    /// All tellers, ordered by id.
    pub fn tellers(&self) -> &[Teller] {
        &self.tellers
    }

    pub fn teller(&self, id: TellerId) -> Option<&Teller> {
        id.slot_checked().and_then(|slot| self.tellers.get(slot))
    }

    /// The teller that has been free the longest, if any.
    pub fn next_free(&self) -> Option<TellerId> {
        self.free.front().copied()
    }

    /// Free tellers in the order they became free.
    pub fn free_pool(&self) -> impl Iterator<Item = TellerId> + '_ {
        self.free.iter().copied()
    }

    /// Busy tellers, earliest finish first.
    pub fn busy_pool(&self) -> &BusyPool {
        &self.busy
    }

    /// Release every busy teller whose interval ends exactly at `now`.
    ///
    /// Released tellers are appended to the free pool in busy-pool order.
    /// Returns each released teller with the customer it finished.
    pub fn release_finished(&mut self, now: Tick) -> FloorResult<Vec<(TellerId, Customer)>> {
        let Some(done) = self.busy.drain_tick(now) else {
            return Ok(Vec::new());
        };

        let mut released = Vec::with_capacity(done.len());
        for id in done {
            let customer = self.teller_mut(id)?.busy_to_free()?;
            self.free.push_back(id);
            released.push((id, customer));
        }
        Ok(released)
    }

    /// Start `teller` serving `customer` at `now`, moving it from the free
    /// pool to the busy pool.
    pub fn assign(&mut self, teller: TellerId, customer: Customer, now: Tick) -> FloorResult<()> {
        let t = self.teller_mut(teller)?;
        t.free_to_busy(customer, now)?;
        let end = t.interval_end();

        self.free.retain(|&id| id != teller);
        self.busy.push(end, teller);
        Ok(())
    }

    pub fn counts(&self) -> AreaCounts {
        AreaCounts {
            queued: self.queue.len(),
            free:   self.free.len(),
            busy:   self.busy.len(),
        }
    }

    /// Close every teller's open interval at `end`.  Idempotent.
    pub fn finalize(&mut self, end: Tick) {
        for teller in &mut self.tellers {
            teller.close_interval(end);
        }
    }

    /// Per-teller summaries, ordered by id.  Does not modify any state.
    pub fn snapshots(&self) -> Vec<TellerSnapshot> {
        self.tellers.iter().map(Teller::snapshot).collect()
    }

    /// `true` if the free and busy pools partition the teller set and agree
    /// with each teller's own state.
    pub fn partition_is_consistent(&self) -> bool {
        if self.free.len() + self.busy.len() != self.tellers.len() {
            return false;
        }
        self.tellers.iter().all(|t| {
            let in_free = self.free.contains(&t.id());
            let in_busy = self.busy.contains(t.id());
            in_free != in_busy && in_free == t.is_free()
        })
    }

    fn teller_mut(&mut self, id: TellerId) -> FloorResult<&mut Teller> {
        id.slot_checked()
            .and_then(|slot| self.tellers.get_mut(slot))
            .ok_or(FloorError::UnknownTeller(id))
    }
}
