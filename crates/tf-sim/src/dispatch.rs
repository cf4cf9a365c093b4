//! Per-policy assignment rules.
//!
//! A [`Dispatcher`] owns whatever state a policy keeps between ticks (only
//! Round-Robin's cursor) and performs the assignment step of one tick
//! against a [`ServiceArea`].

use log::trace;

use tf_core::{CustomerId, TellerId, Tick};
use tf_floor::{Customer, FloorResult, ServiceArea};

use crate::Policy;

/// One customer bound to one teller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub teller:   TellerId,
    pub customer: CustomerId,
    pub service:  u64,
    /// Ticks the customer spent in the queue.
    pub wait:     u64,
}

#[derive(Clone, Debug)]
pub struct Dispatcher {
    policy: Policy,
    /// Round-Robin position as a teller slot.  Unused by other policies.
    cursor: usize,
}

impl Dispatcher {
    pub fn new(policy: Policy) -> Self {
        Self { policy, cursor: 0 }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Round-Robin cursor (0-based teller slot).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Assign waiting customers to tellers at `now`, in the order the policy
    /// dictates.  Must run after finished tellers have been released.
    pub fn dispatch(&mut self, area: &mut ServiceArea, now: Tick) -> FloorResult<Vec<Assignment>> {
        match self.policy {
            Policy::LeastFinishTime => least_finish_time(area, now),
            Policy::RoundRobin => round_robin(area, now, &mut self.cursor),
            Policy::LeastWorkLeft => least_work_left(area, now),
        }
    }
}

fn bind(area: &mut ServiceArea, teller: TellerId, customer: Customer, now: Tick) -> FloorResult<Assignment> {
    let assignment = Assignment {
        teller,
        customer: customer.id(),
        service:  customer.service(),
        wait:     customer.wait_until(now),
    };
    area.assign(teller, customer, now)?;
    trace!("{now}: customer {} -> teller {teller}", assignment.customer);
    Ok(assignment)
}

/// Pair the front of the free pool with the front of the queue until either
/// is empty.
fn least_finish_time(area: &mut ServiceArea, now: Tick) -> FloorResult<Vec<Assignment>> {
    let mut out = Vec::new();
    while let Some(teller) = area.next_free() {
        let Some(customer) = area.dequeue_for_assignment() else { break };
        out.push(bind(area, teller, customer, now)?);
    }
    Ok(out)
}

/// Walk the teller array once from `cursor`, wrapping around.  Each free
/// teller met while customers are waiting takes the front customer.
///
/// The cursor advances once per teller visited, so after a full pass it is
/// back where it started.
fn round_robin(area: &mut ServiceArea, now: Tick, cursor: &mut usize) -> FloorResult<Vec<Assignment>> {
    let n = area.tellers().len();
    let mut out = Vec::new();
    for _ in 0..n {
        let teller = TellerId::from_slot(*cursor);
        let free = area.teller(teller).is_some_and(|t| t.is_free());
        if free {
            if let Some(customer) = area.dequeue_for_assignment() {
                out.push(bind(area, teller, customer, now)?);
            }
        }
        *cursor = (*cursor + 1) % n;
    }
    Ok(out)
}

/// Repeatedly pick the teller with the earliest finish point (`now` if free,
/// else its interval end; lowest id on ties).  Stop as soon as that teller
/// is busy, since no other teller can be free.
fn least_work_left(area: &mut ServiceArea, now: Tick) -> FloorResult<Vec<Assignment>> {
    let mut out = Vec::new();
    while area.has_waiting() {
        let Some(best) = area.tellers().iter().min_by_key(|t| t.finish_point(now)) else {
            break;
        };
        if !best.is_free() {
            break;
        }
        let teller = best.id();
        let Some(customer) = area.dequeue_for_assignment() else { break };
        out.push(bind(area, teller, customer, now)?);
    }
    Ok(out)
}
