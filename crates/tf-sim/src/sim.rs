//! The `Sim` struct and its tick loop.

use log::{debug, info, trace};

use tf_arrival::ArrivalSource;
use tf_core::{CustomerId, SimConfig, TellerId, Tick};
use tf_floor::{Admission, Customer, ServiceArea, TellerSnapshot};

use crate::{Dispatcher, Policy, SimEvent, SimObserver, SimResult, StatsCollector, TickRecord};

// ── RunOutput ─────────────────────────────────────────────────────────────────

/// Everything a finished run produced.
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// One record per tick, in tick order.  Empty if the log was disabled on
    /// the builder.
    pub log:     Vec<TickRecord>,
    /// Teller summaries ordered by id.
    pub tellers: Vec<TellerSnapshot>,
    pub result:  crate::AlgorithmResult,
}

impl RunOutput {
    pub fn policy(&self) -> Policy {
        self.result.policy
    }

    /// Per-teller utilization in percent, ordered by id.  Suitable for a bar
    /// chart.
    pub fn utilizations(&self) -> Vec<(TellerId, f64)> {
        self.tellers.iter().map(|t| (t.id, t.utilization_percent)).collect()
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner for one policy.
///
/// `Sim<A>` owns all run state: the service area, the dispatcher, the
/// statistics collector and the arrival source.  Nothing is shared between
/// runs, so a comparison builds one `Sim` per policy.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<A: ArrivalSource> {
    pub(crate) config:        SimConfig,
    pub(crate) dispatcher:    Dispatcher,
    pub(crate) arrivals:      A,
    pub(crate) area:          ServiceArea,
    pub(crate) stats:         StatsCollector,
    pub(crate) next_customer: CustomerId,
    pub(crate) now:           Tick,
    pub(crate) keep_log:      bool,
    pub(crate) log:           Vec<TickRecord>,
}

impl<A: ArrivalSource> Sim<A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, close every teller's
    /// open interval and return the run's output.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<RunOutput> {
        let policy = self.policy();
        if self.now == Tick::ZERO {
            info!(
                "{policy}: {} ticks, {} teller(s), queue capacity {}",
                self.config.total_ticks, self.config.teller_count, self.config.queue_capacity,
            );
            observer.on_run_start(policy, &self.config);
        }

        let remaining = self.config.end_tick().since(self.now);
        self.run_ticks(remaining, observer)?;

        let output = self.finish();
        let r = &output.result;
        info!(
            "{policy}: arrived {}, served {}, balked {}, unserved {}, avg wait {:.2}",
            r.customers_arrived, r.customers_served, r.customers_balked, r.customers_unserved, r.avg_wait,
        );
        observer.on_sim_end(&output);
        Ok(output)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.now;
            observer.on_tick_start(now);
            let record = self.process_tick(now)?;
            observer.on_tick_end(&record);
            if self.keep_log {
                self.log.push(record);
            }
            self.now = now.next();
        }
        Ok(())
    }

    /// Close open intervals at the current tick and build the output.
    pub fn finish(mut self) -> RunOutput {
        self.area.finalize(self.now);
        let unserved = self.area.counts().queued as u64;
        let result = self.stats.finish(self.policy(), self.area.balked(), unserved);
        RunOutput {
            log: self.log,
            tellers: self.area.snapshots(),
            result,
        }
    }

    pub fn policy(&self) -> Policy {
        self.dispatcher.policy()
    }

    /// The next tick to be processed.
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn area(&self) -> &ServiceArea {
        &self.area
    }

    pub fn stats(&self) -> &StatsCollector {
        &self.stats
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Records of the ticks processed so far.
    pub fn log(&self) -> &[TickRecord] {
        &self.log
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> SimResult<TickRecord> {
        // ── Phase 1: sample ───────────────────────────────────────────────
        let counts = self.area.counts();
        let utilization_percent = self.stats.sample(counts);
        let mut events = Vec::new();

        // ── Phase 2+3: arrival, then enqueue or balk ──────────────────────
        let arrival = self.arrivals.next(now);
        if arrival.arrived {
            let id = self.next_customer;
            self.next_customer = id.next();
            self.stats.record_arrival();
            events.push(SimEvent::Arrived { customer: id, service: arrival.service });

            match self.area.enqueue(Customer::new(id, now, arrival.service)) {
                Admission::Accepted => events.push(SimEvent::Queued { customer: id }),
                Admission::Rejected(_) => {
                    trace!("{now}: queue full, customer {id} balked");
                    events.push(SimEvent::Balked { customer: id });
                }
            }
        } else {
            events.push(SimEvent::NoArrival);
        }

        // ── Phase 4: release tellers finishing now ────────────────────────
        for (teller, customer) in self.area.release_finished(now)? {
            trace!("{now}: teller {teller} finished customer {}", customer.id());
            events.push(SimEvent::Finished { customer: customer.id(), teller });
        }

        // ── Phase 5: dispatch ─────────────────────────────────────────────
        for a in self.dispatcher.dispatch(&mut self.area, now)? {
            self.stats.record_assignment(a.wait);
            events.push(SimEvent::Assigned {
                customer: a.customer,
                teller:   a.teller,
                service:  a.service,
                wait:     a.wait,
            });
        }

        debug!(
            "{now}: queue {}/{}, busy {}, free {}, {} event(s)",
            counts.queued,
            self.area.capacity(),
            counts.busy,
            counts.free,
            events.len(),
        );

        Ok(TickRecord {
            policy: self.policy(),
            tick: now,
            queued: counts.queued,
            capacity: self.area.capacity(),
            busy: counts.busy,
            free: counts.free,
            utilization_percent,
            events,
        })
    }
}
