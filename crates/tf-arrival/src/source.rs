//! The `ArrivalSource` pull trait.

use tf_core::Tick;

/// One tick's worth of arrival data.
///
/// `service` is always at least 1, even when `arrived` is `false`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub arrived: bool,
    pub service: u64,
}

impl Arrival {
    pub const NONE: Arrival = Arrival { arrived: false, service: 1 };

    /// A customer needing `service` ticks.
    pub fn customer(service: u64) -> Arrival {
        Arrival { arrived: true, service: service.max(1) }
    }
}

/// Pluggable source of per-tick arrivals.
///
/// Implementations must never block and never fail: a source that runs dry
/// degrades to a documented fallback instead of returning an error.  Each
/// call consumes exactly one slot of the underlying stream.
pub trait ArrivalSource {
    fn next(&mut self, tick: Tick) -> Arrival;
}

impl<S: ArrivalSource + ?Sized> ArrivalSource for &mut S {
    #[inline]
    fn next(&mut self, tick: Tick) -> Arrival {
        (**self).next(tick)
    }
}

impl<S: ArrivalSource + ?Sized> ArrivalSource for Box<S> {
    #[inline]
    fn next(&mut self, tick: Tick) -> Arrival {
        (**self).next(tick)
    }
}
