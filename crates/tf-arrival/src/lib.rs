//! `tf-arrival`: where customers come from.
//!
//! Every tick the simulation pulls one [`Arrival`] from an
//! [`ArrivalSource`]: did a customer walk in, and if so how long will their
//! transaction take?
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`source`]   | `Arrival`, the `ArrivalSource` pull trait                  |
//! | [`random`]   | `RandomArrivals` (seeded Bernoulli / uniform draws)        |
//! | [`replay`]   | `ReplayTrace`, `ReplayArrivals`, `ReplayFallback`          |
//! | [`feed`]     | `ArrivalFeed` (cloneable recipe), `Arrivals` (opened feed) |
//! | [`error`]    | `ArrivalError`, `ArrivalResult<T>`                         |
//!
//! # Reproducibility
//!
//! An [`ArrivalFeed`] is a description, not a stream.  Every call to
//! [`ArrivalFeed::open`] yields a generator positioned at the start, so
//! several policy runs can consume identical arrivals independently.

pub mod error;
pub mod feed;
pub mod random;
pub mod replay;
pub mod source;


pub use error::{ArrivalError, ArrivalResult};
pub use feed::{ArrivalFeed, Arrivals};
pub use random::RandomArrivals;
pub use replay::{ReplayArrivals, ReplayFallback, ReplayTrace};
pub use source::{Arrival, ArrivalSource};
