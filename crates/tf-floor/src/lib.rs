//! `tf-floor`: the bank floor: customers, tellers, and the service area.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`customer`]    | `Customer` (immutable arrival record)                     |
//! | [`teller`]      | `Teller` state machine, `TellerState`, `TellerSnapshot`   |
//! | [`busy_pool`]   | `BusyPool` (`BTreeMap<Tick, Vec<TellerId>>`)              |
//! | [`area`]        | `ServiceArea` (bounded queue + free/busy teller pools)    |
//! | [`error`]       | `FloorError`, `FloorResult<T>`                            |
//!
//! # Invariants
//!
//! - A teller owns a customer iff it is busy (the customer lives inside
//!   `TellerState::Busy`).
//! - Every teller id is in exactly one of the free pool or the busy pool.
//! - The waiting queue never holds more than `capacity` customers.

pub mod area;
pub mod busy_pool;
pub mod customer;
pub mod error;
pub mod teller;


pub use area::{Admission, AreaCounts, ServiceArea};
pub use busy_pool::BusyPool;
pub use customer::Customer;
pub use error::{FloorError, FloorResult};
pub use teller::{Teller, TellerSnapshot, TellerState};
