//! Domain types for the flight route finder.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod error;
mod flight;
mod route;
mod time;

pub use airport::{Airport, InvalidAirport};
pub use error::DomainError;
pub use flight::{EdgeIdentity, Flight, LayoverWindow};
pub use route::Route;
pub use time::{TIMESTAMP_FORMAT, TimeError, Timestamp};
