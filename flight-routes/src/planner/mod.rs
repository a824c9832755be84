//! Route planner using a worklist search.
//!
//! This module implements the core algorithm: given an unordered pool of
//! flights, find every route that chains flights through shared airports
//! with an acceptable layover, never revisiting an airport.

mod config;
mod dedup;
mod enumerate;


pub use config::{RevisitPolicy, SearchConfig};
pub use dedup::is_duplicate_free;
pub use enumerate::{EnumerateError, PartialEnumeration, RouteEnumerator, enumerate_routes};
