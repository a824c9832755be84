//! Flight route finder.
//!
//! Builds every multi-leg itinerary that can be chained from a pool of
//! individual flight offers, where each change of plane leaves one to four
//! hours on the ground and no airport is visited twice, then prices each
//! itinerary with zero, one and two checked bags.

pub mod domain;
pub mod ingest;
pub mod pipeline;
pub mod planner;
pub mod pool;
pub mod report;
