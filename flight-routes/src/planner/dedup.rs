//! Route deduplication.
//!
//! A route may not fly the same airport pair twice. Flights are reduced to
//! their `EdgeIdentity` (source, destination) before comparison, so two
//! different flights between the same airports count as a repeat.

use std::collections::HashSet;

use crate::domain::Route;

/// Returns true if no two legs of `route` share an edge identity.
pub fn is_duplicate_free(route: &Route) -> bool {
    let mut seen = HashSet::with_capacity(route.leg_count());
    route.identities().all(|identity| seen.insert(identity))
}
