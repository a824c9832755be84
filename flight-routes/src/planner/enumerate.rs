//! Worklist route enumeration.
//!
//! Finds every route that can be built from the flight pool: each flight on
//! its own, plus every chain of flights where consecutive legs share an
//! airport, the layover fits the configured window and no airport is
//! revisited.
//!
//! The search is a single FIFO worklist. It is seeded with one single-leg
//! route per flight in pool order. Routes are popped from the head, every
//! valid one-leg extension is pushed onto the tail, and the popped route is
//! emitted. Each route is therefore visited exactly once, shorter routes
//! before longer ones, and the output order is the order routes were built.
//!
//! # Termination
//!
//! Every extension departs from an airport the route has not departed from
//! before, so a route has at most one leg per distinct airport in the pool
//! and the worklist is finite. It is not small: a dense pool with a wide
//! layover window can produce a number of routes factorial in the number of
//! airports. Set `SearchConfig::max_routes` to fail fast on such inputs.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, trace};

use super::config::{RevisitPolicy, SearchConfig};
use super::dedup::is_duplicate_free;
use crate::domain::{Flight, LayoverWindow, Route};
use crate::pool::FlightPool;

/// Error from route enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumerateError {
    /// Minimum layover is longer than the maximum
    #[error("invalid layover window: minimum {min_mins} min exceeds maximum {max_mins} min")]
    InvalidWindow { min_mins: i64, max_mins: i64 },

    /// More routes than `SearchConfig::max_routes` allows
    #[error("route limit of {limit} exceeded")]
    RouteLimitExceeded { limit: usize },
}

/// An enumeration that stopped early, with the routes built before it did.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{error} (kept {} routes)", routes.len())]
pub struct PartialEnumeration {
    /// Why enumeration stopped.
    pub error: EnumerateError,

    /// Valid routes built before stopping, in worklist order.
    pub routes: Vec<Route>,
}

/// Route enumerator over a fixed flight pool.
pub struct RouteEnumerator<'a> {
    pool: &'a FlightPool,
    config: &'a SearchConfig,
}

impl<'a> RouteEnumerator<'a> {
    /// Create a new enumerator.
    pub fn new(pool: &'a FlightPool, config: &'a SearchConfig) -> Self {
        Self { pool, config }
    }

    /// Build every valid route, in worklist order.
    pub fn enumerate(&self) -> Result<Vec<Route>, PartialEnumeration> {
        let window = self.config.layover_window();
        if !window.is_valid() {
            return Err(PartialEnumeration {
                error: EnumerateError::InvalidWindow {
                    min_mins: self.config.min_layover_mins,
                    max_mins: self.config.max_layover_mins,
                },
                routes: Vec::new(),
            });
        }

        let mut queue: VecDeque<Route> = self
            .pool
            .flights()
            .iter()
            .cloned()
            .map(Route::single)
            .collect();
        let mut routes = Vec::with_capacity(queue.len());

        self.check_limit(&mut routes, &mut queue)?;

        while let Some(route) = queue.pop_front() {
            let extensions = self.extensions(&route, &window);

            trace!(
                route = %route.path(),
                extensions = extensions.len(),
                queued = queue.len(),
                "Extending route"
            );

            queue.extend(extensions);
            routes.push(route);

            self.check_limit(&mut routes, &mut queue)?;
        }

        debug!(
            flights = self.pool.len(),
            airports = self.pool.airport_count(),
            routes = routes.len(),
            "Route enumeration complete"
        );

        Ok(routes)
    }

    /// Every valid one-leg extension of `route`, in pool order.
    fn extensions(&self, route: &Route, window: &LayoverWindow) -> Vec<Route> {
        let tail = route.tail();

        self.pool
            .flights_from(&tail.destination)
            .filter(|candidate| !self.revisits(route, candidate))
            .filter(|candidate| tail.connects_to(candidate, window))
            .filter_map(|candidate| route.extended(Arc::clone(candidate)).ok())
            .filter(is_duplicate_free)
            .collect()
    }

    /// Returns true if taking `candidate` would return to an airport the
    /// route has already been through.
    fn revisits(&self, route: &Route, candidate: &Flight) -> bool {
        match self.config.revisit {
            RevisitPolicy::SourcesOnly => route.contains_source(&candidate.source),
            RevisitPolicy::AnyEndpoint => {
                route.contains_source(&candidate.source) || route.visits(&candidate.destination)
            }
        }
    }

    /// Fail with everything built so far if the route count passed the limit.
    fn check_limit(
        &self,
        routes: &mut Vec<Route>,
        queue: &mut VecDeque<Route>,
    ) -> Result<(), PartialEnumeration> {
        let Some(limit) = self.config.max_routes else {
            return Ok(());
        };

        if routes.len() + queue.len() <= limit {
            return Ok(());
        }

        let mut kept = std::mem::take(routes);
        kept.extend(queue.drain(..));
        kept.truncate(limit);

        debug!(limit, "Route limit exceeded");

        Err(PartialEnumeration {
            error: EnumerateError::RouteLimitExceeded { limit },
            routes: kept,
        })
    }
}

/// Enumerate every valid route in `pool` under `config`.
///
/// Convenience wrapper around [`RouteEnumerator`].
pub fn enumerate_routes(
    pool: &FlightPool,
    config: &SearchConfig,
) -> Result<Vec<Route>, PartialEnumeration> {
    RouteEnumerator::new(pool, config).enumerate()
}
