//! The pool of available flights.
//!
//! Every ingested flight lives here, in insertion order, with an index by
//! departure airport so the enumerator can ask "what leaves from X?" without
//! scanning the whole pool.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::{Airport, Flight};

/// All flights available for building routes.
///
/// The pool is filled once at load time and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct FlightPool {
    /// Flights in insertion order.
    flights: Vec<Arc<Flight>>,

    /// Map from source airport to positions in `flights`, in insertion order.
    by_source: HashMap<Airport, Vec<usize>>,
}

impl FlightPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flight to the end of the pool.
    pub fn push(&mut self, flight: Flight) {
        let idx = self.flights.len();
        self.by_source
            .entry(flight.source.clone())
            .or_default()
            .push(idx);
        self.flights.push(Arc::new(flight));
    }

    /// Returns every flight in insertion order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Returns the flights departing from `airport`, in insertion order.
    pub fn flights_from<'a>(
        &'a self,
        airport: &Airport,
    ) -> impl Iterator<Item = &'a Arc<Flight>> + use<'a> {
        self.by_source
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.flights[idx])
    }

    /// Returns the number of flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if the pool holds no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Number of distinct airports appearing as a source or destination.
    ///
    /// This bounds the length of any route the enumerator can build.
    pub fn airport_count(&self) -> usize {
        self.flights
            .iter()
            .flat_map(|f| [&f.source, &f.destination])
            .collect::<HashSet<_>>()
            .len()
    }
}

impl FromIterator<Flight> for FlightPool {
    fn from_iter<I: IntoIterator<Item = Flight>>(iter: I) -> Self {
        let mut pool = FlightPool::new();
        for flight in iter {
            pool.push(flight);
        }
        pool
    }
}

impl Extend<Flight> for FlightPool {
    fn extend<I: IntoIterator<Item = Flight>>(&mut self, iter: I) {
        for flight in iter {
            self.push(flight);
        }
    }
}
