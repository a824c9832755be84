//! Flight types.
//!
//! A `Flight` is one offered leg. Flights are shared between routes as
//! `Arc<Flight>` and never mutated once ingested.

use chrono::Duration;
use std::fmt;

use super::{Airport, Timestamp};

/// One offered flight leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Departure airport
    pub source: Airport,
    /// Arrival airport
    pub destination: Airport,
    /// Departure time
    pub departure: Timestamp,
    /// Arrival time
    pub arrival: Timestamp,
    /// Carrier flight number, kept verbatim
    pub flight_number: String,
    /// Ticket price in whole currency units
    pub price: u64,
    /// Number of checked bags the fare allows
    pub bags_allowed: u32,
    /// Price of each checked bag in whole currency units
    pub bag_price: u64,
}

/// The identity of a flight for route deduplication: its two endpoints.
///
/// Two flights between the same airports share an identity even when their
/// times, numbers or prices differ, so a route may never contain two legs
/// over the same airport pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIdentity {
    pub source: Airport,
    pub destination: Airport,
}

impl fmt::Display for EdgeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

/// The permitted gap between one leg's arrival and the next leg's departure.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoverWindow {
    pub min: Duration,
    pub max: Duration,
}

impl LayoverWindow {
    /// Create a window from its bounds.
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Returns true if `layover` lies within the window.
    pub fn contains(&self, layover: Duration) -> bool {
        self.min <= layover && layover <= self.max
    }

    /// Returns true if the lower bound does not exceed the upper bound.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for LayoverWindow {
    fn default() -> Self {
        Self {
            min: Duration::hours(1),
            max: Duration::hours(4),
        }
    }
}

impl Flight {
    /// Returns the deduplication identity of this flight.
    pub fn identity(&self) -> EdgeIdentity {
        EdgeIdentity {
            source: self.source.clone(),
            destination: self.destination.clone(),
        }
    }

    /// Time on the ground between this flight landing and `next` taking off.
    pub fn layover_until(&self, next: &Flight) -> Duration {
        next.departure.signed_duration_since(self.arrival)
    }

    /// Returns true if `next` may directly follow this flight in a route.
    ///
    /// `next` must leave from the airport this flight lands at, and the
    /// layover must fall within `window`.
    pub fn connects_to(&self, next: &Flight, window: &LayoverWindow) -> bool {
        next.source == self.destination && window.contains(self.layover_until(next))
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    fn flight(from: &str, to: &str, dep: &str, arr: &str) -> Flight {
        Flight {
            source: airport(from),
            destination: airport(to),
            departure: Timestamp::parse(dep).unwrap(),
            arrival: Timestamp::parse(arr).unwrap(),
            flight_number: "PV404".to_string(),
            price: 100,
            bags_allowed: 1,
            bag_price: 10,
        }
    }

    /// A B->C flight departing `layover_secs` after the A->B flight lands.
    fn pair_with_layover(layover_secs: i64) -> (Flight, Flight) {
        let first = flight("AAA", "BBB", "2017-02-11T08:00:00", "2017-02-11T10:00:00");
        let mut second = flight("BBB", "CCC", "2017-02-11T10:00:00", "2017-02-11T12:00:00");
        second.departure = Timestamp::new(
            first.arrival.to_datetime() + Duration::seconds(layover_secs),
        );
        (first, second)
    }

    #[test]
    fn identity_ignores_times_and_prices() {
        let a = flight("USM", "DHE", "2017-02-11T06:25:00", "2017-02-11T07:25:00");
        let mut b = flight("USM", "DHE", "2017-02-12T10:00:00", "2017-02-12T11:00:00");
        b.price = 999;
        b.flight_number = "ZZ999".to_string();

        assert_ne!(a, b);
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn identity_is_directional() {
        let a = flight("USM", "DHE", "2017-02-11T06:25:00", "2017-02-11T07:25:00");
        let b = flight("DHE", "USM", "2017-02-11T06:25:00", "2017-02-11T07:25:00");
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn display() {
        let f = flight("USM", "DHE", "2017-02-11T06:25:00", "2017-02-11T07:25:00");
        assert_eq!(f.to_string(), "USM->DHE");
        assert_eq!(f.identity().to_string(), "USM->DHE");
    }

    #[test]
    fn layover_boundaries() {
        let window = LayoverWindow::default();

        for (secs, expected) in [
            (3599, false),
            (3600, true),
            (9000, true),
            (14400, true),
            (14401, false),
        ] {
            let (first, second) = pair_with_layover(secs);
            assert_eq!(
                first.connects_to(&second, &window),
                expected,
                "layover of {secs}s"
            );
        }
    }

    #[test]
    fn negative_layover_rejected() {
        let (first, second) = pair_with_layover(-3600);
        assert!(!first.connects_to(&second, &LayoverWindow::default()));
    }

    #[test]
    fn requires_matching_airport() {
        let first = flight("AAA", "BBB", "2017-02-11T08:00:00", "2017-02-11T10:00:00");
        let other = flight("CCC", "DDD", "2017-02-11T12:00:00", "2017-02-11T13:00:00");
        assert!(!first.connects_to(&other, &LayoverWindow::default()));
    }

    #[test]
    fn custom_window() {
        let window = LayoverWindow::new(Duration::minutes(30), Duration::minutes(45));
        let (first, second) = pair_with_layover(45 * 60);
        assert!(first.connects_to(&second, &window));
        let (first, second) = pair_with_layover(20 * 60);
        assert!(!first.connects_to(&second, &window));
    }

    #[test]
    fn window_validity() {
        assert!(LayoverWindow::default().is_valid());
        assert!(LayoverWindow::new(Duration::hours(2), Duration::hours(2)).is_valid());
        assert!(!LayoverWindow::new(Duration::hours(3), Duration::hours(2)).is_valid());
    }
}
