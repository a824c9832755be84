//! Route types.
//!
//! A `Route` is an itinerary of one or more flights where each leg leaves
//! from the airport the previous leg landed at.

use std::sync::Arc;

use super::{Airport, DomainError, EdgeIdentity, Flight};

/// An ordered, connected sequence of flights.
///
/// Uses `Arc<Flight>` so that extending a route during enumeration only
/// copies pointers.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = source of next)
///
/// Layover timing is not checked here; that is the enumerator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    legs: Vec<Arc<Flight>>,
}

impl Route {
    /// A route consisting of exactly one flight.
    pub fn single(leg: Arc<Flight>) -> Self {
        Self { legs: vec![leg] }
    }

    /// Constructs a route from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `legs` is empty
    /// - Legs don't connect (destination != next source)
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_routes::domain::{Airport, Flight, Route, Timestamp};
    /// use std::sync::Arc;
    ///
    /// let leg = |from: &str, to: &str| Arc::new(Flight {
    ///     source: Airport::parse(from).unwrap(),
    ///     destination: Airport::parse(to).unwrap(),
    ///     departure: Timestamp::parse("2017-02-11T06:25:00").unwrap(),
    ///     arrival: Timestamp::parse("2017-02-11T07:25:00").unwrap(),
    ///     flight_number: "PV404".into(),
    ///     price: 100,
    ///     bags_allowed: 1,
    ///     bag_price: 9,
    /// });
    ///
    /// let route = Route::new(vec![leg("USM", "DHE"), leg("DHE", "PRG")]).unwrap();
    /// assert_eq!(route.path(), "USM->DHE->PRG");
    ///
    /// assert!(Route::new(vec![leg("USM", "DHE"), leg("PRG", "USM")]).is_err());
    /// ```
    pub fn new(legs: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        for window in legs.windows(2) {
            check_connects(&window[0], &window[1])?;
        }

        Ok(Self { legs })
    }

    /// Returns a new route with `leg` appended; `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `leg` does not depart from this route's destination.
    pub fn extended(&self, leg: Arc<Flight>) -> Result<Self, DomainError> {
        check_connects(self.tail(), &leg)?;

        let mut legs = Vec::with_capacity(self.legs.len() + 1);
        legs.extend(self.legs.iter().cloned());
        legs.push(leg);
        Ok(Self { legs })
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Arc<Flight>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the last leg.
    pub fn tail(&self) -> &Flight {
        // Safe: validated non-empty at construction
        self.legs.last().unwrap()
    }

    /// Returns the airport the route starts from.
    pub fn origin(&self) -> &Airport {
        // Safe: validated non-empty at construction
        &self.legs.first().unwrap().source
    }

    /// Returns the airport the route ends at.
    pub fn destination(&self) -> &Airport {
        &self.tail().destination
    }

    /// Returns true if any leg departs from `airport`.
    ///
    /// Only leg sources are inspected, not the final destination.
    pub fn contains_source(&self, airport: &Airport) -> bool {
        self.legs.iter().any(|leg| &leg.source == airport)
    }

    /// Returns true if any leg departs from or lands at `airport`.
    pub fn visits(&self, airport: &Airport) -> bool {
        self.legs
            .iter()
            .any(|leg| &leg.source == airport || &leg.destination == airport)
    }

    /// Returns the deduplication identity of every leg, in order.
    pub fn identities(&self) -> impl Iterator<Item = EdgeIdentity> + '_ {
        self.legs.iter().map(|leg| leg.identity())
    }

    /// Sum of the ticket prices of every leg.
    ///
    /// Totals are widened to `u128`, so any number of `u64` prices sums
    /// without overflow.
    pub fn flight_price(&self) -> u128 {
        self.legs.iter().map(|leg| u128::from(leg.price)).sum()
    }

    /// The number of bags allowed on every leg of the route.
    pub fn min_bags_allowed(&self) -> u32 {
        // Safe: validated non-empty at construction
        self.legs.iter().map(|leg| leg.bags_allowed).min().unwrap()
    }

    /// Cost of carrying one bag on every leg.
    pub fn bag_price_per_bag(&self) -> u128 {
        self.legs.iter().map(|leg| u128::from(leg.bag_price)).sum()
    }

    /// Cost of carrying `bags` bags on every leg.
    pub fn bag_price(&self, bags: u32) -> u128 {
        u128::from(bags) * self.bag_price_per_bag()
    }

    /// Flight price plus the cost of `bags` bags.
    pub fn total_price(&self, bags: u32) -> u128 {
        self.flight_price() + self.bag_price(bags)
    }

    /// Returns true if every leg allows at least `bags` bags.
    pub fn allows_bags(&self, bags: u32) -> bool {
        self.min_bags_allowed() >= bags
    }

    /// Renders the airports visited as `A->B->C`.
    pub fn path(&self) -> String {
        let mut path = self.origin().to_string();
        for leg in &self.legs {
            path.push_str("->");
            path.push_str(leg.destination.as_str());
        }
        path
    }
}

fn check_connects(prev: &Flight, next: &Flight) -> Result<(), DomainError> {
    if prev.destination != next.source {
        return Err(DomainError::Disconnected(
            prev.destination.clone(),
            next.source.clone(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    fn leg(from: &str, to: &str, price: u64, bags_allowed: u32, bag_price: u64) -> Arc<Flight> {
        Arc::new(Flight {
            source: airport(from),
            destination: airport(to),
            departure: Timestamp::parse("2017-02-11T06:25:00").unwrap(),
            arrival: Timestamp::parse("2017-02-11T07:25:00").unwrap(),
            flight_number: format!("{from}{to}"),
            price,
            bags_allowed,
            bag_price,
        })
    }

    #[test]
    fn single_leg() {
        let route = Route::single(leg("USM", "DHE", 100, 1, 10));

        assert_eq!(route.leg_count(), 1);
        assert_eq!(route.origin(), &airport("USM"));
        assert_eq!(route.destination(), &airport("DHE"));
        assert_eq!(route.path(), "USM->DHE");
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Route::new(vec![]), Err(DomainError::EmptyRoute));
    }

    #[test]
    fn new_rejects_disconnected() {
        let err = Route::new(vec![leg("USM", "DHE", 1, 0, 0), leg("PRG", "BTW", 1, 0, 0)])
            .unwrap_err();
        assert_eq!(err, DomainError::Disconnected(airport("DHE"), airport("PRG")));
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let route = Route::single(leg("USM", "DHE", 100, 1, 10));
        let longer = route.extended(leg("DHE", "PRG", 50, 2, 5)).unwrap();

        assert_eq!(route.leg_count(), 1);
        assert_eq!(longer.leg_count(), 2);
        assert_eq!(longer.path(), "USM->DHE->PRG");
        assert_eq!(longer.tail().destination, airport("PRG"));
    }

    #[test]
    fn extended_rejects_disconnected() {
        let route = Route::single(leg("USM", "DHE", 100, 1, 10));
        assert!(route.extended(leg("PRG", "BTW", 1, 0, 0)).is_err());
    }

    #[test]
    fn contains_source_ignores_final_destination() {
        let route = Route::new(vec![leg("USM", "DHE", 1, 0, 0), leg("DHE", "PRG", 1, 0, 0)])
            .unwrap();

        assert!(route.contains_source(&airport("USM")));
        assert!(route.contains_source(&airport("DHE")));
        assert!(!route.contains_source(&airport("PRG")));
        assert!(route.visits(&airport("PRG")));
        assert!(!route.visits(&airport("BTW")));
    }

    #[test]
    fn aggregates() {
        let route = Route::new(vec![
            leg("USM", "DHE", 100, 2, 10),
            leg("DHE", "PRG", 50, 1, 5),
            leg("PRG", "BTW", 25, 3, 7),
        ])
        .unwrap();

        assert_eq!(route.flight_price(), 175);
        assert_eq!(route.min_bags_allowed(), 1);
        assert_eq!(route.bag_price_per_bag(), 22);
        assert_eq!(route.bag_price(0), 0);
        assert_eq!(route.bag_price(2), 44);
        assert_eq!(route.total_price(0), 175);
        assert_eq!(route.total_price(1), 197);
        assert_eq!(route.total_price(2), 219);
        assert!(route.allows_bags(1));
        assert!(!route.allows_bags(2));
    }

    #[test]
    fn totals_past_u64_max() {
        let route = Route::new(vec![
            leg("USM", "DHE", u64::MAX, 2, u64::MAX),
            leg("DHE", "PRG", 1, 2, 1),
        ])
        .unwrap();

        let max = u128::from(u64::MAX);
        assert_eq!(route.flight_price(), max + 1);
        assert_eq!(route.bag_price(2), 2 * (max + 1));
        assert_eq!(route.total_price(2), 3 * (max + 1));
    }

    #[test]
    fn identities_in_order() {
        let route = Route::new(vec![leg("USM", "DHE", 1, 0, 0), leg("DHE", "PRG", 1, 0, 0)])
            .unwrap();
        let ids: Vec<String> = route.identities().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["USM->DHE", "DHE->PRG"]);
    }
}
