//! Baggage-tier reporting.
//!
//! Splits the enumerated routes into three tiers by how many checked bags
//! every leg allows, and renders each tier as text: a summary line per
//! route followed by a table of its legs.

use std::io::{self, Write};

use crate::domain::Route;

/// Error from rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the output failed
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// How many checked bags the traveller brings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BagTier {
    NoBags,
    OneBag,
    TwoBags,
}

impl BagTier {
    /// Every tier, in report order.
    pub const ALL: [BagTier; 3] = [BagTier::NoBags, BagTier::OneBag, BagTier::TwoBags];

    /// Number of bags in this tier.
    pub fn bags(self) -> u32 {
        match self {
            BagTier::NoBags => 0,
            BagTier::OneBag => 1,
            BagTier::TwoBags => 2,
        }
    }

    /// Section heading for this tier.
    pub fn title(self) -> &'static str {
        match self {
            BagTier::NoBags => "No bags",
            BagTier::OneBag => "One bag",
            BagTier::TwoBags => "Two bags",
        }
    }

    /// Returns true if every leg of `route` allows this many bags.
    pub fn admits(self, route: &Route) -> bool {
        route.allows_bags(self.bags())
    }
}

/// Number of routes in each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierCounts {
    pub no_bags: usize,
    pub one_bag: usize,
    pub two_bags: usize,
}

/// A report over a fixed set of routes.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    routes: &'a [Route],
}

impl<'a> Report<'a> {
    /// Create a report over `routes`, kept in the given order.
    pub fn new(routes: &'a [Route]) -> Self {
        Self { routes }
    }

    /// Routes admitted to `tier`, in order.
    pub fn tier(&self, tier: BagTier) -> impl Iterator<Item = &'a Route> + use<'a> {
        self.routes.iter().filter(move |route| tier.admits(route))
    }

    /// Number of routes in each tier.
    pub fn counts(&self) -> TierCounts {
        TierCounts {
            no_bags: self.tier(BagTier::NoBags).count(),
            one_bag: self.tier(BagTier::OneBag).count(),
            two_bags: self.tier(BagTier::TwoBags).count(),
        }
    }

    /// Write every tier followed by the count summary.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        for tier in BagTier::ALL {
            writeln!(out, "=== {} ===", tier.title())?;
            for route in self.tier(tier) {
                writeln!(out, "{}", summary_line(route, tier))?;
                writeln!(out, "{}", leg_table(route))?;
            }
        }

        let counts = self.counts();
        writeln!(out, "Total flights no bags: {}", counts.no_bags)?;
        writeln!(out, "Total flights one bag: {}", counts.one_bag)?;
        writeln!(out, "Total flights two bags: {}", counts.two_bags)?;
        out.flush()?;

        Ok(())
    }
}

/// One-line price summary of `route` for `tier`.
pub fn summary_line(route: &Route, tier: BagTier) -> String {
    match tier {
        BagTier::NoBags => format!(
            "Route: {} Total price: {}",
            route.path(),
            route.total_price(0)
        ),
        _ => {
            let bags = tier.bags();
            format!(
                "Route: {} | Flight price: {} | Bag price: {} | Total price: {}",
                route.path(),
                route.flight_price(),
                route.bag_price(bags),
                route.total_price(bags)
            )
        }
    }
}

/// Fixed-width table of the legs of `route`, header first, one line per leg.
pub fn leg_table(route: &Route) -> String {
    let mut table = String::new();
    push_row(
        &mut table,
        [
            "source",
            "destination",
            "departure",
            "arrival",
            "flight_number",
            "price",
            "bags_allowed",
            "bag_price",
        ],
    );
    for leg in route.legs() {
        push_row(
            &mut table,
            [
                leg.source.as_str(),
                leg.destination.as_str(),
                &leg.departure.to_string(),
                &leg.arrival.to_string(),
                &leg.flight_number,
                &leg.price.to_string(),
                &leg.bags_allowed.to_string(),
                &leg.bag_price.to_string(),
            ],
        );
    }
    table
}

fn push_row(table: &mut String, cells: [&str; 8]) {
    let [source, destination, departure, arrival, number, price, bags, bag_price] = cells;
    let line = format!(
        "{source:<6} {destination:<11} {departure:<20} {arrival:<20} {number:<13} {price:<6} {bags:<13} {bag_price}"
    );
    table.push_str(line.trim_end());
    table.push('\n');
}
