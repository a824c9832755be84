//! Raw CSV row type and its conversion into a `Flight`.

use serde::Deserialize;

use crate::domain::{Airport, DomainError, Flight, Timestamp};

/// Columns every flight CSV must carry, in their conventional order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "source",
    "destination",
    "departure",
    "arrival",
    "flight_number",
    "price",
    "bags_allowed",
    "bag_price",
];

/// One CSV row, as deserialized by header name.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    pub source: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub flight_number: String,
    pub price: u64,
    pub bags_allowed: u32,
    pub bag_price: u64,
}

impl TryFrom<FlightRecord> for Flight {
    type Error = DomainError;

    fn try_from(record: FlightRecord) -> Result<Self, Self::Error> {
        Ok(Flight {
            source: Airport::parse(&record.source)?,
            destination: Airport::parse(&record.destination)?,
            departure: Timestamp::parse(&record.departure)?,
            arrival: Timestamp::parse(&record.arrival)?,
            flight_number: record.flight_number,
            price: record.price,
            bags_allowed: record.bags_allowed,
            bag_price: record.bag_price,
        })
    }
}
