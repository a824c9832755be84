//! Flight timestamp handling.
//!
//! Flight data carries departure and arrival times as
//! `YYYY-MM-DDTHH:MM:SS` strings with no timezone. This module parses them
//! into comparable values and converts them to epoch seconds for layover
//! arithmetic.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// The fixed format every timestamp in the input uses.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimeError {
    input: String,
}

/// A timezone-less point in time at which a flight departs or arrives.
///
/// All timestamps in one data set are assumed to share a clock, so they are
/// interpreted as UTC when converted to epoch seconds. This keeps layover
/// arithmetic independent of the machine's local timezone.
///
/// # Examples
///
/// ```
/// use flight_routes::domain::Timestamp;
///
/// let t = Timestamp::parse("2017-02-11T06:25:00").unwrap();
/// assert_eq!(t.to_string(), "2017-02-11T06:25:00");
///
/// assert!(Timestamp::parse("2017-02-11 06:25").is_err());
/// assert!(Timestamp::parse("2017-02-30T06:25:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a timestamp from an already-parsed date-time.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parse a timestamp in `YYYY-MM-DDTHH:MM:SS` format.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| TimeError {
                input: s.to_string(),
            })
    }

    /// Returns the underlying date-time.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Seconds since the Unix epoch, reading the timestamp as UTC.
    pub fn epoch_seconds(&self) -> i64 {
        self.0.and_utc().timestamp()
    }

    /// Returns the duration from `earlier` to `self`.
    ///
    /// Negative if `earlier` is actually later.
    pub fn signed_duration_since(&self, earlier: Self) -> Duration {
        Duration::seconds(self.epoch_seconds() - earlier.epoch_seconds())
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}
