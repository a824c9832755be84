//! Airport code types.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// An airport code as it appears in the flight data.
///
/// Codes are opaque: any non-empty string without surrounding whitespace is
/// accepted. Two airports are the same airport iff their codes are equal.
///
/// # Examples
///
/// ```
/// use flight_routes::domain::Airport;
///
/// let usm = Airport::parse("USM").unwrap();
/// assert_eq!(usm.as_str(), "USM");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(Airport::parse(" DHE ").unwrap().as_str(), "DHE");
///
/// // Empty codes are rejected
/// assert!(Airport::parse("").is_err());
/// assert!(Airport::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Airport(String);

impl Airport {
    /// Parse an airport code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let code = s.trim();

        if code.is_empty() {
            return Err(InvalidAirport {
                reason: "must not be empty",
            });
        }

        Ok(Airport(code.to_string()))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.0)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
