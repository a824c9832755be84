//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from CSV/IO errors.

use super::Airport;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Airport code failed validation
    #[error(transparent)]
    InvalidAirport(#[from] super::InvalidAirport),

    /// Timestamp failed to parse
    #[error(transparent)]
    InvalidTimestamp(#[from] super::TimeError),

    /// Consecutive legs don't share an airport
    #[error("legs do not connect: arrival at {0} but next departure from {1}")]
    Disconnected(Airport, Airport),

    /// Route has no legs
    #[error("route must have at least one leg")]
    EmptyRoute,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    #[test]
    fn error_display() {
        let from = Airport::parse("USM").unwrap();
        let to = Airport::parse("DHE").unwrap();
        let err = DomainError::Disconnected(from, to);
        assert_eq!(
            err.to_string(),
            "legs do not connect: arrival at USM but next departure from DHE"
        );

        let err = DomainError::EmptyRoute;
        assert_eq!(err.to_string(), "route must have at least one leg");

        let err: DomainError = Airport::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid airport code: must not be empty");

        let err: DomainError = Timestamp::parse("soon").unwrap_err().into();
        assert!(err.to_string().contains("\"soon\""));
    }
}
