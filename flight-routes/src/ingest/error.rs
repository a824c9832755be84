//! CSV ingestion error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors from reading flight data.
///
/// `Unavailable`, `Open`, `Empty` and `MissingColumn` stop ingestion
/// before any flight is read. `Csv` and `Row` are collected while reading
/// and the flights that did parse are kept.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// No input source: no path given and stdin is a terminal
    #[error("no CSV data has been provided")]
    Unavailable,

    /// The named input file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input has no header row
    #[error("input contains no CSV data")]
    Empty,

    /// The header row lacks a required column
    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),

    /// Reading the underlying CSV stream failed
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A single row could not be turned into a flight
    #[error("line {line}: {reason}")]
    Row { line: u64, reason: RowError },
}

impl IngestError {
    /// Returns true if this error means nothing could be loaded at all.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            IngestError::Unavailable
                | IngestError::Open { .. }
                | IngestError::Empty
                | IngestError::MissingColumn(_)
        )
    }
}

/// Why a row was rejected.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// Wrong field count or a non-numeric price/bag field
    #[error("{0}")]
    Malformed(csv::Error),

    /// Fields parsed but failed validation
    #[error("{0}")]
    Invalid(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Airport;

    #[test]
    fn error_display() {
        assert_eq!(
            IngestError::Unavailable.to_string(),
            "no CSV data has been provided"
        );
        assert_eq!(
            IngestError::MissingColumn("bag_price").to_string(),
            "missing required column \"bag_price\""
        );

        let err = IngestError::Row {
            line: 7,
            reason: RowError::Invalid(Airport::parse("").unwrap_err().into()),
        };
        assert_eq!(
            err.to_string(),
            "line 7: invalid airport code: must not be empty"
        );

        let err = IngestError::Open {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot open missing.csv: not found");
    }

    #[test]
    fn fatal_classification() {
        assert!(IngestError::Unavailable.is_fatal());
        assert!(IngestError::Empty.is_fatal());
        assert!(IngestError::MissingColumn("price").is_fatal());

        let row = IngestError::Row {
            line: 2,
            reason: RowError::Invalid(DomainError::EmptyRoute),
        };
        assert!(!row.is_fatal());
    }
}
