//! Flight data ingestion from CSV.
//!
//! Reads the flight table (header row first, one flight per row) into a
//! `FlightPool`. Rows that fail to parse are logged and collected, and the
//! remaining rows are still loaded, so one bad line does not cost the whole
//! data set. Only a missing or unusable input is fatal.

mod error;
mod record;

use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::domain::Flight;
use crate::pool::FlightPool;

pub use error::{IngestError, RowError};
pub use record::{FlightRecord, REQUIRED_COLUMNS};

/// Result of reading a flight table.
#[derive(Debug, Default)]
pub struct Ingested {
    /// Every flight that parsed, in input order.
    pub pool: FlightPool,

    /// Rows or reads that failed, in input order.
    pub rejected: Vec<IngestError>,
}

/// Open the named file, or stdin when no path is given.
///
/// Stdin attached to a terminal counts as no input at all.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, IngestError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| IngestError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(IngestError::Unavailable);
            }
            Ok(Box::new(stdin))
        }
    }
}

/// Read flights from `reader`.
///
/// # Errors
///
/// Returns `Err` only if the header row is missing, unreadable or lacks one
/// of [`REQUIRED_COLUMNS`]. Per-row failures end up in
/// [`Ingested::rejected`]. A failed read of the underlying stream ends
/// ingestion but keeps the flights read so far.
pub fn read_flights<R: Read>(reader: R) -> Result<Ingested, IngestError> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestError::Empty);
    }
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn(column));
        }
    }

    let mut ingested = Ingested::default();
    let mut record = csv::StringRecord::new();

    loop {
        match csv.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(0, |p| p.line());
                match parse_row(&record, &headers) {
                    Ok(flight) => ingested.pool.push(flight),
                    Err(reason) => {
                        debug!(line, error = %reason, "Skipping invalid flight row");
                        ingested.rejected.push(IngestError::Row { line, reason });
                    }
                }
            }
            Err(err) if err.is_io_error() => {
                debug!(error = %err, "Failed to read flight data, keeping rows read so far");
                ingested.rejected.push(IngestError::Csv(err));
                break;
            }
            Err(err) => {
                let line = err.position().map_or(0, |p| p.line());
                debug!(line, error = %err, "Skipping malformed flight row");
                ingested.rejected.push(IngestError::Row {
                    line,
                    reason: RowError::Malformed(err),
                });
            }
        }
    }

    info!(
        flights = ingested.pool.len(),
        rejected = ingested.rejected.len(),
        "Loaded flight pool"
    );

    Ok(ingested)
}

/// Open `path` (or stdin) and read flights from it.
pub fn load_flights(path: Option<&Path>) -> Result<Ingested, IngestError> {
    read_flights(open_input(path)?)
}

fn parse_row(record: &csv::StringRecord, headers: &csv::StringRecord) -> Result<Flight, RowError> {
    let raw: FlightRecord = record
        .deserialize(Some(headers))
        .map_err(RowError::Malformed)?;
    Ok(Flight::try_from(raw)?)
}
