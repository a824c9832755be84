//! The post-load phases: enumerate, then report.
//!
//! Each phase runs even if the phase before it failed. Rejected input rows
//! do not stop enumeration, an enumeration that stopped early still has its
//! partial routes reported, and a report that could not be written still
//! yields its tier counts. Every failure is collected in the summary,
//! tagged with its phase.

use std::io::Write;

use tracing::{debug, info};

use crate::ingest::{IngestError, Ingested};
use crate::planner::{EnumerateError, SearchConfig, enumerate_routes};
use crate::report::{Report, ReportError, TierCounts};

/// Stage of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Load,
    Enumerate,
    Report,
}

/// A failure in one phase of a run.
#[derive(Debug, thiserror::Error)]
pub enum PhaseError {
    #[error("error reading flight data: {0}")]
    Load(#[from] IngestError),

    #[error("error building routes: {0}")]
    Enumerate(#[from] EnumerateError),

    #[error("error writing report: {0}")]
    Report(#[from] ReportError),
}

impl PhaseError {
    /// Returns the phase that failed.
    pub fn phase(&self) -> Phase {
        match self {
            PhaseError::Load(_) => Phase::Load,
            PhaseError::Enumerate(_) => Phase::Enumerate,
            PhaseError::Report(_) => Phase::Report,
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Flights in the pool.
    pub flights: usize,

    /// Routes handed to the reporter.
    pub routes: usize,

    /// Routes per baggage tier.
    pub counts: TierCounts,

    /// Every failure, in phase order.
    pub errors: Vec<PhaseError>,
}

impl RunSummary {
    /// Returns true if no phase failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures from one phase.
    pub fn errors_in(&self, phase: Phase) -> impl Iterator<Item = &PhaseError> {
        self.errors.iter().filter(move |e| e.phase() == phase)
    }
}

/// Enumerate routes over the loaded pool and write the report to `out`.
pub fn run<W: Write>(ingested: Ingested, config: &SearchConfig, out: &mut W) -> RunSummary {
    let Ingested { pool, rejected } = ingested;

    let mut summary = RunSummary {
        flights: pool.len(),
        errors: rejected.into_iter().map(PhaseError::Load).collect(),
        ..RunSummary::default()
    };

    let routes = match enumerate_routes(&pool, config) {
        Ok(routes) => routes,
        Err(partial) => {
            debug!(error = %partial, "Route enumeration stopped early");
            summary.errors.push(partial.error.into());
            partial.routes
        }
    };
    summary.routes = routes.len();

    let report = Report::new(&routes);
    summary.counts = report.counts();

    if let Err(e) = report.render(out) {
        debug!(error = %e, "Failed to write report");
        summary.errors.push(e.into());
    }

    info!(
        flights = summary.flights,
        routes = summary.routes,
        errors = summary.errors.len(),
        "Run complete"
    );

    summary
}
