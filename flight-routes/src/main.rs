use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use flight_routes::ingest::load_flights;
use flight_routes::pipeline::run;
use flight_routes::planner::{RevisitPolicy, SearchConfig};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "flight-routes")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Flight CSV file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Shortest allowed layover, in minutes
    #[arg(long, default_value_t = 60)]
    min_layover: i64,

    /// Longest allowed layover, in minutes
    #[arg(long, default_value_t = 240)]
    max_layover: i64,

    /// Which airports count as already visited
    #[arg(long, value_enum, default_value_t = Revisit::AnyEndpoint)]
    revisit: Revisit,

    /// Stop after building this many routes
    #[arg(long)]
    max_routes: Option<usize>,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Revisit {
    /// Only airports a leg has departed from
    SourcesOnly,
    /// Any airport a leg has departed from or landed at
    AnyEndpoint,
}

impl From<Revisit> for RevisitPolicy {
    fn from(revisit: Revisit) -> Self {
        match revisit {
            Revisit::SourcesOnly => RevisitPolicy::SourcesOnly,
            Revisit::AnyEndpoint => RevisitPolicy::AnyEndpoint,
        }
    }
}

/// Configure logging based on verbosity level.
///
/// Logs go to stderr so they never mix with the report on stdout.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    let config = SearchConfig::new(
        args.min_layover,
        args.max_layover,
        args.revisit.into(),
        args.max_routes,
    );

    let ingested = match load_flights(args.input.as_deref()) {
        Ok(ingested) => ingested,
        Err(e) => {
            eprintln!("[Error] {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(ingested, &config, &mut out);

    for e in &summary.errors {
        eprintln!("[Error] {e}");
    }

    ExitCode::SUCCESS
}
