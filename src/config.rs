//! Run configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    filter::RideFilter,
    solvers::{Budget, SolverError},
};

/// Which solvers a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverChoice {
    /// Dynamic programming only
    Dynamic,

    /// Exhaustive search only
    Exhaustive,

    /// Both, cross-checking their total times
    Both,
}

impl SolverChoice {
    /// Whether the dynamic solver runs.
    pub fn runs_dynamic(self) -> bool {
        matches!(self, Self::Dynamic | Self::Both)
    }

    /// Whether the exhaustive solver runs.
    pub fn runs_exhaustive(self) -> bool {
        matches!(self, Self::Exhaustive | Self::Both)
    }
}

/// Ride time maximiser configuration
#[derive(Debug, Parser)]
#[command(
    name = "maxtime",
    about = "Pick the rides that maximise time spent within a budget",
    long_about = None
)]
pub struct RunConfig {
    /// Ride catalog file (caret-separated, one header line)
    #[arg(short, long, env = "MAXTIME_CATALOG", default_value = "fixtures/rides.csv")]
    pub catalog: PathBuf,

    /// Budget in whole dollars
    #[arg(
        short,
        long,
        env = "MAXTIME_BUDGET",
        default_value_t = 100,
        allow_negative_numbers = true
    )]
    pub budget: i64,

    /// Minimum ride time in minutes, inclusive
    #[arg(long, env = "MAXTIME_MIN_TIME", default_value_t = 0.0)]
    pub min_time: f64,

    /// Maximum ride time in minutes, inclusive; unbounded when omitted
    #[arg(long, env = "MAXTIME_MAX_TIME")]
    pub max_time: Option<f64>,

    /// Maximum number of rides passed to the solvers
    #[arg(short = 'n', long, env = "MAXTIME_MAX_RIDES", default_value_t = 20)]
    pub max_rides: usize,

    /// Solvers to run
    #[arg(short, long, env = "MAXTIME_SOLVER", value_enum, default_value_t = SolverChoice::Both)]
    pub solver: SolverChoice,

    /// Print the dynamic solver's cost table
    #[arg(long)]
    pub show_table: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl RunConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Validated budget.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidBudget`] if the configured budget is negative.
    pub fn budget(&self) -> Result<Budget, SolverError> {
        Budget::new(self.budget)
    }

    /// Filter applied to the catalog before solving.
    pub fn filter(&self) -> RideFilter {
        RideFilter::new(
            self.min_time,
            self.max_time.unwrap_or(f64::INFINITY),
            self.max_rides,
        )
    }
}
