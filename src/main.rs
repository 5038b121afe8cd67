//! Maxtime command line tool
//!
//! Loads a ride catalog, filters it, and prints the selection that gives the
//! most ride time for the configured budget.

use std::{
    io::{self, Write},
    process::ExitCode,
    time::{Duration, Instant},
};

use anyhow::{Result, bail};
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::{error, info};

use maxtime::{
    catalog::Catalog,
    config::RunConfig,
    logging,
    report::{TableRenderer, write_rides},
    rides::groups::RideGroup,
    solvers::{
        Solver, SolverError, SolverResult, dynamic::DynamicSolver, exhaustive::ExhaustiveSolver,
    },
};

/// Largest difference in total time tolerated between the two solvers.
const TIME_TOLERANCE: f64 = 1e-9;

/// Maxtime entry point
pub fn main() -> ExitCode {
    let config = match RunConfig::load() {
        Ok(config) => config,
        Err(error) => {
            // Help and version requests end up here too
            _ = error.print();

            return u8::try_from(error.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from);
        }
    };

    if let Err(error) = logging::init(&config.log_level) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");

            #[expect(clippy::print_stderr, reason = "final error report to the user")]
            {
                eprintln!("Error: {error:#}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let budget = config.budget()?;
    let catalog = Catalog::load(&config.catalog)?;
    let rides = config.filter().apply(&RideGroup::from(&catalog));

    info!(
        catalog = catalog.len(),
        candidates = rides.len(),
        %budget,
        "starting selection"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_rides(&mut out, "Candidate Rides", &rides)?;

    let dynamic = if config.solver.runs_dynamic() {
        let mut renderer = TableRenderer::new();

        let (result, elapsed) =
            timed(|| DynamicSolver::solve_with_observer(&rides, budget, &mut renderer))?;

        write_result(&mut out, "Dynamic Programming Selection", &result, elapsed)?;

        if config.show_table {
            renderer.write_to(&mut out)?;
        }

        Some(result)
    } else {
        None
    };

    let exhaustive = if config.solver.runs_exhaustive() {
        let (result, elapsed) = timed(|| ExhaustiveSolver::solve(&rides, budget))?;

        write_result(&mut out, "Exhaustive Selection", &result, elapsed)?;

        Some(result)
    } else {
        None
    };

    if let (Some(dynamic), Some(exhaustive)) = (&dynamic, &exhaustive) {
        let difference = (dynamic.total_time - exhaustive.total_time).abs();

        if difference > TIME_TOLERANCE * dynamic.total_time.abs().max(1.0) {
            bail!(
                "solvers disagree: dynamic found {} min, exhaustive found {} min",
                dynamic.total_time,
                exhaustive.total_time
            );
        }

        info!(total_time = dynamic.total_time, "solvers agree");
    }

    Ok(())
}

fn timed<'a>(
    solve: impl FnOnce() -> Result<SolverResult<'a>, SolverError>,
) -> Result<(SolverResult<'a>, Duration), SolverError> {
    let start = Instant::now();
    let result = solve()?;

    Ok((result, start.elapsed()))
}

fn write_result(
    out: &mut impl Write,
    title: &str,
    result: &SolverResult<'_>,
    elapsed: Duration,
) -> Result<()> {
    write_rides(&mut *out, title, &result.selection)?;

    writeln!(
        out,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
