//! Dynamic Programming Solver
//!
//! Bottom-up 0/1 knapsack over whole-dollar costs. The table holds, for each
//! prefix of the input and each budget up to the limit, the best total time.
//! The selection is recovered by walking the table from the last ride back to
//! the first.

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    rides::{
        RideKey,
        groups::{INLINE_RIDES, RideGroup, RideKeys},
    },
    solvers::{
        Budget, Solver, SolverError, SolverResult, dollars_to_index,
        observer::{NoopObserver, TableObserver},
        table::CostTable,
    },
};

/// Ride key, cost as a column offset, and time.
type Entry = (RideKey, usize, f64);

/// Solver using dynamic programming, `O(rides x budget)` in time and space.
#[derive(Debug)]
pub struct DynamicSolver;

impl Solver for DynamicSolver {
    fn solve<'a>(rides: &RideGroup<'a>, budget: Budget) -> Result<SolverResult<'a>, SolverError> {
        Self::solve_with_observer(rides, budget, &mut NoopObserver)
    }
}

impl DynamicSolver {
    /// Solve while reporting the completed table and each selected ride to `observer`.
    ///
    /// Rides are returned in backtrack order: the last selected input ride first.
    /// When including a ride would not change the best time at its cell, the
    /// ride is left out.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TableTooLarge`] if the table cannot be allocated.
    #[tracing::instrument(
        name = "dynamic_solve",
        skip_all,
        fields(rides = rides.len(), budget = budget.dollars())
    )]
    pub fn solve_with_observer<'a, O: TableObserver>(
        rides: &RideGroup<'a>,
        budget: Budget,
        observer: &mut O,
    ) -> Result<SolverResult<'a>, SolverError> {
        let capacity = dollars_to_index(budget.dollars())?;

        let entries = rides
            .iter()
            .map(|(key, ride)| dollars_to_index(ride.cost()).map(|cost| (key, cost, ride.time())))
            .collect::<Result<SmallVec<[Entry; INLINE_RIDES]>, SolverError>>()?;

        let rows = entries.len() + 1;
        let columns = capacity
            .checked_add(1)
            .ok_or(SolverError::TableTooLarge {
                rows,
                columns: capacity,
            })?;

        let mut table = CostTable::new(rows, columns)?;

        for (index, &(_, cost, time)) in entries.iter().enumerate() {
            table.fill_row(index + 1, |column, previous| {
                let without = previous.get(column).copied().unwrap_or_default();

                match column.checked_sub(cost).and_then(|rest| previous.get(rest)) {
                    Some(&with) => without.max(time + with),
                    None => without,
                }
            })?;
        }

        observer.on_table(&table);

        let selection = backtrack(&table, &entries, capacity, observer)?;

        let result =
            SolverResult::from_selection(RideGroup::from_trusted_keys(rides.catalog(), selection));

        debug!(
            selected = result.selection.len(),
            total_cost = result.total_cost,
            total_time = result.total_time,
            "dynamic selection"
        );

        Ok(result)
    }
}

fn backtrack<O: TableObserver>(
    table: &CostTable,
    entries: &[Entry],
    capacity: usize,
    observer: &mut O,
) -> Result<RideKeys, SolverError> {
    let missing_cell = SolverError::InvariantViolation {
        message: "backtrack left the cost table",
    };

    let mut remaining = capacity;
    let mut selection = RideKeys::new();

    for (index, &(key, cost, _)) in entries.iter().enumerate().rev() {
        let row = index + 1;

        let current = table.get(row, remaining).ok_or(missing_cell.clone())?;
        let above = table.get(index, remaining).ok_or(missing_cell.clone())?;

        #[expect(
            clippy::float_cmp,
            reason = "a ride is taken only when it changed the cell; equal cells leave it out"
        )]
        let taken = current != above;

        if taken {
            observer.on_ride_selected(row, key, remaining);

            selection.push(key);

            remaining =
                remaining
                    .checked_sub(cost)
                    .ok_or(SolverError::InvariantViolation {
                        message: "selected ride costs more than the remaining budget",
                    })?;
        }
    }

    Ok(selection)
}
