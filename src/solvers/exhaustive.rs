//! Exhaustive Search Solver
//!
//! Tries every subset of the input. Exponential in the number of rides, so it
//! is only useful as a reference answer for small inputs.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{
    rides::groups::{INLINE_RIDES, RideGroup, RideKeys},
    solvers::{Budget, Solver, SolverError, SolverResult},
};

/// Largest input the exhaustive solver accepts; subset masks must fit in 64 bits.
pub const MAX_RIDES: usize = 64;

/// Inputs above this size take too long to enumerate in practice.
pub const PRACTICAL_RIDES: usize = 25;

/// Check whether `len` rides can be enumerated in reasonable time.
pub fn is_practical(len: usize) -> bool {
    len <= PRACTICAL_RIDES
}

/// Solver enumerating all `2^n` subsets of its input.
#[derive(Debug)]
pub struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    /// Rides are returned in input order. Among subsets with equal best time,
    /// the one with the lowest mask (bit `j` set for input ride `j`) wins.
    #[tracing::instrument(
        name = "exhaustive_solve",
        skip_all,
        fields(rides = rides.len(), budget = budget.dollars())
    )]
    fn solve<'a>(rides: &RideGroup<'a>, budget: Budget) -> Result<SolverResult<'a>, SolverError> {
        if rides.len() > MAX_RIDES {
            return Err(SolverError::InputTooLarge {
                len: rides.len(),
                max: MAX_RIDES,
            });
        }

        if !is_practical(rides.len()) {
            warn!(
                rides = rides.len(),
                practical = PRACTICAL_RIDES,
                "exhaustive search over this many rides may not finish"
            );
        }

        let entries: SmallVec<[(u64, f64); INLINE_RIDES]> = rides
            .rides()
            .map(|ride| (u64::from(ride.cost()), ride.time()))
            .collect();

        let subsets = 1_u128 << entries.len();

        let mut best_mask = 0_u128;
        let mut best_time = 0.0;

        for mask in 0..subsets {
            let (cost, time) = entries
                .iter()
                .enumerate()
                .filter(|&(bit, _)| (mask >> bit) & 1 == 1)
                .fold((0_u64, 0.0), |(cost, time), (_, &(ride_cost, ride_time))| {
                    (cost + ride_cost, time + ride_time)
                });

            if budget.admits(cost) && time > best_time {
                best_mask = mask;
                best_time = time;
            }
        }

        let selection: RideKeys = rides
            .keys()
            .iter()
            .enumerate()
            .filter(|&(bit, _)| (best_mask >> bit) & 1 == 1)
            .map(|(_, &key)| key)
            .collect();

        let result =
            SolverResult::from_selection(RideGroup::from_trusted_keys(rides.catalog(), selection));

        debug!(
            subsets,
            selected = result.selection.len(),
            total_cost = result.total_cost,
            total_time = result.total_time,
            "exhaustive selection"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        catalog::Catalog,
        rides::RideItem,
        solvers::test_support::{abcd_catalog, catalog, names, same_time},
    };

    #[test]
    fn selects_best_time_within_budget() -> TestResult {
        let catalog = abcd_catalog()?;
        let rides = RideGroup::from(&catalog);

        let result = ExhaustiveSolver::solve(&rides, Budget::from(5))?;

        assert_eq!(result.total_cost, 5);
        assert!(same_time(result.total_time, 7.0));
        assert_eq!(names(&result.selection), ["A", "B"]);

        Ok(())
    }

    #[test]
    fn unaffordable_ride_is_left_out() -> TestResult {
        let catalog = catalog(&[("sky coaster", 10, 100.0)])?;
        let rides = RideGroup::from(&catalog);

        let result = ExhaustiveSolver::solve(&rides, Budget::from(5))?;

        assert!(result.selection.is_empty());

        Ok(())
    }

    #[test]
    fn zero_budget_selects_nothing() -> TestResult {
        let catalog = abcd_catalog()?;
        let rides = RideGroup::from(&catalog);

        let result = ExhaustiveSolver::solve(&rides, Budget::from(0))?;

        assert!(result.selection.is_empty());
        assert_eq!(result.total_cost, 0);

        Ok(())
    }

    #[test]
    fn empty_input_selects_nothing() -> TestResult {
        let catalog = Catalog::new();
        let rides = RideGroup::from(&catalog);

        let result = ExhaustiveSolver::solve(&rides, Budget::from(10))?;

        assert!(result.selection.is_empty());
        assert!(same_time(result.total_time, 0.0));

        Ok(())
    }

    #[test]
    fn first_best_subset_wins_ties() -> TestResult {
        // {X} is mask 1, {Y} is mask 2
        let catalog = catalog(&[("X", 1, 5.0), ("Y", 1, 5.0)])?;
        let rides = RideGroup::from(&catalog);

        let result = ExhaustiveSolver::solve(&rides, Budget::from(1))?;

        assert_eq!(names(&result.selection), ["X"]);

        Ok(())
    }

    #[test]
    fn zero_time_rides_are_never_worth_picking() -> TestResult {
        let catalog = catalog(&[("carousel", 1, 0.0)])?;
        let rides = RideGroup::from(&catalog);

        let result = ExhaustiveSolver::solve(&rides, Budget::from(1))?;

        assert!(result.selection.is_empty());

        Ok(())
    }

    #[test]
    fn rejects_more_than_max_rides() -> TestResult {
        let rides = (0..=MAX_RIDES)
            .map(|index| RideItem::new(format!("ride {index}"), 1, 1.0))
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Catalog::from_rides(rides);

        let result = ExhaustiveSolver::solve(&RideGroup::from(&catalog), Budget::from(1));

        assert_eq!(
            result.err(),
            Some(SolverError::InputTooLarge {
                len: MAX_RIDES + 1,
                max: MAX_RIDES
            })
        );

        Ok(())
    }

    #[test]
    fn practical_limit_sits_below_hard_limit() {
        assert!(is_practical(0));
        assert!(is_practical(PRACTICAL_RIDES));
        assert!(!is_practical(PRACTICAL_RIDES + 1));
        assert!(!is_practical(MAX_RIDES));
    }

    #[test]
    fn selection_reuses_input_rides() -> TestResult {
        let catalog = abcd_catalog()?;
        let rides = RideGroup::from(&catalog);

        let result = ExhaustiveSolver::solve(&rides, Budget::from(9))?;

        assert!(result.selection.keys().iter().all(|&key| rides.contains(key)));
        assert!(result.total_cost <= 9);

        Ok(())
    }
}
