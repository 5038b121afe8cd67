//! Table Observer

use crate::{rides::RideKey, solvers::table::CostTable};

/// Observer trait for watching a dynamic solve.
///
/// Callbacks fire once the cost table is complete and again for each ride the
/// backtrack selects, so reports can show the table without the solver keeping
/// it alive after returning.
pub trait TableObserver {
    /// Called once every cell of the table has been filled.
    fn on_table(&mut self, table: &CostTable);

    /// Called when the backtrack includes a ride.
    ///
    /// # Parameters
    ///
    /// - `row`: Table row of the ride (its 1-based position in the input)
    /// - `ride`: Key of the included ride
    /// - `remaining`: Budget left before the ride's cost is subtracted
    fn on_ride_selected(&mut self, _row: usize, _ride: RideKey, _remaining: usize) {}
}

/// No-op observer for unobserved solves.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl TableObserver for NoopObserver {
    fn on_table(&mut self, _: &CostTable) {}
}
