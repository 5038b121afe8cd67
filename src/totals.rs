//! Totals

use crate::rides::RideItem;

/// Combined cost and time of a collection of rides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// Sum of ride costs, in dollars
    pub cost: u64,

    /// Sum of ride times, in minutes
    pub time: f64,
}

/// Calculates the total cost and total time of the given rides in a single pass.
pub fn totals<'r>(rides: impl IntoIterator<Item = &'r RideItem>) -> Totals {
    rides.into_iter().fold(Totals::default(), |acc, ride| Totals {
        cost: acc.cost + u64::from(ride.cost()),
        time: acc.time + ride.time(),
    })
}
