//! Shared fixtures for solver tests.

use crate::{
    catalog::Catalog,
    rides::{RideError, RideItem, groups::RideGroup},
};

/// Build a catalog from `(description, cost, time)` triples.
pub fn catalog(rides: &[(&str, u32, f64)]) -> Result<Catalog, RideError> {
    rides
        .iter()
        .map(|&(description, cost, time)| RideItem::new(description, cost, time))
        .collect::<Result<Vec<_>, _>>()
        .map(Catalog::from_rides)
}

/// Four rides whose best selection for a budget of 5 is A + B.
pub fn abcd_catalog() -> Result<Catalog, RideError> {
    catalog(&[
        ("A", 2, 3.0),
        ("B", 3, 4.0),
        ("C", 4, 5.0),
        ("D", 5, 6.0),
    ])
}

/// Descriptions of the rides in a group, in group order.
pub fn names<'a>(group: &RideGroup<'a>) -> Vec<&'a str> {
    group.rides().map(RideItem::description).collect()
}

/// Compare two times that are built from whole minutes.
pub fn same_time(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
