//! Ride Filter
//!
//! Narrows a group down to rides worth optimising over. Rides with no time
//! never help a time-maximising selection, and the cap keeps the input to the
//! exhaustive solver small.

use tracing::debug;

use crate::rides::groups::{RideGroup, RideKeys};

/// Time window and output cap applied to a ride group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideFilter {
    /// Minimum ride time, inclusive
    pub min_time: f64,

    /// Maximum ride time, inclusive
    pub max_time: f64,

    /// Maximum number of rides kept
    pub max_rides: usize,
}

impl RideFilter {
    /// Create a filter keeping at most `max_rides` rides with time in `[min_time, max_time]`.
    #[must_use]
    pub const fn new(min_time: f64, max_time: f64, max_rides: usize) -> Self {
        Self {
            min_time,
            max_time,
            max_rides,
        }
    }

    /// Create a filter with no time bounds beyond excluding zero-time rides.
    #[must_use]
    pub const fn unbounded(max_rides: usize) -> Self {
        Self::new(0.0, f64::INFINITY, max_rides)
    }

    /// Check whether a ride time passes the window.
    pub fn admits(&self, time: f64) -> bool {
        time > 0.0 && time >= self.min_time && time <= self.max_time
    }

    /// Keep the first `max_rides` rides of `source` whose time is within the
    /// window and strictly positive, in source order.
    pub fn apply<'a>(&self, source: &RideGroup<'a>) -> RideGroup<'a> {
        let keys: RideKeys = source
            .iter()
            .filter(|(_, ride)| self.admits(ride.time()))
            .map(|(key, _)| key)
            .take(self.max_rides)
            .collect();

        debug!(
            source = source.len(),
            kept = keys.len(),
            min_time = self.min_time,
            max_time = self.max_time,
            max_rides = self.max_rides,
            "filtered rides"
        );

        RideGroup::from_trusted_keys(source.catalog(), keys)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{catalog::Catalog, rides::RideItem};

    fn test_catalog() -> Result<Catalog, crate::rides::RideError> {
        Ok(Catalog::from_rides([
            RideItem::new("carousel", 1, 0.0)?,
            RideItem::new("bumper cars", 2, 3.0)?,
            RideItem::new("ferris wheel", 3, 10.0)?,
            RideItem::new("haunted house", 4, 5.0)?,
            RideItem::new("roller coaster", 5, 2.0)?,
            RideItem::new("lazy river", 2, 5.0)?,
        ]))
    }

    fn names<'a>(group: &RideGroup<'a>) -> Vec<&'a str> {
        group.rides().map(RideItem::description).collect()
    }

    #[test]
    fn keeps_rides_inside_inclusive_window_in_order() -> TestResult {
        let catalog = test_catalog()?;
        let source = RideGroup::from(&catalog);

        let filtered = RideFilter::new(3.0, 5.0, 10).apply(&source);

        assert_eq!(names(&filtered), ["bumper cars", "haunted house", "lazy river"]);

        Ok(())
    }

    #[test]
    fn excludes_zero_time_rides_even_when_window_allows_them() -> TestResult {
        let catalog = test_catalog()?;
        let source = RideGroup::from(&catalog);

        let filtered = RideFilter::new(0.0, 100.0, 10).apply(&source);

        assert!(!names(&filtered).contains(&"carousel"));
        assert_eq!(filtered.len(), 5);

        Ok(())
    }

    #[test]
    fn truncates_to_max_rides() -> TestResult {
        let catalog = test_catalog()?;
        let source = RideGroup::from(&catalog);

        let filtered = RideFilter::unbounded(2).apply(&source);

        assert_eq!(names(&filtered), ["bumper cars", "ferris wheel"]);

        Ok(())
    }

    #[test]
    fn zero_cap_yields_empty_group() -> TestResult {
        let catalog = test_catalog()?;
        let source = RideGroup::from(&catalog);

        assert!(RideFilter::unbounded(0).apply(&source).is_empty());

        Ok(())
    }

    #[test]
    fn inverted_window_yields_empty_group() -> TestResult {
        let catalog = test_catalog()?;
        let source = RideGroup::from(&catalog);

        assert!(RideFilter::new(6.0, 4.0, 10).apply(&source).is_empty());

        Ok(())
    }

    #[test]
    fn empty_source_yields_empty_group() {
        let catalog = Catalog::new();

        assert!(RideFilter::unbounded(10).apply(&RideGroup::from(&catalog)).is_empty());
    }

    #[test]
    fn filtered_rides_are_the_catalog_rides() -> TestResult {
        let catalog = test_catalog()?;
        let source = RideGroup::from(&catalog);

        let filtered = RideFilter::unbounded(10).apply(&source);

        assert!(filtered.keys().iter().all(|&key| source.contains(key)));
        assert!(std::ptr::eq(filtered.catalog(), std::ptr::from_ref(&catalog)));

        Ok(())
    }

    #[test]
    fn source_is_untouched() -> TestResult {
        let catalog = test_catalog()?;
        let source = RideGroup::from(&catalog);

        let _filtered = RideFilter::new(3.0, 3.0, 1).apply(&source);

        assert_eq!(source.len(), 6);

        Ok(())
    }
}
