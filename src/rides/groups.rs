//! Ride Groups

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    rides::{RideItem, RideKey},
    totals::{Totals, totals},
};

/// Inline capacity of a ride group before it spills to the heap.
pub const INLINE_RIDES: usize = 16;

/// Ordered list of ride keys held by a group.
pub type RideKeys = SmallVec<[RideKey; INLINE_RIDES]>;

/// Errors related to ride group construction or lookups.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RideGroupError {
    /// A key at the given position does not belong to the group's catalog.
    #[error("Ride {0} does not belong to the catalog")]
    UnknownRide(usize),

    /// A ride was not found in the group.
    #[error("Ride {0} not found")]
    RideNotFound(usize),
}

/// Ordered view over rides owned by a [`Catalog`].
///
/// Groups never copy rides: they hold keys into the catalog, so a ride picked
/// by a solver is the same ride the catalog loaded.
#[derive(Debug, Clone)]
pub struct RideGroup<'a> {
    catalog: &'a Catalog,
    keys: RideKeys,
}

impl<'a> RideGroup<'a> {
    /// Create a group from keys, checking that each belongs to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`RideGroupError::UnknownRide`] with the position of the first
    /// key that the catalog does not contain.
    pub fn new(
        catalog: &'a Catalog,
        keys: impl IntoIterator<Item = RideKey>,
    ) -> Result<Self, RideGroupError> {
        let keys: RideKeys = keys.into_iter().collect();

        if let Some(position) = keys.iter().position(|&key| !catalog.contains(key)) {
            return Err(RideGroupError::UnknownRide(position));
        }

        Ok(Self { catalog, keys })
    }

    /// Create an empty group over the catalog.
    pub fn empty(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            keys: RideKeys::new(),
        }
    }

    /// Keys are already known to come from `catalog`.
    pub(crate) fn from_trusted_keys(catalog: &'a Catalog, keys: RideKeys) -> Self {
        debug_assert!(
            keys.iter().all(|&key| catalog.contains(key)),
            "group keys must belong to the catalog"
        );

        Self { catalog, keys }
    }

    /// Iterate over the rides in the group, in group order.
    pub fn iter(&self) -> impl Iterator<Item = (RideKey, &'a RideItem)> + '_ {
        let catalog = self.catalog;

        self.keys
            .iter()
            .filter_map(move |&key| catalog.get(key).map(|ride| (key, ride)))
    }

    /// Iterate over the rides without their keys.
    pub fn rides(&self) -> impl Iterator<Item = &'a RideItem> + '_ {
        self.iter().map(|(_, ride)| ride)
    }

    /// Get a ride from the group by its position.
    ///
    /// # Errors
    ///
    /// Returns a [`RideGroupError::RideNotFound`] if the position is out of range.
    pub fn get(&self, position: usize) -> Result<(RideKey, &'a RideItem), RideGroupError> {
        self.keys
            .get(position)
            .and_then(|&key| self.catalog.get(key).map(|ride| (key, ride)))
            .ok_or(RideGroupError::RideNotFound(position))
    }

    /// Keys of the rides in the group.
    pub fn keys(&self) -> &[RideKey] {
        &self.keys
    }

    /// Check whether the group holds the given ride.
    pub fn contains(&self, key: RideKey) -> bool {
        self.keys.contains(&key)
    }

    /// Catalog that owns the rides.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Total cost and time of the group.
    pub fn totals(&self) -> Totals {
        totals(self.rides())
    }

    /// Get the number of rides in the group.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a> From<&'a Catalog> for RideGroup<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        RideGroup {
            catalog,
            keys: catalog.keys().collect(),
        }
    }
}
