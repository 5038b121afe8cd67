//! Ride Catalog
//!
//! Loads rides from a caret-separated (`^`) record file. The first line is a
//! header; every other line must hold exactly three fields:
//!
//! ```text
//! description^cost^time
//! new enchanted world^12^30.5
//! ```
//!
//! A line with the wrong number of fields aborts the whole load; a single
//! trailing `^` is not counted as a field. A line that is not UTF-8, or whose
//! values cannot become a [`RideItem`], is skipped.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseFloatError,
    path::{Path, PathBuf},
    str::Utf8Error,
};

use num_traits::ToPrimitive;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::rides::{RideError, RideItem, RideKey};

/// Field separator used by catalog files.
pub const FIELD_SEPARATOR: char = '^';

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("Failed to load ride catalog; cannot open file {}: {source}", path.display())]
    Open {
        /// Path that was opened
        path: PathBuf,

        /// Underlying IO error
        source: io::Error,
    },

    /// The catalog could not be read after opening.
    #[error("Failed to read ride catalog: {0}")]
    Read(#[from] io::Error),

    /// A data line has the wrong number of fields.
    #[error("Failed to load ride catalog: invalid field count at line {line}; want 3 but got {found}")]
    FieldCount {
        /// 1-based line number
        line: usize,

        /// Number of fields found on the line
        found: usize,
    },
}

/// Reasons a well-formed line is left out of the catalog.
#[derive(Debug, Error)]
enum SkipReason {
    #[error("cost {value:?} is not a number: {source}")]
    Cost {
        value: String,
        source: ParseFloatError,
    },

    #[error("time {value:?} is not a number: {source}")]
    Time {
        value: String,
        source: ParseFloatError,
    },

    #[error("cost {0} is out of range")]
    CostRange(f64),

    #[error("line is not valid UTF-8: {0}")]
    Encoding(Utf8Error),

    #[error(transparent)]
    Ride(#[from] RideError),
}

/// Rides in the order they were loaded.
#[derive(Debug, Default)]
pub struct Catalog {
    rides: SlotMap<RideKey, RideItem>,
    order: Vec<RideKey>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the given rides, in order.
    pub fn from_rides(rides: impl IntoIterator<Item = RideItem>) -> Self {
        let mut catalog = Self::new();

        for ride in rides {
            catalog.insert(ride);
        }

        catalog
    }

    /// Load a catalog from a file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be opened or read, or a data
    /// line does not have exactly three fields.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_reader(BufReader::new(file))?;

        info!(path = %path.display(), rides = catalog.len(), "loaded ride catalog");

        Ok(catalog)
    }

    /// Load a catalog from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if reading fails or a data line does not have
    /// exactly three fields. No partial catalog is returned.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        let mut skipped = 0_usize;

        // Header row
        for (index, bytes) in reader.split(b'\n').enumerate().skip(1) {
            let line_number = index + 1;

            let line = match String::from_utf8(bytes?) {
                Ok(line) => line,
                Err(source) => {
                    let reason = SkipReason::Encoding(source.utf8_error());

                    debug!(line = line_number, %reason, "skipping ride");
                    skipped += 1;

                    continue;
                }
            };

            let line = line.strip_suffix('\r').unwrap_or(&line);

            // A single trailing separator does not start a fourth field
            let line = line.strip_suffix(FIELD_SEPARATOR).unwrap_or(line);

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

            let [description, cost, time] = fields.as_slice() else {
                return Err(CatalogError::FieldCount {
                    line: line_number,
                    found: fields.len(),
                });
            };

            match parse_ride(description, cost, time) {
                Ok(ride) => {
                    catalog.insert(ride);
                }
                Err(reason) => {
                    debug!(line = line_number, %reason, "skipping ride");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            info!(skipped, "skipped rides with invalid values");
        }

        Ok(catalog)
    }

    /// Append a ride and return its key.
    pub fn insert(&mut self, ride: RideItem) -> RideKey {
        let key = self.rides.insert(ride);

        self.order.push(key);

        key
    }

    /// Look up a ride by key.
    pub fn get(&self, key: RideKey) -> Option<&RideItem> {
        self.rides.get(key)
    }

    /// Check whether the key belongs to this catalog.
    pub fn contains(&self, key: RideKey) -> bool {
        self.rides.contains_key(key)
    }

    /// Keys in load order.
    pub fn keys(&self) -> impl Iterator<Item = RideKey> + '_ {
        self.order.iter().copied()
    }

    /// Rides in load order.
    pub fn iter(&self) -> impl Iterator<Item = (RideKey, &RideItem)> + '_ {
        self.order
            .iter()
            .filter_map(|&key| self.rides.get(key).map(|ride| (key, ride)))
    }

    /// Number of rides.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog holds no rides.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn parse_ride(description: &str, cost: &str, time: &str) -> Result<RideItem, SkipReason> {
    let cost_dollars: f64 = cost
        .trim()
        .parse()
        .map_err(|source| SkipReason::Cost {
            value: cost.to_string(),
            source,
        })?;

    let time_minutes: f64 = time
        .trim()
        .parse()
        .map_err(|source| SkipReason::Time {
            value: time.to_string(),
            source,
        })?;

    // Fractional dollars are truncated.
    let cost_dollars = cost_dollars
        .trunc()
        .to_u32()
        .ok_or(SkipReason::CostRange(cost_dollars))?;

    Ok(RideItem::new(description, cost_dollars, time_minutes)?)
}
