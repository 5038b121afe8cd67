//! Rides

use slotmap::new_key_type;
use thiserror::Error;

pub mod groups;

new_key_type! {
    /// Ride Key
    pub struct RideKey;
}

/// Errors raised when a ride would violate its invariants.
#[derive(Debug, Error, PartialEq)]
pub enum RideError {
    /// The description is empty or only whitespace.
    #[error("ride description must not be empty")]
    EmptyDescription,

    /// Rides must cost at least one dollar.
    #[error("ride cost must be positive, got {0}")]
    NonPositiveCost(u32),

    /// Ride time must be a finite, non-negative number of minutes.
    #[error("ride time must be finite and non-negative, got {0}")]
    InvalidTime(f64),
}

/// A purchasable ride with a dollar cost and a time value in minutes.
#[derive(Clone, Debug, PartialEq)]
pub struct RideItem {
    description: String,
    cost: u32,
    time: f64,
}

impl RideItem {
    /// Creates a new ride.
    ///
    /// # Errors
    ///
    /// Returns a [`RideError`] if the description is empty, the cost is zero, or
    /// the time is negative or not finite.
    pub fn new(description: impl Into<String>, cost: u32, time: f64) -> Result<Self, RideError> {
        let description = description.into();

        if description.trim().is_empty() {
            return Err(RideError::EmptyDescription);
        }

        if cost == 0 {
            return Err(RideError::NonPositiveCost(cost));
        }

        if !time.is_finite() || time < 0.0 {
            return Err(RideError::InvalidTime(time));
        }

        Ok(Self {
            description,
            cost,
            time,
        })
    }

    /// Human-readable description, e.g. "new enchanted world"
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cost in whole dollars
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Time in minutes
    pub fn time(&self) -> f64 {
        self.time
    }
}
