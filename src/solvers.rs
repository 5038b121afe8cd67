//! Solvers for ride selection
//!
//! Both solvers answer the same 0/1 knapsack question: which rides fit within
//! a dollar budget and give the most total time.

use std::fmt;

use thiserror::Error;

use crate::rides::groups::{RideGroup, RideGroupError};

pub mod dynamic;
pub mod exhaustive;
pub mod observer;
pub mod table;

#[cfg(test)]
mod test_support;

/// Solver Errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SolverError {
    /// Budget is negative or does not fit in whole dollars.
    #[error("invalid budget: {0}")]
    InvalidBudget(i64),

    /// Too many rides for exhaustive enumeration.
    #[error("{len} rides exceeds the limit of {max} for this solver")]
    InputTooLarge {
        /// Number of rides given
        len: usize,

        /// Maximum number of rides accepted
        max: usize,
    },

    /// The cost table would not fit in memory.
    #[error("cost table of {rows} x {columns} cells is too large")]
    TableTooLarge {
        /// Rows requested (rides + 1)
        rows: usize,

        /// Columns requested (budget + 1)
        columns: usize,
    },

    /// Wrapped ride group error
    #[error(transparent)]
    RideGroup(#[from] RideGroupError),

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

/// Maximum total cost of a selection, in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Budget(u32);

impl Budget {
    /// Create a budget, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidBudget`] if `dollars` is negative or larger
    /// than `u32::MAX`.
    pub fn new(dollars: i64) -> Result<Self, SolverError> {
        u32::try_from(dollars)
            .map(Self)
            .map_err(|_overflow| SolverError::InvalidBudget(dollars))
    }

    /// Budget in dollars
    pub const fn dollars(self) -> u32 {
        self.0
    }

    /// Check whether a total cost fits within the budget.
    pub fn admits(self, cost: u64) -> bool {
        cost <= u64::from(self.0)
    }
}

impl From<u32> for Budget {
    fn from(dollars: u32) -> Self {
        Self(dollars)
    }
}

impl TryFrom<i64> for Budget {
    type Error = SolverError;

    fn try_from(dollars: i64) -> Result<Self, Self::Error> {
        Self::new(dollars)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Result of a ride selection
#[derive(Debug, Clone)]
pub struct SolverResult<'a> {
    /// Selected rides, drawn from the solver input
    pub selection: RideGroup<'a>,

    /// Total cost of the selected rides
    pub total_cost: u64,

    /// Total time of the selected rides
    pub total_time: f64,
}

impl<'a> SolverResult<'a> {
    /// Build a result from a selection, computing its totals.
    pub fn from_selection(selection: RideGroup<'a>) -> Self {
        let totals = selection.totals();

        Self {
            selection,
            total_cost: totals.cost,
            total_time: totals.time,
        }
    }
}

/// Trait for selecting rides within a budget
pub trait Solver {
    /// Select the rides from `rides` that maximise total time with total cost
    /// no greater than `budget`.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the solver cannot handle the input.
    fn solve<'a>(rides: &RideGroup<'a>, budget: Budget) -> Result<SolverResult<'a>, SolverError>;
}

/// Convert a dollar amount into a table index.
fn dollars_to_index(dollars: u32) -> Result<usize, SolverError> {
    usize::try_from(dollars).map_err(|_overflow| SolverError::InvariantViolation {
        message: "dollar amount does not fit in usize",
    })
}
