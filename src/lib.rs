//! Maxtime
//!
//! Maxtime picks the rides that give the most total time for a fixed dollar
//! budget. It answers the 0/1 knapsack question two ways: a dynamic
//! programming solver for real inputs and an exhaustive solver that serves as
//! a reference on small ones.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod rides;
pub mod solvers;
pub mod totals;
