//! Maxtime prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    filter::RideFilter,
    report::{ReportError, TableRenderer, render_table, write_rides},
    rides::{
        RideError, RideItem, RideKey,
        groups::{RideGroup, RideGroupError},
    },
    solvers::{
        Budget, Solver, SolverError, SolverResult,
        dynamic::DynamicSolver,
        exhaustive::ExhaustiveSolver,
        observer::{NoopObserver, TableObserver},
        table::CostTable,
    },
    totals::{Totals, totals},
};
