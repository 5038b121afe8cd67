//! Reports
//!
//! Human-readable rendering of ride groups and of the dynamic solver's cost
//! table. Output carries no contract beyond being readable.

use std::io;

use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    rides::groups::RideGroup,
    solvers::{observer::TableObserver, table::CostTable},
};

/// Tables with more rows or columns than this are not rendered.
pub const MAX_RENDERED_DIMENSION: usize = 250;

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Format whole dollars as US currency.
pub fn usd(dollars: u64) -> String {
    let dollars = i64::try_from(dollars).unwrap_or(i64::MAX);

    Money::from_major(dollars, iso::USD).to_string()
}

/// Write each ride in the group followed by the grand totals.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing to `out` fails.
pub fn write_rides(
    mut out: impl io::Write,
    title: &str,
    rides: &RideGroup<'_>,
) -> Result<(), ReportError> {
    writeln!(out, "*** {title} ***")?;

    if rides.is_empty() {
        writeln!(out, "[empty ride list]")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Ride", "Cost", "Time"]);

    for (position, ride) in rides.rides().enumerate() {
        builder.push_record([
            format!("#{:<3}", position + 1),
            ride.description().to_string(),
            usd(u64::from(ride.cost())),
            format!("{} min", ride.time()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}")?;

    let totals = rides.totals();

    writeln!(out, "> Grand total cost: {}", usd(totals.cost))?;
    writeln!(out, "> Grand total time: {} min", totals.time)?;

    Ok(())
}

/// Render the cost table as a grid with budget columns and ride rows.
pub fn render_table(table: &CostTable) -> String {
    if table.is_empty() {
        return "[empty]".to_string();
    }

    if table.rows() > MAX_RENDERED_DIMENSION || table.columns() > MAX_RENDERED_DIMENSION {
        return "[too large]".to_string();
    }

    let mut builder = Builder::default();

    builder.push_record(
        std::iter::once(String::new()).chain((0..table.columns()).map(|column| format!("${column}"))),
    );

    for (row, cells) in table.iter_rows().enumerate() {
        builder.push_record(
            std::iter::once(row.to_string()).chain(cells.iter().map(|value| format!("{value}"))),
        );
    }

    let mut grid = builder.build();

    grid.with(Style::blank());
    grid.modify(Columns::new(1..), Alignment::right());

    grid.to_string()
}

/// Observer that renders the table of a dynamic solve.
#[derive(Debug, Default)]
pub struct TableRenderer {
    rendered: Option<String>,
}

impl TableRenderer {
    /// Create a renderer with nothing rendered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered table, once a solve has produced one.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Write the rendered table.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        writeln!(out, "*** Cost Table ***")?;
        writeln!(out, "{}", self.rendered().unwrap_or("[empty]"))?;

        Ok(())
    }
}

impl TableObserver for TableRenderer {
    fn on_table(&mut self, table: &CostTable) {
        self.rendered = Some(render_table(table));
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        catalog::Catalog,
        rides::RideItem,
        solvers::{Budget, dynamic::DynamicSolver},
    };

    fn render(rides: &RideGroup<'_>) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        write_rides(&mut out, "Selection", rides)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn rides_are_listed_with_totals() -> TestResult {
        let catalog = Catalog::from_rides([
            RideItem::new("bumper cars", 2, 3.0)?,
            RideItem::new("ferris wheel", 3, 4.5)?,
        ]);

        let text = render(&RideGroup::from(&catalog))?;

        assert!(text.starts_with("*** Selection ***"));
        assert!(text.contains("bumper cars"));
        assert!(text.contains("ferris wheel"));
        assert!(text.contains("$2.00"));
        assert!(text.contains("> Grand total cost: $5.00"));
        assert!(text.contains("> Grand total time: 7.5 min"));

        Ok(())
    }

    #[test]
    fn empty_group_is_marked() -> TestResult {
        let catalog = Catalog::new();

        let text = render(&RideGroup::from(&catalog))?;

        assert!(text.contains("[empty ride list]"));
        assert!(!text.contains("Grand total"));

        Ok(())
    }

    #[test]
    fn small_table_is_rendered() -> TestResult {
        let mut table = CostTable::new(2, 3)?;
        table.fill_row(1, |_, _| 4.0)?;

        let text = render_table(&table);

        assert!(text.contains("$2"));
        assert!(text.contains('4'));

        Ok(())
    }

    #[test]
    fn large_table_is_suppressed() -> TestResult {
        let table = CostTable::new(2, MAX_RENDERED_DIMENSION + 1)?;

        assert_eq!(render_table(&table), "[too large]");

        Ok(())
    }

    #[test]
    fn empty_table_is_marked() -> TestResult {
        let table = CostTable::new(0, 0)?;

        assert_eq!(render_table(&table), "[empty]");

        Ok(())
    }

    #[test]
    fn renderer_captures_dynamic_table() -> TestResult {
        let catalog = Catalog::from_rides([RideItem::new("teacups", 1, 2.0)?]);
        let mut renderer = TableRenderer::new();

        DynamicSolver::solve_with_observer(
            &RideGroup::from(&catalog),
            Budget::from(2),
            &mut renderer,
        )?;

        let grid = renderer.rendered().ok_or("Expected a rendered table")?;
        assert!(grid.contains("$2"));

        let mut out = Vec::new();
        renderer.write_to(&mut out)?;
        assert!(String::from_utf8(out)?.starts_with("*** Cost Table ***"));

        Ok(())
    }
}
