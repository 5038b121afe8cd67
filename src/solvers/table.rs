//! Cost Table

use crate::solvers::SolverError;

/// Dynamic programming table for the ride knapsack.
///
/// Cell `(i, j)` holds the greatest total time reachable using only the first
/// `i` rides with a total cost of at most `j` dollars. Row 0 and column 0 are
/// always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    rows: usize,
    columns: usize,
    cells: Vec<f64>,
}

impl CostTable {
    /// Create a zeroed table with `rows` x `columns` cells.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TableTooLarge`] if the cells cannot be allocated.
    pub fn new(rows: usize, columns: usize) -> Result<Self, SolverError> {
        let too_large = SolverError::TableTooLarge { rows, columns };

        let len = rows.checked_mul(columns).ok_or(too_large.clone())?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_reserve| too_large)?;
        cells.resize(len, 0.0);

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Number of rows (rides considered + 1)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (budget + 1)
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `(row, column)`, if inside the table.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if column >= self.columns {
            return None;
        }

        let index = row.checked_mul(self.columns)?.checked_add(column)?;

        self.cells.get(index).copied()
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let start = row.checked_mul(self.columns)?;
        let end = start.checked_add(self.columns)?;

        self.cells.get(start..end)
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks(self.columns.max(1))
    }

    /// Fill columns `1..` of `row` from the row above it.
    ///
    /// `cell` receives the column and the previous row and returns the value
    /// of the new cell.
    pub(crate) fn fill_row(
        &mut self,
        row: usize,
        mut cell: impl FnMut(usize, &[f64]) -> f64,
    ) -> Result<(), SolverError> {
        let columns = self.columns;
        let start = row
            .checked_mul(columns)
            .filter(|_| row > 0 && row < self.rows)
            .ok_or(SolverError::InvariantViolation {
                message: "filled row outside the cost table",
            })?;

        let (before, after) = self.cells.split_at_mut(start);

        let previous = before
            .get(start - columns..)
            .ok_or(SolverError::InvariantViolation {
                message: "previous row missing from the cost table",
            })?;

        let current = after
            .get_mut(..columns)
            .ok_or(SolverError::InvariantViolation {
                message: "current row missing from the cost table",
            })?;

        for (column, value) in current.iter_mut().enumerate().skip(1) {
            *value = cell(column, previous);
        }

        Ok(())
    }
}
