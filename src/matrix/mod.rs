//! Matrix model and the pure functions that operate on it.
//!
//! - [`generate`]: random initial matrices
//! - [`transform`]: structural and value edits (each returns a new matrix)
//! - [`stats`]: row sums, averages, column medians, percentages
//! - [`neighbors`]: nearest-by-value highlighting
//!
//! A [`Matrix`] is never mutated in place. Rows are reference counted, so a
//! transform only allocates the rows it changes and shares the rest with
//! its input.

pub mod generate;
pub mod neighbors;
pub mod stats;
pub mod transform;

use std::rc::Rc;

use serde::Serialize;

pub use generate::{AMOUNT_RANGE, generate, seeded_rng};
pub use neighbors::{DEFAULT_NEIGHBOR_COUNT, nearest};
pub use stats::{
    column_median, column_medians, column_values, median, row_average, row_percentages, row_sum,
};
pub use transform::{
    add_row, remove_cell, remove_column, remove_row, try_update_cell_amount, update_cell_amount,
};

/// Identifier assigned to a cell when its row is generated.
///
/// Ids are not renumbered after structural edits and rows appended with
/// [`add_row`] reuse the ids of row 0, so an id is not guaranteed to be
/// unique across a matrix.
pub type CellId = usize;

/// A single matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub id: CellId,
    pub amount: i64,
}

impl Cell {
    pub const fn new(id: CellId, amount: i64) -> Self {
        Self { id, amount }
    }
}

/// A shared, immutable row of cells.
pub type Row = Rc<[Cell]>;

/// Position of a cell in the current matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Errors reported by the checked matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("no cell at row {row}, column {col}")]
    CellOutOfBounds { row: usize, col: usize },
}

/// An ordered sequence of rows. Nominally rectangular, but cell removal can
/// leave rows of different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Row>,
}

impl Matrix {
    /// Build a matrix from owned rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self {
            rows: rows.into_iter().map(Row::from).collect(),
        }
    }

    /// Build a matrix from amounts, numbering cells the way [`generate`] does.
    ///
    /// The row width used for ids is the length of the first row.
    pub fn from_amounts(amounts: &[Vec<i64>]) -> Self {
        let width = amounts.first().map_or(0, Vec::len);
        let rows = amounts
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &amount)| Cell::new(r * width + c, amount))
                    .collect::<Row>()
            })
            .collect();
        Self { rows }
    }

    pub(crate) const fn from_shared_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(AsRef::as_ref)
    }

    pub fn cell(&self, pos: CellPos) -> Option<Cell> {
        self.row(pos.row)?.get(pos.col).copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the first row (0 when there are no rows).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Length of the longest row.
    pub fn widest_row(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Amounts only, row by row.
    pub fn amounts(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.amount).collect())
            .collect()
    }
}
