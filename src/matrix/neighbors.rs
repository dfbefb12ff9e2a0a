//! Nearest-by-value highlighting.

use std::collections::HashSet;

use super::{Cell, CellId, Matrix};

/// Number of cells highlighted when hovering a cell.
pub const DEFAULT_NEIGHBOR_COUNT: usize = 5;

/// Ids of the `k` cells whose amounts are closest to `reference`.
///
/// The reference cell is a candidate like any other (distance 0). Ties keep
/// row-major order. Because ids can repeat, the set may hold fewer than `k`
/// entries.
pub fn nearest(matrix: &Matrix, reference: &Cell, k: usize) -> HashSet<CellId> {
    ranked(matrix, reference)
        .into_iter()
        .take(k)
        .map(|cell| cell.id)
        .collect()
}

/// All cells ordered by distance to `reference`, closest first.
pub fn ranked(matrix: &Matrix, reference: &Cell) -> Vec<Cell> {
    let mut cells: Vec<Cell> = matrix.cells().copied().collect();
    // stable: equal distances stay in row-major order
    cells.sort_by_key(|cell| cell.amount.abs_diff(reference.amount));
    cells
}
