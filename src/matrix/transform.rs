//! Matrix edits.
//!
//! Every function takes the current matrix by reference and returns a new
//! one. Rows that an edit does not touch are shared with the input.

use rand::Rng;

use super::generate::generate_row;
use super::{Matrix, MatrixError, Row};

/// Set the amount of the cell at (`row`, `col`).
///
/// Out-of-range positions leave the matrix unchanged.
pub fn update_cell_amount(matrix: &Matrix, row: usize, col: usize, amount: i64) -> Matrix {
    try_update_cell_amount(matrix, row, col, amount).unwrap_or_else(|_| matrix.clone())
}

/// Like [`update_cell_amount`], but reports a missing cell.
///
/// # Errors
///
/// Returns [`MatrixError::CellOutOfBounds`] when no cell exists at
/// (`row`, `col`).
pub fn try_update_cell_amount(
    matrix: &Matrix,
    row: usize,
    col: usize,
    amount: i64,
) -> Result<Matrix, MatrixError> {
    let out_of_bounds = MatrixError::CellOutOfBounds { row, col };
    let mut cells = matrix.row(row).ok_or(out_of_bounds)?.to_vec();
    let cell = cells.get_mut(col).ok_or(out_of_bounds)?;
    cell.amount = amount;

    let mut rows = matrix.rows().to_vec();
    rows[row] = Row::from(cells);
    Ok(Matrix::from_shared_rows(rows))
}

/// Append a row of random amounts as long as the first row.
///
/// The new row is numbered as if it were row 0, so its ids repeat those of
/// the first generated row.
pub fn add_row<R: Rng + ?Sized>(matrix: &Matrix, rng: &mut R) -> Matrix {
    let mut rows = matrix.rows().to_vec();
    rows.push(generate_row(0, matrix.column_count(), rng));
    Matrix::from_shared_rows(rows)
}

/// Drop the row at `row_index`. Out-of-range indices remove nothing.
pub fn remove_row(matrix: &Matrix, row_index: usize) -> Matrix {
    let rows = matrix
        .rows()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != row_index)
        .map(|(_, row)| Row::clone(row))
        .collect();
    Matrix::from_shared_rows(rows)
}

/// Remove one cell, shortening its row. Rows left empty are dropped.
pub fn remove_cell(matrix: &Matrix, row_index: usize, col_index: usize) -> Matrix {
    let rows = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            if index == row_index {
                without_index(row, col_index)
            } else {
                Row::clone(row)
            }
        })
        .filter(|row| !row.is_empty())
        .collect();
    Matrix::from_shared_rows(rows)
}

/// Remove the cell at `col_index` from every row long enough to have one.
pub fn remove_column(matrix: &Matrix, col_index: usize) -> Matrix {
    let rows = matrix
        .rows()
        .iter()
        .map(|row| without_index(row, col_index))
        .collect();
    Matrix::from_shared_rows(rows)
}

fn without_index(row: &Row, index: usize) -> Row {
    if index >= row.len() {
        return Row::clone(row);
    }
    row.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, cell)| *cell)
        .collect()
}
