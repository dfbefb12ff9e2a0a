//! JSON snapshot of a matrix and its statistics (`--json`).

use serde::Serialize;

use crate::matrix::{Cell, Matrix, column_medians, row_average, row_sum};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<Vec<Cell>>,
    pub row_sums: Vec<i64>,
    pub row_averages: Vec<f64>,
    pub column_medians: Vec<f64>,
}

impl Report {
    pub fn from_matrix(matrix: &Matrix) -> Self {
        Self {
            rows: matrix.rows().iter().map(|row| row.to_vec()).collect(),
            row_sums: matrix.rows().iter().map(|row| row_sum(row)).collect(),
            row_averages: matrix.rows().iter().map(|row| row_average(row)).collect(),
            column_medians: column_medians(matrix),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
