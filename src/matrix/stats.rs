//! Row and column statistics.
//!
//! Missing values count as 0 and empty inputs produce 0, so every function
//! here is total.

use super::{Cell, Matrix};

pub fn row_sum(row: &[Cell]) -> i64 {
    row.iter().map(|cell| cell.amount).sum()
}

/// Mean amount of a row, 0 for an empty row.
#[allow(clippy::cast_precision_loss)]
pub fn row_average(row: &[Cell]) -> f64 {
    if row.is_empty() {
        return 0.0;
    }
    row_sum(row) as f64 / row.len() as f64
}

/// Amount at `col` for each row, with 0 standing in for rows too short to
/// have one.
pub fn column_values(matrix: &Matrix, col: usize) -> Vec<i64> {
    matrix
        .rows()
        .iter()
        .map(|row| row.get(col).map_or(0, |cell| cell.amount))
        .collect()
}

/// Median of `values`: the middle element, or the mean of the two middle
/// elements for an even count. Returns 0 for no values.
#[allow(clippy::cast_precision_loss)]
pub fn median(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

pub fn column_median(matrix: &Matrix, col: usize) -> f64 {
    median(&column_values(matrix, col))
}

/// Median of every column, using the first row's length as the column count.
pub fn column_medians(matrix: &Matrix) -> Vec<f64> {
    (0..matrix.column_count())
        .map(|col| column_median(matrix, col))
        .collect()
}

/// Share of `sum` held by `amount`, in percent. 0 when `sum` is 0.
#[allow(clippy::cast_precision_loss)]
pub fn percentage_of(amount: i64, sum: i64) -> f64 {
    if sum == 0 {
        return 0.0;
    }
    amount as f64 / sum as f64 * 100.0
}

/// Each cell's share of its row sum, in percent.
pub fn row_percentages(row: &[Cell]) -> Vec<f64> {
    let sum = row_sum(row);
    row.iter()
        .map(|cell| percentage_of(cell.amount, sum))
        .collect()
}

pub fn format_percentage(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Render a statistic without a trailing `.0` for whole numbers.
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').to_string()
    }
}
