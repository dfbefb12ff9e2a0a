use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Cell, Matrix, Row};

/// Range that generated amounts are drawn from.
pub const AMOUNT_RANGE: Range<i64> = 0..100;

/// Generate a `num_rows` x `num_cols` matrix of random amounts.
///
/// Cell ids are `row * num_cols + col`.
pub fn generate<R: Rng + ?Sized>(num_rows: usize, num_cols: usize, rng: &mut R) -> Matrix {
    let rows = (0..num_rows)
        .map(|row| generate_row(row, num_cols, rng))
        .collect();
    Matrix::from_shared_rows(rows)
}

pub(crate) fn generate_row<R: Rng + ?Sized>(row: usize, num_cols: usize, rng: &mut R) -> Row {
    (0..num_cols)
        .map(|col| Cell::new(row * num_cols + col, rng.gen_range(AMOUNT_RANGE)))
        .collect()
}

/// Random source for cell amounts; fixed when a seed is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
