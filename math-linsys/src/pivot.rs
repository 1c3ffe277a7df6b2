//! Partial pivoting primitives shared by the oracle and the solver

use crate::traits::RealField;
use ndarray::Array2;

/// Find the row at or below `start` with the largest magnitude in `column`.
///
/// Only a strictly greater value replaces the current best, so among ties the
/// lowest row index wins. Returns the row and its absolute value.
pub(crate) fn partial_pivot<T: RealField>(
    matrix: &Array2<T>,
    column: usize,
    start: usize,
) -> (usize, T) {
    let mut max_val = matrix[[start, column]].abs();
    let mut max_row = start;

    for i in (start + 1)..matrix.nrows() {
        let val = matrix[[i, column]].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }

    (max_row, max_val)
}

/// Swap two full rows in place. No-op when `a == b`.
pub(crate) fn swap_rows<T: RealField>(matrix: &mut Array2<T>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..matrix.ncols() {
        matrix.swap([a, j], [b, j]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_partial_pivot_picks_largest() {
        let m = array![[1.0_f64, 0.0], [-5.0, 0.0], [3.0, 0.0]];
        assert_eq!(partial_pivot(&m, 0, 0), (1, 5.0));
        assert_eq!(partial_pivot(&m, 0, 2), (2, 3.0));
    }

    #[test]
    fn test_partial_pivot_tie_keeps_lowest_row() {
        let m = array![[0.0_f64], [2.0], [-2.0], [2.0]];
        assert_eq!(partial_pivot(&m, 0, 0), (1, 2.0));
    }

    #[test]
    fn test_swap_rows() {
        let mut m = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        swap_rows(&mut m, 0, 1);
        assert_eq!(m, array![[4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
        swap_rows(&mut m, 1, 1);
        assert_eq!(m, array![[4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
    }
}
