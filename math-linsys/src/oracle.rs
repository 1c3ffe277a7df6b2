//! Singularity oracle
//!
//! Classifies a coefficient matrix as singular before any elimination takes
//! place. The degeneracy measure is the determinant, computed through an LU
//! pass with partial pivoting on a private copy of the matrix.
//!
//! The module also provides the numerical rank, which answers the weaker
//! question of how many independent equations a (possibly rectangular) system
//! carries.

use crate::config::DEGENERACY_TOLERANCE;
use crate::pivot::{partial_pivot, swap_rows};
use crate::traits::RealField;
use ndarray::Array2;

/// Determinant of a square matrix via LU decomposition with partial pivoting.
///
/// Pivot selection matches the solver: largest magnitude at or below the
/// diagonal, lowest row index on ties. Each row exchange flips the sign. A
/// column without a non-zero candidate yields exactly zero.
///
/// The input is not modified. Behavior for non-square input is unspecified
/// (checked in debug builds).
pub fn determinant<T: RealField>(matrix: &Array2<T>) -> T {
    let n = matrix.nrows();
    debug_assert_eq!(n, matrix.ncols(), "determinant requires a square matrix");

    let mut lu = matrix.clone();
    let mut det = T::one();

    for k in 0..n {
        let (max_row, max_val) = partial_pivot(&lu, k, k);
        if max_val == T::zero() {
            return T::zero();
        }

        if max_row != k {
            swap_rows(&mut lu, k, max_row);
            det = -det;
        }

        let pivot = lu[[k, k]];
        det *= pivot;

        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = T::zero();
            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    det
}

/// Check whether a determinant measure falls below `tolerance`.
pub(crate) fn measure_is_singular<T: RealField>(determinant: T, tolerance: T) -> bool {
    determinant.is_below(tolerance)
}

/// Report whether `matrix` is singular under [`DEGENERACY_TOLERANCE`].
pub fn is_singular<T: RealField>(matrix: &Array2<T>) -> bool {
    is_singular_with(matrix, T::from_tolerance(DEGENERACY_TOLERANCE))
}

/// Report whether `matrix` is singular under an explicit tolerance.
pub fn is_singular_with<T: RealField>(matrix: &Array2<T>, tolerance: T) -> bool {
    let det = determinant(matrix);
    log::debug!(
        "singularity oracle: n = {}, determinant = {:e}",
        matrix.nrows(),
        det.to_f64_lossy()
    );
    measure_is_singular(det, tolerance)
}

/// Numerical rank via row-echelon elimination with partial pivoting.
///
/// Works on rectangular matrices. A column whose best remaining candidate is
/// below `tolerance` contributes no pivot. An empty matrix has rank 0.
pub fn matrix_rank<T: RealField>(matrix: &Array2<T>, tolerance: T) -> usize {
    let (rows, cols) = matrix.dim();
    let mut echelon = matrix.clone();
    let mut rank = 0;

    for col in 0..cols {
        if rank == rows {
            break;
        }

        let (pivot_row, max_val) = partial_pivot(&echelon, col, rank);
        if max_val < tolerance {
            log::trace!("rank: column {} has no pivot (max {:e})", col, max_val.to_f64_lossy());
            continue;
        }

        swap_rows(&mut echelon, rank, pivot_row);
        let pivot = echelon[[rank, col]];

        for i in (rank + 1)..rows {
            let factor = echelon[[i, col]] / pivot;
            echelon[[i, col]] = T::zero();
            for j in (col + 1)..cols {
                let update = factor * echelon[[rank, j]];
                echelon[[i, j]] -= update;
            }
        }

        rank += 1;
    }

    rank
}

/// True when `matrix` is square and its rank equals its dimension.
pub fn is_full_rank<T: RealField>(matrix: &Array2<T>) -> bool {
    let (rows, cols) = matrix.dim();
    rows == cols && matrix_rank(matrix, T::from_tolerance(DEGENERACY_TOLERANCE)) == rows
}
