//! Gaussian elimination solver
//!
//! Solves a dense square system `A x = b` in three phases:
//!
//! 1. determinant pre-check through the [singularity oracle](crate::oracle);
//! 2. forward elimination with partial pivoting on the augmented matrix
//!    `[A | b]`, re-checking every pivot against the same tolerance;
//! 3. back-substitution, folding each recovered unknown out of the rows above.
//!
//! Both degeneracy checks are kept: the determinant and the elimination take
//! different rounding paths and can disagree, in which case the pivot check is
//! authoritative.

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::oracle::{determinant, measure_is_singular};
use crate::parallel::{is_parallel_available, parallel_map};
use crate::pivot::{partial_pivot, swap_rows};
use crate::system::{LinearSystem, check_dimensions};
use crate::traits::RealField;
use ndarray::{Array1, Array2, s};

/// Result of a solve with diagnostics
#[derive(Debug, Clone)]
pub struct GaussSolution<T: RealField> {
    /// Solution vector, index-aligned with the unknowns
    pub x: Array1<T>,
    /// Determinant measured by the pre-check (`None` when it was skipped)
    pub determinant: Option<T>,
    /// Row selected as pivot for each column, before the exchange
    pub pivots: Vec<usize>,
}

/// Build the `n × (n + 1)` augmented matrix `[A | b]`.
pub fn augment<T: RealField>(matrix: &Array2<T>, rhs: &Array1<T>) -> Array2<T> {
    let n = matrix.nrows();
    let mut augmented = Array2::from_elem((n, n + 1), T::zero());
    augmented.slice_mut(s![.., ..n]).assign(matrix);
    augmented.column_mut(n).assign(rhs);
    augmented
}

/// Reduce an augmented matrix to upper-triangular form in place.
///
/// For each column `i` the row at or below the diagonal with the largest
/// magnitude becomes the pivot (lowest index on ties). If that magnitude is
/// below `tolerance` the column is degenerate and [`SolverError::ZeroPivot`]
/// is returned. Eliminated entries are set to exactly zero.
///
/// Returns the pivot row chosen for every column.
pub fn forward_eliminate<T: RealField>(
    augmented: &mut Array2<T>,
    tolerance: T,
) -> Result<Vec<usize>> {
    let n = augmented.nrows();
    debug_assert_eq!(augmented.ncols(), n + 1, "expected an n x (n + 1) matrix");

    let mut pivots = Vec::with_capacity(n);

    for i in 0..n {
        let (pivot_row, max_val) = partial_pivot(augmented, i, i);

        if max_val < tolerance {
            return Err(SolverError::ZeroPivot {
                column: i,
                value: max_val.to_f64_lossy(),
            });
        }

        log::debug!(
            "column {}: pivot row {} (|a| = {:e})",
            i,
            pivot_row,
            max_val.to_f64_lossy()
        );

        swap_rows(augmented, i, pivot_row);
        pivots.push(pivot_row);

        for k in (i + 1)..n {
            let c = -augmented[[k, i]] / augmented[[i, i]];
            for j in i..=n {
                if j == i {
                    augmented[[k, i]] = T::zero();
                } else {
                    let update = c * augmented[[i, j]];
                    augmented[[k, j]] += update;
                }
            }
        }
    }

    Ok(pivots)
}

/// Solve an upper-triangular augmented matrix from the last row upward.
///
/// The last column is consumed as each unknown is folded out of the rows
/// above it.
pub fn back_substitute<T: RealField>(augmented: &mut Array2<T>) -> Array1<T> {
    let n = augmented.nrows();
    let mut x = Array1::from_elem(n, T::zero());

    for i in (0..n).rev() {
        x[i] = augmented[[i, n]] / augmented[[i, i]];
        for k in (0..i).rev() {
            let update = augmented[[k, i]] * x[i];
            augmented[[k, n]] -= update;
        }
    }

    x
}

/// Solve `A x = b` with the default configuration.
///
/// The inputs are left untouched; all work happens on a private augmented copy.
///
/// # Errors
///
/// - [`SolverError::SingularMatrix`] if the determinant pre-check fails
/// - [`SolverError::ZeroPivot`] if a column has no usable pivot
/// - shape errors if `matrix` is empty, not square, or does not match `rhs`
pub fn solve<T: RealField>(matrix: &Array2<T>, rhs: &Array1<T>) -> Result<Array1<T>> {
    solve_with_config(matrix, rhs, &SolverConfig::default()).map(|solution| solution.x)
}

/// Solve `A x = b` and return the solution together with its diagnostics.
pub fn solve_with_config<T: RealField>(
    matrix: &Array2<T>,
    rhs: &Array1<T>,
    config: &SolverConfig,
) -> Result<GaussSolution<T>> {
    config.validate()?;
    check_dimensions(matrix, rhs)?;

    let tolerance: T = config.tolerance_as();

    let determinant = if config.skip_precheck {
        None
    } else {
        let det = determinant(matrix);
        log::debug!(
            "pre-check: n = {}, determinant = {:e}",
            matrix.nrows(),
            det.to_f64_lossy()
        );
        if measure_is_singular(det, tolerance) {
            return Err(SolverError::SingularMatrix {
                determinant: det.to_f64_lossy(),
            });
        }
        Some(det)
    };

    let mut augmented = augment(matrix, rhs);
    let pivots = forward_eliminate(&mut augmented, tolerance)?;
    let x = back_substitute(&mut augmented);

    Ok(GaussSolution {
        x,
        determinant,
        pivots,
    })
}

/// Solve many independent systems.
///
/// Each system is solved on its own; with the `native` feature they are
/// distributed over the rayon thread pool. Results keep the input order.
pub fn solve_batch<T: RealField>(
    systems: &[LinearSystem<T>],
    config: &SolverConfig,
) -> Vec<Result<Array1<T>>> {
    let results = parallel_map(systems, |system| {
        solve_with_config(&system.matrix, &system.rhs, config).map(|solution| solution.x)
    });

    let solved = results.iter().filter(|r| r.is_ok()).count();
    log::info!(
        "batch solve: {}/{} systems solved ({})",
        solved,
        systems.len(),
        if is_parallel_available() {
            "rayon"
        } else {
            "sequential"
        }
    );

    results
}
