//! Owned linear system `A x = b`

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Validate that `matrix` is a non-empty square matrix matching `rhs`.
pub fn check_dimensions<T: RealField>(matrix: &Array2<T>, rhs: &Array1<T>) -> Result<()> {
    let (rows, cols) = matrix.dim();
    if rows == 0 || cols == 0 {
        return Err(SolverError::EmptySystem);
    }
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    if rhs.len() != rows {
        return Err(SolverError::DimensionMismatch {
            expected: rows,
            got: rhs.len(),
        });
    }
    Ok(())
}

/// A square linear system: coefficient matrix plus right-hand side
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T: RealField> {
    /// Coefficient matrix, row `i` holds the coefficients of equation `i`
    pub matrix: Array2<T>,
    /// Right-hand side, aligned with the matrix rows
    pub rhs: Array1<T>,
}

impl<T: RealField> LinearSystem<T> {
    /// Build a system, checking that the shapes agree
    pub fn new(matrix: Array2<T>, rhs: Array1<T>) -> Result<Self> {
        check_dimensions(&matrix, &rhs)?;
        Ok(Self { matrix, rhs })
    }

    /// Number of equations (and unknowns)
    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// Residual `A x - b`
    pub fn residual(&self, x: &Array1<T>) -> Result<Array1<T>> {
        let n = self.dim();
        if x.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: x.len(),
            });
        }

        let mut r = Array1::from_elem(n, T::zero());
        for i in 0..n {
            let mut sum = T::zero();
            for j in 0..n {
                sum += self.matrix[[i, j]] * x[j];
            }
            r[i] = sum - self.rhs[i];
        }
        Ok(r)
    }

    /// Euclidean norm of the residual
    pub fn residual_norm(&self, x: &Array1<T>) -> Result<T> {
        Ok(vector_norm(&self.residual(x)?))
    }
}

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<T: RealField>(x: &Array1<T>) -> T {
    let mut sum = T::zero();
    for xi in x.iter() {
        sum += *xi * *xi;
    }
    sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_check_dimensions() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        assert!(check_dimensions(&a, &array![1.0, 2.0]).is_ok());

        let err = check_dimensions(&a, &array![1.0]).unwrap_err();
        assert!(matches!(
            err,
            SolverError::DimensionMismatch {
                expected: 2,
                got: 1
            }
        ));

        let wide = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let err = check_dimensions(&wide, &array![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, SolverError::NotSquare { rows: 2, cols: 3 }));

        let empty = Array2::<f64>::zeros((0, 0));
        let err = check_dimensions(&empty, &Array1::zeros(0)).unwrap_err();
        assert!(matches!(err, SolverError::EmptySystem));
    }

    #[test]
    fn test_residual() {
        let system = LinearSystem::new(array![[2.0_f64, 1.0], [1.0, 3.0]], array![5.0, 10.0])
            .expect("valid system");
        assert_eq!(system.dim(), 2);

        let r = system.residual(&array![1.0, 3.0]).unwrap();
        assert_relative_eq!(r[0], 0.0);
        assert_relative_eq!(r[1], 0.0);

        let norm = system.residual_norm(&array![0.0, 0.0]).unwrap();
        assert_relative_eq!(norm, 125.0_f64.sqrt());
    }

    #[test]
    fn test_residual_length_mismatch() {
        let system = LinearSystem::new(array![[2.0_f64]], array![4.0]).expect("valid system");

        let err = system.residual(&array![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            SolverError::DimensionMismatch {
                expected: 1,
                got: 2
            }
        ));
        assert!(system.residual_norm(&Array1::zeros(0)).is_err());
    }

    #[test]
    fn test_vector_norm() {
        assert_relative_eq!(vector_norm(&array![3.0_f64, 4.0]), 5.0);
        assert_relative_eq!(vector_norm(&Array1::<f64>::zeros(3)), 0.0);
    }
}
