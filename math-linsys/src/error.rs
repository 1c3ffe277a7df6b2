//! Error types for the dense solver.
//!
//! Two degeneracy kinds exist: the global determinant pre-check
//! ([`SolverError::SingularMatrix`]) and the per-column pivot check
//! ([`SolverError::ZeroPivot`]). They signal the same condition reached through
//! different rounding paths and callers should handle them identically; see
//! [`SolverError::is_degenerate`].

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while solving a dense linear system.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The determinant pre-check found the coefficient matrix singular.
    #[error("singular matrix: determinant {determinant:e} is below the degeneracy tolerance")]
    SingularMatrix {
        /// Determinant measure computed by the singularity oracle
        determinant: f64,
    },

    /// No usable pivot was found in a column during forward elimination.
    #[error(
        "zero pivot in column {column}: largest candidate {value:e} is below the degeneracy tolerance"
    )]
    ZeroPivot {
        /// Pivot column being eliminated
        column: usize,
        /// Largest absolute value found at or below the diagonal
        value: f64,
    },

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The right-hand side does not match the number of equations.
    #[error("dimension mismatch: expected right-hand side of length {expected}, got {got}")]
    DimensionMismatch {
        /// Number of equations
        expected: usize,
        /// Length of the right-hand side
        got: usize,
    },

    /// The system has no equations.
    #[error("linear system is empty")]
    EmptySystem,

    /// The solver configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if the system has no unique solution.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            SolverError::SingularMatrix { .. } | SolverError::ZeroPivot { .. }
        )
    }

    /// Returns `true` if the inputs were malformed rather than degenerate.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SolverError::NotSquare { .. }
                | SolverError::DimensionMismatch { .. }
                | SolverError::EmptySystem
        )
    }
}
