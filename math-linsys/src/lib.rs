//! Dense linear system solver
//!
//! This crate solves square systems `A x = b` by Gaussian elimination with
//! partial pivoting and back-substitution, guarded by two independent
//! degeneracy checks.
//!
//! # Features
//!
//! - **Singularity oracle**: LU-based determinant, singularity test and numerical rank
//! - **Pivoted elimination**: reproducible pivot order (largest magnitude, lowest row on ties)
//! - **Two-tier degeneracy detection**: determinant pre-check plus per-column pivot check
//! - **Text front-end**: `N M` header format, fixed-precision output
//! - **Batch solving**: independent systems solved concurrently (`native` feature)
//! - **Generic Scalar Types**: Works with f64, f32
//!
//! # Example
//!
//! ```
//! use math_linsys::{SolverError, solve};
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, 1.0, 3.0], [1.0, 3.0, 1.0], [3.0, 2.0, 1.0]];
//! let b = array![95.0_f64, 82.0, 75.0];
//! let x = solve(&a, &b)?;
//! assert!((x[0] - 95.0 / 17.0).abs() < 1e-10);
//! # Ok::<(), SolverError>(())
//! ```

pub mod config;
pub mod error;
pub mod gauss;
pub mod oracle;
pub mod parallel;
pub mod parse;
mod pivot;
pub mod system;
pub mod traits;

// Re-export main types
pub use config::{ConfigError, DEFAULT_PRECISION, DEGENERACY_TOLERANCE, SolverConfig};
pub use error::{Result, SolverError};
pub use system::LinearSystem;
pub use traits::RealField;

// Re-export the solver and the oracle
pub use gauss::{GaussSolution, solve, solve_batch, solve_with_config};
pub use oracle::{determinant, is_full_rank, is_singular, is_singular_with, matrix_rank};

// Re-export the text front-end
pub use parse::{OBSERVATION_ERROR, ParseError, format_solution, parse_system, process_input};
