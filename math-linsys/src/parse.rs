//! Text front-end for the solver
//!
//! Reads a system written as
//!
//! ```text
//! N M
//! a11 a12 ... a1M b1
//! ...
//! aN1 aN2 ... aNM bN
//! ```
//!
//! where `N` is the number of equations and `M` the number of unknowns, and
//! renders solutions as space-separated fixed-point numbers. Only square
//! systems (`N == M`) ever reach the solver.

use crate::config::SolverConfig;
use crate::gauss::solve_with_config;
use crate::system::LinearSystem;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Output reported for any input that cannot be turned into a unique solution.
pub const OBSERVATION_ERROR: &str = "observation error";

/// Errors that can occur while reading a system from text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Input has no header line.
    #[error("missing `N M` header")]
    MissingHeader,

    /// Header is not two unsigned integers.
    #[error("invalid header {line:?}: expected two unsigned integers `N M`")]
    InvalidHeader {
        /// The offending header line
        line: String,
    },

    /// Number of equations differs from number of unknowns.
    #[error("system has {equations} equations but {unknowns} unknowns")]
    NotSquare {
        /// Declared number of equations
        equations: usize,
        /// Declared number of unknowns
        unknowns: usize,
    },

    /// Header declares zero equations.
    #[error("system declares no equations")]
    EmptySystem,

    /// A coefficient could not be parsed as a number.
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber {
        /// 1-based line number within the trimmed input
        line: usize,
        /// The offending token
        token: String,
    },

    /// An equation line has the wrong number of values.
    #[error("line {line}: expected {expected} values, got {got}")]
    RowLength {
        /// 1-based line number within the trimmed input
        line: usize,
        /// Coefficients plus right-hand side
        expected: usize,
        /// Values found on the line
        got: usize,
    },

    /// Number of equation lines differs from the header.
    #[error("expected {expected} equations, got {got}")]
    RowCount {
        /// Declared number of equations
        expected: usize,
        /// Equation lines found
        got: usize,
    },
}

fn parse_header(line: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidHeader {
        line: line.to_string(),
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(invalid());
    }
    let n = tokens[0].parse::<usize>().map_err(|_| invalid())?;
    let m = tokens[1].parse::<usize>().map_err(|_| invalid())?;
    Ok((n, m))
}

/// Parse a square linear system from text.
///
/// Leading and trailing blank lines are ignored. Every equation line must hold
/// `M` coefficients followed by the right-hand side.
pub fn parse_system(input: &str) -> Result<LinearSystem<f64>, ParseError> {
    let mut lines = input.trim().lines();

    let header = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or(ParseError::MissingHeader)?;
    let (n, m) = parse_header(header)?;

    if n != m {
        return Err(ParseError::NotSquare {
            equations: n,
            unknowns: m,
        });
    }
    if n == 0 {
        return Err(ParseError::EmptySystem);
    }

    let width = m + 1;
    let mut matrix = Array2::<f64>::zeros((n, m));
    let mut rhs = Array1::<f64>::zeros(n);
    let mut rows = 0;

    for (offset, line) in lines.enumerate() {
        let line_no = offset + 2;

        let values = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    line: line_no,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, ParseError>>()?;

        if values.len() != width {
            return Err(ParseError::RowLength {
                line: line_no,
                expected: width,
                got: values.len(),
            });
        }
        if rows == n {
            return Err(ParseError::RowCount {
                expected: n,
                got: rows + 1,
            });
        }

        for (j, value) in values[..m].iter().enumerate() {
            matrix[[rows, j]] = *value;
        }
        rhs[rows] = values[m];
        rows += 1;
    }

    if rows != n {
        return Err(ParseError::RowCount {
            expected: n,
            got: rows,
        });
    }

    log::debug!("parsed {}x{} system", n, m);
    Ok(LinearSystem { matrix, rhs })
}

/// Render a solution with `precision` decimals, separated by single spaces.
pub fn format_solution(x: &Array1<f64>, precision: usize) -> String {
    x.iter()
        .map(|value| format!("{value:.precision$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse, solve and format with the default configuration.
///
/// Any parse failure or degenerate system yields [`OBSERVATION_ERROR`].
pub fn process_input(input: &str) -> String {
    process_input_with_config(input, &SolverConfig::default())
}

/// Parse, solve and format using `config` for tolerance and precision.
pub fn process_input_with_config(input: &str, config: &SolverConfig) -> String {
    let system = match parse_system(input) {
        Ok(system) => system,
        Err(err) => {
            log::warn!("rejected input: {}", err);
            return OBSERVATION_ERROR.to_string();
        }
    };

    match solve_with_config(&system.matrix, &system.rhs, config) {
        Ok(solution) => format_solution(&solution.x, config.precision),
        Err(err) => {
            log::warn!("no unique solution: {}", err);
            OBSERVATION_ERROR.to_string()
        }
    }
}
