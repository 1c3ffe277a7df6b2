//! Solve a dense linear system read from a file or stdin
//!
//! Input format: an `N M` header followed by `N` lines of `M` coefficients and
//! the right-hand side.
//!
//! Usage:
//!     cargo run --bin linsys -- system.txt --precision 4
//!     printf '1 1\n2 4\n' | cargo run --bin linsys

use anyhow::Context;
use clap::Parser;
use math_linsys::{
    OBSERVATION_ERROR, SolverConfig, format_solution, matrix_rank, parse_system, solve_with_config,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "linsys",
    about = "Solve an N x N linear system with Gaussian elimination and partial pivoting"
)]
struct Cli {
    /// File holding the system; reads stdin when omitted
    input: Option<PathBuf>,

    /// JSON solver configuration (tolerance, precision, skip_precheck)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of decimals printed per unknown (overrides the configuration)
    #[arg(long)]
    precision: Option<usize>,

    /// Degeneracy tolerance for both singularity checks (overrides the configuration)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Also print the numerical rank of the coefficient matrix
    #[arg(long)]
    rank: bool,
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    config.validate()?;

    let input = read_input(cli.input.as_deref())?;

    let system = match parse_system(&input) {
        Ok(system) => system,
        Err(err) => {
            log::error!("invalid input: {}", err);
            println!("{}", OBSERVATION_ERROR);
            process::exit(1);
        }
    };

    if cli.rank {
        println!("rank: {}", matrix_rank(&system.matrix, config.tolerance));
    }

    match solve_with_config(&system.matrix, &system.rhs, &config) {
        Ok(solution) => {
            if let Some(det) = solution.determinant {
                log::info!("determinant: {:e}", det);
            }
            let residual = system.residual_norm(&solution.x)?;
            log::info!("residual norm: {:e}", residual);
            println!("{}", format_solution(&solution.x, config.precision));
            Ok(())
        }
        Err(err) => {
            log::error!("{}", err);
            println!("{}", OBSERVATION_ERROR);
            process::exit(1);
        }
    }
}
