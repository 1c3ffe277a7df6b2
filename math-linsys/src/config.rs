//! JSON configuration for the solver

use crate::traits::RealField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Threshold below which a determinant or pivot is treated as zero.
///
/// Shared by the singularity oracle and the elimination pivot check.
pub const DEGENERACY_TOLERANCE: f64 = 1e-10;

/// Number of decimals used when rendering a solution vector.
pub const DEFAULT_PRECISION: usize = 6;

/// Errors raised while loading or validating a [`SolverConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON for [`SolverConfig`].
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Tolerance must be finite and strictly positive.
    #[error("invalid tolerance: {tolerance} (must be finite and > 0)")]
    InvalidTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },
}

/// Solver configuration
///
/// The default reproduces the fixed behavior: tolerance `1e-10` for both
/// degeneracy checks, six decimals of output and the determinant pre-check
/// enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Degeneracy tolerance used by the pre-check and by the pivot check
    pub tolerance: f64,
    /// Decimals printed per solution entry
    pub precision: usize,
    /// Skip the determinant pre-check (diagnostics only; the pivot check still runs)
    pub skip_precheck: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEGENERACY_TOLERANCE,
            precision: DEFAULT_PRECISION,
            skip_precheck: false,
        }
    }
}

impl SolverConfig {
    /// Set the degeneracy tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the output precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Enable or disable the determinant pre-check
    pub fn with_precheck(mut self, enabled: bool) -> Self {
        self.skip_precheck = !enabled;
        self
    }

    /// Check that the configuration can drive a solve
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }

    /// Tolerance converted to the scalar type of the system
    pub fn tolerance_as<T: RealField>(&self) -> T {
        T::from_tolerance(self.tolerance)
    }

    /// Parse and validate a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.precision, 6);
        assert!(!config.skip_precheck);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SolverConfig::from_json_str(r#"{ "precision": 3 }"#).unwrap();
        assert_eq!(config.precision, 3);
        assert_eq!(config.tolerance, DEGENERACY_TOLERANCE);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let err = SolverConfig::from_json_str(r#"{ "tolerance": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTolerance { .. }));

        let config = SolverConfig::default().with_tolerance(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = SolverConfig::from_json_str("{ tolerance: }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip_and_file() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_precision(4)
            .with_precheck(false);
        let json = config.to_json().unwrap();

        let path = std::env::temp_dir().join(format!("linsys-config-{}.json", std::process::id()));
        fs::write(&path, json).unwrap();
        let loaded = SolverConfig::from_json_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = SolverConfig::from_json_file("/nonexistent/linsys.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
