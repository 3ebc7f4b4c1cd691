//! EngineConfig - numerical tolerances for the hitting/commute time engine
//!
//! Passed explicitly by value into every engine call; there is no
//! process-wide configuration state.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{EnmError, Result};

/// Tolerances that control Laplacian validation and pseudoinverse filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Relative tolerance for symmetry and zero-row-sum checks
    /// (scaled by the largest absolute matrix entry)
    pub symmetry_tol: f64,

    /// Relative eigenvalue cutoff: ε = rcond × max|λ|
    pub rcond: f64,

    /// Smallest retained eigenvalue must exceed gap_factor × ε
    pub gap_factor: f64,

    /// Treat an ambiguous spectral gap as an error instead of a warning
    pub strict: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            symmetry_tol: 1e-9,
            rcond: 1e-10,
            gap_factor: 1e3,
            strict: false,
        }
    }
}

impl EngineConfig {
    /// Strict variant: ambiguous spectra are rejected.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML string
    ///
    /// Missing fields take their defaults. The parsed value is validated.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| EnmError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.symmetry_tol.is_finite() && self.symmetry_tol > 0.0) {
            return Err(EnmError::config(format!(
                "symmetry_tol must be positive and finite, got {}",
                self.symmetry_tol
            )));
        }
        if !(self.rcond.is_finite() && self.rcond > 0.0 && self.rcond < 1.0) {
            return Err(EnmError::config(format!(
                "rcond must lie in (0, 1), got {}",
                self.rcond
            )));
        }
        if !(self.gap_factor.is_finite() && self.gap_factor >= 1.0) {
            return Err(EnmError::config(format!(
                "gap_factor must be finite and >= 1, got {}",
                self.gap_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.strict);
        assert!(EngineConfig::strict().strict);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("strict = true\nrcond = 1e-12\n").unwrap();
        assert!(config.strict);
        assert_eq!(config.rcond, 1e-12);
        assert_eq!(config.gap_factor, EngineConfig::default().gap_factor);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EngineConfig::from_toml_str("rcond = 0.0").unwrap_err();
        assert!(matches!(err, EnmError::ConfigError(_)));

        let err = EngineConfig::from_toml_str("gap_factor = 0.5").unwrap_err();
        assert!(matches!(err, EnmError::ConfigError(_)));

        let err = EngineConfig::from_toml_str("symmetry_tol = \"tight\"").unwrap_err();
        assert!(matches!(err, EnmError::ConfigError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "symmetry_tol = 1e-6").unwrap();
        writeln!(file, "gap_factor = 100.0").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.symmetry_tol, 1e-6);
        assert_eq!(config.gap_factor, 100.0);
    }
}
