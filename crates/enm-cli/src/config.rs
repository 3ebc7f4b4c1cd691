//! hitcommute configuration
//!
//! Serde-based TOML configuration. Engine tolerances live under `[engine]`,
//! output options under `[output]`; command-line flags override both.
//!
//! ```toml
//! [engine]
//! rcond = 1e-10
//! strict = true
//!
//! [output]
//! dir = "OUTPUTS"
//! save_pinv = false
//! ```

use anyhow::{Context, Result};
use enm_core::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration for a hitcommute run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and what to write
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory (created if missing)
    pub dir: PathBuf,
    /// Also write the Kirchhoff pseudoinverse
    pub save_pinv: bool,
    /// Write run_summary.json
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("OUTPUTS"),
            save_pinv: false,
            summary: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        if self.output.dir.as_os_str().is_empty() {
            anyhow::bail!("output.dir must not be empty");
        }
        Ok(())
    }
}
