//! Configuration management.
//!
//! The config file is optional and hand-written; it supplies fallbacks for
//! values not given on the command line:
//!
//! ```toml
//! api_key = "..."
//! output_mode = "mix"
//! prefix = "recon"
//! ```

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputMode;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Shodan API key.
    pub api_key: Option<String>,

    /// Default output mode.
    pub output_mode: Option<OutputMode>,

    /// Default output file name prefix.
    pub prefix: Option<String>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "shirt")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}
