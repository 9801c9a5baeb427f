//! Configuration management for ExoExplorer.
//!
//! Loads configuration from ${EXO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for ExoExplorer configuration directories.
    //!
    //! EXO_HOME resolution order:
    //! 1. EXO_HOME environment variable (if set)
    //! 2. ~/.config/exo (default)

    use std::path::PathBuf;

    /// Returns the ExoExplorer home directory.
    ///
    /// Checks EXO_HOME env var first, falls back to ~/.config/exo
    pub fn exo_home() -> PathBuf {
        if let Ok(home) = std::env::var("EXO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("exo"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        exo_home().join("config.toml")
    }
}

/// Identity provider configuration (API key, endpoint override).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityProviderConfig {
    /// API key for the identity provider (fallback: `EXO_API_KEY` env var).
    pub api_key: Option<String>,
    /// Base URL override for the identity provider endpoint.
    pub base_url: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity provider configuration.
    pub identity: IdentityProviderConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }
}
