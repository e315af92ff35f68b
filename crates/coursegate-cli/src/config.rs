//! CLI configuration
//!
//! TOML file with the flag store location, an optional catalog file, the
//! default log level and an optional QA role override. Missing keys take
//! their defaults.

use anyhow::Context;
use coursegate_core::Role;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "coursegate.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// JSON file holding the persisted flags.
    pub flags_file: PathBuf,
    /// Catalog TOML; the built-in table is used when absent.
    pub catalog_file: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Role forced on every load, never persisted.
    pub role_override: Option<Role>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            flags_file: PathBuf::from(".coursegate").join("flags.json"),
            catalog_file: None,
            log_level: "info".to_string(),
            role_override: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CliConfig = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Candidate paths tried when no explicit path is given.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![std::env::current_dir()
            .unwrap_or_default()
            .join(LOCAL_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".coursegate").join("config.toml"));
        }
        paths
    }

    /// Load from `explicit` (which must exist), else the first existing
    /// candidate path, else defaults.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        Self::discover_in(&Self::default_paths())
    }

    /// Load the first existing file among `paths`, else defaults.
    pub fn discover_in(paths: &[PathBuf]) -> anyhow::Result<Self> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
