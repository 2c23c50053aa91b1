//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/lstree/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tree::{ConnectorMode, ErrorPolicy, ExclusionSet};

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Tree walk settings
    pub tree: TreeConfig,
}

/// Tree walk settings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Names to exclude; replaces the built-in list when set
    pub exclude: Option<Vec<String>>,
    /// Names excluded in addition to `exclude` (or the built-in list)
    pub extra_exclude: Vec<String>,
    /// "filtered" or "raw"
    pub connector: ConnectorMode,
    /// "abort" or "skip"
    pub on_error: ErrorPolicy,
    /// Maximum depth to print
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    /// Exclusion set described by this config
    pub fn exclusions(&self) -> ExclusionSet {
        self.exclusions_over(ExclusionSet::default())
    }

    /// Exclusion set described by this config, with `defaults` standing in
    /// for the built-in list when `exclude` is not set
    pub fn exclusions_over(&self, defaults: ExclusionSet) -> ExclusionSet {
        let base = match &self.exclude {
            Some(names) => ExclusionSet::new(names.iter().cloned()),
            None => defaults,
        };
        base.with(self.extra_exclude.iter().cloned())
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/lstree)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lstree"))
    }

    /// Get the config file path (~/.config/lstree/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}
