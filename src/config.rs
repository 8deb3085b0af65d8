//! TOML configuration: the default surname tradition and per-tree overrides.
//!
//! The tradition identifier is a tree-level setting in the surrounding
//! application; this crate stores a default plus optional per-tree overrides
//! in the platform config directory and lets environment variables take
//! precedence, mirroring how the rest of the tool chain is configured.

use crate::constants;
use crate::error::AppError;
use crate::tradition::SurnameTradition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration structure for the application.
/// Handles loading, saving, and resolving tradition settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Tradition identifier applied when no per-tree override matches.
    #[serde(default = "default_tradition_id")]
    pub default_tradition: String,
    /// Per-tree tradition overrides, keyed by tree name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub trees: BTreeMap<String, String>,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_tradition_id() -> String {
    constants::DEFAULT_TRADITION_ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_tradition: default_tradition_id(),
            trees: BTreeMap::new(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// A missing file yields the default configuration; the tool never
    /// prompts. Environment variables override file values:
    ///
    /// - `GEDCOM_NAMES_TRADITION` - override the default tradition
    /// - `GEDCOM_NAMES_LOG_FILE` - override the log file path
    pub fn load() -> Result<Self, AppError> {
        let mut config = Self::load_from(&Self::get_config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from an explicit path, without env overrides.
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(tradition) = std::env::var(constants::ENV_TRADITION) {
            self.default_tradition = tradition;
        }
        if let Ok(log_file_path) = std::env::var(constants::ENV_LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Saves configuration to the default config file location, creating the
    /// config directory if needed.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    /// Saves configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(config_dir) = path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Resolves the tradition for a tree.
    ///
    /// The per-tree override wins over the default; an unknown identifier
    /// resolves to the no-surname fallback with a warning, never an error.
    pub fn tradition_for(&self, tree: Option<&str>) -> SurnameTradition {
        let identifier = tree
            .and_then(|name| self.trees.get(name))
            .map(String::as_str)
            .unwrap_or(&self.default_tradition);

        if !SurnameTradition::is_known_identifier(identifier) {
            tracing::warn!(
                "Unknown surname tradition '{identifier}', falling back to '{}'",
                SurnameTradition::Default.identifier()
            );
        }

        SurnameTradition::for_identifier(identifier)
    }

    /// Platform-specific path of the config file.
    pub fn get_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    }

    /// Platform-specific directory for log files.
    pub fn get_log_dir_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(constants::CONFIG_DIR_NAME)
            .join("logs")
    }

    /// Prints the current configuration to stdout.
    pub fn display() -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{}", config_path.display());
        println!("────────────────────────────────────");

        if config_path.exists() {
            let config = Config::load()?;
            println!("Default tradition:");
            println!("{}", config.default_tradition);
            if !config.trees.is_empty() {
                println!("Per-tree overrides:");
                for (tree, tradition) in &config.trees {
                    println!("  {tree}: {tradition}");
                }
            }
            if let Some(log_file_path) = &config.log_file_path {
                println!("Log file:");
                println!("{log_file_path}");
            }
        } else {
            println!("No configuration file found; defaults are in effect.");
        }

        Ok(())
    }
}
