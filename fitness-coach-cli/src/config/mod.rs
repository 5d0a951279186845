use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::RetryConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub defaults: ProfileDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// Values used for profile fields left out on the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaults {
    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default = "default_weight")]
    pub weight_kg: f64,

    #[serde(default = "default_frequency")]
    pub training_frequency: u32,

    #[serde(default = "default_goal")]
    pub goal: String,

    #[serde(default = "default_experience")]
    pub experience_level: String,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.duckduckgo.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_results() -> usize {
    4
}

fn default_age() -> u32 {
    25
}

fn default_weight() -> f64 {
    75.0
}

fn default_frequency() -> u32 {
    4
}

fn default_goal() -> String {
    "hipertrofia".to_string()
}

fn default_experience() -> String {
    "iniciante".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            max_results: default_max_results(),
        }
    }
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            age: default_age(),
            weight_kg: default_weight(),
            training_frequency: default_frequency(),
            goal: default_goal(),
            experience_level: default_experience(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.fitness-coach/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".fitness-coach"))
    }

    /// Get config file path (~/.fitness-coach/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load configuration, using defaults when the file does not exist
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_file = Self::resolve_path(path)?;

        if !config_file.exists() {
            tracing::debug!("Config file {:?} not found, using defaults", config_file);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the given path or the default location
    pub fn save_to(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_file = Self::resolve_path(path)?;
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(config_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.base_url, "https://api.duckduckgo.com");
        assert_eq!(config.search.timeout_seconds, 10);
        assert_eq!(config.search.max_results, 4);
        assert!(config.search.enabled);
        assert_eq!(config.defaults.training_frequency, 4);
        assert_eq!(config.retry.max_retries, 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.search.base_url, deserialized.search.base_url);
        assert_eq!(config.defaults.goal, deserialized.defaults.goal);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            enabled = false

            [defaults]
            goal = "strength"
            "#,
        )
        .unwrap();

        assert!(!config.search.enabled);
        assert_eq!(config.search.max_results, 4);
        assert_eq!(config.defaults.goal, "strength");
        assert_eq!(config.defaults.experience_level, "iniciante");
    }

    #[test]
    fn test_save_and_load_roundtrip_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.search.base_url = "http://127.0.0.1:9999".to_string();
        let written = config.save_to(Some(path.as_path())).unwrap();
        assert_eq!(written, path);

        let loaded = Config::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.search.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert!(config.search.enabled);
    }
}
