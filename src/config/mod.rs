//! Configuration module
//!
//! Handles loading and managing configuration. Precedence is defaults,
//! then config file, then environment variables, then CLI flags.

#![allow(dead_code)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod env;
mod file;

pub use env::{print_env_help, EnvBuilder, EnvConfig, EnvGuard};
pub use file::ConfigFile;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hotel API server
    pub base_url: String,

    /// Per-call HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Timeout for the initial connectivity probe
    pub preflight_timeout_secs: u64,

    /// Output format (table, json, json-pretty, csv, summary)
    pub format: String,

    /// Check numbers to skip
    #[serde(default)]
    pub skip_checks: Vec<u8>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 10,
            preflight_timeout_secs: 5,
            format: "table".to_string(),
            skip_checks: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Self = if is_yaml_extension(path.as_ref()) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = if is_yaml_extension(path.as_ref()) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

fn is_yaml_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

/// Parse a comma-separated skip list ("6,7") into check numbers
pub fn parse_skip_list(s: &str) -> Vec<u8> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.preflight_timeout_secs, 5);
        assert!(config.skip_checks.is_empty());
    }

    #[test]
    fn test_parse_skip_list() {
        assert_eq!(parse_skip_list("6,7"), vec![6, 7]);
        assert_eq!(parse_skip_list(" 1, 9 "), vec![1, 9]);
        assert_eq!(parse_skip_list(""), Vec::<u8>::new());
        assert_eq!(parse_skip_list("2,nope,3"), vec![2, 3]);
    }

    #[test]
    fn test_config_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = AppConfig {
            base_url: "http://10.0.0.5:8080".to_string(),
            skip_checks: vec![4, 6],
            ..AppConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.base_url, "http://10.0.0.5:8080");
        assert_eq!(loaded.skip_checks, vec![4, 6]);
    }
}
