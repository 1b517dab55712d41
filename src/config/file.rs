//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::AppConfig;
use crate::models::Check;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./hms-check.yaml",
    "./hms-check.yml",
    "./.hms-check.yaml",
    "~/.config/hms-check/config.yaml",
    "~/.hms-check.yaml",
];

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            app: AppConfig::default(),
        }
    }
}

impl ConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        for location in CONFIG_LOCATIONS {
            let path = expand_path(location);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Load configuration from the first standard location, or defaults
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::find() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.version.as_str() != "1.0" {
            anyhow::bail!("Unsupported config version: {}", self.version);
        }

        for number in &self.app.skip_checks {
            if Check::from_number(*number).is_none() {
                anyhow::bail!("Invalid check number {number} in skip_checks. Valid range: 1-9");
            }
        }

        if self.app.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        Ok(())
    }

    /// Generate an example configuration
    pub fn example() -> Self {
        Self {
            version: "1.0".to_string(),
            app: AppConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_secs: 10,
                preflight_timeout_secs: 5,
                format: "table".to_string(),
                skip_checks: Vec::new(),
            },
        }
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_is_valid() {
        let config = ConfigFile::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_validate_rejects_bad_skip_number() {
        let mut config = ConfigFile::default();
        config.app.skip_checks = vec![3, 12];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ConfigFile::default();
        config.app.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_load_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hms-check.yaml");

        let mut config = ConfigFile::example();
        config.app.base_url = "http://staging:3000".to_string();
        config.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.app.base_url, "http://staging:3000");
    }

    #[test]
    fn test_save_load_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        ConfigFile::example().save(&path).unwrap();
        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.app.format, "table");
    }

    #[test]
    fn test_load_rejects_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn test_expand_path_passthrough() {
        assert_eq!(expand_path("./hms-check.yaml"), PathBuf::from("./hms-check.yaml"));
    }
}
