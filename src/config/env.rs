//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

use super::{parse_skip_list, AppConfig};

/// Environment variable prefix
const ENV_PREFIX: &str = "HMS_CHECK";

/// Configuration loaded from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Base URL from HMS_CHECK_BASE_URL
    pub base_url: Option<String>,
    /// Timeout from HMS_CHECK_TIMEOUT
    pub timeout: Option<u64>,
    /// Preflight timeout from HMS_CHECK_PREFLIGHT_TIMEOUT
    pub preflight_timeout: Option<u64>,
    /// Output format from HMS_CHECK_FORMAT
    pub format: Option<String>,
    /// Skip list from HMS_CHECK_SKIP
    pub skip: Option<String>,
    /// Verbose from HMS_CHECK_VERBOSE
    pub verbose: Option<bool>,
    /// Config file from HMS_CHECK_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            base_url: get_env("BASE_URL"),
            timeout: get_env_parse("TIMEOUT"),
            preflight_timeout: get_env_parse("PREFLIGHT_TIMEOUT"),
            format: get_env("FORMAT"),
            skip: get_env("SKIP"),
            verbose: get_env_bool("VERBOSE"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.base_url.is_some()
            || self.timeout.is_some()
            || self.preflight_timeout.is_some()
            || self.format.is_some()
            || self.skip.is_some()
            || self.verbose.is_some()
            || self.config_file.is_some()
    }

    /// Overlay onto an application configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(preflight_timeout) = self.preflight_timeout {
            config.preflight_timeout_secs = preflight_timeout;
        }
        if let Some(format) = &self.format {
            config.format = format.clone();
        }
        if let Some(skip) = &self.skip {
            config.skip_checks = parse_skip_list(skip);
        }
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_BASE_URL"), url.into()));
        self
    }

    pub fn timeout(mut self, timeout: u64) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_TIMEOUT"), timeout.to_string()));
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_FORMAT"), format.into()));
        self
    }

    pub fn skip(mut self, skip: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_SKIP"), skip.into()));
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print all HMS_CHECK environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_BASE_URL           Base URL of the hotel API server");
    println!("  {ENV_PREFIX}_TIMEOUT            Request timeout in seconds");
    println!("  {ENV_PREFIX}_PREFLIGHT_TIMEOUT  Connectivity probe timeout in seconds");
    println!("  {ENV_PREFIX}_FORMAT             Output format (table, json, csv, summary)");
    println!("  {ENV_PREFIX}_SKIP               Check numbers to skip (comma-separated)");
    println!("  {ENV_PREFIX}_VERBOSE            Enable verbose output (true/false)");
    println!("  {ENV_PREFIX}_CONFIG             Path to configuration file");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_BASE_URL=http://staging:3000");
    println!("  hms-check check");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.base_url.is_none());
        assert!(!config.has_any());
    }

    #[test]
    fn test_env_builder_scoped() {
        let _guard = EnvBuilder::new()
            .base_url("http://10.0.0.1:3000")
            .timeout(60)
            .skip("6,7")
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.base_url, Some("http://10.0.0.1:3000".to_string()));
        assert_eq!(config.timeout, Some(60));
        assert_eq!(config.skip, Some("6,7".to_string()));
        assert!(config.has_any());
    }

    #[test]
    fn test_apply_overlays_only_set_values() {
        let env_config = EnvConfig {
            base_url: Some("http://staging:3000".to_string()),
            skip: Some("8,9".to_string()),
            ..Default::default()
        };

        let mut config = AppConfig::default();
        env_config.apply(&mut config);

        assert_eq!(config.base_url, "http://staging:3000");
        assert_eq!(config.skip_checks, vec![8, 9]);
        // Untouched fields keep their defaults
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.format, "table");
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = EnvBuilder::new().verbose(true).apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.verbose, Some(true));
    }
}
