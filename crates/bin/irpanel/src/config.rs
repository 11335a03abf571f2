//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `irpanel.toml` in the working directory unless another path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::Path;

use irpanel_adapter_http_reqwest::{GatewayConfig, GatewayError};
use serde::Deserialize;

/// Default config file name.
pub const DEFAULT_PATH: &str = "irpanel.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device connection settings.
    pub device: GatewayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present), apply
    /// environment-variable overrides, then the command-line `base_url`.
    ///
    /// The device URL is checked once, after every layer is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting device URL is invalid.
    pub fn load(path: &Path, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok(), base_url);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>, base_url: Option<&str>) {
        if let Some(val) = var("IRPANEL_BASE_URL") {
            self.device.base_url = val;
        }
        if let Some(val) = var("IRPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = base_url {
            self.device.base_url = val.to_string();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.device.parse_base_url()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "irpanel=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Invalid device settings.
    #[error("invalid device configuration")]
    Device(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.device.base_url, "http://myesp8266.local:8080/");
        assert_eq!(config.logging.filter, "irpanel=info");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.device.base_url, "http://myesp8266.local:8080/");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [device]
            base_url = 'http://192.168.0.100:8080/'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.device.base_url, "http://192.168.0.100:8080/");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.logging.filter, "irpanel=info");
    }

    #[test]
    fn should_override_base_url_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("IRPANEL_BASE_URL", "http://10.0.0.5/")]), None);
        assert_eq!(config.device.base_url, "http://10.0.0.5/");
    }

    #[test]
    fn should_prefer_rust_log_over_irpanel_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("IRPANEL_LOG", "warn"), ("RUST_LOG", "trace")]), None);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_keep_file_values_without_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[]), None);
        assert_eq!(config.device.base_url, "http://myesp8266.local:8080/");
    }

    #[test]
    fn should_let_command_line_base_url_win_over_bad_env_value() {
        let mut config = Config::default();
        config.apply_overrides(
            env(&[("IRPANEL_BASE_URL", "ftp://bad/")]),
            Some("http://127.0.0.1:9/"),
        );
        assert_eq!(config.device.base_url, "http://127.0.0.1:9/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_let_command_line_base_url_win_over_bad_file_value() {
        let mut config: Config = toml::from_str("[device]\nbase_url = 'not a url'").unwrap();
        config.apply_overrides(env(&[]), Some("http://10.0.0.7:8080/"));
        assert_eq!(config.device.base_url, "http://10.0.0.7:8080/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_bad_command_line_base_url() {
        let mut config = Config::default();
        config.apply_overrides(env(&[]), Some("ftp://bad/"));
        assert!(matches!(config.validate(), Err(ConfigError::Device(_))));
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let mut config = Config::default();
        config.device.base_url = "file:///tmp/device".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Device(_))));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
