//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homerules.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use homerules_app::input::InputPolicy;
use homerules_app::report::ReportFormat;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Input validation settings.
    pub input: InputConfig,
    /// Report settings.
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Input configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Give up on a question after this many invalid answers; `0` re-prompts
    /// forever.
    pub max_attempts: u32,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `text` or `json`.
    pub format: ReportFormat,
}

impl Config {
    /// Load configuration from `homerules.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homerules.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        for key in ["HOMERULES_LOG", "RUST_LOG"] {
            if let Some(val) = var(key) {
                if is_valid_filter(&val) {
                    self.logging.filter = val;
                }
            }
        }
        if let Some(val) = var("HOMERULES_MAX_ATTEMPTS") {
            if let Ok(limit) = val.trim().parse() {
                self.input.max_attempts = limit;
            }
        }
        if let Some(val) = var("HOMERULES_FORMAT") {
            if let Ok(format) = val.parse() {
                self.output.format = format;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Log filter to install, falling back to the default directive when
    /// the configured one does not parse.
    #[must_use]
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.logging.filter)
            .unwrap_or_else(|_| EnvFilter::new(LoggingConfig::default().filter))
    }

    /// Retry policy for invalid answers.
    #[must_use]
    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy::from_limit(self.input.max_attempts)
    }
}

fn is_valid_filter(filter: &str) -> bool {
    !filter.trim().is_empty() && EnvFilter::try_new(filter).is_ok()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homerules=warn,homerules_app=warn".to_string(),
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
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::num::NonZeroU32;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "homerules=warn,homerules_app=warn");
        assert_eq!(config.input.max_attempts, 0);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(config.input_policy(), InputPolicy::unbounded());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.input.max_attempts, 0);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [input]
            max_attempts = 3

            [output]
            format = 'json'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.input.max_attempts, 3);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(
            config.input_policy(),
            InputPolicy::bounded(NonZeroU32::new(3).unwrap())
        );
    }

    #[test]
    fn should_reject_unknown_format_in_file() {
        let result: Result<Config, _> = toml::from_str("[output]\nformat = 'yaml'");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.output.format, ReportFormat::Text);
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("HOMERULES_LOG", "homerules=debug"),
            ("HOMERULES_MAX_ATTEMPTS", "5"),
            ("HOMERULES_FORMAT", "JSON"),
        ]));
        assert_eq!(config.logging.filter, "homerules=debug");
        assert_eq!(config.input.max_attempts, 5);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn should_prefer_rust_log_over_homerules_log() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("HOMERULES_LOG", "info"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_invalid_env_values() {
        let mut config = Config::default();
        config.input.max_attempts = 2;
        config.apply_env_overrides(env(&[
            ("HOMERULES_MAX_ATTEMPTS", "many"),
            ("HOMERULES_FORMAT", "xml"),
        ]));
        assert_eq!(config.input.max_attempts, 2);
        assert_eq!(config.output.format, ReportFormat::Text);
    }

    #[test]
    fn should_ignore_invalid_log_filter() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("RUST_LOG", "homerules=loud")]));
        assert_eq!(config.logging.filter, "homerules=warn,homerules_app=warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_keep_valid_homerules_log_when_rust_log_is_invalid() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("HOMERULES_LOG", "homerules=debug"),
            ("RUST_LOG", "homerules=loud"),
        ]));
        assert_eq!(config.logging.filter, "homerules=debug");
    }

    #[test]
    fn should_ignore_blank_log_filter_from_env() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("RUST_LOG", "  ")]));
        assert_eq!(config.logging.filter, "homerules=warn,homerules_app=warn");
    }

    #[test]
    fn should_fall_back_to_default_filter_when_file_filter_is_invalid() {
        let config: Config = toml::from_str("[logging]\nfilter = 'homerules=loud'").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.log_filter().to_string(),
            EnvFilter::new(LoggingConfig::default().filter).to_string()
        );
    }

    #[test]
    fn should_reject_empty_log_filter() {
        let mut config = Config::default();
        config.logging.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
