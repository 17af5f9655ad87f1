//! Application configuration loaded from environment variables.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a `u16`.
    #[error("invalid PORT value {0:?}: expected an integer in 0..=65535")]
    InvalidPort(String),

    /// `LOG_FORMAT` is neither `text` nor `json`.
    #[error("invalid LOG_FORMAT value {0:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat(String),

    /// `RUST_LOG` is not a valid tracing filter directive.
    #[error("invalid RUST_LOG value {value:?}: {reason}")]
    InvalidLogFilter { value: String, reason: String },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `text` or `json` (default: `text`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults
    /// for unset ones. Set but malformed values are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(p) => p.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(p))?,
            Err(_) => defaults.port,
        };

        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(f) => f.parse()?,
            Err(_) => defaults.log_format,
        };

        let config = Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
        };
        config.env_filter()?;

        Ok(config)
    }

    /// Builds the tracing filter from `log_level`.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level).map_err(|err| ConfigError::InvalidLogFilter {
            value: self.log_level.clone(),
            reason: err.to_string(),
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
