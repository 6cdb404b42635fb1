use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
    #[error("Invalid API URL '{0}': must start with http:// or https://")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the UW Companion backend
    pub api_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Log destination; logging is disabled when unset so the TUI's
    /// stdout stays clean
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source (testable without touching
    /// the process environment)
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("UWC_API_URL").unwrap_or_else(|| "http://localhost:8000".to_string());
        Self::validate_api_url(&api_url)?;

        let timeout_str = lookup("UWC_REQUEST_TIMEOUT_SECS").unwrap_or_else(|| "60".to_string());
        let request_timeout_secs = timeout_str.parse::<u64>()?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let log_file = lookup("UWC_LOG_FILE").map(PathBuf::from);

        Ok(Config {
            api_url,
            request_timeout_secs,
            log_file,
        })
    }

    pub fn validate_api_url(url: &str) -> Result<(), ConfigError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidApiUrl(url.to_string()))
        }
    }
}
