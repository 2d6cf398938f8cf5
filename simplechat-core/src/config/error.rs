use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to expand config path '{path}': {reason}")]
    PathExpansion { path: String, reason: String },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("fallback delay range is invalid: min {min_ms}ms is greater than max {max_ms}ms")]
    InvalidDelayRange { min_ms: u64, max_ms: u64 },

    #[error(
        "input limits are invalid: warning threshold {warning_threshold} must be between 1 and max length {max_length}"
    )]
    InvalidLimits {
        warning_threshold: usize,
        max_length: usize,
    },

    #[error("fallback failure rate {rate} must be within 0.0..=1.0")]
    InvalidFailureRate { rate: f64 },
}
