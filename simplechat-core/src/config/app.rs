use super::defaults;
use super::error::ConfigError;
use std::path::Path;
use std::time::Duration;

/// Input length limits shared by the controller gate and the input gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_length: usize,
    pub warning_threshold: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_length: defaults::MAX_LENGTH,
            warning_threshold: defaults::WARNING_LENGTH,
        }
    }
}

/// Settings of the local canned-reply responder
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackConfig {
    pub min_delay: Duration,
    pub max_delay: Duration,
    /// Fixed generator seed for reproducible replies
    pub seed: Option<u64>,
    /// Probability of a simulated resolver failure
    pub failure_rate: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(defaults::MIN_DELAY_MS),
            max_delay: Duration::from_millis(defaults::MAX_DELAY_MS),
            seed: None,
            failure_rate: 0.0,
        }
    }
}

impl FallbackConfig {
    /// Zero-latency variant, used by tests and scripted runs
    pub fn immediate() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Application configuration loaded from chat.toml
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model: String,
    pub endpoint: String,
    pub api_path: String,
    /// Name of the environment variable carrying the credential
    pub api_key_env: String,
    pub system_instruction: String,
    pub request_timeout: Duration,
    /// Never construct the remote client, even when a credential is present
    pub offline: bool,
    pub limits: InputLimits,
    pub fallback: FallbackConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: defaults::model(),
            endpoint: defaults::endpoint(),
            api_path: defaults::api_path(),
            api_key_env: defaults::api_key_env(),
            system_instruction: defaults::system_instruction(),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            offline: false,
            limits: InputLimits::default(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content)
    }
}
