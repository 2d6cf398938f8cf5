use super::app::{AppConfig, FallbackConfig, InputLimits};
use super::defaults;
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    model: Option<String>,
    endpoint: Option<String>,
    api_path: Option<String>,
    api_key_env: Option<String>,
    system_instruction: Option<String>,
    request_timeout_secs: Option<u64>,
    offline: Option<bool>,
    #[serde(default)]
    limits: RawLimits,
    #[serde(default)]
    fallback: RawFallback,
}

#[derive(Debug, Deserialize, Default)]
struct RawLimits {
    max_length: Option<usize>,
    warning_threshold: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct RawFallback {
    min_delay_ms: Option<u64>,
    max_delay_ms: Option<u64>,
    seed: Option<u64>,
    failure_rate: Option<f64>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        if from_filename(ENV_PATH).is_ok() {
            debug!(path = ENV_PATH, "Loaded environment file");
        }
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one, `config/chat.toml` is used when
/// present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();

    match path {
        Some(path) => read_config(&expand_path(path)?),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                info!("No configuration file found, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|err| ConfigError::PathExpansion {
            path: raw.to_string(),
            reason: err.to_string(),
        })
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading chat configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content)
}

pub(super) fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig =
        toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
    validate_and_build(parsed)
}

fn non_empty(value: Option<String>, field: &'static str, default: fn() -> String) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyField { field }),
        Some(v) => Ok(v.trim().to_string()),
        None => Ok(default()),
    }
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let model = non_empty(parsed.model, "model", defaults::model)?;
    let endpoint = non_empty(parsed.endpoint, "endpoint", defaults::endpoint)?;
    let api_path = non_empty(parsed.api_path, "api_path", defaults::api_path)?;
    let api_key_env = non_empty(parsed.api_key_env, "api_key_env", defaults::api_key_env)?;
    let system_instruction = non_empty(
        parsed.system_instruction,
        "system_instruction",
        defaults::system_instruction,
    )?;

    let limits = InputLimits {
        max_length: parsed.limits.max_length.unwrap_or(defaults::MAX_LENGTH),
        warning_threshold: parsed
            .limits
            .warning_threshold
            .unwrap_or(defaults::WARNING_LENGTH),
    };
    if limits.warning_threshold == 0 || limits.warning_threshold > limits.max_length {
        return Err(ConfigError::InvalidLimits {
            warning_threshold: limits.warning_threshold,
            max_length: limits.max_length,
        });
    }

    let min_ms = parsed.fallback.min_delay_ms.unwrap_or(defaults::MIN_DELAY_MS);
    let max_ms = parsed.fallback.max_delay_ms.unwrap_or(defaults::MAX_DELAY_MS);
    if min_ms > max_ms {
        return Err(ConfigError::InvalidDelayRange { min_ms, max_ms });
    }

    let failure_rate = parsed.fallback.failure_rate.unwrap_or(0.0);
    if !(0.0..=1.0).contains(&failure_rate) {
        return Err(ConfigError::InvalidFailureRate { rate: failure_rate });
    }

    Ok(AppConfig {
        model,
        endpoint,
        api_path,
        api_key_env,
        system_instruction,
        request_timeout: Duration::from_secs(
            parsed
                .request_timeout_secs
                .unwrap_or(defaults::REQUEST_TIMEOUT_SECS),
        ),
        offline: parsed.offline.unwrap_or(false),
        limits,
        fallback: FallbackConfig {
            min_delay: Duration::from_millis(min_ms),
            max_delay: Duration::from_millis(max_ms),
            seed: parsed.fallback.seed,
            failure_rate,
        },
    })
}
