//! Client factory - builds the optional remote client at startup

use super::clients::GeminiClient;
use super::traits::ModelClient;
use crate::config::AppConfig;
use std::env;
use std::sync::Arc;
use tracing::info;

/// Resolve the API key from an environment variable. Blank values count as absent.
pub fn resolve_api_key(env_var: &str) -> Option<String> {
    let name = env_var.trim();
    if name.is_empty() {
        return None;
    }
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => {
            info!(env_var = name, "API key environment variable is empty");
            None
        }
        Err(err) => {
            info!(env_var = name, %err, "API key environment variable is not set");
            None
        }
    }
}

pub struct ClientFactory;

impl ClientFactory {
    /// Creates the remote client when a credential is available.
    ///
    /// Returns `None` in offline mode or when the configured environment
    /// variable is missing, which selects fallback-only replies.
    pub fn from_config(config: &AppConfig) -> Option<Arc<dyn ModelClient>> {
        if config.offline {
            info!("Offline mode requested, remote client disabled");
            return None;
        }

        let api_key = resolve_api_key(&config.api_key_env)?;
        info!(
            model = config.model.as_str(),
            endpoint = config.endpoint.as_str(),
            "Remote Gemini client enabled"
        );
        Some(Arc::new(GeminiClient::new(config, api_key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TEST_VAR: &str = "SIMPLECHAT_FACTORY_TEST_KEY";

    fn set(value: &str) {
        // SAFETY: tests touching the environment run serially.
        unsafe { env::set_var(TEST_VAR, value) };
    }

    fn unset() {
        // SAFETY: tests touching the environment run serially.
        unsafe { env::remove_var(TEST_VAR) };
    }

    fn config() -> AppConfig {
        AppConfig {
            api_key_env: TEST_VAR.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    #[serial]
    fn missing_variable_selects_fallback_mode() {
        unset();
        assert!(ClientFactory::from_config(&config()).is_none());
    }

    #[test]
    #[serial]
    fn blank_variable_selects_fallback_mode() {
        set("   ");
        assert!(resolve_api_key(TEST_VAR).is_none());
        assert!(ClientFactory::from_config(&config()).is_none());
        unset();
    }

    #[test]
    #[serial]
    fn present_variable_builds_gemini_client() {
        set("abc");
        let client = ClientFactory::from_config(&config()).expect("client");
        assert_eq!(client.id(), "gemini");
        unset();
    }

    #[test]
    #[serial]
    fn offline_wins_over_credential() {
        set("abc");
        let offline = AppConfig {
            offline: true,
            ..config()
        };
        assert!(ClientFactory::from_config(&offline).is_none());
        unset();
    }
}
