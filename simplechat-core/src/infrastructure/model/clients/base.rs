//! Shared HTTP transport for model clients

use crate::infrastructure::model::types::ModelError;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// reqwest client bound to one provider id, endpoint and credential
#[derive(Clone)]
pub struct HttpTransport {
    provider: String,
    endpoint: String,
    api_key: Option<String>,
    http: Client,
}

impl HttpTransport {
    pub fn new(
        provider: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        // A failed builder falls back to a client without a timeout
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            provider: provider.into(),
            endpoint: endpoint.into(),
            api_key,
            http,
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Join `path` onto the endpoint with exactly one slash between them
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST `body` as JSON, passing the credential as the `key` query parameter
    pub async fn post_keyed<Req, Res>(&self, url: &str, body: &Req) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let key = self.credential()?;
        let network = |err| ModelError::network(&self.provider, err);

        let response = self
            .http
            .post(url)
            .query(&[("key", key)])
            .json(body)
            .send()
            .await
            .map_err(network)?;
        debug!(provider = self.provider.as_str(), status = %response.status(), "HTTP response");

        let bytes = response
            .error_for_status()
            .map_err(network)?
            .bytes()
            .await
            .map_err(network)?;

        serde_json::from_slice(&bytes)
            .map_err(|err| ModelError::invalid_response(&self.provider, err.to_string()))
    }

    fn credential(&self) -> Result<&str, ModelError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ModelError::missing_api_key(&self.provider)),
        }
    }
}
