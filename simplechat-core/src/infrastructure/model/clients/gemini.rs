//! Gemini client implementation

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::base::HttpTransport;
use crate::config::AppConfig;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::{GenerateRequest, GenerateResponse, ModelError};

pub const GEMINI_CLIENT_ID: &str = "gemini";

/// Gemini client for Google AI `generateContent`
#[derive(Clone)]
pub struct GeminiClient {
    transport: HttpTransport,
    api_path: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig, api_key: impl Into<String>) -> Self {
        Self {
            transport: HttpTransport::new(
                GEMINI_CLIENT_ID,
                config.endpoint.as_str(),
                Some(api_key.into()),
                config.request_timeout,
            ),
            api_path: config.api_path.trim_matches('/').to_string(),
        }
    }

    fn build_model_url(&self, model: &str) -> String {
        self.transport
            .url(&format!("{}/{model}:generateContent", self.api_path))
    }

    fn build_payload(request: &GenerateRequest) -> Value {
        let mut payload = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.prompt}]
            }]
        });

        if let Some(system) = &request.system_instruction {
            payload["system_instruction"] = json!({
                "parts": [{"text": system}]
            });
        }

        payload
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn id(&self) -> &str {
        self.transport.provider()
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ModelError> {
        let url = self.build_model_url(&request.model);
        let payload = Self::build_payload(&request);

        info!(
            provider = self.transport.provider(),
            model = request.model.as_str(),
            prompt_chars = request.prompt.chars().count(),
            "Sending request to Gemini"
        );

        let response: GeminiResponse = self.transport.post_keyed(&url, &payload).await?;
        debug!("Received response from Gemini");

        response
            .into_text()
            .map(GenerateResponse::new)
            .ok_or_else(|| ModelError::empty_response(self.transport.provider()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate; `None` when blank.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() { None } else { Some(text) }
    }
}
