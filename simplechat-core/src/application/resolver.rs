//! Reply resolution: remote model first, local fallback otherwise

use super::fallback::FallbackResponder;
use crate::config::AppConfig;
use crate::infrastructure::model::{GenerateRequest, ModelClient};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Fallback,
}

/// Assistant reply text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    pub fn remote(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Remote,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Fallback,
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("simulated failure of the local responder")]
    Simulated,
    #[error("reply task ended unexpectedly: {0}")]
    Aborted(String),
}

/// Produces the assistant reply for a user message
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, text: &str) -> Result<Reply, ResolveError>;
}

pub struct ResponseResolver {
    client: Option<Arc<dyn ModelClient>>,
    model: String,
    system_instruction: String,
    fallback: FallbackResponder,
}

impl ResponseResolver {
    pub fn new(
        client: Option<Arc<dyn ModelClient>>,
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        fallback: FallbackResponder,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            system_instruction: system_instruction.into(),
            fallback,
        }
    }

    pub fn from_config(config: &AppConfig, client: Option<Arc<dyn ModelClient>>) -> Self {
        Self::new(
            client,
            config.model.clone(),
            config.system_instruction.clone(),
            FallbackResponder::new(&config.fallback),
        )
    }

    pub fn has_remote(&self) -> bool {
        self.client.is_some()
    }

    async fn try_remote(&self, client: &dyn ModelClient, text: &str) -> Option<String> {
        let request = GenerateRequest::new(self.model.clone(), text)
            .with_system_instruction(self.system_instruction.clone());

        match client.generate(request).await {
            Ok(response) if !response.text.trim().is_empty() => Some(response.text),
            Ok(_) => {
                warn!(provider = client.id(), "Remote reply was empty, using fallback");
                None
            }
            Err(err) => {
                warn!(
                    provider = client.id(),
                    reason = %err.user_message(),
                    error = %err,
                    "Remote call failed, using fallback"
                );
                None
            }
        }
    }
}

#[async_trait]
impl Resolve for ResponseResolver {
    async fn resolve(&self, text: &str) -> Result<Reply, ResolveError> {
        if let Some(client) = &self.client {
            if let Some(reply) = self.try_remote(client.as_ref(), text).await {
                return Ok(Reply::remote(reply));
            }
        } else {
            debug!("No remote client configured");
        }

        self.fallback.respond(text).await.map(Reply::fallback)
    }
}
