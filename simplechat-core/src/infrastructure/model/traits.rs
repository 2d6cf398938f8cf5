//! Model traits

use super::types::{GenerateRequest, GenerateResponse, ModelError};
use async_trait::async_trait;

/// Remote text-generation backend
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Get the client ID
    fn id(&self) -> &str;

    /// Generate a reply for a single prompt
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ModelError>;
}
