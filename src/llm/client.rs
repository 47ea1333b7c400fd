//! Model client trait

use async_trait::async_trait;
use serde_json::Value;

use super::ProviderError;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ProviderError>;

/// A single prompt whose answer must be a JSON object matching `schema`.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// Name of the prompt definition, for logs.
    pub name: String,
    pub prompt: String,
    pub schema: Value,
}

/// Trait for model clients
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one prompt and return the parsed JSON answer
    async fn generate_json(&self, request: &StructuredRequest) -> ModelResult<Value>;

    /// Get the model identifier
    fn model(&self) -> &str;

    /// Get the provider name
    fn provider(&self) -> &str;
}
