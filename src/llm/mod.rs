//! Generation API clients.
//!
//! `ModelClient` is the seam between prompts and a concrete provider. The
//! only provider today is Gemini; `connect` builds it from config.

mod client;
mod error;
mod gemini;

pub use client::{ModelClient, ModelResult, StructuredRequest};
pub use error::ProviderError;
pub use gemini::GeminiClient;

use crate::config::{Config, Provider};
use crate::error::{ReadmeError, Result};

/// Build the client selected by `config.model.provider`.
pub fn connect(config: &Config) -> Result<Box<dyn ModelClient>> {
    let api_key = config.api_key()?;
    match config.model.provider {
        Provider::Gemini => {
            let client = GeminiClient::new(config.model.clone(), api_key).map_err(|e| {
                ReadmeError::ConfigError(format!("failed to build Gemini client: {}", e))
            })?;
            Ok(Box::new(client))
        }
    }
}
