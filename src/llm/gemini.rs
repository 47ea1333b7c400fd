//! Google Gemini client implementation
//!
//! Uses `generateContent` in JSON mode: the request carries the prompt's
//! output schema as `responseSchema`, and the first candidate's text is
//! parsed as JSON.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::client::{ModelClient, ModelResult, StructuredRequest};
use super::ProviderError;
use crate::config::ModelConfig;

const DEFAULT_RETRY_AFTER_MS: u64 = 60_000;

/// Google Gemini API client
pub struct GeminiClient {
    client: Client,
    config: ModelConfig,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(config: ModelConfig, api_key: SecretString) -> Result<Self, ProviderError> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
        )
    }

    fn build_request(&self, request: &StructuredRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.schema.clone(),
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }

    async fn error_for_status(response: reqwest::Response) -> ProviderError {
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after_ms = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(|secs| secs * 1000)
                .unwrap_or(DEFAULT_RETRY_AFTER_MS);
            return ProviderError::RateLimited { retry_after_ms };
        }

        if status.is_server_error() {
            return ProviderError::Unavailable {
                provider: "gemini".to_string(),
            };
        }

        let body = response.text().await.unwrap_or_default();
        ProviderError::InvalidResponse(format!("API error {}: {}", status, body))
    }
}

/// Pull the JSON answer out of a `generateContent` response.
fn extract_json(response: GeminiResponse) -> ModelResult<Value> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProviderError::ContentFiltered { reason });
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidResponse("response has no candidates".into()))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST")) => {
                Err(ProviderError::ContentFiltered {
                    reason: reason.to_string(),
                })
            }
            _ => Err(ProviderError::InvalidResponse(
                "response candidate has no text".into(),
            )),
        };
    }

    serde_json::from_str(strip_code_fence(&text))
        .map_err(|e| ProviderError::InvalidResponse(format!("answer is not valid JSON: {}", e)))
}

/// Models occasionally wrap JSON-mode answers in a ```json fence anyway.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate_json(&self, request: &StructuredRequest) -> ModelResult<Value> {
        let body = self.build_request(request);

        tracing::debug!(prompt = %request.name, model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let api_response: GeminiResponse = response.json().await?;
        extract_json(api_response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn provider(&self) -> &str {
        "gemini"
    }
}

// API request/response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    response_mime_type: String,
    response_schema: Value,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContentResponse,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
