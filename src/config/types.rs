//! Configuration types and defaults for readmequick.

use serde::{Deserialize, Serialize};

/// Default Gemini model used for all three prompts.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Secondary environment variable consulted when the primary one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Marker left in the exported README for sections never generated.
pub const DEFAULT_PENDING_MARKER: &str = "*Content pending...*";

/// Body stored for a section whose generation call failed.
pub const DEFAULT_ERROR_PLACEHOLDER: &str =
    "> Error: Could not generate content for this section. Please try again.";

/// Generation provider backing the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Google Gemini `generateContent` REST API.
    #[default]
    Gemini,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Gemini => write!(f, "gemini"),
        }
    }
}

/// Connection and sampling settings for the generation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub provider: Provider,

    /// Model identifier, e.g. `gemini-2.0-flash`.
    pub model: String,

    /// API root; overridable for proxies and tests.
    pub base_url: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    pub temperature: f32,

    pub max_output_tokens: u32,

    /// HTTP timeout for a single generation request.
    pub timeout_seconds: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Gemini,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            temperature: 0.7,
            max_output_tokens: 2048,
            timeout_seconds: 120,
        }
    }
}

pub(crate) fn default_language() -> String {
    "English".to_string()
}

pub(crate) fn default_sections() -> Vec<String> {
    [
        "Introduction",
        "Features",
        "Technologies",
        "Installation",
        "Usage",
        "License",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub(crate) fn default_pending_marker() -> String {
    DEFAULT_PENDING_MARKER.to_string()
}

pub(crate) fn default_error_placeholder() -> String {
    DEFAULT_ERROR_PLACEHOLDER.to_string()
}

pub(crate) fn default_output_file() -> String {
    "README.md".to_string()
}
