//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for readmequick.
///
/// This struct represents the contents of `readmequick.yaml`. Unknown fields
/// in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation API settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Language the generated README text is written in.
    #[serde(default = "default_language")]
    pub language: String,

    /// Sections offered when the suggestion call fails.
    #[serde(default = "default_sections")]
    pub default_sections: Vec<String>,

    /// Text substituted for placeholders that were never generated.
    #[serde(default = "default_pending_marker")]
    pub pending_marker: String,

    /// Body stored for a section whose generation failed.
    #[serde(default = "default_error_placeholder")]
    pub error_placeholder: String,

    /// Default export path.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            language: default_language(),
            default_sections: default_sections(),
            pending_marker: default_pending_marker(),
            error_placeholder: default_error_placeholder(),
            output_file: default_output_file(),
        }
    }
}
