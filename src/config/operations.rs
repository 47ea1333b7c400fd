//! Config loading, validation, and credential resolution.

use super::model::Config;
use super::types::FALLBACK_API_KEY_ENV;
use crate::error::{ReadmeError, Result};
use crate::project::validate_sections;
use secrecy::SecretString;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ReadmeError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ReadmeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path`, or fall back to defaults if the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ReadmeError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ReadmeError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `model.model`, `model.base_url` and `output_file` must be non-empty
    /// - `model.timeout_seconds` and `model.max_output_tokens` must be positive
    /// - `model.temperature` must lie in `0.0..=2.0`
    /// - `default_sections` must be a valid, non-empty section selection
    pub fn validate(&self) -> Result<()> {
        if self.model.model.trim().is_empty() {
            return Err(invalid("model.model must not be empty"));
        }
        if self.model.base_url.trim().is_empty() {
            return Err(invalid("model.base_url must not be empty"));
        }
        if self.model.timeout_seconds == 0 {
            return Err(invalid("model.timeout_seconds must be greater than 0"));
        }
        if self.model.max_output_tokens == 0 {
            return Err(invalid("model.max_output_tokens must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(invalid(&format!(
                "model.temperature must be between 0.0 and 2.0 (found {})",
                self.model.temperature
            )));
        }
        if self.output_file.trim().is_empty() {
            return Err(invalid("output_file must not be empty"));
        }
        validate_sections(&self.default_sections)
            .map_err(|e| invalid(&format!("default_sections: {}", e)))?;

        Ok(())
    }

    /// Resolve the API key from the environment.
    ///
    /// Reads the variable named by `model.api_key_env`, then `GOOGLE_API_KEY`.
    pub fn api_key(&self) -> Result<SecretString> {
        [self.model.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter(|name| !name.is_empty())
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
            .map(SecretString::from)
            .ok_or_else(|| {
                ReadmeError::ConfigError(format!(
                    "no API key found; set {} (or {})",
                    self.model.api_key_env, FALLBACK_API_KEY_ENV
                ))
            })
    }
}

fn invalid(message: &str) -> ReadmeError {
    ReadmeError::ConfigError(format!("config validation failed: {}", message))
}
