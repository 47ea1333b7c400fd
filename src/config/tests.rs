//! Tests for config functionality.

use crate::config::types::{DEFAULT_ERROR_PLACEHOLDER, DEFAULT_MODEL, DEFAULT_PENDING_MARKER};
use crate::config::{Config, Provider};
use crate::error::ReadmeError;
use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.model.provider, Provider::Gemini);
    assert_eq!(config.model.model, DEFAULT_MODEL);
    assert_eq!(config.model.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.model.timeout_seconds, 120);
    assert_eq!(config.language, "English");
    assert_eq!(
        config.default_sections,
        vec![
            "Introduction",
            "Features",
            "Technologies",
            "Installation",
            "Usage",
            "License"
        ]
    );
    assert_eq!(config.pending_marker, DEFAULT_PENDING_MARKER);
    assert_eq!(config.error_placeholder, DEFAULT_ERROR_PLACEHOLDER);
    assert_eq!(config.output_file, "README.md");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
language: Spanish
model:
  model: gemini-1.5-pro
  temperature: 0.2
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.language, "Spanish");
    assert_eq!(config.model.model, "gemini-1.5-pro");
    assert_eq!(config.model.temperature, 0.2);

    // Unspecified values fall back to defaults
    assert_eq!(config.model.timeout_seconds, 120);
    assert_eq!(config.output_file, "README.md");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
language: English
future_option: true
model:
  also_unknown: 3
"#;
    assert!(Config::from_yaml(yaml).is_ok());
}

#[test]
fn test_invalid_provider_rejected() {
    let yaml = "model:\n  provider: carrier_pigeon\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, ReadmeError::ConfigError(_)));
}

#[test]
fn test_zero_timeout_rejected() {
    let yaml = "model:\n  timeout_seconds: 0\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("timeout_seconds"));
}

#[test]
fn test_out_of_range_temperature_rejected() {
    let yaml = "model:\n  temperature: 3.5\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("temperature"));
}

#[test]
fn test_duplicate_default_sections_rejected() {
    let yaml = "default_sections: [Usage, License, Usage]\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("default_sections"));
}

#[test]
fn test_empty_default_sections_rejected() {
    let yaml = "default_sections: []\n";
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_yaml_roundtrip() {
    let mut config = Config::default();
    config.language = "German".to_string();

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_load_or_default_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("readmequick.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("readmequick.yaml");
    std::fs::write(&path, "output_file: docs/README.md\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.output_file, "docs/README.md");
}

#[test]
#[serial]
fn test_api_key_from_configured_env() {
    let mut config = Config::default();
    config.model.api_key_env = "READMEQUICK_TEST_KEY".to_string();

    unsafe { std::env::set_var("READMEQUICK_TEST_KEY", "secret-123") };
    let key = config.api_key().unwrap();
    unsafe { std::env::remove_var("READMEQUICK_TEST_KEY") };

    assert_eq!(key.expose_secret(), "secret-123");
}

#[test]
#[serial]
fn test_api_key_missing() {
    let mut config = Config::default();
    config.model.api_key_env = "READMEQUICK_TEST_KEY_UNSET".to_string();

    let saved = std::env::var("GOOGLE_API_KEY").ok();
    unsafe { std::env::remove_var("GOOGLE_API_KEY") };
    let result = config.api_key();
    if let Some(value) = saved {
        unsafe { std::env::set_var("GOOGLE_API_KEY", value) };
    }

    let err = result.unwrap_err();
    assert!(matches!(err, ReadmeError::ConfigError(_)));
    assert!(err.to_string().contains("READMEQUICK_TEST_KEY_UNSET"));
}
