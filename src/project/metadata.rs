//! Project metadata collected before any generation step.

use crate::error::{ReadmeError, Result};
use crate::readme::PLACEHOLDER_PREFIX;
use serde::{Deserialize, Serialize};

/// Everything the user tells us about the project.
///
/// `features` and `technologies` are free text, conventionally
/// comma-delimited; they are passed to the prompts verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub features: String,
    pub technologies: String,
}

impl ProjectMetadata {
    /// Check the fields the section suggestion step depends on.
    ///
    /// Description, type, features and technologies must be non-blank.
    pub fn validate_details(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("description", &self.description),
            ("type", &self.project_type),
            ("features", &self.features),
            ("technologies", &self.technologies),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ReadmeError::ValidationError(format!(
                "please fill out all project fields (missing: {})",
                missing.join(", ")
            )))
        }
    }

    /// Check every field, including the project name.
    ///
    /// The name becomes the README title and the description is copied into
    /// the skeleton verbatim, so neither may carry a placeholder token and the
    /// name must fit on one line.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ReadmeError::ValidationError(
                "project name is required".to_string(),
            ));
        }
        if self.name.contains(['\n', '\r']) {
            return Err(ReadmeError::ValidationError(
                "project name must fit on one line".to_string(),
            ));
        }
        for (field, value) in [("name", &self.name), ("description", &self.description)] {
            if value.contains(PLACEHOLDER_PREFIX) {
                return Err(ReadmeError::ValidationError(format!(
                    "project {} must not contain '{}'",
                    field, PLACEHOLDER_PREFIX
                )));
            }
        }
        self.validate_details()
    }

    /// Features split on commas, trimmed, blanks dropped.
    pub fn feature_list(&self) -> Vec<String> {
        split_list(&self.features)
    }

    /// Technologies split on commas, trimmed, blanks dropped.
    pub fn technology_list(&self) -> Vec<String> {
        split_list(&self.technologies)
    }
}

/// Split a comma-delimited free-text field.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> ProjectMetadata {
        ProjectMetadata {
            name: "Foo".to_string(),
            description: "A tool.".to_string(),
            project_type: "CLI".to_string(),
            features: "a, b".to_string(),
            technologies: "x".to_string(),
        }
    }

    #[test]
    fn test_complete_metadata_validates() {
        assert!(foo().validate().is_ok());
        assert!(foo().validate_details().is_ok());
    }

    #[test]
    fn test_missing_name_only_fails_full_validation() {
        let metadata = ProjectMetadata {
            name: "  ".to_string(),
            ..foo()
        };

        assert!(metadata.validate_details().is_ok());
        let err = metadata.validate().unwrap_err();
        assert!(matches!(err, ReadmeError::ValidationError(_)));
    }

    #[test]
    fn test_missing_details_are_listed() {
        let metadata = ProjectMetadata {
            features: String::new(),
            technologies: " ".to_string(),
            ..foo()
        };

        let err = metadata.validate_details().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: please fill out all project fields (missing: features, technologies)"
        );
    }

    #[test]
    fn test_placeholder_token_in_description_rejected() {
        let metadata = ProjectMetadata {
            description: "Docs live in <!--gen-content:Secret--> for now.".to_string(),
            ..foo()
        };

        let err = metadata.validate().unwrap_err();

        assert!(matches!(err, ReadmeError::ValidationError(_)));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_placeholder_token_in_name_rejected() {
        let metadata = ProjectMetadata {
            name: "Foo <!--gen-content:X-->".to_string(),
            ..foo()
        };
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_multiline_name_rejected() {
        let metadata = ProjectMetadata {
            name: "Foo\n# Bar".to_string(),
            ..foo()
        };

        let err = metadata.validate().unwrap_err();

        assert!(err.to_string().contains("one line"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b,,  c "), vec!["a", "b", "c"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_feature_and_technology_lists() {
        let metadata = foo();
        assert_eq!(metadata.feature_list(), vec!["a", "b"]);
        assert_eq!(metadata.technology_list(), vec!["x"]);
    }

    #[test]
    fn test_serializes_type_field() {
        let json = serde_json::to_value(foo()).unwrap();
        assert_eq!(json["type"], "CLI");
    }
}
