//! Typed inputs and outputs of the three generation operations.
//!
//! Field names follow the wire schemas (camelCase); `to_template_vars`
//! maps each input onto its prompt's snake_case variables.

use crate::project::ProjectMetadata;
use crate::prompt::vars;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSectionsInput {
    pub project_type: String,
    pub project_description: String,
    pub features: String,
    pub technologies: String,
}

impl SuggestSectionsInput {
    pub fn from_metadata(metadata: &ProjectMetadata) -> Self {
        Self {
            project_type: metadata.project_type.clone(),
            project_description: metadata.description.clone(),
            features: metadata.features.clone(),
            technologies: metadata.technologies.clone(),
        }
    }

    pub fn to_template_vars(&self) -> HashMap<String, String> {
        vars([
            ("project_type", self.project_type.as_str()),
            ("project_description", self.project_description.as_str()),
            ("features", self.features.as_str()),
            ("technologies", self.technologies.as_str()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestSectionsOutput {
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBadgesInput {
    pub project_description: String,
}

impl GenerateBadgesInput {
    /// Fold type, features and technologies into the single description the
    /// badge prompt accepts.
    pub fn from_metadata(metadata: &ProjectMetadata) -> Self {
        Self {
            project_description: format!(
                "Project Type: {}. Features: {}. Technologies: {}. Description: {}",
                metadata.project_type,
                metadata.features,
                metadata.technologies,
                metadata.description
            ),
        }
    }

    pub fn to_template_vars(&self) -> HashMap<String, String> {
        vars([("project_description", self.project_description.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateBadgesOutput {
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSectionContentInput {
    pub section_name: String,
    pub project_name: String,
    pub project_description: String,
    pub project_type: String,
    pub features: String,
    pub technologies: String,
}

impl GenerateSectionContentInput {
    pub fn new(section_name: &str, metadata: &ProjectMetadata) -> Self {
        Self {
            section_name: section_name.to_string(),
            project_name: metadata.name.clone(),
            project_description: metadata.description.clone(),
            project_type: metadata.project_type.clone(),
            features: metadata.features.clone(),
            technologies: metadata.technologies.clone(),
        }
    }

    pub fn to_template_vars(&self) -> HashMap<String, String> {
        vars([
            ("section_name", self.section_name.as_str()),
            ("project_name", self.project_name.as_str()),
            ("project_description", self.project_description.as_str()),
            ("project_type", self.project_type.as_str()),
            ("features", self.features.as_str()),
            ("technologies", self.technologies.as_str()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSectionContentOutput {
    pub section_content: String,
}
