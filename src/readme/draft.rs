//! The interactive draft: skeleton plus per-section content cache.
//!
//! Every placeholder section moves through
//!
//! ```text
//! Pending -> Generating -> Generated
//!               ^              |
//!               +--------------+   (regenerate)
//! ```
//!
//! Content from a failed call is still terminal: the section is Generated
//! with the error placeholder as its body and is never retried on its own.

use super::placeholder::{SkeletonPart, neutralize_placeholders, parse_skeleton, placeholder_sections};
use crate::error::{ReadmeError, Result};
use crate::generation::GenerationApi;
use crate::project::ProjectMetadata;
use crate::services::{SectionContent, generate_section_content};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Where a section stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Pending,
    Generating,
    Generated,
}

impl std::fmt::Display for SectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionState::Pending => write!(f, "pending"),
            SectionState::Generating => write!(f, "generating"),
            SectionState::Generated => write!(f, "generated"),
        }
    }
}

/// Outcome of a bulk generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    /// Sections that were pending when the bulk run started.
    pub requested: usize,
    /// Sections whose call produced model content.
    pub succeeded: usize,
    /// Sections that ended up holding the error placeholder.
    pub failed: Vec<String>,
}

impl BulkReport {
    pub fn summary(&self) -> String {
        format!("{} of {} succeeded", self.succeeded, self.requested)
    }

    pub fn is_complete_success(&self) -> bool {
        self.succeeded == self.requested
    }
}

/// A skeleton and the content generated for its sections so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeDraft {
    skeleton: String,
    #[serde(default)]
    contents: BTreeMap<String, String>,
    /// In-flight sections; meaningless outside the running process.
    #[serde(skip)]
    generating: BTreeSet<String>,
}

impl ReadmeDraft {
    pub fn new(skeleton: impl Into<String>) -> Self {
        Self {
            skeleton: skeleton.into(),
            contents: BTreeMap::new(),
            generating: BTreeSet::new(),
        }
    }

    pub fn skeleton(&self) -> &str {
        &self.skeleton
    }

    pub fn parts(&self) -> Vec<SkeletonPart> {
        parse_skeleton(&self.skeleton)
    }

    /// Placeholder sections in document order.
    pub fn section_names(&self) -> Vec<String> {
        placeholder_sections(&self.skeleton)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section_names().iter().any(|s| s == name)
    }

    pub fn state(&self, name: &str) -> SectionState {
        if self.generating.contains(name) {
            SectionState::Generating
        } else if self.contents.contains_key(name) {
            SectionState::Generated
        } else {
            SectionState::Pending
        }
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.contents.get(name).map(String::as_str)
    }

    /// Sections neither generated nor in flight, in document order.
    pub fn pending_sections(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.section_names()
            .into_iter()
            .filter(|name| self.state(name) == SectionState::Pending)
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    pub fn all_generated(&self) -> bool {
        self.section_names()
            .iter()
            .all(|name| self.state(name) == SectionState::Generated)
    }

    /// Move `name` to Generating, from Pending or Generated.
    pub fn begin(&mut self, name: &str) -> Result<()> {
        if !self.has_section(name) {
            return Err(unknown_section(name, &self.section_names()));
        }
        if self.generating.contains(name) {
            return Err(ReadmeError::UserError(format!(
                "section '{}' is already being generated",
                name
            )));
        }
        self.generating.insert(name.to_string());
        Ok(())
    }

    /// Move `name` from Generating to Generated with `markdown` as its body.
    pub fn complete(&mut self, name: &str, markdown: String) -> Result<()> {
        if !self.generating.remove(name) {
            return Err(ReadmeError::UserError(format!(
                "section '{}' is not being generated",
                name
            )));
        }
        self.contents.insert(name.to_string(), markdown);
        Ok(())
    }

    /// Generate (or regenerate) one section.
    pub async fn generate_section(
        &mut self,
        api: &dyn GenerationApi,
        metadata: &ProjectMetadata,
        name: &str,
        error_placeholder: &str,
    ) -> Result<SectionContent> {
        self.begin(name)?;
        let content = generate_section_content(api, name, metadata, error_placeholder).await;
        self.complete(name, content.markdown.clone())?;
        Ok(content)
    }

    /// Generate every pending section concurrently.
    ///
    /// All calls are started together and joined settle-all: a slow or
    /// failing section never holds back the others, and every section gets
    /// its result stored whatever happened to the rest.
    pub async fn generate_all(
        &mut self,
        api: &dyn GenerationApi,
        metadata: &ProjectMetadata,
        error_placeholder: &str,
    ) -> BulkReport {
        let requested = self.pending_sections();
        if requested.is_empty() {
            return BulkReport::default();
        }

        self.generating.extend(requested.iter().cloned());
        tracing::info!(sections = requested.len(), "generating sections");

        let results = join_all(
            requested
                .iter()
                .map(|name| generate_section_content(api, name, metadata, error_placeholder)),
        )
        .await;

        let mut report = BulkReport {
            requested: requested.len(),
            ..BulkReport::default()
        };
        for (name, content) in requested.into_iter().zip(results) {
            self.generating.remove(&name);
            if content.is_generated() {
                report.succeeded += 1;
            } else {
                report.failed.push(name.clone());
            }
            self.contents.insert(name, content.markdown);
        }

        tracing::info!(summary = %report.summary(), "bulk generation finished");
        report
    }

    /// The exportable document.
    ///
    /// Generated sections are substituted in; anything else becomes the
    /// pending marker. The result never contains a placeholder token.
    pub fn render_document(&self, pending_marker: &str) -> String {
        self.render_with(|name| match self.content(name) {
            Some(content) => neutralize_placeholders(content),
            None => format!("\n{}\n", pending_marker),
        })
    }

    /// A terminal-friendly view showing what still needs generating.
    pub fn render_preview(&self) -> String {
        self.render_with(|name| match self.state(name) {
            SectionState::Generated => {
                neutralize_placeholders(self.content(name).unwrap_or_default())
            }
            SectionState::Generating => format!("[generating: {}]", name),
            SectionState::Pending => format!(
                "[pending: {}] run `readmequick generate \"{}\"` to write this section",
                name, name
            ),
        })
    }

    fn render_with<F: Fn(&str) -> String>(&self, section: F) -> String {
        self.parts()
            .into_iter()
            .map(|part| match part {
                SkeletonPart::Literal(text) => text,
                SkeletonPart::Placeholder(name) => section(&name),
            })
            .collect()
    }
}

fn unknown_section(name: &str, known: &[String]) -> ReadmeError {
    ReadmeError::UserError(format!(
        "section '{}' is not part of this README.\nAvailable sections: {}",
        name,
        known.join(", ")
    ))
}
