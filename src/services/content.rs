//! Per-section content generation.

use crate::generation::{GenerateSectionContentInput, GenerationApi};
use crate::project::ProjectMetadata;

/// How a section body came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOutcome {
    /// The model produced the body.
    Generated,
    /// The call failed; the body is the error placeholder.
    Failed,
}

/// Markdown body for one section. Either way it is usable as content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContent {
    pub markdown: String,
    pub outcome: ContentOutcome,
}

impl SectionContent {
    pub fn is_generated(&self) -> bool {
        self.outcome == ContentOutcome::Generated
    }
}

/// Generate the body of `section`.
///
/// A failed call returns `error_placeholder` as the body instead of an
/// error, so callers never branch on failure to render something.
pub async fn generate_section_content(
    api: &dyn GenerationApi,
    section: &str,
    metadata: &ProjectMetadata,
    error_placeholder: &str,
) -> SectionContent {
    let input = GenerateSectionContentInput::new(section, metadata);

    match api.generate_section_content(&input).await {
        Ok(output) => SectionContent {
            markdown: output.section_content.trim().to_string(),
            outcome: ContentOutcome::Generated,
        },
        Err(e) => {
            tracing::warn!(section, error = %e, "section generation failed");
            SectionContent {
                markdown: error_placeholder.to_string(),
                outcome: ContentOutcome::Failed,
            }
        }
    }
}
