//! Badge generation; failure means no badges.

use crate::generation::{GenerateBadgesInput, GenerationApi};
use crate::project::ProjectMetadata;

/// Ask the model for Markdown badge snippets. Never fails.
pub async fn generate_badges(api: &dyn GenerationApi, metadata: &ProjectMetadata) -> Vec<String> {
    let input = GenerateBadgesInput::from_metadata(metadata);

    match api.generate_badges(&input).await {
        Ok(output) => output
            .badges
            .into_iter()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "badge generation failed, omitting badges");
            Vec::new()
        }
    }
}
