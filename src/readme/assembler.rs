//! README skeleton assembly.

use super::placeholder::{neutralize_placeholders, placeholder_token};
use crate::error::Result;
use crate::generation::GenerationApi;
use crate::project::{ProjectMetadata, validate_sections};
use crate::services::generate_badges;

/// Build the skeleton for already-known badges.
///
/// Layout: title, badges line (only when there are badges), description,
/// then per section a `##` heading followed by its placeholder token.
pub fn render_skeleton(metadata: &ProjectMetadata, badges: &[String], sections: &[String]) -> String {
    let mut skeleton = format!("# {}\n\n", metadata.name);

    if !badges.is_empty() {
        skeleton.push_str(&neutralize_placeholders(&badges.join(" ")));
        skeleton.push_str("\n\n");
    }

    skeleton.push_str(&metadata.description);
    skeleton.push_str("\n\n");

    for section in sections {
        skeleton.push_str(&format!(
            "## {}\n\n{}\n\n",
            section,
            placeholder_token(section)
        ));
    }

    skeleton
}

/// Validate the inputs, fetch badges, and build the skeleton.
///
/// Validation happens before the badge call, so rejected input never
/// reaches the network. Section bodies are left to the draft.
pub async fn assemble_skeleton(
    api: &dyn GenerationApi,
    metadata: &ProjectMetadata,
    sections: &[String],
) -> Result<String> {
    metadata.validate()?;
    validate_sections(sections)?;

    let badges = generate_badges(api, metadata).await;
    tracing::debug!(badges = badges.len(), sections = sections.len(), "assembling skeleton");

    Ok(render_skeleton(metadata, &badges, sections))
}
