//! Implementation of the `readmequick suggest` command.

use super::connect_api;
use crate::cli::MetadataArgs;
use crate::context::ReadmeContext;
use crate::error::Result;
use crate::project::ProjectMetadata;
use crate::services::suggest_sections;

/// Print suggested section names, one per line.
///
/// Only the project details are required here; the name is not needed
/// until a skeleton is assembled.
pub async fn cmd_suggest(ctx: &ReadmeContext, args: MetadataArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let metadata = ProjectMetadata::from(args);
    metadata.validate_details()?;

    let api = connect_api(&config)?;
    for section in suggest_sections(&api, &metadata, &config.default_sections).await {
        println!("{}", section);
    }

    Ok(())
}
