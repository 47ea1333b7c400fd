//! Implementation of the `readmequick run` command.
//!
//! The whole flow in one invocation: nothing is saved besides the README.

use super::export::write_readme;
use super::new::start_session;
use super::{connect_api, requested_sections};
use crate::cli::RunArgs;
use crate::context::ReadmeContext;
use crate::error::Result;
use crate::project::{ProjectMetadata, validate_sections};

/// Execute the `readmequick run` command.
pub async fn cmd_run(ctx: &ReadmeContext, args: RunArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let metadata = ProjectMetadata::from(args.metadata);
    let sections = requested_sections(args.sections);

    metadata.validate()?;
    if !sections.is_empty() {
        validate_sections(&sections)?;
    }

    let api = connect_api(&config)?;
    let mut session = start_session(&api, &config, metadata, sections).await?;
    let report = session
        .draft
        .generate_all(&api, &session.metadata, &config.error_placeholder)
        .await;
    eprintln!("{}", report.summary());
    for section in &report.failed {
        eprintln!("  failed: {}", section);
    }

    let document = session.draft.render_document(&config.pending_marker);
    write_readme(ctx, &config, &args.output, &document)
}
