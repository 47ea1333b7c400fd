//! Implementation of the `readmequick new` command.
//!
//! Collects metadata, settles the section list, and saves a fresh session
//! whose draft is a skeleton with every section pending.

use super::{connect_api, requested_sections};
use crate::cli::NewArgs;
use crate::config::Config;
use crate::context::ReadmeContext;
use crate::error::{ReadmeError, Result};
use crate::generation::GenerationApi;
use crate::project::{ProjectMetadata, validate_sections};
use crate::readme::assemble_skeleton;
use crate::services::suggest_sections;
use crate::session::Session;

/// Execute the `readmequick new` command.
pub async fn cmd_new(ctx: &ReadmeContext, args: NewArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let session_path = ctx.session_path();

    if ctx.session_exists() && !args.force {
        return Err(ReadmeError::UserError(format!(
            "a README session already exists at {}.\n\n\
             Use `readmequick new --force` to replace it, or `readmequick status` to inspect it.",
            session_path.display()
        )));
    }

    let metadata = ProjectMetadata::from(args.metadata);
    let sections = requested_sections(args.sections);

    // Reject bad input before a key or network is needed.
    metadata.validate()?;
    if !sections.is_empty() {
        validate_sections(&sections)?;
    }

    let api = connect_api(&config)?;
    let session = start_session(&api, &config, metadata, sections).await?;
    session.save(&session_path)?;

    print!("{}", session.draft.skeleton());
    eprintln!(
        "Started README for '{}' with {} sections. Saved session to {}",
        session.metadata.name,
        session.draft.section_names().len(),
        session_path.display()
    );
    eprintln!("Next: `readmequick generate-all` or `readmequick generate <SECTION>`");

    Ok(())
}

/// Build a new session: suggest sections when none were given, then
/// assemble the skeleton.
pub(super) async fn start_session(
    api: &dyn GenerationApi,
    config: &Config,
    metadata: ProjectMetadata,
    sections: Vec<String>,
) -> Result<Session> {
    metadata.validate()?;

    let sections = if sections.is_empty() {
        suggest_sections(api, &metadata, &config.default_sections).await
    } else {
        sections
    };

    let skeleton = assemble_skeleton(api, &metadata, &sections).await?;
    Ok(Session::new(metadata, skeleton))
}
