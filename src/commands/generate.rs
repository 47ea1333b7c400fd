//! Implementation of `readmequick generate` and `readmequick generate-all`.

use super::connect_api;
use crate::cli::GenerateArgs;
use crate::context::ReadmeContext;
use crate::error::{ReadmeError, Result};
use crate::session::Session;

/// Generate (or regenerate) one section and save the session.
///
/// The section body goes to stdout. A failed call still stores the error
/// placeholder; running the command again retries it.
pub async fn cmd_generate(ctx: &ReadmeContext, args: GenerateArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let session_path = ctx.session_path();
    let mut session = Session::load(&session_path)?;

    let section = args.section.trim();
    if !session.draft.has_section(section) {
        return Err(ReadmeError::UserError(format!(
            "section '{}' is not part of this README.\nAvailable sections: {}",
            section,
            session.draft.section_names().join(", ")
        )));
    }

    let api = connect_api(&config)?;
    let content = session
        .draft
        .generate_section(&api, &session.metadata, section, &config.error_placeholder)
        .await?;
    session.touch();
    session.save(&session_path)?;

    println!("{}", content.markdown);
    if content.is_generated() {
        eprintln!("Generated '{}'.", section);
    } else {
        eprintln!(
            "Could not generate '{}'; the error text was stored instead. \
             Run `readmequick generate \"{}\"` to try again.",
            section, section
        );
    }

    Ok(())
}

/// Generate every pending section concurrently, save, and report.
///
/// Partial failure is not an error: failed sections hold the error text
/// and are listed in the report.
pub async fn cmd_generate_all(ctx: &ReadmeContext) -> Result<()> {
    let config = ctx.load_config()?;
    let session_path = ctx.session_path();
    let mut session = Session::load(&session_path)?;

    if session.draft.pending_sections().is_empty() {
        eprintln!("All sections are already generated. Use `readmequick generate <SECTION>` to regenerate one.");
        return Ok(());
    }

    let api = connect_api(&config)?;
    let report = session
        .draft
        .generate_all(&api, &session.metadata, &config.error_placeholder)
        .await;
    session.touch();
    session.save(&session_path)?;

    eprintln!("{}", report.summary());
    if !report.is_complete_success() {
        for section in &report.failed {
            eprintln!("  failed: {}", section);
        }
        eprintln!("Retry a failed section with `readmequick generate <SECTION>`.");
    }

    Ok(())
}
