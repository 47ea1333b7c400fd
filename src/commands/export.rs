//! Implementation of the `readmequick export` command.

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::context::ReadmeContext;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::readme::README_MIME_TYPE;
use crate::session::Session;
use std::path::PathBuf;

/// Write the final README from the saved session.
pub fn cmd_export(ctx: &ReadmeContext, args: OutputArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let session = Session::load(ctx.session_path())?;

    let pending = session.draft.pending_sections();
    if !pending.is_empty() {
        eprintln!(
            "Note: {} section(s) not generated yet and marked as pending: {}",
            pending.len(),
            pending.join(", ")
        );
    }

    let document = session.draft.render_document(&config.pending_marker);
    write_readme(ctx, &config, &args, &document)
}

/// Print `document` or write it atomically to the chosen path.
pub(super) fn write_readme(
    ctx: &ReadmeContext,
    config: &Config,
    args: &OutputArgs,
    document: &str,
) -> Result<()> {
    if args.stdout {
        print!("{}", document);
        return Ok(());
    }

    let path = output_path(ctx, config, args);
    atomic_write_file(&path, document)?;
    tracing::info!(path = %path.display(), mime = README_MIME_TYPE, bytes = document.len(), "exported README");
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn output_path(ctx: &ReadmeContext, config: &Config, args: &OutputArgs) -> PathBuf {
    ctx.output_path(args.output.as_deref().unwrap_or(&config.output_file))
}
