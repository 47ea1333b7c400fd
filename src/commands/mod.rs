//! Command implementations for readmequick.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Markdown goes to stdout; progress and summaries go to
//! stderr so output can be piped.

mod export;
mod generate;
mod new;
mod prompts;
mod run;
mod status;
mod suggest;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ReadmeContext;
use crate::error::Result;
use crate::generation::PromptedApi;
use crate::llm::{self, ModelClient};

/// Dispatch a command to its implementation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ReadmeContext::resolve(cli.config.as_deref(), cli.session_dir.as_deref())?;

    match cli.command {
        Command::Suggest(args) => suggest::cmd_suggest(&ctx, args).await,
        Command::New(args) => new::cmd_new(&ctx, args).await,
        Command::Status => status::cmd_status(&ctx),
        Command::Preview => status::cmd_preview(&ctx),
        Command::Generate(args) => generate::cmd_generate(&ctx, args).await,
        Command::GenerateAll => generate::cmd_generate_all(&ctx).await,
        Command::Export(args) => export::cmd_export(&ctx, args),
        Command::Run(args) => run::cmd_run(&ctx, args).await,
        Command::Prompts => prompts::cmd_prompts(),
    }
}

/// Connect the configured model and wrap it in the prompt-backed API.
///
/// Fails with `ConfigError` when no API key is available, so commands call
/// this only once they know a model call is needed.
fn connect_api(config: &Config) -> Result<PromptedApi<dyn ModelClient>> {
    let client = llm::connect(config)?;
    tracing::debug!(provider = client.provider(), model = client.model(), "connected");
    Ok(PromptedApi::new(client, config.language.clone()))
}

/// Trim `--section` values and drop blank ones.
fn requested_sections(sections: Vec<String>) -> Vec<String> {
    sections
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
