//! CLI argument parsing for readmequick.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::project::ProjectMetadata;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// readmequick: generate a README.md with a language model.
///
/// Describe the project, pick sections, then generate each section on its
/// own or all at once:
/// - `new` writes a skeleton with one placeholder per section
/// - `generate` / `generate-all` fill placeholders in
/// - `export` writes the finished README.md
#[derive(Parser, Debug)]
#[command(name = "readmequick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: readmequick.yaml in the working directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the session (default: .readmequick).
    #[arg(long, global = true, value_name = "DIR")]
    pub session_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG wins.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for readmequick.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest README sections for a project.
    ///
    /// Prints one section name per line.
    Suggest(MetadataArgs),

    /// Start a new README session.
    ///
    /// Suggests sections unless --section is given, fetches badges, and
    /// saves a skeleton with one placeholder per section.
    New(NewArgs),

    /// Show each section and whether it has been generated.
    Status,

    /// Print the draft with pending sections marked.
    Preview,

    /// Generate or regenerate one section.
    Generate(GenerateArgs),

    /// Generate every pending section concurrently.
    GenerateAll,

    /// Write the final README.
    ///
    /// Sections that were never generated get the pending marker.
    Export(OutputArgs),

    /// Suggest, assemble, generate and export in one go without a session.
    Run(RunArgs),

    /// List the prompts and the JSON schema each answer must follow.
    Prompts,
}

/// Project metadata flags shared by `suggest`, `new` and `run`.
#[derive(Args, Debug, Clone, Default)]
pub struct MetadataArgs {
    /// Project name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// One or two sentences about the project.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Kind of project (e.g. "CLI tool", "web app").
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    pub project_type: String,

    /// Key features, comma-separated.
    #[arg(long, default_value = "")]
    pub features: String,

    /// Technologies used, comma-separated.
    #[arg(long, default_value = "")]
    pub technologies: String,
}

impl From<MetadataArgs> for ProjectMetadata {
    fn from(args: MetadataArgs) -> Self {
        ProjectMetadata {
            name: args.name,
            description: args.description,
            project_type: args.project_type,
            features: args.features,
            technologies: args.technologies,
        }
    }
}

/// Arguments for the `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub metadata: MetadataArgs,

    /// Section to include, in order; repeat for more. Skips the suggestion step.
    #[arg(short, long = "section", value_name = "SECTION")]
    pub sections: Vec<String>,

    /// Replace an existing session.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Section to generate, exactly as it appears in the skeleton.
    pub section: String,
}

/// Where to write a README.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output file (default: `output_file` from config).
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Print the README to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub metadata: MetadataArgs,

    /// Section to include, in order; repeat for more. Skips the suggestion step.
    #[arg(short, long = "section", value_name = "SECTION")]
    pub sections: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
