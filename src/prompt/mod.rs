//! Prompt templates for the generation API.
//!
//! - **Template**: `{variable}` substitution engine
//! - **Library**: the three fixed prompts and their output schemas
//!
//! # Template Syntax
//!
//! ```text
//! Write the content for the "**{section_name}**" section.
//! Return {{"sectionContent": "..."}}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod library;
mod template;

pub use library::{
    ALL_PROMPTS, GENERATE_BADGES, GENERATE_SECTION_CONTENT, PromptDefinition, SUGGEST_SECTIONS,
};
pub use template::{TemplateError, render_template, vars};
