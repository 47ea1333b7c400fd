//! The fixed prompts sent to the generation API.
//!
//! Each prompt declares the variables it consumes and the JSON schema its
//! answer must follow; the schema is sent along as the structured-output
//! contract.

use super::template::{TemplateError, render_template};
use serde_json::{Value, json};
use std::collections::HashMap;

/// A named prompt template bound to an input list and an output schema.
#[derive(Debug, Clone, Copy)]
pub struct PromptDefinition {
    pub name: &'static str,
    pub template: &'static str,
    /// Variables the caller must supply.
    pub inputs: &'static [&'static str],
    output_schema: fn() -> Value,
}

impl PromptDefinition {
    /// JSON schema of the object the model must return.
    pub fn output_schema(&self) -> Value {
        (self.output_schema)()
    }

    /// Render the prompt, checking every declared input first.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String, TemplateError> {
        if let Some(missing) = self.inputs.iter().find(|i| !variables.contains_key(**i)) {
            return Err(TemplateError::MissingInput {
                prompt: self.name.to_string(),
                input: missing.to_string(),
            });
        }
        render_template(self.template, variables)
    }
}

pub const SUGGEST_SECTIONS: PromptDefinition = PromptDefinition {
    name: "suggest_sections",
    template: r#"Based on the project details below, determine the appropriate sections to include in the README file.

Project Type: {project_type}
Project Description: {project_description}
Key Features: {features}
Technologies Used: {technologies}

Consider common sections such as Introduction, Installation, Usage, Contributing and License, plus any other section that is relevant given the project details.

Return a JSON object whose "sections" field is an array of section names, most relevant first. Example: {{"sections": ["Introduction", "Installation", "Usage", "Contributing", "License"]}}

Write the section names in {language}.
"#,
    inputs: &[
        "project_type",
        "project_description",
        "features",
        "technologies",
        "language",
    ],
    output_schema: sections_schema,
};

pub const GENERATE_BADGES: PromptDefinition = PromptDefinition {
    name: "generate_badges",
    template: r#"You are an expert software developer who specializes in creating badges for projects.

Use the project description to decide which badges are relevant. The badges should show off the project's key features and technologies.

Return a JSON object whose "badges" field is an array of Markdown strings. Each string must be one complete badge, for example an image link such as [![Rust](https://img.shields.io/badge/Rust-000000?logo=rust)](https://www.rust-lang.org).

Project Description: {project_description}
"#,
    inputs: &["project_description"],
    output_schema: badges_schema,
};

pub const GENERATE_SECTION_CONTENT: PromptDefinition = PromptDefinition {
    name: "generate_section_content",
    template: r#"You are an expert technical writer who creates exceptional README files.
Based on the project details below, write the content for the "**{section_name}**" section of a README file.
The output must be Markdown and directly usable.
Do not include the section heading (e.g. '## {section_name}') in your answer, only the content.

Project Details:
- Name: {project_name}
- Description: {project_description}
- Type: {project_type}
- Key Features: {features}
- Technologies Used: {technologies}

For example, if the section is "Installation", give the clone and dependency installation commands. If it is "Usage", show how to run the project. If it is "Features", elaborate on the listed features. If it is "License", give the license notice.
Be clear, concise and helpful.

Return a JSON object whose "sectionContent" field holds the Markdown. Write in {language}.
"#,
    inputs: &[
        "section_name",
        "project_name",
        "project_description",
        "project_type",
        "features",
        "technologies",
        "language",
    ],
    output_schema: section_content_schema,
};

/// All prompts, for listing and validation.
pub const ALL_PROMPTS: [PromptDefinition; 3] =
    [SUGGEST_SECTIONS, GENERATE_BADGES, GENERATE_SECTION_CONTENT];

fn sections_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sections": {
                "type": "ARRAY",
                "description": "Section names to include in the README, most relevant first.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["sections"]
    })
}

fn badges_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "badges": {
                "type": "ARRAY",
                "description": "Markdown snippets, one badge each.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["badges"]
    })
}

fn section_content_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sectionContent": {
                "type": "STRING",
                "description": "Markdown body of the section, without its heading."
            }
        },
        "required": ["sectionContent"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::template::vars;

    fn full_vars() -> HashMap<String, String> {
        vars([
            ("section_name", "Installation"),
            ("project_name", "Foo"),
            ("project_description", "A tool."),
            ("project_type", "CLI"),
            ("features", "a, b"),
            ("technologies", "x"),
            ("language", "English"),
        ])
    }

    #[test]
    fn test_every_prompt_renders_with_declared_inputs() {
        for prompt in ALL_PROMPTS {
            let declared = vars(prompt.inputs.iter().map(|i| (*i, "value")));
            assert!(
                prompt.render(&declared).is_ok(),
                "prompt '{}' references an undeclared variable",
                prompt.name
            );
        }
    }

    #[test]
    fn test_section_prompt_mentions_section_twice() {
        let rendered = GENERATE_SECTION_CONTENT.render(&full_vars()).unwrap();
        assert!(rendered.contains("\"**Installation**\" section"));
        assert!(rendered.contains("'## Installation'"));
        assert!(rendered.contains("- Name: Foo"));
        assert!(rendered.ends_with("Write in English.\n"));
    }

    #[test]
    fn test_suggest_prompt_keeps_json_example() {
        let rendered = SUGGEST_SECTIONS.render(&full_vars()).unwrap();
        assert!(rendered.contains(r#"{"sections": ["Introduction""#));
        assert!(rendered.contains("Project Type: CLI"));
    }

    #[test]
    fn test_missing_input_reported() {
        let err = GENERATE_BADGES.render(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingInput {
                prompt: "generate_badges".to_string(),
                input: "project_description".to_string()
            }
        );
    }

    #[test]
    fn test_schemas_require_their_field() {
        assert_eq!(SUGGEST_SECTIONS.output_schema()["required"][0], "sections");
        assert_eq!(GENERATE_BADGES.output_schema()["required"][0], "badges");
        assert_eq!(
            GENERATE_SECTION_CONTENT.output_schema()["properties"]["sectionContent"]["type"],
            "STRING"
        );
    }

    #[test]
    fn test_prompt_names_are_unique() {
        let mut names: Vec<_> = ALL_PROMPTS.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL_PROMPTS.len());
    }
}
