//! Template engine for prompt variable substitution.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! typo in a prompt never silently sends an incomplete request.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },

    /// A prompt declared an input that the caller did not supply.
    #[error("prompt '{prompt}' requires input '{input}'")]
    MissingInput { prompt: String, input: String },
}

/// Render a template string by substituting variables.
///
/// ```text
/// render_template("Write the {section_name} section", &vars)
///     => "Write the Installation section"
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut var_name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => var_name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let var_name = var_name.trim();
                if var_name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                match variables.get(var_name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: var_name.to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` passes through.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("section_name", "Installation"), ("project_name", "Foo")]);
        let result = render_template("Write {section_name} for {project_name}.", &vars).unwrap();
        assert_eq!(result, "Write Installation for Foo.");
    }

    #[test]
    fn test_no_variables() {
        let result = render_template("Just plain text", &HashMap::new()).unwrap();
        assert_eq!(result, "Just plain text");
    }

    #[test]
    fn test_escaped_json_example() {
        let result =
            render_template(r#"Example: {{"sections": ["Usage"]}}"#, &HashMap::new()).unwrap();
        assert_eq!(result, r#"Example: {"sections": ["Usage"]}"#);
    }

    #[test]
    fn test_lone_closing_brace() {
        let result = render_template("a } b", &HashMap::new()).unwrap();
        assert_eq!(result, "a } b");
    }

    #[test]
    fn test_undefined_variable_error() {
        let err = render_template("Hello {name}", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "name".to_string(),
                position: 6
            }
        );
    }

    #[test]
    fn test_unmatched_brace_error() {
        let err = render_template("Hello {name", &HashMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::UnmatchedBrace { position: 6 });
    }

    #[test]
    fn test_empty_variable_name_error() {
        let err = render_template("Hello {}", &HashMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::EmptyVariableName { position: 6 });
    }

    #[test]
    fn test_whitespace_in_variable_name() {
        let vars = vars([("name", "Foo")]);
        let result = render_template("# { name }", &vars).unwrap();
        assert_eq!(result, "# Foo");
    }

    #[test]
    fn test_braces_in_value_are_not_expanded() {
        let vars = vars([("features", "{fast}, {small}")]);
        let result = render_template("Features: {features}", &vars).unwrap();
        assert_eq!(result, "Features: {fast}, {small}");
    }

    #[test]
    fn test_unicode_values() {
        let vars = vars([("section_name", "Instalación")]);
        let result = render_template("\"**{section_name}**\"", &vars).unwrap();
        assert_eq!(result, "\"**Instalación**\"");
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UnmatchedBrace { position: 5 };
        assert_eq!(err.to_string(), "unmatched '{' at position 5 in template");

        let err = TemplateError::EmptyVariableName { position: 3 };
        assert_eq!(
            err.to_string(),
            "empty variable name '{}' at position 3 in template"
        );

        let err = TemplateError::MissingInput {
            prompt: "generate_badges".to_string(),
            input: "project_description".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "prompt 'generate_badges' requires input 'project_description'"
        );
    }
}
