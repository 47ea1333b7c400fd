//! Placeholder tokens and skeleton parsing.
//!
//! A placeholder is `<!--gen-content:SECTION-->`, an HTML comment so an
//! unresolved skeleton still renders as valid Markdown.

use regex::Regex;
use std::sync::LazyLock;

pub const PLACEHOLDER_PREFIX: &str = "<!--gen-content:";
pub const PLACEHOLDER_SUFFIX: &str = "-->";

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--gen-content:(.*?)-->").expect("Invalid placeholder regex")
});

/// One piece of a parsed skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonPart {
    /// Markdown passed through verbatim.
    Literal(String),
    /// A section awaiting content.
    Placeholder(String),
}

/// The placeholder token for `section`.
pub fn placeholder_token(section: &str) -> String {
    format!("{}{}{}", PLACEHOLDER_PREFIX, section, PLACEHOLDER_SUFFIX)
}

/// Split a skeleton on placeholder tokens.
///
/// Parts alternate `Literal, Placeholder, Literal, ...` and always start and
/// end with a (possibly empty) literal, so even positions are Markdown and
/// odd positions are section names.
pub fn parse_skeleton(skeleton: &str) -> Vec<SkeletonPart> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(skeleton) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        parts.push(SkeletonPart::Literal(
            skeleton[last..whole.start()].to_string(),
        ));
        parts.push(SkeletonPart::Placeholder(name.as_str().to_string()));
        last = whole.end();
    }
    parts.push(SkeletonPart::Literal(skeleton[last..].to_string()));

    parts
}

/// Section names of every placeholder, in document order.
pub fn placeholder_sections(text: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Whether `text` contains any placeholder token.
#[cfg(test)]
pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(text)
}

/// Break any placeholder token inside generated text so it can no longer
/// be mistaken for one.
pub fn neutralize_placeholders(text: &str) -> String {
    text.replace(PLACEHOLDER_PREFIX, "<!-- gen-content:")
}
