//! Section name rules.
//!
//! Section names double as cache keys and as the payload of placeholder
//! tokens, so a selection must be unique and free of the token terminator.

use crate::error::{ReadmeError, Result};
use crate::readme::PLACEHOLDER_SUFFIX;
use std::collections::HashSet;

/// Check a single section name.
pub fn validate_section_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ReadmeError::ValidationError(
            "section names must not be empty".to_string(),
        ));
    }
    if name.contains(['\n', '\r']) {
        return Err(ReadmeError::ValidationError(format!(
            "section name '{}' must fit on one line",
            name.escape_default()
        )));
    }
    if name.contains(PLACEHOLDER_SUFFIX) {
        return Err(ReadmeError::ValidationError(format!(
            "section name '{}' must not contain '{}'",
            name, PLACEHOLDER_SUFFIX
        )));
    }
    Ok(())
}

/// Check a whole selection: at least one section, each valid, no duplicates.
pub fn validate_sections<S: AsRef<str>>(sections: &[S]) -> Result<()> {
    if sections.is_empty() {
        return Err(ReadmeError::ValidationError(
            "please select at least one section".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for section in sections {
        let section = section.as_ref();
        validate_section_name(section)?;
        if !seen.insert(section) {
            return Err(ReadmeError::ValidationError(format!(
                "section '{}' is selected more than once",
                section
            )));
        }
    }

    Ok(())
}

/// Trim names, drop invalid ones and repeats; first occurrence wins.
pub fn normalize_sections<I, S>(sections: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    sections
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| validate_section_name(s).is_ok())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
