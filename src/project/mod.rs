//! Project metadata and section selection.

mod metadata;
mod sections;

pub use metadata::ProjectMetadata;
pub use sections::{normalize_sections, validate_section_name, validate_sections};
