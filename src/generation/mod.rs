//! Generation API boundary.
//!
//! - `SuggestSections(type, description, features, technologies) -> sections`
//! - `GenerateBadges(description) -> badges`
//! - `GenerateSectionContent(section, name, description, type, features, technologies) -> content`
//!
//! All three are plain request/response calls that may fail; the
//! `services` module decides what a failure degrades into.

mod api;
mod types;

pub use api::{GenerationApi, PromptedApi};
pub use types::{
    GenerateBadgesInput, GenerateBadgesOutput, GenerateSectionContentInput,
    GenerateSectionContentOutput, SuggestSectionsInput, SuggestSectionsOutput,
};
