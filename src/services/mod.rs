//! Generation services.
//!
//! Each service wraps one generation operation and turns its failure into a
//! degraded but valid result:
//!
//! | Service  | On failure                    |
//! |----------|-------------------------------|
//! | sections | configured default sections   |
//! | badges   | no badges                     |
//! | content  | error placeholder as the body |

mod badges;
mod content;
mod sections;

pub use badges::generate_badges;
pub use content::{ContentOutcome, SectionContent, generate_section_content};
pub use sections::suggest_sections;
