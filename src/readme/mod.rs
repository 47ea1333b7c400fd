//! README skeletons, placeholders, and the draft being generated.

mod assembler;
mod draft;
mod placeholder;

pub use assembler::{assemble_skeleton, render_skeleton};
pub use draft::{BulkReport, ReadmeDraft, SectionState};
pub use placeholder::{
    PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX, SkeletonPart, parse_skeleton, placeholder_token,
};

/// Media type of an exported README.
pub const README_MIME_TYPE: &str = "text/markdown";
