//! Implementation of `readmequick status` and `readmequick preview`.

use crate::context::ReadmeContext;
use crate::error::Result;
use crate::readme::SectionState;
use crate::session::Session;

/// Print each section with its state and a summary line.
pub fn cmd_status(ctx: &ReadmeContext) -> Result<()> {
    let session = Session::load(ctx.session_path())?;
    print!("{}", format_status(&session));
    Ok(())
}

/// Print the draft with pending sections marked.
pub fn cmd_preview(ctx: &ReadmeContext) -> Result<()> {
    let session = Session::load(ctx.session_path())?;
    print!("{}", session.draft.render_preview());
    Ok(())
}

fn format_status(session: &Session) -> String {
    let metadata = &session.metadata;
    let sections = session.draft.section_names();
    let generated = sections
        .iter()
        .filter(|s| session.draft.state(s) == SectionState::Generated)
        .count();

    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", metadata.name, metadata.project_type));
    out.push_str(&format!(
        "Updated:      {}\n",
        session.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Features:     {}\n", metadata.feature_list().join(", ")));
    out.push_str(&format!(
        "Technologies: {}\n",
        metadata.technology_list().join(", ")
    ));
    out.push('\n');

    out.push_str("Sections:\n");
    for section in &sections {
        out.push_str(&format!(
            "  {:10} {}\n",
            session.draft.state(section).to_string(),
            section
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "{} of {} sections generated\n",
        generated,
        sections.len()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::DEFAULT_ERROR_PLACEHOLDER;
    use crate::readme::render_skeleton;
    use crate::test_support::{FakeApi, foo_metadata};

    #[tokio::test]
    async fn test_format_status() {
        let metadata = foo_metadata();
        let sections = vec!["Usage".to_string(), "License".to_string()];
        let mut session = Session::new(
            metadata.clone(),
            render_skeleton(&metadata, &[], &sections),
        );
        session
            .draft
            .generate_section(&FakeApi::new(), &metadata, "License", DEFAULT_ERROR_PLACEHOLDER)
            .await
            .unwrap();

        let status = format_status(&session);

        assert!(status.starts_with("Foo (CLI)\n"));
        assert!(status.contains("Features:     a, b\n"));
        assert!(status.contains("  pending    Usage\n"));
        assert!(status.contains("  generated  License\n"));
        assert!(status.ends_with("1 of 2 sections generated\n"));
    }
}
