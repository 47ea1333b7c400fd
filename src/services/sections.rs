//! Section suggestion with a static fallback.

use crate::generation::{GenerationApi, SuggestSectionsInput};
use crate::project::{ProjectMetadata, normalize_sections};

/// Ask the model which README sections fit the project.
///
/// The model's order is kept (it is the display order). Blank and repeated
/// names are dropped. An API failure or an empty answer yields `defaults`
/// unchanged; the only trace of the fallback is a warning in the log.
pub async fn suggest_sections(
    api: &dyn GenerationApi,
    metadata: &ProjectMetadata,
    defaults: &[String],
) -> Vec<String> {
    let input = SuggestSectionsInput::from_metadata(metadata);

    match api.suggest_sections(&input).await {
        Ok(output) => {
            let sections = normalize_sections(&output.sections);
            if sections.is_empty() {
                tracing::warn!("model suggested no sections, using defaults");
                defaults.to_vec()
            } else {
                tracing::debug!(count = sections.len(), "model suggested sections");
                sections
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "section suggestion failed, using defaults");
            defaults.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_support::{FakeApi, foo_metadata};

    fn defaults() -> Vec<String> {
        Config::default().default_sections
    }

    #[tokio::test]
    async fn test_model_order_is_preserved() {
        let api = FakeApi::new().with_suggestions(&["Usage", "Introduction", "License"]);

        let sections = suggest_sections(&api, &foo_metadata(), &defaults()).await;

        assert_eq!(sections, vec!["Usage", "Introduction", "License"]);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_defaults() {
        let api = FakeApi::new();

        let sections = suggest_sections(&api, &foo_metadata(), &defaults()).await;

        assert_eq!(
            sections,
            vec![
                "Introduction",
                "Features",
                "Technologies",
                "Installation",
                "Usage",
                "License"
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_answer_falls_back_to_defaults() {
        let api = FakeApi::new().with_suggestions(&["", "   "]);

        let sections = suggest_sections(&api, &foo_metadata(), &defaults()).await;

        assert_eq!(sections, defaults());
    }

    #[tokio::test]
    async fn test_answer_is_cleaned() {
        let api = FakeApi::new().with_suggestions(&[" Usage ", "License", "Usage"]);

        let sections = suggest_sections(&api, &foo_metadata(), &defaults()).await;

        assert_eq!(sections, vec!["Usage", "License"]);
    }
}
