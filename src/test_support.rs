use crate::generation::*;
use crate::llm::{ModelResult, ProviderError};
use crate::project::ProjectMetadata;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Metadata from the canonical `Foo` scenario.
pub(crate) fn foo_metadata() -> ProjectMetadata {
    ProjectMetadata {
        name: "Foo".to_string(),
        description: "A tool.".to_string(),
        project_type: "CLI".to_string(),
        features: "a, b".to_string(),
        technologies: "x".to_string(),
    }
}

/// Deterministic body the fake returns for `section`.
pub(crate) fn fake_content(section: &str) -> String {
    format!("Content for {}.", section)
}

/// Scripted in-process `GenerationApi`.
///
/// Suggestions and badges succeed when set and fail when `None`. Section
/// content succeeds with [`fake_content`] unless the section is listed as
/// failing; per-section delays let tests observe concurrency.
#[derive(Default)]
pub(crate) struct FakeApi {
    suggestions: Option<Vec<String>>,
    badges: Option<Vec<String>>,
    failing_sections: HashSet<String>,
    delays: HashMap<String, Duration>,
    content_calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_suggestions(mut self, sections: &[&str]) -> Self {
        self.suggestions = Some(sections.iter().map(|s| s.to_string()).collect());
        self
    }

    pub(crate) fn with_badges(mut self, badges: &[&str]) -> Self {
        self.badges = Some(badges.iter().map(|s| s.to_string()).collect());
        self
    }

    pub(crate) fn failing(mut self, section: &str) -> Self {
        self.failing_sections.insert(section.to_string());
        self
    }

    pub(crate) fn delayed(mut self, section: &str, delay: Duration) -> Self {
        self.delays.insert(section.to_string(), delay);
        self
    }

    /// Section names passed to `generate_section_content`, in call order.
    pub(crate) fn content_calls(&self) -> Vec<String> {
        self.content_calls.lock().unwrap().clone()
    }

    /// Highest number of content calls observed running at once.
    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

fn simulated_failure(what: &str) -> ProviderError {
    ProviderError::InvalidResponse(format!("simulated failure: {}", what))
}

#[async_trait]
impl GenerationApi for FakeApi {
    async fn suggest_sections(
        &self,
        _input: &SuggestSectionsInput,
    ) -> ModelResult<SuggestSectionsOutput> {
        self.suggestions
            .clone()
            .map(|sections| SuggestSectionsOutput { sections })
            .ok_or_else(|| simulated_failure("suggest_sections"))
    }

    async fn generate_badges(
        &self,
        _input: &GenerateBadgesInput,
    ) -> ModelResult<GenerateBadgesOutput> {
        self.badges
            .clone()
            .map(|badges| GenerateBadgesOutput { badges })
            .ok_or_else(|| simulated_failure("generate_badges"))
    }

    async fn generate_section_content(
        &self,
        input: &GenerateSectionContentInput,
    ) -> ModelResult<GenerateSectionContentOutput> {
        let section = input.section_name.clone();
        self.content_calls.lock().unwrap().push(section.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&section) {
            tokio::time::sleep(*delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_sections.contains(&section) {
            return Err(simulated_failure(&section));
        }
        Ok(GenerateSectionContentOutput {
            section_content: fake_content(&section),
        })
    }
}
