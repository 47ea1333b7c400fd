//! The generation API boundary and its prompt-backed implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use super::types::*;
use crate::llm::{ModelClient, ModelResult, ProviderError, StructuredRequest};
use crate::prompt::{GENERATE_BADGES, GENERATE_SECTION_CONTENT, PromptDefinition, SUGGEST_SECTIONS};

/// The three request/response operations the README flow consumes.
#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn suggest_sections(
        &self,
        input: &SuggestSectionsInput,
    ) -> ModelResult<SuggestSectionsOutput>;

    async fn generate_badges(&self, input: &GenerateBadgesInput)
    -> ModelResult<GenerateBadgesOutput>;

    async fn generate_section_content(
        &self,
        input: &GenerateSectionContentInput,
    ) -> ModelResult<GenerateSectionContentOutput>;
}

/// Implements [`GenerationApi`] by rendering the fixed prompts and asking a
/// [`ModelClient`] for schema-conforming JSON.
pub struct PromptedApi<C: ?Sized> {
    client: Box<C>,
    language: String,
}

impl<C: ModelClient + ?Sized> PromptedApi<C> {
    pub fn new(client: Box<C>, language: impl Into<String>) -> Self {
        Self {
            client,
            language: language.into(),
        }
    }

    async fn run<T: DeserializeOwned>(
        &self,
        prompt: &PromptDefinition,
        mut vars: HashMap<String, String>,
    ) -> ModelResult<T> {
        vars.insert("language".to_string(), self.language.clone());
        let request = StructuredRequest {
            name: prompt.name.to_string(),
            prompt: prompt.render(&vars)?,
            schema: prompt.output_schema(),
        };

        let value = self.client.generate_json(&request).await?;
        serde_json::from_value(value).map_err(|e| {
            ProviderError::InvalidResponse(format!(
                "'{}' answer does not match its schema: {}",
                prompt.name, e
            ))
        })
    }
}

#[async_trait]
impl<C: ModelClient + ?Sized> GenerationApi for PromptedApi<C> {
    async fn suggest_sections(
        &self,
        input: &SuggestSectionsInput,
    ) -> ModelResult<SuggestSectionsOutput> {
        self.run(&SUGGEST_SECTIONS, input.to_template_vars()).await
    }

    async fn generate_badges(
        &self,
        input: &GenerateBadgesInput,
    ) -> ModelResult<GenerateBadgesOutput> {
        self.run(&GENERATE_BADGES, input.to_template_vars()).await
    }

    async fn generate_section_content(
        &self,
        input: &GenerateSectionContentInput,
    ) -> ModelResult<GenerateSectionContentOutput> {
        self.run(&GENERATE_SECTION_CONTENT, input.to_template_vars())
            .await
    }
}
