//! Styles, prompts, and sources API.

use crate::client::TtkiaClient;
use crate::error::Result;
use crate::types::{PromptCatalog, PromptOption, SourceOption, StyleCatalog, StyleOption};

/// Configuration options API client.
pub struct OptionsApi {
    client: TtkiaClient,
}

impl OptionsApi {
    pub(crate) fn new(client: TtkiaClient) -> Self {
        Self { client }
    }

    /// List the available response styles.
    pub async fn styles(&self) -> Result<Vec<StyleOption>> {
        let catalog: StyleCatalog = self.client.get("get_styles").await?;
        Ok(catalog.styles)
    }

    /// List the available prompts.
    pub async fn prompts(&self) -> Result<Vec<PromptOption>> {
        let catalog: PromptCatalog = self.client.get("get_prompts").await?;
        Ok(catalog.prompts)
    }

    /// List the available knowledge-base sources.
    pub async fn sources(&self) -> Result<Vec<SourceOption>> {
        self.client.post_empty("get_sources").await
    }

    /// Titles of all available sources, ready for [`crate::QueryRequest::with_sources`].
    pub async fn source_titles(&self) -> Result<Vec<String>> {
        let sources = self.sources().await?;
        Ok(sources.into_iter().filter_map(|s| s.title).filter(|t| !t.is_empty()).collect())
    }
}
