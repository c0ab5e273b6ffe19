//! Assistant query API.

use crate::api::require;
use crate::client::TtkiaClient;
use crate::error::Result;
use crate::types::{QueryRequest, QueryResponse};

/// Assistant query API client.
pub struct AssistantApi {
    client: TtkiaClient,
}

impl AssistantApi {
    pub(crate) fn new(client: TtkiaClient) -> Self {
        Self { client }
    }

    /// Send a query to the assistant.
    ///
    /// When the request does not name a conversation, the client's current
    /// conversation (if any) is used.
    pub async fn query(&self, mut request: QueryRequest) -> Result<QueryResponse> {
        require("query", &request.query)?;

        if request.conversation_id.is_none() {
            request.conversation_id = self.client.current_conversation();
        }

        tracing::info!(
            conversation_id = request.conversation_id.as_deref().unwrap_or("<none>"),
            teacher_mode = request.teacher_mode,
            web_search = request.web_search,
            "sending query"
        );

        let response: QueryResponse = self.client.post("query_complete", &request).await?;
        tracing::debug!(
            docs = response.docs.len(),
            webs = response.webs.len(),
            confidence = response.confidence,
            "query completed"
        );
        Ok(response)
    }

    /// Query with just text (convenience method).
    pub async fn ask(&self, text: impl Into<String>) -> Result<QueryResponse> {
        self.query(QueryRequest::new(text)).await
    }

    /// Query with just text in a specific conversation.
    pub async fn ask_in(
        &self,
        conversation_id: &str,
        text: impl Into<String>,
    ) -> Result<QueryResponse> {
        require("conversation_id", conversation_id)?;
        self.query(QueryRequest::new(text).with_conversation(conversation_id))
            .await
    }
}
