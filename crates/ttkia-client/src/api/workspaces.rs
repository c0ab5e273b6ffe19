//! Workspaces API.

use crate::api::require;
use crate::client::TtkiaClient;
use crate::error::Result;
use crate::types::{Conversation, ConversationRef, ConversationSummary, UserProfile, Workspace};

/// Workspaces (conversations) API client.
pub struct WorkspacesApi {
    client: TtkiaClient,
}

impl WorkspacesApi {
    pub(crate) fn new(client: TtkiaClient) -> Self {
        Self { client }
    }

    /// Create a new workspace and make it the client's current conversation.
    pub async fn create(&self) -> Result<Workspace> {
        let workspace: Workspace = self.client.post_empty("new-workspace").await?;
        self.client.set_current_conversation(&workspace.conversation_id);
        tracing::info!(conversation_id = %workspace.conversation_id, "workspace created");
        Ok(workspace)
    }

    /// List the user's conversations.
    pub async fn list(&self) -> Result<Vec<ConversationSummary>> {
        let profile: UserProfile = self.client.get("auth/users/me").await?;
        let conversations = profile.history_chat.conversations;
        tracing::debug!(count = conversations.len(), "conversations listed");
        Ok(conversations)
    }

    /// Get the full state of a conversation.
    pub async fn get(&self, conversation_id: &str) -> Result<Conversation> {
        require("conversation_id", conversation_id)?;
        self.client
            .post("conversation-info", &ConversationRef { conversation_id })
            .await
    }

    /// Delete a conversation.
    ///
    /// Returns `Ok(true)` once the server confirms. If the deleted
    /// conversation was current, the client's current conversation is
    /// cleared; remote state is untouched beyond the delete itself.
    pub async fn delete(&self, conversation_id: &str) -> Result<bool> {
        require("conversation_id", conversation_id)?;
        self.client
            .post_unit("forget", Some(&ConversationRef { conversation_id }))
            .await?;
        self.client.clear_conversation_if(conversation_id);
        tracing::info!(conversation_id = %conversation_id, "conversation deleted");
        Ok(true)
    }
}
