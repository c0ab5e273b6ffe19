//! Request and response types for the TTKIA API.
//!
//! These types mirror the service's JSON contract. Response structs default
//! every field the server is allowed to omit, so unknown or missing fields
//! never fail a decode.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Workspaces / Conversations
// ─────────────────────────────────────────────────────────────────────────────

/// A newly created workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Conversation id scoping queries and attachments.
    pub conversation_id: String,
    /// Title assigned by the server, if any.
    #[serde(default)]
    pub title: Option<String>,
    /// Creation time (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Summary of a conversation from the user's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Conversation id.
    pub conversation_id: String,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the sender (user, assistant).
    pub role: String,
    /// Message content.
    pub content: String,
    /// Timestamp of the message.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Full conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation id.
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Message history.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Files attached to this conversation.
    #[serde(default)]
    pub file_attachments: Vec<Attachment>,
}

/// User profile returned by the session endpoint.
///
/// Only the conversation history is of interest to the SDK.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserProfile {
    #[serde(default)]
    pub history_chat: ChatHistory,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChatHistory {
    #[serde(default)]
    pub conversations: Vec<ConversationSummary>,
}

/// Body for endpoints addressed by conversation id.
#[derive(Debug, Serialize)]
pub(crate) struct ConversationRef<'a> {
    pub conversation_id: &'a str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Query
// ─────────────────────────────────────────────────────────────────────────────

/// A query against the assistant.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// Query text.
    pub query: String,
    /// Conversation scoping the query. Falls back to the client's current
    /// conversation when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Prompt id to use.
    pub prompt: String,
    /// Response style id.
    pub style: String,
    /// Step-by-step reasoning mode.
    pub teacher_mode: bool,
    /// Knowledge-base source titles to consult.
    pub sources: Vec<String>,
    /// Attached file references.
    pub attached_files: Vec<serde_json::Value>,
    /// Attached URL references.
    pub attached_urls: Vec<serde_json::Value>,
    /// Whether to augment the answer with a web search.
    pub web_search: bool,
    /// Title recorded for this query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl QueryRequest {
    /// Create a query with default prompt and style.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            conversation_id: None,
            prompt: "default".to_string(),
            style: "concise".to_string(),
            teacher_mode: false,
            sources: Vec::new(),
            attached_files: Vec::new(),
            attached_urls: Vec::new(),
            web_search: false,
            title: None,
        }
    }

    /// Scope the query to a conversation.
    pub fn with_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }

    /// Set the prompt id.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the response style id.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the knowledge-base sources to consult.
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Enable or disable teacher mode.
    pub fn with_teacher_mode(mut self, enabled: bool) -> Self {
        self.teacher_mode = enabled;
        self
    }

    /// Enable or disable web search.
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    /// Set the recorded title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A knowledge-base or static-link reference cited by a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    /// Source document name.
    #[serde(default)]
    pub source: Option<String>,
    /// Human-readable title.
    #[serde(default)]
    pub title: Option<String>,
}

impl SourceRef {
    /// Display label: the source name, falling back to the title.
    pub fn label(&self) -> Option<&str> {
        self.source.as_deref().or(self.title.as_deref())
    }
}

/// A web result cited by a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebRef {
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Page URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// Assistant response to a query.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Response text.
    #[serde(default)]
    pub response_text: String,
    /// Knowledge-base documents consulted.
    #[serde(default)]
    pub docs: Vec<SourceRef>,
    /// Static links consulted.
    #[serde(default)]
    pub links: Vec<SourceRef>,
    /// Web results consulted.
    #[serde(default)]
    pub webs: Vec<WebRef>,
    /// Confidence score in [0, 1].
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Whether the server answered in teacher mode.
    #[serde(default)]
    pub teacher_mode_active: bool,
    /// Reasoning steps, present in teacher mode. Steps may be plain strings
    /// or structured objects depending on the server version.
    #[serde(default)]
    pub thinking_process: Vec<serde_json::Value>,
    /// Environments the server inferred from the query.
    #[serde(default)]
    pub inferred_environments: Vec<String>,
    /// Conversation the response was recorded in.
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Id of the recorded message.
    #[serde(default)]
    pub message_id: Option<String>,
    /// Echo of the original query.
    #[serde(default)]
    pub query: Option<String>,
    /// Server-extended query, present in teacher mode.
    #[serde(default)]
    pub query_extended: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Styles / Prompts / Sources
// ─────────────────────────────────────────────────────────────────────────────

/// A response style offered by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleOption {
    /// Style id, as accepted by [`QueryRequest::with_style`].
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A prompt offered by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptOption {
    /// Prompt id, as accepted by [`QueryRequest::with_prompt`].
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A knowledge-base source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceOption {
    /// Document title, as referenced in [`QueryRequest::sources`].
    #[serde(default)]
    pub title: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Envelope for the styles listing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StyleCatalog {
    #[serde(default)]
    pub styles: Vec<StyleOption>,
}

/// Envelope for the prompts listing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PromptCatalog {
    #[serde(default)]
    pub prompts: Vec<PromptOption>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Attachments
// ─────────────────────────────────────────────────────────────────────────────

/// A file attached to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// File name.
    pub name: String,
    /// Server-side attachment id.
    #[serde(default)]
    pub id: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// MIME type.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Upload status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Server acknowledgement of an upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    /// Stored file name.
    #[serde(default)]
    pub name: String,
    /// Server-side attachment id.
    #[serde(default)]
    pub id: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Upload status.
    #[serde(default)]
    pub status: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata about the client session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    /// Whether the server currently accepts the configured token.
    pub authenticated: bool,
    /// Configured base URL.
    pub base_url: String,
    /// Whether a non-empty app token is configured.
    pub app_token_present: bool,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_defaults() {
        let request = QueryRequest::new("¿Qué es SD-WAN?");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["query"], "¿Qué es SD-WAN?");
        assert_eq!(body["prompt"], "default");
        assert_eq!(body["style"], "concise");
        assert_eq!(body["teacher_mode"], false);
        assert_eq!(body["web_search"], false);
        assert_eq!(body["sources"], serde_json::json!([]));
        assert_eq!(body["attached_files"], serde_json::json!([]));
        // Unset optionals are omitted from the wire payload.
        assert!(body.get("conversation_id").is_none());
        assert!(body.get("title").is_none());
    }

    #[test]
    fn test_query_request_builder() {
        let request = QueryRequest::new("q")
            .with_conversation("c1")
            .with_prompt("expert")
            .with_style("detailed")
            .with_sources(vec!["manual.pdf".into()])
            .with_teacher_mode(true)
            .with_web_search(true)
            .with_title("Demo");

        assert_eq!(request.conversation_id.as_deref(), Some("c1"));
        assert_eq!(request.prompt, "expert");
        assert_eq!(request.style, "detailed");
        assert!(request.teacher_mode);
        assert!(request.web_search);
        assert_eq!(request.sources, vec!["manual.pdf".to_string()]);
        assert_eq!(request.title.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_query_response_tolerates_sparse_payloads() {
        let response: QueryResponse = serde_json::from_str(r#"{"response_text": "hola"}"#).unwrap();
        assert_eq!(response.response_text, "hola");
        assert!(response.docs.is_empty());
        assert!(response.confidence.is_none());
        assert!(!response.teacher_mode_active);
    }

    #[test]
    fn test_query_response_ignores_unknown_fields() {
        let response: QueryResponse = serde_json::from_str(
            r#"{
                "response_text": "ok",
                "confidence": 0.91,
                "docs": [{"source": "manual.pdf", "page": 12}],
                "thinking_process": ["step one", {"step": 2}],
                "brand_new_server_field": true
            }"#,
        )
        .unwrap();

        assert_eq!(response.confidence, Some(0.91));
        assert_eq!(response.docs[0].label(), Some("manual.pdf"));
        assert_eq!(response.thinking_process.len(), 2);
    }

    #[test]
    fn test_source_ref_label_fallback() {
        let by_source: SourceRef = serde_json::from_str(r#"{"source": "a.pdf"}"#).unwrap();
        assert_eq!(by_source.label(), Some("a.pdf"));

        let by_title: SourceRef = serde_json::from_str(r#"{"title": "Manual A"}"#).unwrap();
        assert_eq!(by_title.label(), Some("Manual A"));

        let empty: SourceRef = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.label(), None);
    }

    #[test]
    fn test_user_profile_extraction() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "username": "ops",
                "history_chat": {
                    "conversations": [
                        {"conversation_id": "c1", "title": "Firewalls"}
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(profile.history_chat.conversations.len(), 1);
        assert_eq!(profile.history_chat.conversations[0].conversation_id, "c1");
    }

    #[test]
    fn test_conversation_defaults() {
        let conversation: Conversation = serde_json::from_str("{}").unwrap();
        assert!(conversation.messages.is_empty());
        assert!(conversation.file_attachments.is_empty());
    }
}
