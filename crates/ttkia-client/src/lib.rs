//! Typed HTTP client SDK for the TTKIA assistant API.
//!
//! TTKIA exposes workspace-scoped assistant queries over a bearer-token
//! HTTP API. This crate wraps each capability in a typed method: create
//! and manage workspaces, query the assistant, upload attachments, and
//! retrieve the configuration catalogs (styles, prompts, sources).
//!
//! # Example
//!
//! ```no_run
//! use ttkia_client::{QueryRequest, TtkiaClient};
//!
//! # async fn example() -> ttkia_client::Result<()> {
//! let client = TtkiaClient::builder()
//!     .base_url("https://api.example")
//!     .app_token("secret")
//!     .build()?;
//!
//! // Probe connectivity without error handling
//! if !client.session().is_authenticated().await {
//!     eprintln!("token rejected or server unreachable");
//! }
//!
//! // Create a workspace; it becomes the current conversation
//! let workspace = client.workspaces().create().await?;
//! println!("workspace: {}", workspace.conversation_id);
//!
//! // Query inside it
//! let sources = client.options().source_titles().await?;
//! let response = client
//!     .assistant()
//!     .query(
//!         QueryRequest::new("¿Qué es SD-WAN?")
//!             .with_sources(sources)
//!             .with_teacher_mode(true)
//!             .with_web_search(true),
//!     )
//!     .await?;
//! println!("{}", response.response_text);
//!
//! // Attach a file and list attachments
//! client.attachments().upload_path("./prueba.txt").await?;
//! let attached = client
//!     .attachments()
//!     .list(&workspace.conversation_id)
//!     .await?;
//! println!("{} attachments", attached.len());
//!
//! // Clean up; also clears the current conversation
//! client.workspaces().delete(&workspace.conversation_id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Workspaces**: create, list, inspect, delete conversations
//! - **Assistant**: queries with prompt/style/sources/teacher-mode/web-search
//! - **Options**: style, prompt, and knowledge-base source catalogs
//! - **Attachments**: multipart upload, per-conversation listing
//! - **Session**: session init, authentication probe, session metadata
//!
//! Every call is a single request/response round trip; the SDK performs no
//! retries and keeps no cache. Configuration can come from `TTKIA_*`
//! environment variables via [`TtkiaClient::from_env`] (see `ttkia-config`).

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::{AssistantApi, AttachmentsApi, FileUpload, OptionsApi, SessionApi, WorkspacesApi};
pub use client::{ClientBuilder, TtkiaClient};
pub use error::{Error, Result};
pub use types::*;
