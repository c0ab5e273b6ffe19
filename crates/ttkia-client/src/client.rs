//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::api::{AssistantApi, AttachmentsApi, OptionsApi, SessionApi, WorkspacesApi};
use crate::error::{Error, ErrorBody, Result};

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing connections.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// TTKIA API client.
///
/// Provides typed access to the assistant service endpoints. The client is
/// cheap to clone; clones share the HTTP connection pool and the current
/// conversation id.
///
/// # Example
///
/// ```no_run
/// use ttkia_client::TtkiaClient;
///
/// # async fn example() -> ttkia_client::Result<()> {
/// let client = TtkiaClient::builder()
///     .base_url("https://api.example")
///     .app_token("secret")
///     .build()?;
///
/// let workspace = client.workspaces().create().await?;
/// let answer = client.assistant().ask("¿Qué es SD-WAN?").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TtkiaClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Whether a non-empty app token was configured.
    pub(crate) token_present: bool,
    /// Conversation id targeted when a call does not name one.
    pub(crate) current_conversation: Mutex<Option<String>>,
}

impl TtkiaClient {
    /// Get access to the inner client state (for API implementations).
    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from [`ttkia_config`] settings.
    pub fn from_settings(settings: &ttkia_config::Settings) -> Result<Self> {
        Self::builder()
            .base_url(settings.base_url.as_str())
            .app_token(settings.app_token.as_str())
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
    }

    /// Create a client from `TTKIA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let settings =
            ttkia_config::Settings::from_env().map_err(|e| Error::Config(e.to_string()))?;
        Self::from_settings(&settings)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The conversation id used when calls do not name one.
    ///
    /// Set automatically when [`WorkspacesApi::create`] succeeds and cleared
    /// when that conversation is deleted.
    pub fn current_conversation(&self) -> Option<String> {
        self.inner.current_conversation.lock().clone()
    }

    /// Switch the client to an existing conversation.
    pub fn use_conversation(&self, conversation_id: impl Into<String>) {
        *self.inner.current_conversation.lock() = Some(conversation_id.into());
    }

    /// Record a conversation as current (workspace creation path).
    pub(crate) fn set_current_conversation(&self, conversation_id: &str) {
        *self.inner.current_conversation.lock() = Some(conversation_id.to_string());
    }

    /// Clear the current conversation if it matches the given id.
    pub(crate) fn clear_conversation_if(&self, conversation_id: &str) {
        let mut current = self.inner.current_conversation.lock();
        if current.as_deref() == Some(conversation_id) {
            *current = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the workspaces API.
    pub fn workspaces(&self) -> WorkspacesApi {
        WorkspacesApi::new(self.clone())
    }

    /// Access the assistant query API.
    pub fn assistant(&self) -> AssistantApi {
        AssistantApi::new(self.clone())
    }

    /// Access the styles/prompts/sources API.
    pub fn options(&self) -> OptionsApi {
        OptionsApi::new(self.clone())
    }

    /// Access the attachments API.
    pub fn attachments(&self) -> AttachmentsApi {
        AttachmentsApi::new(self.clone())
    }

    /// Access the session API.
    pub fn session(&self) -> SessionApi {
        SessionApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        tracing::debug!(url = %url, "GET");
        let response = self
            .inner
            .http
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a GET request and return only the status code.
    pub(crate) async fn get_status(&self, path: &str) -> Result<reqwest::StatusCode> {
        let url = self.url(path)?;
        tracing::debug!(url = %url, "GET (status probe)");
        let response = self
            .inner
            .http
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        Ok(response.status())
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(url = %url, "POST");
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request without a body.
    pub(crate) async fn post_empty<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        tracing::debug!(url = %url, "POST");
        let response = self
            .inner
            .http
            .post(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request where only success matters, discarding the body.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(url = %url, "POST");
        let mut request = self.inner.http.post(url).timeout(self.inner.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Make a multipart POST request (uploads).
    pub(crate) async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.url(path)?;
        tracing::debug!(url = %url, "POST (multipart)");
        let response = self
            .inner
            .http
            .post(url)
            .multipart(form)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "response received");

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract a typed error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let raw = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&raw)
            .map(|body| body.into_message(&raw, status))
            .unwrap_or_else(|_| {
                if raw.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    raw.clone()
                }
            });

        match status {
            401 | 403 => Error::Auth(message),
            404 => Error::NotFound(message),
            _ => Error::Api { status, message },
        }
    }
}

/// Builder for creating a [`TtkiaClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    app_token: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            app_token: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the application bearer token.
    pub fn app_token(mut self, token: impl Into<String>) -> Self {
        self.app_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<TtkiaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        let app_token = self
            .app_token
            .ok_or_else(|| Error::Config("app_token is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let token_present = !app_token.trim().is_empty();
        let value = HeaderValue::from_str(&format!("Bearer {}", app_token))
            .map_err(|_| Error::Config("app token contains invalid header characters".to_string()))?;
        headers.insert(AUTHORIZATION, value);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("ttkia-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .connect_timeout(self.connect_timeout)
            .build()?;

        Ok(TtkiaClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                token_present,
                current_conversation: Mutex::new(None),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
