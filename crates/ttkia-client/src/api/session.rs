//! Session API.

use crate::client::TtkiaClient;
use crate::error::Result;
use crate::types::SessionInfo;

/// Session API client.
pub struct SessionApi {
    client: TtkiaClient,
}

impl SessionApi {
    pub(crate) fn new(client: TtkiaClient) -> Self {
        Self { client }
    }

    /// Initialize the server-side session.
    ///
    /// Optional: other calls work without it, but servers use this to
    /// prepare per-token environment state.
    pub async fn init(&self) -> Result<()> {
        self.client.post_unit::<()>("env", None).await?;
        tracing::info!("session initialized");
        Ok(())
    }

    /// Check whether the configured token is accepted by the server.
    ///
    /// Never fails: any transport error or rejection yields `false`. Use
    /// this to probe reachability without handling errors.
    pub async fn is_authenticated(&self) -> bool {
        if !self.client.inner().token_present {
            return false;
        }

        match self.client.get_status("auth/users/me").await {
            Ok(status) if status.is_success() => true,
            Ok(status) => {
                tracing::warn!(status = status.as_u16(), "authentication check rejected");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "authentication check failed");
                false
            }
        }
    }

    /// Metadata about this client session.
    ///
    /// Assembled locally; the only network traffic is the authentication
    /// probe.
    pub async fn info(&self) -> SessionInfo {
        SessionInfo {
            authenticated: self.is_authenticated().await,
            base_url: self.client.base_url().to_string(),
            app_token_present: self.client.inner().token_present,
            timeout_secs: self.client.inner().timeout.as_secs(),
        }
    }
}
