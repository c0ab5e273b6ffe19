//! API endpoint implementations.

mod assistant;
mod attachments;
mod options;
mod session;
mod workspaces;

pub use assistant::AssistantApi;
pub use attachments::{AttachmentsApi, FileUpload};
pub use options::OptionsApi;
pub use session::SessionApi;
pub use workspaces::WorkspacesApi;

use crate::error::{Error, Result};

/// Reject empty required string arguments before any request is built.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::Validation(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty_and_blank() {
        assert!(require("conversation_id", "c1").is_ok());
        assert!(matches!(
            require("conversation_id", ""),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            require("query", "   "),
            Err(Error::Validation(_))
        ));
    }
}
