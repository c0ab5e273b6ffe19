//! Attachments API.

use std::path::{Path, PathBuf};

use crate::api::require;
use crate::client::TtkiaClient;
use crate::error::{Error, Result};
use crate::types::{Attachment, UploadedFile};

/// A file to upload to a workspace.
///
/// Built from a local path or from in-memory bytes:
///
/// ```no_run
/// use ttkia_client::FileUpload;
///
/// let from_disk = FileUpload::path("./prueba.txt");
/// let from_memory = FileUpload::bytes(b"hola".to_vec(), "saludo.txt")
///     .with_conversation("c1");
/// ```
#[derive(Debug, Clone)]
pub struct FileUpload {
    source: UploadSource,
    filename: Option<String>,
    conversation_id: Option<String>,
}

#[derive(Debug, Clone)]
enum UploadSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl FileUpload {
    /// Upload the file at the given path.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: UploadSource::Path(path.into()),
            filename: None,
            conversation_id: None,
        }
    }

    /// Upload in-memory bytes under the given filename.
    pub fn bytes(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            source: UploadSource::Bytes(bytes),
            filename: Some(filename.into()),
            conversation_id: None,
        }
    }

    /// Store the file under a custom name instead of its local one.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Attach to a specific conversation instead of the current one.
    pub fn with_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }
}

/// Attachments API client.
pub struct AttachmentsApi {
    client: TtkiaClient,
}

impl AttachmentsApi {
    pub(crate) fn new(client: TtkiaClient) -> Self {
        Self { client }
    }

    /// Upload a file to a workspace.
    ///
    /// When the upload does not name a conversation, the client's current
    /// conversation (if any) is used.
    pub async fn upload(&self, upload: FileUpload) -> Result<UploadedFile> {
        let (bytes, filename) = match upload.source {
            UploadSource::Path(path) => {
                let filename = match &upload.filename {
                    Some(name) => name.clone(),
                    None => path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .map(str::to_string)
                        .ok_or_else(|| {
                            Error::Validation(format!(
                                "cannot derive a filename from '{}'",
                                path.display()
                            ))
                        })?,
                };
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|source| Error::File { path, source })?;
                (bytes, filename)
            }
            UploadSource::Bytes(bytes) => {
                // `FileUpload::bytes` always sets a filename.
                let filename = upload.filename.clone().ok_or_else(|| {
                    Error::Validation("a filename is required for byte uploads".to_string())
                })?;
                (bytes, filename)
            }
        };
        require("filename", &filename)?;

        let size = bytes.len();
        let content_type = content_type_for(&filename);
        tracing::info!(filename = %filename, size, "uploading file");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.clone())
            .mime_str(&content_type)?;
        let mut form = reqwest::multipart::Form::new().part("file", part);

        let conversation_id = upload
            .conversation_id
            .or_else(|| self.client.current_conversation());
        if let Some(conversation_id) = conversation_id {
            form = form.text("conversation_id", conversation_id);
        }

        let uploaded: UploadedFile = self.client.post_multipart("chat-upload", form).await?;
        tracing::info!(name = %uploaded.name, "file uploaded");
        Ok(uploaded)
    }

    /// Upload the file at a path (convenience method).
    pub async fn upload_path(&self, path: impl AsRef<Path>) -> Result<UploadedFile> {
        self.upload(FileUpload::path(path.as_ref())).await
    }

    /// List the files attached to a conversation.
    pub async fn list(&self, conversation_id: &str) -> Result<Vec<Attachment>> {
        require("conversation_id", conversation_id)?;
        let conversation = self.client.workspaces().get(conversation_id).await?;
        tracing::debug!(
            conversation_id = %conversation_id,
            count = conversation.file_attachments.len(),
            "attachments listed"
        );
        Ok(conversation.file_attachments)
    }
}

/// MIME type for an uploaded filename, defaulting to a binary stream.
fn content_type_for(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_detection() {
        assert_eq!(content_type_for("notas.txt"), "text/plain");
        assert_eq!(content_type_for("manual.pdf"), "application/pdf");
        assert_eq!(content_type_for("datos.json"), "application/json");
        assert_eq!(content_type_for("informe.csv"), "text/csv");
        assert_eq!(content_type_for("export.pbix"), "application/octet-stream");
        assert_eq!(content_type_for("sin_extension"), "application/octet-stream");
    }

    #[test]
    fn test_file_upload_builders() {
        let upload = FileUpload::path("/tmp/a.txt")
            .with_filename("renamed.txt")
            .with_conversation("c1");
        assert_eq!(upload.filename.as_deref(), Some("renamed.txt"));
        assert_eq!(upload.conversation_id.as_deref(), Some("c1"));

        let upload = FileUpload::bytes(vec![1, 2, 3], "blob.bin");
        assert_eq!(upload.filename.as_deref(), Some("blob.bin"));
        assert!(upload.conversation_id.is_none());
    }
}
