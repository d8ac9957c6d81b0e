//! Upload error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Upload failures. The display text is what the user sees in the notice.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The object store rejected or never received the upload.
    #[error("Upload failed: {0}")]
    RemoteUpload(#[source] StorageError),

    /// Writing into the vault failed.
    #[error("Saving to vault failed: {0}")]
    LocalWrite(#[source] StorageError),

    /// The uploaded media cannot be embedded.
    #[error("{0}")]
    MarkupGeneration(String),
}

impl UploadError {
    /// Create a markup generation error.
    #[must_use]
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::MarkupGeneration(msg.into())
    }
}
