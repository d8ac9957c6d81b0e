//! Upload types and data structures.

use tokio::task::{JoinError, JoinHandle};

use super::error::UploadError;
use crate::fingerprint::ContentKey;
use crate::intake::IntakeError;
use crate::media::MediaKind;
use crate::placeholder::Placeholder;

/// Where an upload landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The object store; the location is a public URL.
    Remote,
    /// The vault; the location is vault-relative.
    Local {
        /// Absolute vault root, for `file://` links.
        base_path: String,
    },
}

impl Destination {
    /// Whether this is the local vault.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}

/// A successfully stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    /// Media kind of the file.
    pub kind: MediaKind,
    /// Public URL (remote) or vault-relative path (local).
    pub location: String,
    /// Sink that stored the file.
    pub destination: Destination,
}

/// Result of searching for the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// The first occurrence on `line` was replaced.
    Replaced {
        /// Zero-based line of the replaced marker.
        line: usize,
    },
    /// The marker was no longer in the note; nothing changed.
    PlaceholderMissing,
}

/// Final state of one upload.
#[derive(Debug)]
pub struct UploadReport {
    /// Content key of the uploaded file.
    pub key: ContentKey,
    /// Reconciliation result, or the error shown to the user.
    pub result: Result<Reconciled, UploadError>,
}

/// Upload running in the background after its placeholder was inserted.
#[derive(Debug)]
pub struct PendingUpload {
    /// Content key of the file.
    pub key: ContentKey,
    /// Placeholder inserted into the note.
    pub placeholder: Placeholder,
    task: JoinHandle<UploadReport>,
}

impl PendingUpload {
    pub(crate) fn new(key: ContentKey, placeholder: Placeholder, task: JoinHandle<UploadReport>) -> Self {
        Self {
            key,
            placeholder,
            task,
        }
    }

    /// Wait for the upload and reconciliation to finish.
    ///
    /// Dropping a `PendingUpload` does not cancel the upload.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload task panicked.
    pub async fn finished(self) -> Result<UploadReport, JoinError> {
        self.task.await
    }
}

/// Outcome of offering an event to the uploader.
#[derive(Debug)]
pub enum Claim {
    /// Not ours; the host should apply its default handling.
    Declined(IntakeError),
    /// Claimed; the placeholder is in the note and the upload is running.
    Claimed(PendingUpload),
}

impl Claim {
    /// Whether the event was claimed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        matches!(self, Self::Claimed(_))
    }
}
