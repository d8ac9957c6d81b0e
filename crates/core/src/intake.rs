//! Deciding whether to claim a paste or drop event.
//!
//! Declines are silent: the event is handed back to the host's default
//! handling and the note is not touched.

use bytes::Bytes;
use thiserror::Error;

use crate::media::{MediaKind, classify};
use crate::settings::EffectiveConfig;

/// How the file reached the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Clipboard paste.
    Paste,
    /// Drag and drop.
    Drop,
}

/// A file attached to the event's transfer payload.
#[derive(Debug, Clone)]
pub struct TransferFile {
    /// Original file name.
    pub name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// File contents.
    pub bytes: Bytes,
}

impl TransferFile {
    /// Create a transfer file.
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// A paste or drop event as delivered by the host.
#[derive(Debug, Clone)]
pub struct EditorEvent {
    /// Paste or drop.
    pub kind: EventKind,
    /// Attached files, in host order.
    pub files: Vec<TransferFile>,
}

impl EditorEvent {
    /// A paste carrying `files`.
    #[must_use]
    pub fn paste(files: Vec<TransferFile>) -> Self {
        Self {
            kind: EventKind::Paste,
            files,
        }
    }

    /// A drop carrying `files`.
    #[must_use]
    pub fn drop(files: Vec<TransferFile>) -> Self {
        Self {
            kind: EventKind::Drop,
            files,
        }
    }
}

/// A claimed file on its way to storage.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// File contents.
    pub bytes: Bytes,
    /// Declared MIME type, sent as the object content type.
    pub mime_type: String,
    /// Original file name, source of the key's extension.
    pub original_name: String,
    /// Matched media kind.
    pub kind: MediaKind,
}

/// Why an event was not claimed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Drop events are not intercepted for this note.
    #[error("upload on drag is disabled")]
    DragUploadDisabled,

    /// The event carried no file.
    #[error("event carries no file")]
    NoFile,

    /// No enabled media kind matches the declared type.
    #[error("unsupported media type '{mime_type}'")]
    UnsupportedMediaKind {
        /// Declared MIME type of the first file.
        mime_type: String,
    },
}

/// Claim `event` if its first file is an enabled media kind.
///
/// # Errors
///
/// Returns the reason the event is declined.
pub fn claim(event: EditorEvent, config: &EffectiveConfig) -> Result<UploadRequest, IntakeError> {
    if event.kind == EventKind::Drop && !config.upload_on_drag {
        return Err(IntakeError::DragUploadDisabled);
    }

    let file = event
        .files
        .into_iter()
        .next()
        .ok_or(IntakeError::NoFile)?;

    let Some(kind) = classify(&file.mime_type, &config.media) else {
        return Err(IntakeError::UnsupportedMediaKind {
            mime_type: file.mime_type,
        });
    };

    Ok(UploadRequest {
        bytes: file.bytes,
        mime_type: file.mime_type,
        original_name: file.name,
        kind,
    })
}
