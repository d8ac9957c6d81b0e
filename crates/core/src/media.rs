//! Media kinds and MIME classification.

use serde::{Deserialize, Serialize};

/// Classification of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Still image, always eligible.
    Image,
    /// Video clip, opt-in.
    Video,
    /// Audio clip, opt-in.
    Audio,
    /// PDF document, opt-in and remote only.
    Pdf,
}

impl MediaKind {
    /// Order in which kinds are tried; the first enabled match wins.
    pub const PRECEDENCE: [Self; 4] = [Self::Video, Self::Audio, Self::Pdf, Self::Image];

    /// Short lowercase name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
        }
    }

    /// Whether a declared MIME type belongs to this kind.
    ///
    /// Parameters (`; charset=...`) and case are ignored.
    #[must_use]
    pub fn matches(self, mime_type: &str) -> bool {
        let essence = essence(mime_type);
        let top_level = essence.split('/').next().unwrap_or_default();

        match self {
            Self::Image => top_level == "image",
            Self::Video => top_level == "video",
            Self::Audio => top_level == "audio",
            Self::Pdf => essence == "application/pdf",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind enable flags. Images need no flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaToggles {
    /// Accept video.
    pub video: bool,
    /// Accept audio.
    pub audio: bool,
    /// Accept PDF.
    pub pdf: bool,
}

impl MediaToggles {
    /// Whether `kind` may be uploaded.
    #[must_use]
    pub fn allows(&self, kind: MediaKind) -> bool {
        match kind {
            MediaKind::Image => true,
            MediaKind::Video => self.video,
            MediaKind::Audio => self.audio,
            MediaKind::Pdf => self.pdf,
        }
    }
}

/// Classify a MIME type, honouring enable flags and precedence.
///
/// Returns `None` when no enabled kind matches.
#[must_use]
pub fn classify(mime_type: &str, toggles: &MediaToggles) -> Option<MediaKind> {
    MediaKind::PRECEDENCE
        .into_iter()
        .find(|kind| toggles.allows(*kind) && kind.matches(mime_type))
}

fn essence(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
