//! Per-note overrides merged over global settings.
//!
//! Every event resolves a fresh [`EffectiveConfig`] from two layers: the
//! global [`UploadConfig`] and the note's frontmatter. A frontmatter value wins
//! when present and well-typed; otherwise the global setting applies. The
//! snapshot is immutable and travels with the upload it was resolved for.

use notedrop_shared::UploadConfig;
use serde_json::{Map, Value};

use crate::media::MediaToggles;
use crate::storage::ObjectAcl;

/// Frontmatter keys that override global settings.
pub mod keys {
    /// Intercept drops as well as pastes.
    pub const UPLOAD_ON_DRAG: &str = "uploadOnDrag";
    /// Write into the vault instead of the bucket.
    pub const LOCAL_UPLOAD: &str = "localUpload";
    /// Vault folder for local uploads.
    pub const LOCAL_UPLOAD_FOLDER: &str = "localUploadFolder";
    /// Accept video.
    pub const UPLOAD_VIDEO: &str = "uploadVideo";
    /// Accept audio.
    pub const UPLOAD_AUDIO: &str = "uploadAudio";
    /// Accept PDF.
    pub const UPLOAD_PDF: &str = "uploadPdf";
}

/// Parsed frontmatter of the active note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter(Map<String, Value>);

impl Frontmatter {
    /// Empty frontmatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Boolean value for `key`. Accepts `true`/`false` and their string forms.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// String value for `key`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// Whether no keys are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Frontmatter {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Settings in force for a single paste or drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Claim drop events.
    pub upload_on_drag: bool,
    /// Write into the vault instead of the bucket.
    pub local_upload: bool,
    /// Vault folder for local uploads.
    pub local_upload_folder: String,
    /// Opt-in media kinds.
    pub media: MediaToggles,
    /// Bucket key prefix.
    pub folder: String,
    /// Public URL prefix for remote objects.
    pub image_url_path: String,
    /// Upload as `public-read`.
    pub public: bool,
}

impl EffectiveConfig {
    /// Merge `frontmatter` over `global`.
    #[must_use]
    pub fn resolve(global: &UploadConfig, frontmatter: &Frontmatter) -> Self {
        let flag = |key: &str, fallback: bool| frontmatter.get_bool(key).unwrap_or(fallback);

        Self {
            upload_on_drag: flag(keys::UPLOAD_ON_DRAG, global.upload_on_drag),
            local_upload: flag(keys::LOCAL_UPLOAD, global.local_upload),
            local_upload_folder: frontmatter
                .get_str(keys::LOCAL_UPLOAD_FOLDER)
                .map_or_else(|| global.local_upload_folder.clone(), str::to_string),
            media: MediaToggles {
                video: flag(keys::UPLOAD_VIDEO, global.upload_video),
                audio: flag(keys::UPLOAD_AUDIO, global.upload_audio),
                pdf: flag(keys::UPLOAD_PDF, global.upload_pdf),
            },
            folder: global.folder.clone(),
            image_url_path: global.image_url_path.clone(),
            public: global.public,
        }
    }

    /// Access control for remote uploads.
    #[must_use]
    pub fn acl(&self) -> ObjectAcl {
        if self.public {
            ObjectAcl::PublicRead
        } else {
            ObjectAcl::Private
        }
    }
}
