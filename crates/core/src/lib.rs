//! Core upload pipeline for notedrop.
//!
//! This crate turns a paste or drop of a media file into an embedded link in a
//! markdown note. It has no knowledge of any particular editor: the host
//! supplies an [`editor::Editor`] and a [`editor::Notifier`], and storage
//! backends plug in through [`storage::ObjectStore`] and [`storage::LocalVault`].
//!
//! # Modules
//!
//! - `media` - Media kinds and MIME classification
//! - `fingerprint` - Content-addressed file names
//! - `settings` - Per-note overrides merged over global settings
//! - `intake` - Deciding whether to claim a paste/drop event
//! - `editor` - Host editor seam and an in-memory text buffer
//! - `placeholder` - Transient "uploading" marker
//! - `storage` - S3 and local vault sinks
//! - `upload` - Dispatch, markup generation and reconciliation

pub mod editor;
pub mod fingerprint;
pub mod intake;
pub mod media;
pub mod placeholder;
pub mod settings;
pub mod storage;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use fingerprint::{ContentKey, fingerprint};
pub use media::MediaKind;
pub use settings::{EffectiveConfig, Frontmatter};
pub use upload::{Claim, Dispatcher, UploadError, Uploader};
