//! Upload sinks.
//!
//! Two destinations, one per upload, chosen by the resolved `localUpload`
//! flag:
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ ObjectStore (S3-compatible)  │   │ LocalVault (OpenDAL fs)      │
//! ├──────────────────────────────┤   ├──────────────────────────────┤
//! │ put_object(key, body, acl)   │   │ ensure_dir(folder)           │
//! │                              │   │ write(path, body)            │
//! │                              │   │ base_path()                  │
//! └──────────────────────────────┘   └──────────────────────────────┘
//! ```

mod error;
mod s3;
mod vault;

use std::future::Future;

use bytes::Bytes;

pub use error::StorageError;
pub use s3::S3ObjectStore;
pub use vault::FsVault;

/// Canned access control for uploaded objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectAcl {
    /// Readable by the bucket owner only.
    Private,
    /// Readable by anyone.
    PublicRead,
}

impl ObjectAcl {
    /// Value of the `x-amz-acl` header.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::PublicRead => "public-read",
        }
    }
}

/// A single object write.
#[derive(Debug, Clone)]
pub struct PutObject {
    /// Object key inside the bucket.
    pub key: String,
    /// Object contents.
    pub body: Bytes,
    /// `Content-Type` stored with the object.
    pub content_type: String,
    /// Access control.
    pub acl: ObjectAcl,
}

/// Remote object storage.
pub trait ObjectStore: Send + Sync {
    /// Store one object, overwriting any existing object with the same key.
    fn put_object(
        &self,
        object: PutObject,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// The note vault's own filesystem.
pub trait LocalVault: Send + Sync {
    /// Create `dir` (vault-relative) if it does not exist. Succeeds if it does.
    fn ensure_dir(&self, dir: &str) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Write `body` to the vault-relative `path`, replacing any existing file.
    fn write(
        &self,
        path: &str,
        body: Bytes,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Absolute path of the vault root.
    fn base_path(&self) -> &str;
}
