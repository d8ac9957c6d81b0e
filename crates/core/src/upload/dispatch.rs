//! Sending a claimed file to exactly one sink.

use std::sync::Arc;

use tracing::{error, info};

use super::error::UploadError;
use super::markup::ensure_embeddable;
use super::types::{Destination, UploadedMedia};
use crate::fingerprint::ContentKey;
use crate::intake::UploadRequest;
use crate::settings::EffectiveConfig;
use crate::storage::{LocalVault, ObjectStore, PutObject};

/// Routes uploads to the object store or the vault.
#[derive(Debug)]
pub struct Dispatcher<S: ObjectStore, V: LocalVault> {
    store: Arc<S>,
    vault: Arc<V>,
}

impl<S: ObjectStore, V: LocalVault> Dispatcher<S, V> {
    /// Create a dispatcher over both sinks.
    #[must_use]
    pub fn new(store: Arc<S>, vault: Arc<V>) -> Self {
        Self { store, vault }
    }

    /// Join `folder` and `key` into an object or vault path.
    ///
    /// Surrounding slashes on the folder are dropped; an empty folder yields
    /// the bare key.
    #[must_use]
    pub fn storage_key(folder: &str, key: &ContentKey) -> String {
        match folder.trim_matches('/') {
            "" => key.to_string(),
            folder => format!("{folder}/{key}"),
        }
    }

    /// Store `request` under `key` in the sink selected by `config`.
    ///
    /// Remote uploads resolve to the public URL under `image_url_path`; local
    /// uploads resolve to the vault-relative path.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `RemoteUpload` if the object store fails
    /// - `LocalWrite` if the vault cannot create the folder or write the file
    /// - `MarkupGeneration` for a PDF bound for the vault; nothing is written
    pub async fn dispatch(
        &self,
        request: &UploadRequest,
        key: &ContentKey,
        config: &EffectiveConfig,
    ) -> Result<UploadedMedia, UploadError> {
        if config.local_upload {
            self.write_local(request, key, config).await
        } else {
            self.put_remote(request, key, config).await
        }
    }

    async fn put_remote(
        &self,
        request: &UploadRequest,
        key: &ContentKey,
        config: &EffectiveConfig,
    ) -> Result<UploadedMedia, UploadError> {
        let storage_key = Self::storage_key(&config.folder, key);
        info!(key = %storage_key, kind = %request.kind, "uploading to object store");

        let object = PutObject {
            key: storage_key.clone(),
            body: request.bytes.clone(),
            content_type: request.mime_type.clone(),
            acl: config.acl(),
        };

        if let Err(e) = self.store.put_object(object).await {
            error!(error = %e, key = %storage_key, "object store upload failed");
            return Err(UploadError::RemoteUpload(e));
        }

        info!(key = %storage_key, "upload complete");

        Ok(UploadedMedia {
            kind: request.kind,
            location: public_url(&config.image_url_path, &storage_key),
            destination: Destination::Remote,
        })
    }

    async fn write_local(
        &self,
        request: &UploadRequest,
        key: &ContentKey,
        config: &EffectiveConfig,
    ) -> Result<UploadedMedia, UploadError> {
        let destination = Destination::Local {
            base_path: self.vault.base_path().to_string(),
        };
        ensure_embeddable(request.kind, &destination)?;

        let path = Self::storage_key(&config.local_upload_folder, key);
        info!(path = %path, kind = %request.kind, "saving to vault");

        self.vault
            .ensure_dir(&config.local_upload_folder)
            .await
            .map_err(|e| {
                error!(error = %e, folder = %config.local_upload_folder, "cannot create vault folder");
                UploadError::LocalWrite(e)
            })?;

        self.vault
            .write(&path, request.bytes.clone())
            .await
            .map_err(|e| {
                error!(error = %e, path = %path, "vault write failed");
                UploadError::LocalWrite(e)
            })?;

        info!(path = %path, "saved to vault");

        Ok(UploadedMedia {
            kind: request.kind,
            location: path,
            destination,
        })
    }
}

fn public_url(prefix: &str, storage_key: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{prefix}{storage_key}")
    } else {
        format!("{prefix}/{storage_key}")
    }
}
