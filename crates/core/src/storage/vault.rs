//! Local vault storage using Apache OpenDAL.

use std::path::Path;

use bytes::Bytes;
use opendal::{Operator, services};

use super::LocalVault;
use super::error::StorageError;

/// The vault directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsVault {
    operator: Operator,
    base_path: String,
}

impl FsVault {
    /// Open the vault rooted at `root`. Relative roots are made absolute
    /// against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be made absolute, is not UTF-8, or
    /// the OpenDAL operator cannot be built.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let absolute = std::path::absolute(root.as_ref())
            .map_err(|e| StorageError::configuration(format!("invalid vault path: {e}")))?;
        let root = absolute
            .to_str()
            .ok_or_else(|| StorageError::configuration("vault path is not valid UTF-8"))?;

        let builder = services::Fs::default().root(root);
        let operator = Operator::new(builder)
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        let base_path = match root.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(Self {
            operator,
            base_path,
        })
    }
}

impl LocalVault for FsVault {
    async fn ensure_dir(&self, dir: &str) -> Result<(), StorageError> {
        let dir = dir.trim_matches('/');
        if dir.is_empty() {
            return Ok(());
        }
        self.operator
            .create_dir(&format!("{dir}/"))
            .await
            .map_err(StorageError::from)
    }

    async fn write(&self, path: &str, body: Bytes) -> Result<(), StorageError> {
        self.operator
            .write(path, body)
            .await
            .map(|_| ())
            .map_err(StorageError::from)
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}
