//! In-memory sinks for unit tests.

use std::collections::HashMap;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::storage::{LocalVault, ObjectStore, PutObject, StorageError};

/// Object store that records every put.
#[derive(Debug, Default)]
pub(crate) struct MemoryObjectStore {
    puts: Mutex<Vec<PutObject>>,
    rejection: Option<(u16, String)>,
}

impl MemoryObjectStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store answering every put with `status`.
    pub(crate) fn rejecting(status: u16, message: &str) -> Self {
        Self {
            puts: Mutex::default(),
            rejection: Some((status, message.to_string())),
        }
    }

    pub(crate) fn puts(&self) -> Vec<PutObject> {
        self.puts.lock().clone()
    }
}

impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, object: PutObject) -> Result<(), StorageError> {
        if let Some((status, message)) = &self.rejection {
            return Err(StorageError::status(*status, message.clone()));
        }
        self.puts.lock().push(object);
        Ok(())
    }
}

/// Vault keeping directories and files in maps.
#[derive(Debug)]
pub(crate) struct MemoryVault {
    base_path: String,
    dirs: Mutex<Vec<String>>,
    files: Mutex<HashMap<String, Bytes>>,
}

impl MemoryVault {
    pub(crate) fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
            dirs: Mutex::default(),
            files: Mutex::default(),
        }
    }

    pub(crate) fn dirs(&self) -> Vec<String> {
        self.dirs.lock().clone()
    }

    pub(crate) fn file(&self, path: &str) -> Option<Bytes> {
        self.files.lock().get(path).cloned()
    }

    pub(crate) fn file_count(&self) -> usize {
        self.files.lock().len()
    }
}

impl LocalVault for MemoryVault {
    async fn ensure_dir(&self, dir: &str) -> Result<(), StorageError> {
        let mut dirs = self.dirs.lock();
        if !dirs.iter().any(|d| d == dir) {
            dirs.push(dir.to_string());
        }
        Ok(())
    }

    async fn write(&self, path: &str, body: Bytes) -> Result<(), StorageError> {
        self.files.lock().insert(path.to_string(), body);
        Ok(())
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}
