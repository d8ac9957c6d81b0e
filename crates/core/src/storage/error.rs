//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage backend configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// The object store answered with a non-success status.
    #[error("storage responded {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request never got a response.
    #[error("storage request failed: {0}")]
    Transport(String),

    /// Filesystem or OpenDAL operation error.
    #[error("storage operation failed: {0}")]
    Operation(String),

    /// Invalid storage key format.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::ConfigInvalid => Self::Configuration(err.to_string()),
            _ => Self::Operation(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StorageError::status(403, "Access Denied").to_string(),
            "storage responded 403: Access Denied"
        );
        assert_eq!(
            StorageError::configuration("bucket is not configured").to_string(),
            "storage configuration error: bucket is not configured"
        );
        assert_eq!(
            StorageError::operation("permission denied").to_string(),
            "storage operation failed: permission denied"
        );
    }

    #[test]
    fn test_from_opendal_permission_error() {
        let err = opendal::Error::new(opendal::ErrorKind::PermissionDenied, "read-only vault");
        assert!(matches!(StorageError::from(err), StorageError::Operation(_)));
    }

    #[test]
    fn test_from_opendal_config_error() {
        let err = opendal::Error::new(opendal::ErrorKind::ConfigInvalid, "root is empty");
        assert!(matches!(
            StorageError::from(err),
            StorageError::Configuration(_)
        ));
    }
}
