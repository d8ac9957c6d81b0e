//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// These wrap failures at the edge of the application (binaries, host glue).
/// Upload pipeline failures never escape as `AppError`: they are reported to
/// the user as notices and the note is left without a placeholder.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be loaded or are unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reading or writing a note or media file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The note or event could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A storage backend could not be constructed.
    #[error("Storage setup failed: {0}")]
    Storage(String),

    /// The background upload task panicked or was cancelled.
    #[error("Upload task failed: {0}")]
    Task(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
