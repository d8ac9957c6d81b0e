//! Shared configuration and errors for notedrop.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Global settings loaded from config files and the environment
//! - Application-wide error types

pub mod config;
pub mod error;

pub use config::{AppConfig, S3Config, UploadConfig};
pub use error::{AppError, AppResult};
