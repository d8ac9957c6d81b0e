//! Upload dispatch, markup generation and reconciliation.
//!
//! This module carries a claimed file from the placeholder to its final
//! markup:
//! - Dispatch to exactly one sink (bucket or vault)
//! - Markup generation per media kind
//! - Text-search reconciliation of the placeholder
//! - The [`Uploader`] service tying intake to all of the above

mod dispatch;
mod error;
mod markup;
mod reconcile;
mod service;
mod types;

pub use dispatch::Dispatcher;
pub use error::UploadError;
pub use markup::{ensure_embeddable, render};
pub use reconcile::{reconcile, replace_placeholder};
pub use service::Uploader;
pub use types::{Claim, Destination, PendingUpload, Reconciled, UploadReport, UploadedMedia};
