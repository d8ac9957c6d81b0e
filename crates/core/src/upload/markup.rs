//! Markup generation per media kind.

use reqwest::Url;

use super::error::UploadError;
use super::types::{Destination, UploadedMedia};
use crate::media::MediaKind;

const PDF_VIEWER: &str = "https://docs.google.com/viewer";
const PDF_LOCAL_UNSUPPORTED: &str = "PDFs cannot be embedded in local mode";

/// Check that `kind` can be embedded from `destination`.
///
/// # Errors
///
/// PDFs are only embeddable through the remote viewer, so a PDF bound for
/// the vault is rejected.
pub fn ensure_embeddable(kind: MediaKind, destination: &Destination) -> Result<(), UploadError> {
    if kind == MediaKind::Pdf && destination.is_local() {
        return Err(UploadError::markup(PDF_LOCAL_UNSUPPORTED));
    }
    Ok(())
}

/// Markup embedding `media` in a note.
///
/// Images link the location directly (a vault-relative path when local).
/// Video and audio become HTML tags with controls; local ones point at a
/// `file://` URI under the vault root. PDFs are wrapped in a document viewer
/// iframe.
///
/// # Errors
///
/// Returns [`UploadError::MarkupGeneration`] for a local PDF, or for a remote
/// PDF location the viewer URL cannot be built from.
pub fn render(media: &UploadedMedia) -> Result<String, UploadError> {
    ensure_embeddable(media.kind, &media.destination)?;

    let markup = match media.kind {
        MediaKind::Image => format!("![image]({})", media.location),
        MediaKind::Video => format!("<video src=\"{}\" controls />", source(media)),
        MediaKind::Audio => format!("<audio src=\"{}\" controls />", source(media)),
        MediaKind::Pdf => {
            let viewer = Url::parse_with_params(
                PDF_VIEWER,
                &[("url", media.location.as_str()), ("embedded", "true")],
            )
            .map_err(|e| UploadError::markup(format!("cannot build PDF viewer URL: {e}")))?;
            format!(
                "<iframe src=\"{viewer}\" width=\"100%\" height=\"800\" frameborder=\"0\"></iframe>"
            )
        }
    };

    Ok(markup)
}

fn source(media: &UploadedMedia) -> String {
    match &media.destination {
        Destination::Remote => media.location.clone(),
        Destination::Local { base_path } => format!(
            "file://{}/{}",
            base_path.trim_end_matches('/'),
            media.location.trim_start_matches('/')
        ),
    }
}
