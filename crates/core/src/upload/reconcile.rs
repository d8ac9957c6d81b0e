//! Text-search reconciliation of the placeholder.
//!
//! The placeholder has no stable handle in the document. Reconciliation
//! re-reads the full text, scans it line by line and rewrites the first line
//! containing the marker. Only the marker span changes; the newline inserted
//! after it stays. If the user removed or altered the marker, nothing happens.

use tracing::warn;

use super::error::UploadError;
use super::markup::render;
use super::types::{Reconciled, UploadedMedia};
use crate::editor::{Editor, EditorPosition};
use crate::placeholder::Placeholder;

/// Replace the first occurrence of `marker` with `replacement`.
///
/// The cursor is moved to the start of the marker before the edit.
pub fn replace_placeholder<E: Editor + ?Sized>(
    editor: &mut E,
    marker: &str,
    replacement: &str,
) -> Reconciled {
    let text = editor.value();
    let found = text
        .split('\n')
        .enumerate()
        .find_map(|(line, content)| content.find(marker).map(|ch| (line, ch)));

    let Some((line, ch)) = found else {
        return Reconciled::PlaceholderMissing;
    };

    let from = EditorPosition::new(line, ch);
    let to = EditorPosition::new(line, ch + marker.len());
    editor.set_cursor(from);
    editor.replace_range(replacement, from, to);

    Reconciled::Replaced { line }
}

/// Resolve `placeholder` with the outcome of its upload.
///
/// On success the marker becomes the rendered markup. If the upload failed,
/// or the markup cannot be generated, the marker is deleted first and the
/// error is handed back for the user notice.
///
/// # Errors
///
/// Returns the upload or markup error after the placeholder was removed.
pub fn reconcile<E: Editor + ?Sized>(
    editor: &mut E,
    placeholder: &Placeholder,
    outcome: Result<UploadedMedia, UploadError>,
) -> Result<Reconciled, UploadError> {
    match outcome.and_then(|media| render(&media)) {
        Ok(markup) => Ok(replace_placeholder(editor, placeholder.marker(), &markup)),
        Err(err) => {
            if replace_placeholder(editor, placeholder.marker(), "") == Reconciled::PlaceholderMissing {
                warn!(marker = placeholder.marker(), "placeholder gone before removal");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextBuffer;
    use crate::fingerprint::fingerprint;
    use crate::media::MediaKind;
    use crate::storage::StorageError;
    use crate::upload::types::Destination;

    fn placeholder() -> Placeholder {
        Placeholder::for_key(&fingerprint(b"png", "a.png"))
    }

    fn image(location: &str) -> UploadedMedia {
        UploadedMedia {
            kind: MediaKind::Image,
            location: location.to_string(),
            destination: Destination::Remote,
        }
    }

    #[test]
    fn test_success_replaces_marker() {
        let placeholder = placeholder();
        let mut buffer = TextBuffer::new(format!("intro\n{}\noutro", placeholder.marker()));

        let result = reconcile(&mut buffer, &placeholder, Ok(image("https://cdn/a.png")));

        assert_eq!(result.unwrap(), Reconciled::Replaced { line: 1 });
        assert_eq!(buffer.text(), "intro\n![image](https://cdn/a.png)\noutro");
    }

    #[test]
    fn test_marker_found_after_edits_above() {
        let placeholder = placeholder();
        let mut buffer = TextBuffer::new(format!("{}\n", placeholder.marker()));
        buffer.set_cursor(EditorPosition::new(0, 0));
        buffer.replace_selection("typed while uploading\n\n");

        let result = reconcile(&mut buffer, &placeholder, Ok(image("u")));

        assert_eq!(result.unwrap(), Reconciled::Replaced { line: 2 });
        assert_eq!(buffer.text(), "typed while uploading\n\n![image](u)\n");
    }

    #[test]
    fn test_failure_removes_marker_and_returns_error() {
        let placeholder = placeholder();
        let mut buffer = TextBuffer::new(format!("a {} b", placeholder.marker()));

        let err = reconcile(
            &mut buffer,
            &placeholder,
            Err(UploadError::RemoteUpload(StorageError::status(500, "boom"))),
        )
        .unwrap_err();

        assert!(matches!(err, UploadError::RemoteUpload(_)));
        assert_eq!(buffer.text(), "a  b");
    }

    #[test]
    fn test_markup_failure_removes_marker() {
        let placeholder = placeholder();
        let mut buffer = TextBuffer::new(format!("{}\n", placeholder.marker()));
        let local_pdf = UploadedMedia {
            kind: MediaKind::Pdf,
            location: "media/doc.pdf".to_string(),
            destination: Destination::Local {
                base_path: "/vault".to_string(),
            },
        };

        let err = reconcile(&mut buffer, &placeholder, Ok(local_pdf)).unwrap_err();

        assert!(matches!(err, UploadError::MarkupGeneration(_)));
        assert_eq!(buffer.text(), "\n");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let placeholder = placeholder();
        let marker = placeholder.marker();
        let mut buffer = TextBuffer::new(format!("{marker}\n{marker}\n"));

        reconcile(&mut buffer, &placeholder, Ok(image("u"))).unwrap();

        assert_eq!(buffer.text(), format!("![image](u)\n{marker}\n"));
    }

    #[test]
    fn test_missing_marker_is_noop() {
        let placeholder = placeholder();
        let mut buffer = TextBuffer::new("the user deleted it");

        let result = reconcile(&mut buffer, &placeholder, Ok(image("u")));

        assert_eq!(result.unwrap(), Reconciled::PlaceholderMissing);
        assert_eq!(buffer.text(), "the user deleted it");
    }

    #[test]
    fn test_cursor_moves_to_marker_start() {
        let placeholder = placeholder();
        let mut buffer = TextBuffer::new(format!("head\n{}\n", placeholder.marker()));

        replace_placeholder(&mut buffer, placeholder.marker(), "X");

        assert_eq!(buffer.cursor(), EditorPosition::new(1, 0));
        assert_eq!(buffer.text(), "head\nX\n");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_other_text_is_byte_identical(
                before in "[^!]{0,64}",
                after in "[^!]{0,64}",
                markup in "[a-z:/.()\\[\\] ]{0,40}",
            ) {
                let placeholder = placeholder();
                let mut buffer = TextBuffer::new(
                    format!("{before}{}{after}", placeholder.insertion_text()),
                );

                let result = replace_placeholder(&mut buffer, placeholder.marker(), &markup);

                let replaced = matches!(result, Reconciled::Replaced { .. });
                prop_assert!(replaced, "marker not found in {:?}", buffer.text());
                prop_assert_eq!(buffer.text(), format!("{before}{markup}\n{after}"));
            }

            #[test]
            fn prop_missing_marker_leaves_text_alone(text in "[^!]{0,128}") {
                let placeholder = placeholder();
                let mut buffer = TextBuffer::new(text.clone());

                let result = replace_placeholder(&mut buffer, placeholder.marker(), "X");

                prop_assert_eq!(result, Reconciled::PlaceholderMissing);
                prop_assert_eq!(buffer.text(), text.as_str());
            }
        }
    }
}
