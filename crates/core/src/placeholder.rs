//! Transient "uploading" marker.
//!
//! The marker is plain markdown holding the content key. It is located later
//! by text search, not by position, so it survives edits elsewhere in the note
//! but is lost if the user edits the marker itself.

use crate::editor::Editor;
use crate::fingerprint::ContentKey;

/// The placeholder for one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    marker: String,
}

impl Placeholder {
    /// Placeholder embedding `key`.
    #[must_use]
    pub fn for_key(key: &ContentKey) -> Self {
        Self {
            marker: format!("![uploading...]({key})"),
        }
    }

    /// Marker text searched for during reconciliation.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Text inserted into the note: the marker and a newline.
    #[must_use]
    pub fn insertion_text(&self) -> String {
        format!("{}\n", self.marker)
    }

    /// Insert at the cursor, replacing any selection.
    pub fn insert<E: Editor + ?Sized>(&self, editor: &mut E) {
        editor.replace_selection(&self.insertion_text());
    }
}
