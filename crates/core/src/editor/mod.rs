//! Host editor seam.
//!
//! The pipeline only needs five operations from an editor: read the cursor,
//! move the cursor, replace the current selection, replace a line/column span
//! and read the full text. Hosts implement [`Editor`] over their own buffer;
//! [`TextBuffer`] is a plain in-memory implementation.
//!
//! Columns are byte offsets within a line.

mod buffer;
mod notice;

use std::sync::Arc;

pub use buffer::TextBuffer;
pub use notice::{MemoryNotifier, Notice, NoticeLevel, Notifier};

/// A line/column location in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditorPosition {
    /// Zero-based line.
    pub line: usize,
    /// Byte offset within the line.
    pub ch: usize,
}

impl EditorPosition {
    /// Create a position.
    #[must_use]
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Operations the upload pipeline performs on the active document.
pub trait Editor {
    /// Current cursor position.
    fn cursor(&self) -> EditorPosition;

    /// Move the cursor, collapsing any selection.
    fn set_cursor(&mut self, pos: EditorPosition);

    /// Replace the current selection (or insert at the cursor) with `text`.
    /// The cursor ends up after the inserted text.
    fn replace_selection(&mut self, text: &str);

    /// Replace the span `from..to` with `text`.
    fn replace_range(&mut self, text: &str, from: EditorPosition, to: EditorPosition);

    /// Full document text.
    fn value(&self) -> String;
}

/// An editor shared between the event handler and the upload task.
pub type SharedEditor<E> = Arc<parking_lot::Mutex<E>>;

/// Wrap an editor for sharing with upload tasks.
pub fn shared<E: Editor>(editor: E) -> SharedEditor<E> {
    Arc::new(parking_lot::Mutex::new(editor))
}
