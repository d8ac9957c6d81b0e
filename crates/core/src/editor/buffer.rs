//! In-memory editor buffer.

use super::{Editor, EditorPosition};

/// A plain text document with a cursor and an optional selection.
///
/// Positions past the end of a line or document are clamped, and columns that
/// fall inside a multi-byte character are moved back to its first byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    anchor: EditorPosition,
    head: EditorPosition,
}

impl TextBuffer {
    /// A buffer holding `text` with the cursor at the start.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Select from `anchor` to `head`; the cursor is at `head`.
    pub fn select(&mut self, anchor: EditorPosition, head: EditorPosition) {
        self.anchor = self.clamp(anchor);
        self.head = self.clamp(head);
    }

    /// Selection bounds in document order. Equal when nothing is selected.
    #[must_use]
    pub fn selection(&self) -> (EditorPosition, EditorPosition) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    /// Position just past the last character.
    #[must_use]
    pub fn end(&self) -> EditorPosition {
        self.position(self.text.len())
    }

    /// Byte offset of `pos` in the document.
    #[must_use]
    pub fn offset(&self, pos: EditorPosition) -> usize {
        let mut start = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            if index == pos.line {
                let mut ch = pos.ch.min(line.len());
                while !line.is_char_boundary(ch) {
                    ch -= 1;
                }
                return start + ch;
            }
            start += line.len() + 1;
        }
        self.text.len()
    }

    /// Line/column of a byte offset.
    #[must_use]
    pub fn position(&self, offset: usize) -> EditorPosition {
        let offset = offset.min(self.text.len());
        let before = &self.text[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        EditorPosition::new(line, offset - line_start)
    }

    fn clamp(&self, pos: EditorPosition) -> EditorPosition {
        self.position(self.offset(pos))
    }

    fn splice(&mut self, from: EditorPosition, to: EditorPosition, text: &str) -> (usize, usize) {
        let (a, b) = (self.offset(from), self.offset(to));
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        self.text.replace_range(start..end, text);
        (start, end)
    }
}

impl Editor for TextBuffer {
    fn cursor(&self) -> EditorPosition {
        self.head
    }

    fn set_cursor(&mut self, pos: EditorPosition) {
        let pos = self.clamp(pos);
        self.anchor = pos;
        self.head = pos;
    }

    fn replace_selection(&mut self, text: &str) {
        let (from, to) = self.selection();
        let (start, _) = self.splice(from, to, text);
        let after = self.position(start + text.len());
        self.anchor = after;
        self.head = after;
    }

    fn replace_range(&mut self, text: &str, from: EditorPosition, to: EditorPosition) {
        let anchor = self.offset(self.anchor);
        let head = self.offset(self.head);
        let (start, end) = self.splice(from, to, text);

        let map = |offset: usize| {
            if offset <= start {
                offset
            } else if offset >= end {
                offset - (end - start) + text.len()
            } else {
                start + text.len()
            }
        };
        self.anchor = self.position(map(anchor));
        self.head = self.position(map(head));
    }

    fn value(&self) -> String {
        self.text.clone()
    }
}
