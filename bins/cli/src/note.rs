//! Reading a markdown note the way a host editor would present it.

use notedrop_core::Frontmatter;
use notedrop_core::editor::{Editor, EditorPosition, TextBuffer};
use serde_json::Value;
use tracing::warn;

const FENCE: &str = "---";

/// Parse the YAML frontmatter block at the top of `text`.
///
/// A note without an opening and closing `---` fence has no frontmatter.
/// A block that is not valid YAML, or not a mapping, is ignored with a
/// warning and the global settings apply.
pub fn frontmatter(text: &str) -> Frontmatter {
    let Some(block) = fenced_block(text) else {
        return Frontmatter::new();
    };

    match parse_block(block) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "ignoring unparsable frontmatter");
            Frontmatter::new()
        }
    }
}

fn fenced_block(text: &str) -> Option<&str> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let start = first.len();
    let mut end = start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Some(&text[start..end]);
        }
        end += line.len();
    }
    None
}

fn parse_block(block: &str) -> Result<Frontmatter, String> {
    if block.trim().is_empty() {
        return Ok(Frontmatter::new());
    }

    let value = serde_yaml::from_str::<serde_yaml::Value>(block)
        .map_err(|e| e.to_string())
        .and_then(|value| serde_json::to_value(value).map_err(|e| e.to_string()))?;

    match value {
        Value::Object(map) => Ok(Frontmatter::from(map)),
        Value::Null => Ok(Frontmatter::new()),
        _ => Err("frontmatter is not a mapping".to_string()),
    }
}

/// Load `text` into a buffer with the cursor where the user would paste.
///
/// Without a line the cursor goes to the end of the note; otherwise to the
/// start of that zero-based line, clamped to the document.
pub fn open(text: String, line: Option<usize>) -> TextBuffer {
    let mut buffer = TextBuffer::new(text);
    let cursor = match line {
        Some(line) => EditorPosition::new(line, 0),
        None => buffer.end(),
    };
    buffer.set_cursor(cursor);
    buffer
}
