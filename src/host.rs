//! Host editor adapter
//!
//! The engine never owns a text buffer. The host editor implements
//! `HostEditor` and the engine talks to the document exclusively through
//! it: full-text reads, range reads, and a single range replacement on
//! selection. All calls are synchronous round-trips into the host-owned
//! buffer.

use lsp_types::{Position, Range};
use ropey::Rope;

/// Operations the engine requires from the host editor.
///
/// Ranges are half-open: `[range.start, range.end)`.
pub trait HostEditor {
    /// Current cursor position.
    fn cursor_position(&self) -> Position;

    /// Full document text.
    fn full_text(&self) -> String;

    /// Text of the half-open span.
    fn range_text(&self, range: Range) -> String;

    /// Replaces the half-open span with `text`.
    fn replace_range(&mut self, range: Range, text: &str);
}

/// Converts a position to a char offset in the rope.
fn position_to_char_offset(position: &Position, text: &Rope) -> usize {
    let line = position.line as usize;
    let character = position.character as usize;
    text.line_to_char(line) + character
}

/// In-memory host document backed by a rope.
///
/// Reference implementation of `HostEditor` for tests and hosts that
/// keep their buffer in process.
#[derive(Debug, Clone)]
pub struct ScratchBuffer {
    text: Rope,
    cursor: Position,
}

impl ScratchBuffer {
    /// Creates a buffer over `text` with the cursor at the origin.
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            cursor: Position::new(0, 0),
        }
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, line: u32, character: u32) {
        self.cursor = Position::new(line, character);
    }

    /// Current text of the buffer as a string.
    pub fn text(&self) -> String {
        self.text.to_string()
    }
}

impl HostEditor for ScratchBuffer {
    fn cursor_position(&self) -> Position {
        self.cursor
    }

    fn full_text(&self) -> String {
        self.text.to_string()
    }

    fn range_text(&self, range: Range) -> String {
        let start = position_to_char_offset(&range.start, &self.text);
        let end = position_to_char_offset(&range.end, &self.text);
        self.text.slice(start..end).to_string()
    }

    fn replace_range(&mut self, range: Range, text: &str) {
        let start = position_to_char_offset(&range.start, &self.text);
        let end = position_to_char_offset(&range.end, &self.text);
        self.text.remove(start..end);
        self.text.insert(start, text);
    }
}
