//! Minimal byte cursor with line tracking.

use crate::lexer::span::ByteOffset;

/// Byte-position cursor over input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: ByteOffset,
    line: u32,
}

impl Cursor {
    /// Creates a cursor at byte offset `0`, line `1`.
    pub(crate) fn new() -> Self {
        Self {
            offset: ByteOffset::new(0),
            line: 1,
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Returns the current 1-based line.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte at cursor position.
    pub(crate) fn peek_byte(&self, input: &str) -> Option<u8> {
        input.as_bytes().get(self.offset.as_usize()).copied()
    }

    /// Returns the remainder of the current line, excluding the newline.
    pub(crate) fn rest_of_line<'a>(&self, input: &'a str) -> &'a str {
        let rest = input.get(self.offset.as_usize()..).unwrap_or("");
        rest.split('\n').next().unwrap_or("")
    }

    /// Advances the cursor by one byte, counting newlines.
    pub(crate) fn bump(&mut self, input: &str) {
        if self.peek_byte(input) == Some(b'\n') {
            self.line = self.line.saturating_add(1);
        }
        let next = self.offset.as_usize().saturating_add(1).min(input.len());
        self.offset = ByteOffset::from_usize(next);
    }
}
