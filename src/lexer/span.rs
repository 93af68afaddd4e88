//! Source locations attached to tokens.

use std::fmt;

/// Byte offset into program text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteOffset(u32);

impl ByteOffset {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Saturates at `u32::MAX` for inputs past 4 GiB.
    pub fn from_usize(value: usize) -> Self {
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ByteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a token came from: its 1-based line and its byte range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub line: u32,
    pub start: ByteOffset,
    pub end: ByteOffset,
}

impl Span {
    /// Creates a span; swapped offsets are put back in order.
    pub fn new(line: u32, start: ByteOffset, end: ByteOffset) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self { line, start, end }
    }

    /// Length of the covered text in bytes.
    pub fn len(self) -> usize {
        self.end.as_usize() - self.start.as_usize()
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}
