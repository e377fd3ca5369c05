//! Position and range tracking for links inside note text.
//!
//! Columns count **characters**, not bytes. The regex scan works in byte
//! offsets and converts before constructing a [`Position`], so consumers
//! (the LSP layer in particular) can hand these values straight to clients.

use std::fmt;

/// A line:character position inside a note file. Zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// A start/end pair of positions. Links are matched line by line, so both
/// ends of a scanned range always share one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering `start_char..end_char` on a single line.
    pub fn on_line(line: u32, start_char: u32, end_char: u32) -> Self {
        Self::new(
            Position::new(line, start_char),
            Position::new(line, end_char),
        )
    }

    /// Check whether a position falls inside this range, inclusive on both
    /// ends.
    pub fn contains(&self, pos: Position) -> bool {
        (self.start.line < pos.line
            || (self.start.line == pos.line && self.start.character <= pos.character))
            && (self.end.line > pos.line
                || (self.end.line == pos.line && self.end.character >= pos.character))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
