//! Position Span value object
//!
//! Zero-based line/column positions, matching the parser's point convention.
//! A span's end is never before its start.

use std::fmt;

use serde::Serialize;

use crate::error::{HeraldError, HeraldResult};

/// A single zero-based position in a source unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{line={}, column={}}}", self.line, self.column)
    }
}

/// Immutable start/end range of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    start: Position,
    end: Position,
}

impl Span {
    /// Create a span, rejecting an end that precedes the start
    pub fn new(start: Position, end: Position) -> HeraldResult<Self> {
        if end < start {
            return Err(HeraldError::InvalidSpan {
                start_line: start.line,
                start_column: start.column,
                end_line: end.line,
                end_column: end.column,
            });
        }
        Ok(Self { start, end })
    }

    /// Shorthand for `Span::new` from raw coordinates
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> HeraldResult<Self> {
        Self::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Number of lines covered, counting both boundary lines
    pub fn line_count(&self) -> usize {
        self.end.line - self.start.line + 1
    }

    /// Smallest span covering both `self` and `other`
    pub fn cover(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
