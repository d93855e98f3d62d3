//! SourceCode entity - one revision of a logical file
//!
//! Holds the raw text handed to the parser and the line view that regions
//! are sliced from.

use std::path::Path;

use crate::domain::value_objects::Span;
use crate::error::{HeraldError, HeraldResult};

/// Raw content of one source unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCode {
    /// Human-readable unit name (usually a path) for error messages
    name: String,
    text: String,
    lines: Vec<String>,
}

impl SourceCode {
    /// Create from text
    pub fn from_content(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text.lines().map(str::to_string).collect();
        Self {
            name: name.into(),
            text,
            lines,
        }
    }

    /// Create from raw revision bytes, which must be UTF-8
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> HeraldResult<Self> {
        let text = String::from_utf8(bytes).map_err(|_| HeraldError::InvalidEncoding {
            path: path.to_path_buf(),
        })?;
        Ok(Self::from_content(path.display().to_string(), text))
    }

    /// Create from individual lines (joined with `\n`)
    pub fn from_lines(name: impl Into<String>, lines: &[&str]) -> Self {
        Self::from_content(name, lines.join("\n"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines covered by `span`, boundary lines included
    ///
    /// Lines past the end of the unit are silently dropped.
    pub fn slice(&self, span: &Span) -> Vec<String> {
        self.lines
            .iter()
            .skip(span.start().line)
            .take(span.line_count())
            .cloned()
            .collect()
    }
}
