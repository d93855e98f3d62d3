//! Differ Domain Service
//!
//! Line-level differences between the two revisions of a modified region.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use crate::domain::entities::AnnotatedRegion;

/// A single line change in a diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// The type of change
    pub tag: DiffTag,
    /// Source line number in the old revision (one-based)
    pub old_line: Option<usize>,
    /// Source line number in the new revision (one-based)
    pub new_line: Option<usize>,
    /// The content of the line, without its terminator
    pub content: String,
}

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    /// Line was deleted
    Delete,
    /// Line was inserted
    Insert,
    /// Line is unchanged
    Equal,
}

impl DiffTag {
    pub fn sign(&self) -> char {
        match self {
            DiffTag::Delete => '-',
            DiffTag::Insert => '+',
            DiffTag::Equal => ' ',
        }
    }
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// All lines in the diff
    pub lines: Vec<DiffLine>,
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
    /// Whether there are any changes
    pub has_changes: bool,
}

impl DiffResult {
    /// Get only the changed lines (insertions and deletions)
    pub fn changed_lines(&self) -> Vec<&DiffLine> {
        self.lines
            .iter()
            .filter(|l| l.tag != DiffTag::Equal)
            .collect()
    }

    /// Get a unified diff summary (e.g., "+5, -3")
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }

    /// Changed lines grouped with `context` unchanged lines around them
    ///
    /// Groups whose context would touch or overlap are merged.
    pub fn hunks(&self, context: usize) -> Vec<&[DiffLine]> {
        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if line.tag == DiffTag::Equal {
                continue;
            }
            let start = idx.saturating_sub(context);
            let end = (idx + context + 1).min(self.lines.len());
            match ranges.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => ranges.push((start, end)),
            }
        }
        ranges
            .into_iter()
            .map(|(start, end)| &self.lines[start..end])
            .collect()
    }
}

/// Differ service for computing region differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    /// Create a new Differ instance
    pub fn new() -> Self {
        Self
    }

    /// Compute the diff between two strings
    pub fn diff(&self, old: &str, new: &str) -> DiffResult {
        self.diff_with_offsets(old, new, 0, 0)
    }

    /// Diff two region revisions, numbering lines by their source position
    pub fn diff_regions(&self, previous: &AnnotatedRegion, current: &AnnotatedRegion) -> DiffResult {
        self.diff_with_offsets(
            &previous.text(),
            &current.text(),
            previous.span().start().line,
            current.span().start().line,
        )
    }

    fn diff_with_offsets(
        &self,
        old: &str,
        new: &str,
        old_offset: usize,
        new_offset: usize,
    ) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);

        let mut result = DiffResult::default();

        for change in text_diff.iter_all_changes() {
            let tag = DiffTag::from(change.tag());

            match tag {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }

            result.lines.push(DiffLine {
                tag,
                old_line: change.old_index().map(|i| i + old_offset + 1),
                new_line: change.new_index().map(|i| i + new_offset + 1),
                content: change.value().trim_end_matches(['\r', '\n']).to_string(),
            });
        }

        result.has_changes = result.additions > 0 || result.deletions > 0;
        result
    }
}
