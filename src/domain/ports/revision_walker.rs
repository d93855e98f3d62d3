//! Revision Walker Port
//!
//! Supplies, one logical file at a time, the previous and current content
//! of every file that changed between two revisions.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::HeraldResult;

/// Project-level descriptor, handed to notifiers once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    /// Human-readable range, e.g. `HEAD~1..HEAD`
    pub revision_range: String,
}

/// Both revisions of one logical file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRevision {
    /// Human-readable description, e.g. `modified src/Foo.java`
    pub description: String,
    /// Path relative to the project root
    pub path: PathBuf,
    pub previous: Option<Vec<u8>>,
    pub current: Option<Vec<u8>>,
}

impl FileRevision {
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }
}

/// Source of file revision pairs
///
/// Consumed strictly sequentially: the next file is requested only after
/// the previous one has been fully reported.
pub trait RevisionWalker {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn project_info(&self) -> &ProjectInfo;

    /// Next changed file in stable order, `None` when exhausted
    fn next_revision(&mut self) -> HeraldResult<Option<FileRevision>>;
}
