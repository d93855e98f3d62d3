//! Run Result
//!
//! Counters accumulated by one processing run.

use serde::Serialize;

use crate::domain::entities::ChangeReport;

/// Result of a processing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Files for which at least one revision was parsed
    pub files_processed: usize,
    /// Files the walker yielded without any content
    pub files_skipped: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &ChangeReport) {
        self.files_processed += 1;
        self.added += report.added.len();
        self.removed += report.removed.len();
        self.modified += report.modified.len();
    }

    /// Total region changes across all files
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.modified
    }

    pub fn has_changes(&self) -> bool {
        self.total_changes() > 0
    }
}
