//! Change Notifier Port
//!
//! Receives change reports. Calls arrive synchronously in this order:
//! `on_run_start`, then one file call per logical file, then `on_run_finish`.

use std::path::Path;

use crate::domain::entities::ChangeReport;
use crate::domain::ports::revision_walker::ProjectInfo;
use crate::error::HeraldResult;

/// Describes the logical file a report belongs to
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    pub path: &'a Path,
    pub description: &'a str,
}

/// Sink for change reports
///
/// Implementations can be:
/// - ConsoleNotifier: Human-readable report with diffs
/// - JsonNotifier: NDJSON event stream
/// - DigestNotifier: One summary per watcher at the end of the run
pub trait ChangeNotifier {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn on_run_start(&mut self, project: &ProjectInfo) -> HeraldResult<()>;

    /// Both revisions exist
    fn on_changes(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()>;

    /// Only the current revision exists
    fn on_file_added(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()>;

    /// Only the previous revision exists
    fn on_file_deleted(&mut self, file: FileContext<'_>, report: &ChangeReport)
        -> HeraldResult<()>;

    fn on_run_finish(&mut self) -> HeraldResult<()>;
}
