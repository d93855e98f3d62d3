//! Process Use Case
//!
//! For each logical file from the walker:
//! 1. Parse the previous and current revisions independently
//! 2. Diff them, or report every region as added/removed when only one exists
//! 3. Hand the report to every notifier in registration order
//!
//! Notifiers see `on_run_start` before the first file and `on_run_finish`
//! after the last. Any error aborts the run.

use tracing::{info, warn};

use crate::application::extract::RegionExtractor;
use crate::domain::entities::ChangeReport;
use crate::domain::ports::{
    ChangeNotifier, FileContext, FileRevision, RevisionWalker, SourceParser,
};
use crate::domain::services::ChangeBuilder;
use crate::error::HeraldResult;

use super::result::RunSummary;

/// How a file's report is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileEvent {
    Changed,
    Added,
    Deleted,
}

/// Orchestration loop over one walker
pub struct ProcessUseCase<P: SourceParser> {
    extractor: RegionExtractor<P>,
    builder: ChangeBuilder,
    notifiers: Vec<Box<dyn ChangeNotifier>>,
}

impl<P: SourceParser> ProcessUseCase<P> {
    pub fn new(extractor: RegionExtractor<P>, notifiers: Vec<Box<dyn ChangeNotifier>>) -> Self {
        Self {
            extractor,
            builder: ChangeBuilder::new(),
            notifiers,
        }
    }

    /// Consume `walker` to exhaustion
    pub fn execute(&mut self, walker: &mut dyn RevisionWalker) -> HeraldResult<RunSummary> {
        let project = walker.project_info().clone();
        info!(
            project = %project.name,
            range = %project.revision_range,
            walker = walker.name(),
            "starting run"
        );
        for notifier in &mut self.notifiers {
            notifier.on_run_start(&project)?;
        }

        let mut summary = RunSummary::new();
        while let Some(revision) = walker.next_revision()? {
            match self.build_report(&revision)? {
                Some((event, report)) => {
                    info!(
                        file = %revision.path.display(),
                        added = report.added.len(),
                        removed = report.removed.len(),
                        modified = report.modified.len(),
                        "processed file"
                    );
                    summary.record(&report);
                    self.dispatch(&revision, event, &report)?;
                }
                None => {
                    warn!(file = %revision.path.display(), "walker yielded no content; skipping");
                    summary.files_skipped += 1;
                }
            }
        }

        for notifier in &mut self.notifiers {
            notifier.on_run_finish()?;
        }
        Ok(summary)
    }

    fn build_report(&self, revision: &FileRevision) -> HeraldResult<Option<(FileEvent, ChangeReport)>> {
        let path = revision.path.as_path();
        let parse = |bytes: &Vec<u8>| self.extractor.extract_bytes(path, bytes.clone());

        let built = match (&revision.previous, &revision.current) {
            (Some(previous), Some(current)) => {
                let previous = parse(previous)?;
                let current = parse(current)?;
                Some((FileEvent::Changed, self.builder.diff(&previous, &current)))
            }
            (None, Some(current)) => Some((
                FileEvent::Added,
                self.builder.build_inserted(&parse(current)?),
            )),
            (Some(previous), None) => Some((
                FileEvent::Deleted,
                self.builder.build_deleted(&parse(previous)?),
            )),
            (None, None) => None,
        };
        Ok(built)
    }

    fn dispatch(
        &mut self,
        revision: &FileRevision,
        event: FileEvent,
        report: &ChangeReport,
    ) -> HeraldResult<()> {
        let file = FileContext {
            path: &revision.path,
            description: &revision.description,
        };
        for notifier in &mut self.notifiers {
            match event {
                FileEvent::Changed => notifier.on_changes(file, report)?,
                FileEvent::Added => notifier.on_file_added(file, report)?,
                FileEvent::Deleted => notifier.on_file_deleted(file, report)?,
            }
        }
        Ok(())
    }
}
