//! JSON Notifier
//!
//! Outputs run, file and region events as NDJSON for CI/automation
//! consumption.

use std::io::{self, Write};

use serde_json::{json, Value};

use crate::domain::entities::{AnnotatedRegion, ChangeKind, ChangeReport};
use crate::domain::ports::{ChangeNotifier, FileContext, ProjectInfo};
use crate::error::HeraldResult;

use super::write_failed;

/// Running totals for the `run_finish` event
#[derive(Debug, Default)]
struct Totals {
    files: usize,
    added: usize,
    removed: usize,
    modified: usize,
}

/// Notifier that outputs NDJSON events
pub struct JsonNotifier {
    writer: Box<dyn Write + Send>,
    totals: Totals,
}

impl JsonNotifier {
    pub const NAME: &'static str = "json";
    pub const DESCRIPTION: &'static str = "Emits one JSON event per line for scripts and CI";

    /// Create a JSON notifier writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON notifier writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            totals: Totals::default(),
        }
    }

    fn write_event(&mut self, event: Value) -> HeraldResult<()> {
        writeln!(self.writer, "{}", event)
            .and_then(|()| self.writer.flush())
            .map_err(write_failed(Self::NAME))
    }

    fn report(
        &mut self,
        status: &str,
        file: FileContext<'_>,
        report: &ChangeReport,
    ) -> HeraldResult<()> {
        self.totals.files += 1;
        self.totals.added += report.added.len();
        self.totals.removed += report.removed.len();
        self.totals.modified += report.modified.len();

        let path = file.path.display().to_string();
        self.write_event(json!({
            "event": "file",
            "status": status,
            "path": path,
            "description": file.description,
            "added": report.added.len(),
            "removed": report.removed.len(),
            "modified": report.modified.len(),
        }))?;

        for region in &report.added {
            self.write_event(region_event(ChangeKind::Added, &path, region))?;
        }
        for region in &report.removed {
            self.write_event(region_event(ChangeKind::Removed, &path, region))?;
        }
        for change in &report.modified {
            let mut event = region_event(ChangeKind::Modified, &path, &change.current);
            event["watchers"] = json!(change.watchers());
            event["previous_span"] = json!(change.previous.span());
            event["diff"] = json!({
                "additions": change.diff.additions,
                "deletions": change.diff.deletions,
                "lines": change.diff.changed_lines(),
            });
            self.write_event(event)?;
        }
        Ok(())
    }
}

fn region_event(kind: ChangeKind, path: &str, region: &AnnotatedRegion) -> Value {
    json!({
        "event": "region",
        "change": kind,
        "path": path,
        "kind": region.kind(),
        "name": region.name(),
        "scope": region.scope(),
        "span": region.span(),
        "watchers": region.watchers(),
    })
}

impl ChangeNotifier for JsonNotifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn on_run_start(&mut self, project: &ProjectInfo) -> HeraldResult<()> {
        self.totals = Totals::default();
        self.write_event(json!({
            "event": "start",
            "project": project.name,
            "revisions": project.revision_range,
        }))
    }

    fn on_changes(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.report("modified", file, report)
    }

    fn on_file_added(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.report("added", file, report)
    }

    fn on_file_deleted(
        &mut self,
        file: FileContext<'_>,
        report: &ChangeReport,
    ) -> HeraldResult<()> {
        self.report("deleted", file, report)
    }

    fn on_run_finish(&mut self) -> HeraldResult<()> {
        let status = if self.totals.added + self.totals.removed + self.totals.modified == 0 {
            "unchanged"
        } else {
            "changed"
        };
        let event = json!({
            "event": "complete",
            "status": status,
            "files": self.totals.files,
            "added": self.totals.added,
            "removed": self.totals.removed,
            "modified": self.totals.modified,
        });
        self.write_event(event)
    }
}
