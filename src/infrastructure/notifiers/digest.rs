//! Digest Notifier
//!
//! Collects every region change per watcher and prints one digest per
//! watcher when the run finishes, watchers in alphabetical order.

use std::collections::BTreeMap;
use std::io::{self, Write};

use tracing::debug;

use crate::domain::entities::{AnnotatedRegion, ChangeKind, ChangeReport};
use crate::domain::ports::{ChangeNotifier, FileContext, ProjectInfo};
use crate::error::HeraldResult;
use crate::ui::views::digest::{render_digest, DigestEntry};

use super::{write_failed, NotifierOptions};

pub struct DigestNotifier {
    writer: Box<dyn Write + Send>,
    options: NotifierOptions,
    digests: BTreeMap<String, Vec<DigestEntry>>,
}

impl DigestNotifier {
    pub const NAME: &'static str = "digest";
    pub const DESCRIPTION: &'static str =
        "Prints one summary per watcher once every file has been processed";

    pub fn stdout(options: NotifierOptions) -> Self {
        Self::with_writer(io::stdout(), options)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, options: NotifierOptions) -> Self {
        Self {
            writer: Box::new(writer),
            options,
            digests: BTreeMap::new(),
        }
    }

    /// Watchers collected so far
    pub fn watchers(&self) -> impl Iterator<Item = &str> {
        self.digests.keys().map(String::as_str)
    }

    fn collect(&mut self, file: FileContext<'_>, report: &ChangeReport) {
        let path = file.path.display().to_string();

        for region in &report.added {
            self.push(region.watchers(), ChangeKind::Added, &path, region);
        }
        for region in &report.removed {
            self.push(region.watchers(), ChangeKind::Removed, &path, region);
        }
        for change in &report.modified {
            self.push(&change.watchers(), ChangeKind::Modified, &path, &change.current);
        }
    }

    fn push(&mut self, watchers: &[String], kind: ChangeKind, path: &str, region: &AnnotatedRegion) {
        for watcher in watchers {
            self.digests
                .entry(watcher.clone())
                .or_default()
                .push(DigestEntry {
                    kind,
                    file: path.to_string(),
                    region: format!("{} '{}'", region.kind(), region.qualified_name()),
                });
        }
    }
}

impl ChangeNotifier for DigestNotifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn on_run_start(&mut self, _project: &ProjectInfo) -> HeraldResult<()> {
        self.digests.clear();
        Ok(())
    }

    fn on_changes(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.collect(file, report);
        Ok(())
    }

    fn on_file_added(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.collect(file, report);
        Ok(())
    }

    fn on_file_deleted(
        &mut self,
        file: FileContext<'_>,
        report: &ChangeReport,
    ) -> HeraldResult<()> {
        self.collect(file, report);
        Ok(())
    }

    fn on_run_finish(&mut self) -> HeraldResult<()> {
        debug!(watchers = self.digests.len(), "writing watcher digests");
        let rendered: Vec<String> = self
            .digests
            .iter()
            .map(|(watcher, entries)| {
                render_digest(watcher, entries, self.options.color, self.options.unicode)
            })
            .collect();

        self.writer
            .write_all(rendered.join("\n").as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(write_failed(Self::NAME))
    }
}
