//! Console Notifier
//!
//! Prints one block per changed file, with line-numbered diffs of modified
//! regions. Files without region changes print nothing.

use std::io::{self, Write};

use crate::domain::entities::ChangeReport;
use crate::domain::ports::{ChangeNotifier, FileContext, ProjectInfo};
use crate::error::HeraldResult;
use crate::ui::views::report::{render_file_report, render_run_header};

use super::{write_failed, NotifierOptions};

pub struct ConsoleNotifier {
    writer: Box<dyn Write + Send>,
    options: NotifierOptions,
}

impl ConsoleNotifier {
    pub const NAME: &'static str = "console";
    pub const DESCRIPTION: &'static str =
        "Prints changed regions with line-numbered diffs to the terminal";

    pub fn stdout(options: NotifierOptions) -> Self {
        Self::with_writer(io::stdout(), options)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, options: NotifierOptions) -> Self {
        Self {
            writer: Box::new(writer),
            options,
        }
    }

    fn write(&mut self, text: &str) -> HeraldResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(write_failed(Self::NAME))
    }

    fn report(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        let text = render_file_report(
            file,
            report,
            self.options.diff_context,
            self.options.color,
            self.options.unicode,
        );
        self.write(&text)
    }
}

impl ChangeNotifier for ConsoleNotifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn on_run_start(&mut self, project: &ProjectInfo) -> HeraldResult<()> {
        let text = render_run_header(project, self.options.color, self.options.unicode);
        self.write(&text)
    }

    fn on_changes(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.report(file, report)
    }

    fn on_file_added(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.report(file, report)
    }

    fn on_file_deleted(
        &mut self,
        file: FileContext<'_>,
        report: &ChangeReport,
    ) -> HeraldResult<()> {
        self.report(file, report)
    }

    fn on_run_finish(&mut self) -> HeraldResult<()> {
        Ok(())
    }
}
