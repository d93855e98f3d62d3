//! Change Notifier Implementations
//!
//! Provides concrete implementations of ChangeNotifier:
//! - ConsoleNotifier: Human-readable report with line-numbered diffs
//! - JsonNotifier: NDJSON events for CI/automation
//! - DigestNotifier: One summary per watcher at the end of the run

mod console;
mod digest;
mod json;

pub use console::ConsoleNotifier;
pub use digest::DigestNotifier;
pub use json::JsonNotifier;

use std::io;

use crate::domain::ports::ChangeNotifier;
use crate::error::{HeraldError, HeraldResult};

/// Rendering options shared by the text notifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierOptions {
    pub color: bool,
    pub unicode: bool,
    /// Unchanged lines shown around each diff hunk
    pub diff_context: usize,
}

impl Default for NotifierOptions {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
            diff_context: 3,
        }
    }
}

/// Names and descriptions of every notifier `notifier_by_name` accepts
pub fn available_notifiers() -> Vec<(&'static str, &'static str)> {
    vec![
        (ConsoleNotifier::NAME, ConsoleNotifier::DESCRIPTION),
        (JsonNotifier::NAME, JsonNotifier::DESCRIPTION),
        (DigestNotifier::NAME, DigestNotifier::DESCRIPTION),
    ]
}

/// Create a notifier writing to stdout
pub fn notifier_by_name(
    name: &str,
    options: NotifierOptions,
) -> HeraldResult<Box<dyn ChangeNotifier>> {
    match name.trim().to_ascii_lowercase().as_str() {
        ConsoleNotifier::NAME => Ok(Box::new(ConsoleNotifier::stdout(options))),
        JsonNotifier::NAME => Ok(Box::new(JsonNotifier::stdout())),
        DigestNotifier::NAME => Ok(Box::new(DigestNotifier::stdout(options))),
        _ => Err(HeraldError::UnknownNotifier {
            name: name.to_string(),
            available: available_notifiers()
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

fn write_failed(notifier: &'static str) -> impl FnOnce(io::Error) -> HeraldError {
    move |err| HeraldError::Notifier {
        notifier: notifier.to_string(),
        message: err.to_string(),
    }
}
