//! Subcommand implementations
//!
//! Library errors are wrapped with `anyhow` context here.

pub mod diff;
pub mod parse;
pub mod run;
pub mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use herald::application::RunSummary;
use herald::config::Config;
use herald::infrastructure::{JsonNotifier, NotifierOptions};
use herald::presentation::ColorWhen;
use herald::ui::views::report::render_run_summary;
use herald::ui::UiContext;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct Globals {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub config: Option<PathBuf>,
}

/// Load the layered configuration, searching for `.herald.toml` from `start`
///
/// Unknown keys are reported on stderr and otherwise ignored.
pub(crate) fn load_config(start: &Path, globals: &Globals) -> Result<Config> {
    let loaded = Config::load_layered(start, globals.config.as_deref())
        .context("failed to load configuration")?;
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
    }
    Ok(loaded.config.with_env_overrides())
}

pub(crate) fn ui_context(globals: &Globals, config: &Config) -> UiContext {
    UiContext::new(globals.json, globals.verbose, globals.color, config)
}

/// Notifiers named on the command line, else `json` under `--json`, else the configured ones
pub(crate) fn select_notifiers(cli: Vec<String>, json: bool, config: &Config) -> Vec<String> {
    if !cli.is_empty() {
        cli
    } else if json {
        vec![JsonNotifier::NAME.to_string()]
    } else {
        config.notify.notifiers.clone()
    }
}

pub(crate) fn notifier_options(ui: &UiContext, config: &Config) -> NotifierOptions {
    NotifierOptions {
        color: ui.color,
        unicode: ui.unicode,
        diff_context: config.notify.diff_context,
    }
}

/// Print the run summary unless the output is machine-readable
pub(crate) fn print_summary(ui: &UiContext, notifiers: &[String], summary: &RunSummary) {
    let machine = ui.json
        || notifiers
            .iter()
            .any(|n| n.trim().eq_ignore_ascii_case(JsonNotifier::NAME));
    if !machine {
        print!("{}", render_run_summary(summary, ui.color, ui.unicode));
    }
}
