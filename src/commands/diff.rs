use std::path::Path;

use anyhow::{Context, Result};

use herald::infrastructure::SnapshotWalker;
use herald::presentation::factory;

use super::{load_config, notifier_options, print_summary, select_notifiers, ui_context, Globals};

pub fn cmd_diff(
    previous: &Path,
    current: &Path,
    notifiers: Vec<String>,
    globals: &Globals,
) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let config = load_config(&cwd, globals)?;
    let ui = ui_context(globals, &config);

    let mut walker = SnapshotWalker::open(previous, current, &config.walker.extensions)
        .with_context(|| {
            format!(
                "failed to compare {} with {}",
                previous.display(),
                current.display()
            )
        })?;

    let names = select_notifiers(notifiers, globals.json, &config);
    let notifiers = factory::create_notifiers(&names, notifier_options(&ui, &config))?;
    let mut use_case = factory::create_process_use_case(&config, notifiers);

    let summary = use_case.execute(&mut walker).context("diff failed")?;
    print_summary(&ui, &names, &summary);
    Ok(())
}
