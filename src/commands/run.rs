use std::path::Path;

use anyhow::{Context, Result};

use herald::infrastructure::GitWalker;
use herald::presentation::factory;

use super::{load_config, notifier_options, print_summary, select_notifiers, ui_context, Globals};

pub fn cmd_run(
    repo: &Path,
    base: Option<String>,
    head: Option<String>,
    notifiers: Vec<String>,
    globals: &Globals,
) -> Result<()> {
    let config = load_config(repo, globals)?;
    let ui = ui_context(globals, &config);

    let base = base.unwrap_or_else(|| config.walker.base.clone());
    let head = head.unwrap_or_else(|| config.walker.head.clone());
    let mut walker = GitWalker::open(repo, &base, &head, &config.walker.extensions)
        .with_context(|| {
            format!(
                "failed to compare {}..{} in {}",
                base,
                head,
                repo.display()
            )
        })?;

    let names = select_notifiers(notifiers, globals.json, &config);
    let notifiers = factory::create_notifiers(&names, notifier_options(&ui, &config))?;
    let mut use_case = factory::create_process_use_case(&config, notifiers);

    let summary = use_case
        .execute(&mut walker)
        .with_context(|| format!("run over {}..{} failed", base, head))?;
    print_summary(&ui, &names, &summary);
    Ok(())
}
