use anyhow::{bail, Context, Result};

use herald::domain::ports::SourceParser;
use herald::infrastructure::{available_notifiers, available_walkers};
use herald::presentation::factory;
use herald::ui::json;
use herald::ui::views::verify::{render_verify, Component};

use super::{load_config, ui_context, Globals};

pub fn cmd_verify(globals: &Globals) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let config = load_config(&cwd, globals)?;
    let ui = ui_context(globals, &config);

    let extractor = factory::create_extractor(&config);
    let parser = extractor.parser();
    let marker = extractor.marker().qualified_name();
    let extensions: Vec<String> = parser
        .extensions()
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect();
    let source_files = format!("Source files: {}", extensions.join(", "));
    let notifiers = available_notifiers();
    let walkers = available_walkers();

    let unknown: Vec<&String> = config
        .notify
        .notifiers
        .iter()
        .filter(|name| {
            !notifiers
                .iter()
                .any(|(known, _)| name.trim().eq_ignore_ascii_case(known))
        })
        .collect();

    if ui.json {
        json::emit(serde_json::json!({
            "event": "verify",
            "command": "verify",
            "marker": marker,
            "parser": {
                "language": parser.language(),
                "extensions": parser.extensions(),
            },
            "configured_notifiers": config.notify.notifiers,
            "notifiers": list(&notifiers),
            "walkers": list(&walkers),
            "unknown_notifiers": unknown,
        }))?;
    } else {
        print!(
            "{}",
            render_verify(
                &marker,
                Component {
                    name: parser.language(),
                    description: &source_files,
                },
                &to_components(&notifiers),
                &to_components(&walkers),
                ui.color,
                ui.unicode,
            )
        );
    }

    if !unknown.is_empty() {
        let names: Vec<&str> = unknown.iter().map(|n| n.as_str()).collect();
        bail!("configured notifiers are not available: {}", names.join(", "));
    }
    Ok(())
}

fn list(items: &[(&'static str, &'static str)]) -> Vec<serde_json::Value> {
    items
        .iter()
        .map(|&(name, description)| serde_json::json!({ "name": name, "description": description }))
        .collect()
}

fn to_components(items: &[(&'static str, &'static str)]) -> Vec<Component<'static>> {
    items
        .iter()
        .map(|&(name, description)| Component { name, description })
        .collect()
}
