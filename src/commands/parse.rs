use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use herald::presentation::factory;
use herald::ui::json;
use herald::ui::views::regions::render_regions;

use super::{load_config, ui_context, Globals};

pub fn cmd_parse(file: &Path, globals: &Globals) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let config = load_config(&cwd, globals)?;
    let ui = ui_context(globals, &config);

    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let extractor = factory::create_extractor(&config);
    let regions = extractor
        .extract_bytes(file, bytes)
        .with_context(|| format!("failed to extract regions from {}", file.display()))?;

    if ui.json {
        json::emit(serde_json::json!({
            "event": "regions",
            "command": "parse",
            "path": file.display().to_string(),
            "marker": extractor.marker().qualified_name(),
            "regions": regions,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_regions(&file.display().to_string(), &regions, ui.color, ui.unicode)
    );
    Ok(())
}
