use crossterm::style::Stylize;

use crate::domain::services::{DiffLine, DiffResult, DiffTag};
use crate::ui::theme;

/// Render a region diff as unified hunks with source line numbers
///
/// Each hunk keeps `context` unchanged lines around its changes.
pub fn render_region_diff(diff: &DiffResult, context: usize, supports_color: bool) -> String {
    let width = diff
        .lines
        .iter()
        .flat_map(|l| [l.old_line, l.new_line])
        .flatten()
        .max()
        .unwrap_or(1)
        .to_string()
        .len();

    let mut out = String::new();
    for hunk in diff.hunks(context) {
        out.push_str(&color_line(&hunk_header(hunk), None, supports_color));
        out.push('\n');

        for line in hunk {
            let old_col = number_column(line.old_line, width);
            let new_col = number_column(line.new_line, width);
            let text = format!("{old_col} {new_col} {} {}", line.tag.sign(), line.content);
            out.push_str(&color_line(text.trim_end(), Some(line.tag), supports_color));
            out.push('\n');
        }
    }
    out
}

fn hunk_header(hunk: &[DiffLine]) -> String {
    let old: Vec<usize> = hunk.iter().filter_map(|l| l.old_line).collect();
    let new: Vec<usize> = hunk.iter().filter_map(|l| l.new_line).collect();
    format!(
        "@@ -{},{} +{},{} @@",
        old.first().copied().unwrap_or(0),
        old.len(),
        new.first().copied().unwrap_or(0),
        new.len()
    )
}

fn number_column(number: Option<usize>, width: usize) -> String {
    number
        .map(|n| format!("{:>width$}", n, width = width))
        .unwrap_or_else(|| " ".repeat(width))
}

fn color_line(s: &str, tag: Option<DiffTag>, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    match tag {
        None => format!("{}", s.with(theme::colors::INFO)),
        Some(DiffTag::Delete) => format!("{}", s.with(theme::colors::ERROR)),
        Some(DiffTag::Insert) => format!("{}", s.with(theme::colors::SUCCESS)),
        Some(DiffTag::Equal) => format!("{}", s.with(theme::colors::DIM)),
    }
}
