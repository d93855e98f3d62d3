use crate::application::RunSummary;
use crate::domain::entities::{AnnotatedRegion, ChangeReport};
use crate::domain::ports::{FileContext, ProjectInfo};
use crate::ui::components::diff::render_region_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_run_header(
    project: &ProjectInfo,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {}\n",
        Icon::File.colored(supports_color, supports_unicode),
        ColoredText::plain(project.name.as_str())
            .bold()
            .render(supports_color),
        ColoredText::dim(format!("({})", project.revision_range)).render(supports_color)
    )
}

/// One block per file; empty when nothing changed
pub fn render_file_report(
    file: FileContext<'_>,
    report: &ChangeReport,
    diff_context: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "{} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::info(file.description).render(supports_color)
    );

    for region in &report.added {
        out.push_str(&region_line(Icon::Added, region, supports_color, supports_unicode));
    }
    for region in &report.removed {
        out.push_str(&region_line(Icon::Removed, region, supports_color, supports_unicode));
    }
    for change in &report.modified {
        let line = region_line(
            Icon::Modified,
            &change.current,
            supports_color,
            supports_unicode,
        );
        out.push_str(line.trim_end_matches('\n'));
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(change.diff.summary()).render(supports_color)
        ));
        for diff_line in render_region_diff(&change.diff, diff_context, supports_color).lines() {
            out.push_str("      ");
            out.push_str(diff_line);
            out.push('\n');
        }
    }
    out
}

pub fn render_run_summary(
    summary: &RunSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let files = format!(
        "{} file{} checked",
        summary.files_processed,
        if summary.files_processed == 1 { "" } else { "s" }
    );
    let skipped = if summary.files_skipped > 0 {
        format!(", {} skipped", summary.files_skipped)
    } else {
        String::new()
    };

    if !summary.has_changes() {
        return format!(
            "{} No watched regions changed ({}{})\n",
            Icon::Success.colored(supports_color, supports_unicode),
            files,
            skipped
        );
    }

    format!(
        "{} {} added, {} removed, {} modified ({}{})\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::success(summary.added.to_string()).render(supports_color),
        ColoredText::error(summary.removed.to_string()).render(supports_color),
        ColoredText::warning(summary.modified.to_string()).render(supports_color),
        files,
        skipped
    )
}

fn region_line(
    icon: Icon,
    region: &AnnotatedRegion,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "  {} {}\n",
        icon.colored(supports_color, supports_unicode),
        region
    )
}
