use crate::domain::entities::ChangeKind;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One change seen by a watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    pub kind: ChangeKind,
    pub file: String,
    /// Rendered region, e.g. `METHOD 'Foo.run'`
    pub region: String,
}

pub fn render_digest(
    watcher: &str,
    entries: &[DigestEntry],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {} {}\n",
        Icon::Watcher.colored(supports_color, supports_unicode),
        ColoredText::plain(watcher).bold().render(supports_color),
        ColoredText::dim(format!(
            "({} change{})",
            entries.len(),
            if entries.len() == 1 { "" } else { "s" }
        ))
        .render(supports_color)
    );

    for entry in entries {
        let icon = match entry.kind {
            ChangeKind::Added => Icon::Added,
            ChangeKind::Removed => Icon::Removed,
            ChangeKind::Modified => Icon::Modified,
        };
        out.push_str(&format!(
            "  {} {} {}\n",
            icon.colored(supports_color, supports_unicode),
            ColoredText::dim(entry.file.as_str()).render(supports_color),
            entry.region
        ));
    }
    out
}
