use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A registered component: name plus one-line description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

pub fn render_verify(
    marker: &str,
    parser: Component<'_>,
    notifiers: &[Component<'_>],
    walkers: &[Component<'_>],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    section(&mut out, "Marker", supports_color);
    out.push_str(&format!(
        "{} {}\n",
        Icon::File.colored(supports_color, supports_unicode),
        marker
    ));

    let parsers = [parser];
    let sections = [
        ("Parser", &parsers[..]),
        ("Notifiers", notifiers),
        ("Walkers", walkers),
    ];
    for (title, items) in sections {
        out.push('\n');
        section(&mut out, title, supports_color);
        for item in items {
            out.push_str(&format!(
                "{} {}\n  {}\n",
                Icon::File.colored(supports_color, supports_unicode),
                item.name,
                ColoredText::dim(item.description).render(supports_color)
            ));
        }
    }
    out
}

fn section(out: &mut String, title: &str, supports_color: bool) {
    out.push_str(&ColoredText::info(title).bold().render(supports_color));
    out.push('\n');
}
