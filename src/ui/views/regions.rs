use crate::domain::entities::AnnotatedRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_regions(
    source: &str,
    regions: &[AnnotatedRegion],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {} {}\n",
        Icon::File.colored(supports_color, supports_unicode),
        ColoredText::plain(source).bold().render(supports_color),
        ColoredText::dim(format!(
            "({} region{})",
            regions.len(),
            if regions.len() == 1 { "" } else { "s" }
        ))
        .render(supports_color)
    );

    if regions.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("no marked declarations").render(supports_color)
        ));
    }
    for region in regions {
        out.push_str(&format!("  {}\n", region));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Declaration, DeclarationHeader, SourceCode};
    use crate::domain::value_objects::Span;

    #[test]
    fn lists_regions_with_watchers() {
        let src = SourceCode::from_lines("Foo.java", &["class Foo {}"]);
        let decl = Declaration::type_decl(
            "Foo",
            DeclarationHeader {
                span: Some(Span::from_coords(0, 0, 0, 12).unwrap()),
                ..Default::default()
            },
        );
        let region = AnnotatedRegion::from_declaration(
            &src,
            &decl,
            "Foo",
            "",
            Some(vec!["alice".into(), "bob".into()]),
        )
        .unwrap();

        let rendered = render_regions("Foo.java", &[region], false, false);
        assert_eq!(
            rendered,
            "* Foo.java (1 region)\n  TYPE 'Foo' {line=0, column=0} - {line=0, column=12} [alice, bob]\n"
        );
    }

    #[test]
    fn empty_unit_says_so() {
        let rendered = render_regions("Empty.java", &[], false, false);
        assert!(rendered.contains("(0 regions)"));
        assert!(rendered.contains("no marked declarations"));
    }
}
