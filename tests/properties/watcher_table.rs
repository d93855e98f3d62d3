//! Property tests for watcher constant resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use herald::domain::ports::SourceParser;
use herald::domain::services::{DeclarationCollector, WatcherTable};
use herald::{HeraldError, HeraldResult, JavaSourceParser, MarkerName, SourceCode};

fn constant_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[A-Z][A-Z0-9_]{0,8}", 1..=max)
        .prop_map(|names: BTreeSet<String>| names.into_iter().collect())
}

fn watcher() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{0,10}"
}

fn unit(fields: &[String], marker_argument: &str) -> String {
    let mut text = String::from("import herald.annotations.NotifyChanges;\n\nclass Gen {\n");
    for field in fields {
        text.push_str("    ");
        text.push_str(field);
        text.push('\n');
    }
    text.push_str(&format!(
        "\n    @NotifyChanges({marker_argument})\n    void watched() {{}}\n}}\n"
    ));
    text
}

fn table(text: &str) -> HeraldResult<WatcherTable> {
    let tree = JavaSourceParser::new().parse(&SourceCode::from_content("Gen.java", text))?;
    WatcherTable::build(&tree)
}

fn watchers_of_marked(text: &str) -> HeraldResult<Vec<String>> {
    let source = SourceCode::from_content("Gen.java", text);
    let tree = JavaSourceParser::new().parse(&source)?;
    let regions = DeclarationCollector::new(MarkerName::default()).collect(&source, &tree)?;
    Ok(regions
        .into_iter()
        .find(|r| r.name() == "watched")
        .map(|r| r.watchers().to_vec())
        .unwrap_or_default())
}

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every literal constant resolves to a one-element list of its value.
    #[test]
    fn property_literal_constants_resolve(
        names in constant_names(6),
        values in proptest::collection::vec(watcher(), 6),
        pick in 0usize..6,
    ) {
        let fields: Vec<String> = names
            .iter()
            .zip(&values)
            .map(|(name, value)| format!("static final String {name} = \"{value}\";"))
            .collect();
        let pick = pick % names.len();
        let text = unit(&fields, &names[pick]);

        let table = table(&text).unwrap();
        prop_assert_eq!(table.len(), names.len());
        for (name, value) in names.iter().zip(&values) {
            prop_assert_eq!(table.resolve(name), Some(std::slice::from_ref(value)));
        }
        prop_assert_eq!(watchers_of_marked(&text).unwrap(), vec![values[pick].clone()]);
    }

    /// PROPERTY: A chain of references copies the list it ends at.
    #[test]
    fn property_reference_chain_copies_list(
        names in constant_names(5),
        values in proptest::collection::vec(watcher(), 1..=4),
    ) {
        let mut fields = vec![format!(
            "static final String[] {} = {{{}}};",
            names[0],
            quoted(&values)
        )];
        for pair in names.windows(2) {
            fields.push(format!("static final String[] {} = {};", pair[1], pair[0]));
        }
        let last = &names[names.len() - 1];
        let text = unit(&fields, last);

        let table = table(&text).unwrap();
        for name in &names {
            prop_assert_eq!(table.resolve(name), Some(values.as_slice()));
        }
        prop_assert_eq!(watchers_of_marked(&text).unwrap(), values);
    }

    /// PROPERTY: Declaring the same constant twice fails, wherever the second one lives.
    #[test]
    fn property_duplicate_definition_fails(
        name in "[A-Z][A-Z0-9_]{0,8}",
        first in watcher(),
        second in watcher(),
        nested in any::<bool>(),
    ) {
        let duplicate = format!("static final String {name} = \"{second}\";");
        let fields = if nested {
            vec![
                format!("static final String {name} = \"{first}\";"),
                format!("static class Inner {{ {duplicate} }}"),
            ]
        } else {
            vec![format!("static final String {name} = \"{first}\";"), duplicate]
        };
        let text = unit(&fields, &format!("\"{first}\""));

        let result = table(&text);
        prop_assert!(
            matches!(&result, Err(HeraldError::DuplicateDefinition { name: n }) if n == &name),
            "unexpected result: {:?}",
            result
        );
    }

    /// PROPERTY: Referencing a constant declared later, or never, fails.
    #[test]
    fn property_undefined_reference_fails(
        names in constant_names(4).prop_filter("two names", |n| n.len() >= 2),
        value in watcher(),
        forward in any::<bool>(),
    ) {
        let (source, target) = (&names[0], &names[1]);
        let mut fields = vec![format!("static final String {source} = {target};")];
        if forward {
            fields.push(format!("static final String {target} = \"{value}\";"));
        }
        let text = unit(&fields, &format!("\"{value}\""));

        let result = table(&text);
        prop_assert!(
            matches!(&result, Err(HeraldError::UndefinedReference { name }) if name == target),
            "unexpected result: {:?}",
            result
        );
    }

    /// PROPERTY: A marker naming an unknown constant fails extraction.
    #[test]
    fn property_marker_reference_must_exist(name in "[A-Z][A-Z0-9_]{0,8}") {
        let text = unit(&[], &name);
        let result = watchers_of_marked(&text);
        prop_assert!(
            matches!(&result, Err(HeraldError::UndefinedReference { name: n }) if n == &name),
            "unexpected result: {:?}",
            result
        );
    }

    /// PROPERTY: Non-constant fields never enter the table.
    #[test]
    fn property_non_constants_are_ignored(
        names in constant_names(4),
        value in watcher(),
        modifier in prop_oneof![Just("static"), Just("final"), Just("")],
    ) {
        let fields: Vec<String> = names
            .iter()
            .map(|name| format!("{modifier} String {name} = \"{value}\";"))
            .collect();
        let text = unit(&fields, &format!("\"{value}\""));

        prop_assert!(table(&text).unwrap().is_empty());
    }
}
