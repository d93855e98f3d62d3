//! Property tests for the region diff engine.

use std::collections::BTreeSet;

use proptest::prelude::*;

use herald::domain::entities::RegionKey;
use herald::domain::services::ChangeBuilder;
use herald::{AnnotatedRegion, JavaSourceParser, MarkerName, RegionExtractor, SourceCode};

/// Body value of each marked method `m{i}`, or `None` when absent
fn revision() -> impl Strategy<Value = Vec<Option<u8>>> {
    proptest::collection::vec(proptest::option::of(0u8..4), 0..=6)
}

fn unit(methods: &[Option<u8>]) -> String {
    let mut text = String::from("import herald.annotations.NotifyChanges;\n\nclass Gen {\n");
    for (idx, body) in methods.iter().enumerate() {
        if let Some(value) = body {
            text.push_str(&format!(
                "    @NotifyChanges(\"w{idx}\")\n    int m{idx}() {{\n        return {value};\n    }}\n\n"
            ));
        }
    }
    text.push_str("}\n");
    text
}

fn regions(methods: &[Option<u8>]) -> Vec<AnnotatedRegion> {
    RegionExtractor::new(JavaSourceParser::new(), MarkerName::default())
        .extract(&SourceCode::from_content("Gen.java", unit(methods)))
        .unwrap()
}

fn keys<'a>(regions: impl IntoIterator<Item = &'a AnnotatedRegion>) -> BTreeSet<RegionKey> {
    regions.into_iter().map(AnnotatedRegion::identity).collect()
}

fn slot(methods: &[Option<u8>], idx: usize) -> Option<u8> {
    methods.get(idx).copied().flatten()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Comparing a revision with itself reports nothing.
    #[test]
    fn property_diff_with_self_is_empty(methods in revision()) {
        let regions = regions(&methods);
        prop_assert!(ChangeBuilder::new().diff(&regions, &regions).is_empty());
    }

    /// PROPERTY: Added, removed and modified are disjoint and match the edit.
    #[test]
    fn property_diff_classifies_each_identity_once(
        previous in revision(),
        current in revision(),
    ) {
        let old = regions(&previous);
        let new = regions(&current);
        let report = ChangeBuilder::new().diff(&old, &new);

        let added = keys(&report.added);
        let removed = keys(&report.removed);
        let modified = keys(report.modified.iter().map(|c| &c.current));

        prop_assert!(added.is_disjoint(&removed));
        prop_assert!(added.is_disjoint(&modified));
        prop_assert!(removed.is_disjoint(&modified));
        prop_assert!(added.is_subset(&keys(&new)));
        prop_assert!(removed.is_subset(&keys(&old)));

        let width = previous.len().max(current.len());
        for idx in 0..width {
            let name = format!("m{idx}");
            let in_added = report.added.iter().any(|r| r.name() == name);
            let in_removed = report.removed.iter().any(|r| r.name() == name);
            let in_modified = report.modified.iter().any(|c| c.current.name() == name);

            match (slot(&previous, idx), slot(&current, idx)) {
                (None, None) => prop_assert!(!in_added && !in_removed && !in_modified),
                (None, Some(_)) => prop_assert!(in_added && !in_removed && !in_modified),
                (Some(_), None) => prop_assert!(in_removed && !in_added && !in_modified),
                (Some(a), Some(b)) => {
                    prop_assert!(!in_added && !in_removed);
                    prop_assert_eq!(in_modified, a != b);
                }
            }
        }
    }

    /// PROPERTY: Revisions with no identity in common are all added and all removed.
    #[test]
    fn property_disjoint_identities(
        evens in proptest::collection::vec(0u8..4, 0..=3),
        odds in proptest::collection::vec(0u8..4, 0..=3),
    ) {
        let mut previous = vec![None; 8];
        let mut current = vec![None; 8];
        for (idx, value) in evens.iter().enumerate() {
            previous[idx * 2] = Some(*value);
        }
        for (idx, value) in odds.iter().enumerate() {
            current[idx * 2 + 1] = Some(*value);
        }
        let old = regions(&previous);
        let new = regions(&current);

        let report = ChangeBuilder::new().diff(&old, &new);
        prop_assert_eq!(&report.added, &new);
        prop_assert_eq!(&report.removed, &old);
        prop_assert!(report.modified.is_empty());
    }

    /// PROPERTY: Every modified entry carries a non-empty line diff.
    #[test]
    fn property_modified_entries_have_changes(
        previous in revision(),
        current in revision(),
    ) {
        let report = ChangeBuilder::new().diff(&regions(&previous), &regions(&current));
        for change in &report.modified {
            prop_assert!(change.diff.has_changes);
            prop_assert!(change.diff.additions > 0 || change.diff.deletions > 0);
            prop_assert_eq!(change.previous.identity(), change.current.identity());
        }
    }

    /// PROPERTY: New and deleted files report every region on one side.
    #[test]
    fn property_inserted_and_deleted_shortcuts(methods in revision()) {
        let regions = regions(&methods);
        let builder = ChangeBuilder::new();

        let inserted = builder.build_inserted(&regions);
        prop_assert_eq!(&inserted.added, &regions);
        prop_assert!(inserted.removed.is_empty() && inserted.modified.is_empty());

        let deleted = builder.build_deleted(&regions);
        prop_assert_eq!(&deleted.removed, &regions);
        prop_assert!(deleted.added.is_empty() && deleted.modified.is_empty());

        prop_assert_eq!(inserted, builder.diff(&[], &regions));
        prop_assert_eq!(deleted, builder.diff(&regions, &[]));
    }
}
