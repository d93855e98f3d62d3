//! Scenario: one file, two revisions, compared region by region.

use herald::domain::services::ChangeBuilder;
use herald::DeclarationKind;

use crate::common::*;

#[test]
fn unchanged_file_reports_nothing() {
    let previous = regions("Billing.java", BILLING_V1);
    let current = regions("Billing.java", BILLING_V1);

    let report = ChangeBuilder::new().diff(&previous, &current);

    assert!(report.added.is_empty());
    assert!(report.removed.is_empty());
    assert!(report.modified.is_empty());
}

#[test]
fn edited_method_body_is_modified() {
    let previous = regions("Billing.java", BILLING_V1);
    let current = regions("Billing.java", BILLING_V2);

    let report = ChangeBuilder::new().diff(&previous, &current);

    assert!(report.added.is_empty());
    assert!(report.removed.is_empty());
    assert_eq!(report.modified.len(), 1);

    let change = &report.modified[0];
    assert_eq!(change.current.kind(), DeclarationKind::Method);
    assert_eq!(change.current.name(), "foo");
    assert_eq!(change.current.scope(), "Billing");
    assert_eq!(change.diff.additions, 1);
    assert_eq!(change.diff.deletions, 1);
    assert_eq!(change.watchers(), vec!["alice"]);
}

#[test]
fn edits_outside_watched_regions_are_ignored() {
    let previous = regions("Billing.java", BILLING_V1);
    let current = regions("Billing.java", BILLING_V1_UNWATCHED_EDIT);

    assert!(ChangeBuilder::new().diff(&previous, &current).is_empty());
}

#[test]
fn new_file_reports_every_region_as_added() {
    let current = regions("Ledger.java", LEDGER);
    assert_eq!(current.len(), 2);

    let report = ChangeBuilder::new().build_inserted(&current);

    assert_eq!(report.added, current);
    assert!(report.removed.is_empty());
    assert!(report.modified.is_empty());
}

#[test]
fn constant_reference_resolves_to_its_watchers() {
    let ledger = regions("Ledger.java", LEDGER);

    let balance = ledger
        .iter()
        .find(|r| r.name() == "balance")
        .expect("balance region");
    assert_eq!(balance.kind(), DeclarationKind::Field);
    assert_eq!(balance.watchers(), ["alice", "bob"]);
}

#[test]
fn doc_comment_is_part_of_the_region() {
    let ledger = regions("Ledger.java", LEDGER);

    let post = ledger.iter().find(|r| r.name() == "post").expect("post region");
    assert_eq!(post.content()[0].trim(), "/**");
    assert_eq!(post.content().last().map(|l| l.trim()), Some("}"));
    assert_eq!(post.watchers(), ["carol"]);
}

#[test]
fn deleted_file_reports_every_region_as_removed() {
    let previous = regions("Ledger.java", LEDGER);

    let report = ChangeBuilder::new().build_deleted(&previous);

    assert_eq!(report.removed.len(), 2);
    assert!(report.added.is_empty());
    assert!(report.modified.is_empty());
}

#[test]
fn renamed_method_is_removed_and_added() {
    let previous = regions("Billing.java", BILLING_V1);
    let renamed = BILLING_V1.replace("int foo()", "int bar()");
    let current = regions("Billing.java", &renamed);

    let report = ChangeBuilder::new().diff(&previous, &current);

    assert_eq!(report.added.len(), 1);
    assert_eq!(report.added[0].name(), "bar");
    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].name(), "foo");
    assert!(report.modified.is_empty());
}

#[test]
fn methods_in_enum_constant_bodies_are_tracked() {
    let level = |threshold: u8| {
        format!(
            r#"import herald.annotations.NotifyChanges;

enum Level {{
    LOW,
    HIGH {{
        @NotifyChanges("alice")
        int threshold() {{
            return {threshold};
        }}
    }};
}}
"#
        )
    };

    let previous = regions("Level.java", &level(5));
    assert_eq!(previous.len(), 1);
    assert_eq!(previous[0].qualified_name(), "Level.HIGH.threshold");

    let current = regions("Level.java", &level(9));
    let report = ChangeBuilder::new().diff(&previous, &current);
    assert_eq!(report.modified.len(), 1);
    assert_eq!(report.modified[0].current.scope(), "Level.HIGH");
}
