//! Scenario: a run between two commits of a git repository.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use herald::infrastructure::JsonNotifier;
use herald::{GitWalker, ProcessUseCase};

use crate::common::*;

fn commit(repo: &Repository, path: &str, content: &str) {
    let root = repo.workdir().unwrap().to_path_buf();
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(&full, content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(path)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "change", &tree, &parents)
        .unwrap();
}

#[test]
fn modified_method_between_commits() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit(&repo, "src/Billing.java", BILLING_V1);
    commit(&repo, "src/Billing.java", BILLING_V2);

    let mut walker = GitWalker::open(dir.path(), "HEAD~1", "HEAD", &["java".to_string()]).unwrap();
    let summary = ProcessUseCase::new(extractor(), Vec::new())
        .execute(&mut walker)
        .unwrap();

    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.modified, 1);
    assert_eq!(summary.added + summary.removed, 0);
}

#[test]
fn json_notifier_streams_region_events() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit(&repo, "src/Billing.java", BILLING_V1);
    commit(&repo, "src/Ledger.java", LEDGER);

    let out = tempfile::NamedTempFile::new().unwrap();
    let writer = out.reopen().unwrap();
    let notifier = JsonNotifier::with_writer(writer);

    let mut walker = GitWalker::open(dir.path(), "HEAD~1", "HEAD", &["java".to_string()]).unwrap();
    ProcessUseCase::new(extractor(), vec![Box::new(notifier)])
        .execute(&mut walker)
        .unwrap();

    let events = json_events(&fs::read_to_string(out.path()).unwrap());
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(kinds, vec!["start", "file", "region", "region", "complete"]);

    assert_eq!(events[1]["status"], "added");
    assert_eq!(events[2]["change"], "added");
    assert_eq!(events[2]["name"], "balance");
    assert_eq!(events[2]["watchers"], serde_json::json!(["alice", "bob"]));
    assert_eq!(events[4]["status"], "changed");
    assert_eq!(events[4]["added"], 2);
}
