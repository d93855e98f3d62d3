//! ChangeReport entity - outcome of comparing one logical file
//!
//! Added and removed entries carry a single region; modified entries carry
//! both revisions plus a line diff of their contents.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::domain::entities::AnnotatedRegion;
use crate::domain::services::DiffResult;

/// How a region changed between revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl ChangeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A region whose content differs between revisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionChange {
    pub previous: AnnotatedRegion,
    pub current: AnnotatedRegion,
    pub diff: DiffResult,
}

impl RegionChange {
    /// Watchers of either revision, current first, without duplicates
    pub fn watchers(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.current
            .watchers()
            .iter()
            .chain(self.previous.watchers())
            .filter(|w| seen.insert(w.as_str()))
            .cloned()
            .collect()
    }
}

/// Added, removed and modified regions of one logical file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeReport {
    pub added: Vec<AnnotatedRegion>,
    pub removed: Vec<AnnotatedRegion>,
    pub modified: Vec<RegionChange>,
}

impl ChangeReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Number of entries across all three sets
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    /// Every watcher mentioned by the report, sorted
    pub fn watchers(&self) -> BTreeSet<String> {
        let mut all = BTreeSet::new();
        for region in self.added.iter().chain(&self.removed) {
            all.extend(region.watchers().iter().cloned());
        }
        for change in &self.modified {
            all.extend(change.watchers());
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Declaration, DeclarationHeader, SourceCode};
    use crate::domain::services::Differ;
    use crate::domain::value_objects::Span;

    fn region(source: &SourceCode, name: &str, line: usize, watchers: &[&str]) -> AnnotatedRegion {
        let decl = Declaration::method(
            name,
            DeclarationHeader {
                span: Some(Span::from_coords(line, 0, line, 1).unwrap()),
                ..Default::default()
            },
        );
        let watchers = watchers.iter().map(|w| w.to_string()).collect();
        AnnotatedRegion::from_declaration(source, &decl, name, "Foo", Some(watchers)).unwrap()
    }

    #[test]
    fn change_kind_labels() {
        assert_eq!(ChangeKind::Modified.to_string(), "modified");
        assert_eq!(serde_json::to_string(&ChangeKind::Added).unwrap(), "\"added\"");
    }

    #[test]
    fn modified_watchers_merge_both_revisions() {
        let old = SourceCode::from_lines("Foo.java", &["a"]);
        let new = SourceCode::from_lines("Foo.java", &["b"]);
        let previous = region(&old, "run", 0, &["alice", "bob"]);
        let current = region(&new, "run", 0, &["carol", "alice"]);
        let change = RegionChange {
            diff: Differ::new().diff_regions(&previous, &current),
            previous,
            current,
        };
        assert_eq!(change.watchers(), vec!["carol", "alice", "bob"]);
    }

    #[test]
    fn report_totals_and_watchers() {
        let src = SourceCode::from_lines("Foo.java", &["a", "b"]);
        let report = ChangeReport {
            added: vec![region(&src, "run", 0, &["alice"])],
            removed: vec![region(&src, "stop", 1, &["bob"])],
            modified: Vec::new(),
        };

        assert!(!report.is_empty());
        assert_eq!(report.total(), 2);
        assert_eq!(
            report.watchers().into_iter().collect::<Vec<_>>(),
            vec!["alice", "bob"]
        );
    }
}
