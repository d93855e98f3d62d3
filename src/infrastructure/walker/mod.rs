//! Revision walkers
//!
//! - `GitWalker` - two revisions of a local git repository
//! - `SnapshotWalker` - two files or two directory trees on disk

mod git;
mod snapshot;

pub use git::GitWalker;
pub use snapshot::SnapshotWalker;

use std::path::Path;

/// Names and descriptions of every walker
pub fn available_walkers() -> Vec<(&'static str, &'static str)> {
    vec![
        (GitWalker::NAME, GitWalker::DESCRIPTION),
        (SnapshotWalker::NAME, SnapshotWalker::DESCRIPTION),
    ]
}

/// Whether `path` ends in one of `extensions` (compared without the dot, case-insensitively)
///
/// An empty extension list accepts every file.
pub(crate) fn has_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}
