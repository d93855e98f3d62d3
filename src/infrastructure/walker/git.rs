//! Git revision walker
//!
//! Compares the trees of two revisions of a local repository and yields
//! every changed source file, loading blob contents on demand.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use git2::{Delta, Oid, Repository};
use tracing::{debug, trace};

use crate::domain::ports::{FileRevision, ProjectInfo, RevisionWalker};
use crate::error::{HeraldError, HeraldResult};

use super::has_extension;

/// A changed file whose blobs have not been loaded yet
#[derive(Debug, Clone)]
struct PendingFile {
    path: PathBuf,
    status: &'static str,
    previous: Option<Oid>,
    current: Option<Oid>,
}

/// Walker over the changes between two git revisions
pub struct GitWalker {
    repo: Repository,
    project: ProjectInfo,
    pending: VecDeque<PendingFile>,
}

impl GitWalker {
    pub const NAME: &'static str = "git";
    pub const DESCRIPTION: &'static str = "Changes between two revisions of a local git repository";

    /// Open the repository containing `path` and diff `base..head`
    ///
    /// Only files whose extension is in `extensions` are yielded, sorted by
    /// path.
    pub fn open(path: &Path, base: &str, head: &str, extensions: &[String]) -> HeraldResult<Self> {
        if !path.exists() {
            return Err(HeraldError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        let repo = Repository::discover(path)?;
        let pending = changed_files(&repo, base, head, extensions)?;
        debug!(files = pending.len(), base, head, "collected changed files");

        let project = ProjectInfo {
            name: project_name(&repo),
            revision_range: format!("{}..{}", base, head),
        };

        Ok(Self {
            repo,
            project,
            pending: pending.into(),
        })
    }

    /// Number of files not yet yielded
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn load_blob(&self, oid: Option<Oid>) -> HeraldResult<Option<Vec<u8>>> {
        match oid {
            Some(oid) => Ok(Some(self.repo.find_blob(oid)?.content().to_vec())),
            None => Ok(None),
        }
    }
}

impl RevisionWalker for GitWalker {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn project_info(&self) -> &ProjectInfo {
        &self.project
    }

    fn next_revision(&mut self) -> HeraldResult<Option<FileRevision>> {
        let Some(file) = self.pending.pop_front() else {
            return Ok(None);
        };
        Ok(Some(FileRevision {
            description: format!("{} {}", file.status, file.path.display()),
            previous: self.load_blob(file.previous)?,
            current: self.load_blob(file.current)?,
            path: file.path,
        }))
    }
}

fn changed_files(
    repo: &Repository,
    base: &str,
    head: &str,
    extensions: &[String],
) -> HeraldResult<Vec<PendingFile>> {
    let base_tree = repo.revparse_single(base)?.peel_to_commit()?.tree()?;
    let head_tree = repo.revparse_single(head)?.peel_to_commit()?.tree()?;
    let diff = repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;

    let mut pending = Vec::new();
    for delta in diff.deltas() {
        let (status, previous, current) = match delta.status() {
            Delta::Added => ("added", None, Some(delta.new_file().id())),
            Delta::Deleted => ("deleted", Some(delta.old_file().id()), None),
            Delta::Modified | Delta::Renamed | Delta::Copied | Delta::Typechange => (
                "modified",
                Some(delta.old_file().id()),
                Some(delta.new_file().id()),
            ),
            other => {
                trace!(status = ?other, "ignoring delta");
                continue;
            }
        };

        let Some(file_path) = delta.new_file().path().or_else(|| delta.old_file().path()) else {
            continue;
        };
        if !has_extension(file_path, extensions) {
            trace!(path = %file_path.display(), "skipping file with untracked extension");
            continue;
        }

        pending.push(PendingFile {
            path: file_path.to_path_buf(),
            status,
            previous,
            current,
        });
    }
    pending.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(pending)
}

fn project_name(repo: &Repository) -> String {
    repo.workdir()
        .unwrap_or_else(|| repo.path())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| repo.path().display().to_string())
}
