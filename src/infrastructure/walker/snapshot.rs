//! Snapshot walker
//!
//! Compares two files, or two directory trees, on disk. Directory trees are
//! walked with `ignore` so `.gitignore`d and hidden files are left out, and
//! files are paired by their path relative to each root.

use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::domain::ports::{FileRevision, ProjectInfo, RevisionWalker};
use crate::error::{HeraldError, HeraldResult};

use super::has_extension;

/// Both on-disk locations of one logical file
#[derive(Debug, Clone)]
struct PairedFile {
    relative: PathBuf,
    previous: Option<PathBuf>,
    current: Option<PathBuf>,
}

/// Walker over two on-disk snapshots
#[derive(Debug)]
pub struct SnapshotWalker {
    project: ProjectInfo,
    pending: VecDeque<PairedFile>,
}

impl SnapshotWalker {
    pub const NAME: &'static str = "snapshot";
    pub const DESCRIPTION: &'static str = "Changes between two files or two directory trees on disk";

    /// Pair `previous` with `current`
    ///
    /// Two files are compared directly regardless of extension. Two
    /// directories are compared file by file, keeping only `extensions`.
    pub fn open(previous: &Path, current: &Path, extensions: &[String]) -> HeraldResult<Self> {
        for path in [previous, current] {
            if !path.exists() {
                return Err(HeraldError::PathNotFound {
                    path: path.to_path_buf(),
                });
            }
        }

        let pending = match (previous.is_dir(), current.is_dir()) {
            (false, false) => {
                let relative = current
                    .file_name()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| current.to_path_buf());
                vec![PairedFile {
                    relative,
                    previous: Some(previous.to_path_buf()),
                    current: Some(current.to_path_buf()),
                }]
            }
            (true, true) => pair_directories(previous, current, extensions)?,
            _ => {
                return Err(HeraldError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "cannot compare a file with a directory: {} and {}",
                        previous.display(),
                        current.display()
                    ),
                )))
            }
        };
        debug!(files = pending.len(), "paired snapshot files");

        let project = ProjectInfo {
            name: snapshot_name(current),
            revision_range: format!("{}..{}", previous.display(), current.display()),
        };

        Ok(Self {
            project,
            pending: pending.into(),
        })
    }
}

impl RevisionWalker for SnapshotWalker {
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
        while let Some(file) = self.pending.pop_front() {
            let previous = file.previous.as_deref().map(fs::read).transpose()?;
            let current = file.current.as_deref().map(fs::read).transpose()?;

            let status = match (&previous, &current) {
                (Some(old), Some(new)) if old == new => {
                    trace!(path = %file.relative.display(), "skipping identical file");
                    continue;
                }
                (Some(_), Some(_)) => "modified",
                (None, Some(_)) => "added",
                (Some(_), None) => "deleted",
                (None, None) => continue,
            };

            return Ok(Some(FileRevision {
                description: format!("{} {}", status, file.relative.display()),
                path: file.relative,
                previous,
                current,
            }));
        }
        Ok(None)
    }
}

fn pair_directories(
    previous: &Path,
    current: &Path,
    extensions: &[String],
) -> HeraldResult<Vec<PairedFile>> {
    let mut paired: BTreeMap<PathBuf, PairedFile> = BTreeMap::new();

    for (full, relative) in list_files(previous, extensions)? {
        paired
            .entry(relative.clone())
            .or_insert_with(|| PairedFile {
                relative,
                previous: None,
                current: None,
            })
            .previous = Some(full);
    }
    for (full, relative) in list_files(current, extensions)? {
        paired
            .entry(relative.clone())
            .or_insert_with(|| PairedFile {
                relative,
                previous: None,
                current: None,
            })
            .current = Some(full);
    }

    Ok(paired.into_values().collect())
}

/// Files under `root` as (full path, path relative to `root`)
fn list_files(root: &Path, extensions: &[String]) -> HeraldResult<Vec<(PathBuf, PathBuf)>> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).require_git(false).build() {
        let entry = entry.map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if !has_extension(path, extensions) {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        files.push((path.to_path_buf(), relative.to_path_buf()));
    }
    Ok(files)
}

fn snapshot_name(path: &Path) -> String {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let base = if resolved.is_dir() {
        Some(resolved.as_path())
    } else {
        resolved.parent()
    };
    base.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn drain(walker: &mut SnapshotWalker) -> Vec<FileRevision> {
        let mut all = Vec::new();
        while let Some(file) = walker.next_revision().unwrap() {
            all.push(file);
        }
        all
    }

    #[test]
    fn compares_two_files() {
        let dir = tempdir().unwrap();
        write(dir.path(), "old/Foo.java", "class Foo {}\n");
        write(dir.path(), "new/Foo.java", "class Foo { int x; }\n");

        let mut walker = SnapshotWalker::open(
            &dir.path().join("old/Foo.java"),
            &dir.path().join("new/Foo.java"),
            &[],
        )
        .unwrap();
        let files = drain(&mut walker);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, PathBuf::from("Foo.java"));
        assert_eq!(files[0].description, "modified Foo.java");
        assert!(files[0].has_previous() && files[0].has_current());
    }

    #[test]
    fn pairs_directories_by_relative_path() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("old");
        let new = dir.path().join("new");
        write(&old, "a/Same.java", "class Same {}\n");
        write(&old, "a/Changed.java", "class Changed {}\n");
        write(&old, "Gone.java", "class Gone {}\n");
        write(&new, "a/Same.java", "class Same {}\n");
        write(&new, "a/Changed.java", "class Changed { }\n");
        write(&new, "b/New.java", "class New {}\n");
        write(&new, "notes.txt", "ignored by extension\n");

        let mut walker = SnapshotWalker::open(&old, &new, &["java".to_string()]).unwrap();
        let described: Vec<String> = drain(&mut walker)
            .into_iter()
            .map(|f| f.description)
            .collect();

        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            described,
            vec![
                "deleted Gone.java".to_string(),
                format!("modified a{sep}Changed.java"),
                format!("added b{sep}New.java"),
            ]
        );
    }

    #[test]
    fn respects_gitignore() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("old");
        let new = dir.path().join("new");
        write(&old, "Keep.java", "class Keep {}\n");
        write(&new, "Keep.java", "class Keep {}\n");
        write(&new, ".gitignore", "build/\n");
        write(&new, "build/Generated.java", "class Generated {}\n");

        let mut walker = SnapshotWalker::open(&old, &new, &["java".to_string()]).unwrap();
        assert!(drain(&mut walker).is_empty());
    }

    #[test]
    fn missing_path_and_mixed_kinds_are_errors() {
        let dir = tempdir().unwrap();
        write(dir.path(), "Foo.java", "class Foo {}\n");

        let missing = SnapshotWalker::open(&dir.path().join("nope"), dir.path(), &[]);
        assert!(matches!(missing, Err(HeraldError::PathNotFound { .. })));

        let mixed = SnapshotWalker::open(&dir.path().join("Foo.java"), dir.path(), &[]);
        assert!(matches!(mixed, Err(HeraldError::Io(_))));
    }

    #[test]
    fn project_is_named_after_current_snapshot() {
        let dir = tempdir().unwrap();
        write(dir.path(), "old/A.java", "a\n");
        write(dir.path(), "release-2/A.java", "b\n");

        let walker = SnapshotWalker::open(
            &dir.path().join("old"),
            &dir.path().join("release-2"),
            &[],
        )
        .unwrap();
        assert_eq!(walker.project_info().name, "release-2");
    }
}
