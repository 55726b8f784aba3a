//! TreeWalker - the single traversal primitive behind both reports

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, Error};

use super::config::WalkerConfig;
use super::filter::FileFilter;
use super::utils::{relative_path, should_ignore_dir};

/// A file kept by the walker's filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
}

/// One visited directory and the files directly inside it.
#[derive(Debug, Clone)]
pub struct DirListing {
    /// Path relative to the walk root, `.` for the root.
    pub relative: String,
    pub path: PathBuf,
    /// Files sorted by name.
    pub files: Vec<FileEntry>,
}

impl DirListing {
    /// Relative path of a file in this directory, as shown in reports.
    pub fn file_relative(&self, file: &FileEntry) -> String {
        if self.relative == "." {
            file.name.clone()
        } else {
            format!("{}/{}", self.relative, file.name)
        }
    }
}

/// Depth-first walker that prunes ignored directories before descending.
///
/// Every visited directory yields one `DirListing`, in pre-order with
/// siblings sorted by name, so the listing count is the directory count.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: FileFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            filter: FileFilter::AllowList,
        }
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn walk(&self, root: &Path) -> Result<Vec<DirListing>> {
        if !root.exists() {
            return Err(Error::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let mut listings = Vec::new();
        self.walk_dir(root, root, &mut listings)
            .map_err(|e| Error::io(root, e))?;
        Ok(listings)
    }

    fn walk_dir(&self, root: &Path, path: &Path, listings: &mut Vec<DirListing>) -> io::Result<()> {
        let mut entries: Vec<_> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        let mut files = Vec::new();
        let mut subdirs = Vec::new();

        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();

            match classify(&entry) {
                EntryKind::Dir => {
                    if should_ignore_dir(&name, &self.config) {
                        tracing::debug!(dir = %entry.path().display(), "pruned");
                        continue;
                    }
                    subdirs.push(entry.path());
                }
                // Symlinked directories are not followed to avoid loops
                EntryKind::DirSymlink => {
                    tracing::debug!(link = %entry.path().display(), "skipping directory symlink");
                }
                EntryKind::File => {
                    if self.filter.is_included(&name, &self.config) {
                        files.push(FileEntry {
                            name,
                            path: entry.path(),
                        });
                    }
                }
            }
        }

        listings.push(DirListing {
            relative: relative_path(path, root),
            path: path.to_path_buf(),
            files,
        });

        for subdir in subdirs {
            if let Err(e) = self.walk_dir(root, &subdir, listings) {
                tracing::warn!(dir = %subdir.display(), error = %e, "cannot read directory, skipping");
            }
        }

        Ok(())
    }
}

enum EntryKind {
    Dir,
    DirSymlink,
    File,
}

/// Classify without following symlinks, except to detect links to directories.
/// Broken symlinks count as files.
fn classify(entry: &DirEntry) -> EntryKind {
    match entry.file_type() {
        Ok(ft) if ft.is_dir() => EntryKind::Dir,
        Ok(ft) if ft.is_symlink() && entry.path().is_dir() => EntryKind::DirSymlink,
        _ => EntryKind::File,
    }
}
