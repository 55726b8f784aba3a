//! Allow-list scan feeding the simple report

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

use super::config::WalkerConfig;
use super::filter::FileFilter;
use super::walker::{DirListing, TreeWalker};

/// Sorted relative paths of allow-listed files plus traversal counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    root: PathBuf,
    directories: usize,
    files: usize,
    paths: Vec<String>,
}

impl ScanResult {
    /// Build from a finished walk, re-applying the allow-list so that a walk
    /// done with `FileFilter::All` can be shared with the detailed report.
    pub fn from_listings(root: &Path, listings: &[DirListing], config: &WalkerConfig) -> Self {
        let mut paths: Vec<String> = listings
            .iter()
            .flat_map(|listing| {
                listing
                    .files
                    .iter()
                    .filter(|f| FileFilter::AllowList.is_included(&f.name, config))
                    .map(|f| listing.file_relative(f))
            })
            .collect();
        paths.sort();

        Self {
            root: root.to_path_buf(),
            directories: listings.len(),
            files: paths.len(),
            paths,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn directories(&self) -> usize {
        self.directories
    }
}

/// Walk `root` with the allow-list filter and collect a sorted `ScanResult`.
pub fn scan(root: &Path, config: &WalkerConfig) -> Result<ScanResult> {
    let walker = TreeWalker::new(config.clone()).with_filter(FileFilter::AllowList);
    let listings = walker.walk(root)?;
    let result = ScanResult::from_listings(root, &listings, config);
    tracing::debug!(
        root = %root.display(),
        files = result.files,
        directories = result.directories,
        "scan complete"
    );
    Ok(result)
}
