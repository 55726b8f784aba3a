//! File filtering for tree walking

use super::config::WalkerConfig;
use super::utils::file_extension;

/// Decides which files a walk reports.
///
/// The simple report uses the allow-list; the detailed report lists every file
/// in every directory that survives pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFilter {
    AllowList,
    All,
}

impl FileFilter {
    /// Check if a file name should be included.
    pub fn is_included(&self, name: &str, config: &WalkerConfig) -> bool {
        match self {
            FileFilter::All => true,
            FileFilter::AllowList => {
                let allowed_ext = file_extension(name)
                    .is_some_and(|ext| config.extensions.contains(&ext.as_str()));
                allowed_ext || config.name_prefixes.iter().any(|p| name.starts_with(p))
            }
        }
    }
}
