//! Directory tree walking logic
//!
//! A single depth-first walker prunes ignored directories before descending and
//! reports the files of every visited directory. The simple report filters files
//! through the extension allow-list; the detailed report keeps every file.

mod config;
mod filter;
mod scanner;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXTENSIONS, DEFAULT_IGNORED_DIRS, DEFAULT_NAME_PREFIXES, WalkerConfig};
pub use filter::FileFilter;
pub use scanner::{ScanResult, scan};
pub use utils::{file_extension, format_size, get_file_size, glob_match};
pub use walker::{DirListing, FileEntry, TreeWalker};
