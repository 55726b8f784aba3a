//! treedoc - markdown reports of a project's file structure

pub mod error;
pub mod output;
pub mod run;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{
    OutputConfig, ReportMode, RunSummary, build_detailed_report, build_simple_report,
    print_json, print_summary,
};
pub use run::{generate, generate_at};
pub use tree::{FileFilter, ScanResult, TreeWalker, WalkerConfig, format_size, scan};
