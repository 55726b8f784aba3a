//! Report formatting and display
//!
//! - `simple` - flat listing plus files grouped by category
//! - `detailed` - files grouped by directory with sizes
//! - `categories` - category table used by the simple report
//! - `config` - report mode and output locations
//! - `summary` - console summary after a run
//! - `json` - JSON output of a scan

mod categories;
mod config;
mod detailed;
mod json;
mod simple;
mod summary;
mod utils;

pub use categories::{CATEGORIES, Category};
pub use config::{DETAILED_REPORT_FILE, OutputConfig, ReportMode, SIMPLE_REPORT_FILE};
pub use detailed::{build_detailed_report, render_detailed};
pub use json::print_json;
pub use simple::build_simple_report;
pub use summary::{RunSummary, print_summary, write_summary};
pub use utils::{TIMESTAMP_FORMAT, format_timestamp, project_name};
