//! Simple report: flat file listing and files grouped by category

use chrono::{DateTime, Local};

use crate::tree::ScanResult;

use super::categories::CATEGORIES;
use super::utils::format_timestamp;

/// Render the simple markdown report for a finished scan.
///
/// Output depends only on the arguments, so two calls with the same scan,
/// name and timestamp produce identical text.
pub fn build_simple_report(
    scan: &ScanResult,
    project_name: &str,
    generated_at: &DateTime<Local>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Project Structure: {}\n\n", project_name));
    output.push_str(&format!(
        "**Generated:** {}\n\n",
        format_timestamp(generated_at)
    ));
    output.push_str("**Statistics:**\n");
    output.push_str(&format!("- 📁 Directories: {}\n", scan.directories()));
    output.push_str(&format!("- 📄 Files: {}\n\n", scan.files()));

    output.push_str("## 🌳 File Tree\n\n");
    output.push_str("```\n");
    for path in scan.paths() {
        output.push_str(path);
        output.push('\n');
    }
    output.push_str("```\n\n");

    output.push_str("## 📋 Files by Category\n\n");
    for category in CATEGORIES {
        let matching = category.select(scan.paths());
        if matching.is_empty() {
            continue;
        }
        output.push_str(&format!("### {}\n\n", category.label));
        for path in matching {
            output.push_str("- `");
            output.push_str(path);
            output.push_str("`\n");
        }
        output.push('\n');
    }

    output
}
