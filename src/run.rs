//! Ties traversal, report rendering and file output together

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::output::{
    OutputConfig, ReportMode, RunSummary, build_simple_report, project_name, render_detailed,
};
use crate::tree::{FileFilter, ScanResult, TreeWalker, WalkerConfig, scan};

/// Generate the reports selected by `mode` for `root` and write them to disk.
///
/// Nothing is written unless the traversal succeeds. When both reports are
/// requested they share one walk.
pub fn generate(
    root: &Path,
    mode: ReportMode,
    walker_config: &WalkerConfig,
    output_config: &OutputConfig,
) -> Result<(RunSummary, ScanResult)> {
    generate_at(root, mode, walker_config, output_config, &Local::now())
}

/// Same as `generate` with an explicit report timestamp.
pub fn generate_at(
    root: &Path,
    mode: ReportMode,
    walker_config: &WalkerConfig,
    output_config: &OutputConfig,
    generated_at: &DateTime<Local>,
) -> Result<(RunSummary, ScanResult)> {
    let name = project_name(root);
    tracing::info!(root = %root.display(), ?mode, "generating reports");

    let (scan_result, detailed) = if mode.includes_detailed() {
        let listings = TreeWalker::new(walker_config.clone())
            .with_filter(FileFilter::All)
            .walk(root)?;
        let scan_result = ScanResult::from_listings(root, &listings, walker_config);
        let detailed = render_detailed(&listings, &name, generated_at);
        (scan_result, Some(detailed))
    } else {
        (scan(root, walker_config)?, None)
    };

    let mut written = Vec::new();

    if mode.includes_simple() {
        let report = build_simple_report(&scan_result, &name, generated_at);
        write_report(&output_config.simple_path, &report)?;
        written.push(output_config.simple_path.clone());
    }

    if let Some(report) = detailed {
        write_report(&output_config.detailed_path, &report)?;
        written.push(output_config.detailed_path.clone());
    }

    let summary = RunSummary {
        root: root.canonicalize().unwrap_or_else(|_| root.to_path_buf()),
        written,
        files: scan_result.files(),
        directories: scan_result.directories(),
    };
    Ok((summary, scan_result))
}

fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::write(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
