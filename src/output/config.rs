//! Output configuration types

use std::path::PathBuf;

use clap::ValueEnum;

/// Default file name of the simple report.
pub const SIMPLE_REPORT_FILE: &str = "estrutura_projeto.md";

/// Default file name of the detailed report.
pub const DETAILED_REPORT_FILE: &str = "estrutura_detalhada.md";

/// Which reports to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    /// Flat listing plus files grouped by category
    #[default]
    Simple,
    /// Files grouped by directory with sizes
    Detailed,
    /// Both reports from a single traversal
    Both,
}

impl ReportMode {
    /// Parse a menu selector: `1` simple, `2` detailed, `3` both.
    /// Anything else, including blank input, selects the simple report.
    pub fn from_selector(input: &str) -> Self {
        match input.trim() {
            "2" => ReportMode::Detailed,
            "3" => ReportMode::Both,
            _ => ReportMode::Simple,
        }
    }

    pub fn includes_simple(self) -> bool {
        matches!(self, ReportMode::Simple | ReportMode::Both)
    }

    pub fn includes_detailed(self) -> bool {
        matches!(self, ReportMode::Detailed | ReportMode::Both)
    }
}

/// Where reports are written and how the console summary looks.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub simple_path: PathBuf,
    pub detailed_path: PathBuf,
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            simple_path: PathBuf::from(SIMPLE_REPORT_FILE),
            detailed_path: PathBuf::from(DETAILED_REPORT_FILE),
            use_color: false,
        }
    }
}
