//! Configuration types for tree walkers

/// Directory names that are never descended into.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    ".git",
    ".vscode",
    ".idea",
    "coverage",
    ".nyc_output",
    "logs",
];

/// File extensions (lowercase, with leading dot) kept by the allow-list filter.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".ts",
    ".js",
    ".json",
    ".md",
    ".yml",
    ".yaml",
    ".env",
    ".gitignore",
    ".dockerignore",
    ".dockerfile",
];

/// File name prefixes kept regardless of extension (`.env.local`, `.env.production`).
pub const DEFAULT_NAME_PREFIXES: &[&str] = &[".env"];

/// Configuration for tree walking behavior.
///
/// The defaults are the fixed ignore set and allow-list; `ignore_patterns`
/// adds extra glob patterns matched against directory names.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub ignored_dirs: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub name_prefixes: &'static [&'static str],
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignored_dirs: DEFAULT_IGNORED_DIRS,
            extensions: DEFAULT_EXTENSIONS,
            name_prefixes: DEFAULT_NAME_PREFIXES,
            ignore_patterns: Vec::new(),
        }
    }
}

impl WalkerConfig {
    /// Add glob patterns for directory names to prune.
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }
}
