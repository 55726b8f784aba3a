//! Shared utility functions for tree walking

use std::path::Path;

use glob::Pattern;

use super::config::WalkerConfig;

/// Lowercase extension of a file name, including the leading dot.
///
/// Same rule as `Path::extension`: a dotfile without any further dot
/// (`.gitignore`) has no extension.
pub fn file_extension(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    let ext = &name[idx..];
    if idx == 0 || ext.len() == 1 {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Check if a directory should be pruned based on its name.
pub fn should_ignore_dir(name: &str, config: &WalkerConfig) -> bool {
    if config.ignored_dirs.contains(&name) {
        return true;
    }

    config
        .ignore_patterns
        .iter()
        .any(|pattern| name == pattern.as_str() || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Path relative to `root` with `/` separators, or `.` for the root itself.
pub fn relative_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}

/// Get file size, or None when the file cannot be stat-ed.
pub fn get_file_size(path: &Path) -> Option<u64> {
    match path.metadata() {
        Ok(meta) => Some(meta.len()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "size unavailable");
            None
        }
    }
}

/// Format a size in bytes to human-readable format.
///
/// Sizes of a gigabyte or more are still reported in MB.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{}B", bytes)
    } else if bytes < MB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    }
}
