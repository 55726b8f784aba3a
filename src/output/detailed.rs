//! Detailed report: every file grouped by directory, with sizes

use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::tree::{DirListing, FileFilter, TreeWalker, WalkerConfig, format_size, get_file_size};

use super::utils::format_timestamp;

/// Walk `root` without the allow-list and render the detailed report.
pub fn build_detailed_report(
    root: &Path,
    config: &WalkerConfig,
    project_name: &str,
    generated_at: &DateTime<Local>,
) -> Result<String> {
    let walker = TreeWalker::new(config.clone()).with_filter(FileFilter::All);
    let listings = walker.walk(root)?;
    Ok(render_detailed(&listings, project_name, generated_at))
}

/// Render the detailed report from an existing walk done with `FileFilter::All`.
///
/// Directories without direct files are skipped. A file whose size cannot be
/// read is listed without one.
pub fn render_detailed(
    listings: &[DirListing],
    project_name: &str,
    generated_at: &DateTime<Local>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Detailed Structure: {}\n\n", project_name));
    output.push_str(&format!(
        "**Generated:** {}\n\n",
        format_timestamp(generated_at)
    ));

    for listing in listings.iter().filter(|l| !l.files.is_empty()) {
        output.push_str(&format!("## 📁 {}\n\n", listing.relative));

        for file in &listing.files {
            output.push_str("- **");
            output.push_str(&file.name);
            output.push_str("**");
            if let Some(bytes) = get_file_size(&file.path) {
                output.push_str(" (");
                output.push_str(&format_size(bytes));
                output.push(')');
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tree::FileEntry;
    use chrono::TimeZone;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn write(root: &Path, rel: &str, len: usize) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![b'a'; len]).unwrap();
    }

    fn report(root: &Path) -> String {
        build_detailed_report(root, &WalkerConfig::default(), "proj", &fixed_time()).unwrap()
    }

    #[test]
    fn test_single_file_size() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "data.bin", 2048);
        let out = report(dir.path());
        assert!(out.starts_with("# Detailed Structure: proj\n\n**Generated:** 01/06/2024 08:00:00\n\n"));
        assert!(out.contains("## 📁 .\n\n- **data.bin** (2.0KB)\n"));
    }

    #[test]
    fn test_includes_files_outside_allow_list() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/main.rs", 10);
        write(dir.path(), "Makefile", 3);
        let out = report(dir.path());
        assert!(out.contains("- **main.rs** (10B)"));
        assert!(out.contains("- **Makefile** (3B)"));
    }

    #[test]
    fn test_files_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta.ts", "alpha.ts", "Mid.ts"] {
            write(dir.path(), name, 1);
        }
        let out = report(dir.path());
        let alpha = out.find("**alpha.ts**").unwrap();
        let mid = out.find("**Mid.ts**").unwrap();
        let zeta = out.find("**zeta.ts**").unwrap();
        assert!(mid < alpha && alpha < zeta);
    }

    #[test]
    fn test_dirs_without_direct_files_omitted() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "packages/api/src/index.ts", 5);
        let out = report(dir.path());
        assert!(!out.contains("## 📁 .\n"));
        assert!(!out.contains("## 📁 packages\n"));
        assert!(!out.contains("## 📁 packages/api\n"));
        assert!(out.contains("## 📁 packages/api/src\n"));
    }

    #[test]
    fn test_ignored_dirs_pruned() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "node_modules/pkg/index.js", 5);
        write(dir.path(), "dist/bundle.js", 5);
        write(dir.path(), "src/app.ts", 5);
        let out = report(dir.path());
        assert!(!out.contains("node_modules"));
        assert!(!out.contains("dist"));
        assert!(out.contains("## 📁 src"));
    }

    #[test]
    fn test_missing_size_renders_bare_name() {
        let listings = vec![DirListing {
            relative: "src".to_string(),
            path: PathBuf::from("/gone/src"),
            files: vec![
                FileEntry {
                    name: "vanished.ts".to_string(),
                    path: PathBuf::from("/gone/src/vanished.ts"),
                },
                FileEntry {
                    name: "also_gone.ts".to_string(),
                    path: PathBuf::from("/gone/src/also_gone.ts"),
                },
            ],
        }];
        let out = render_detailed(&listings, "proj", &fixed_time());
        assert!(out.contains("- **vanished.ts**\n- **also_gone.ts**\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_does_not_halt_report() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b_real.ts", 1536);
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("a_dangling"))
            .unwrap();
        let out = report(dir.path());
        assert!(out.contains("- **a_dangling**\n- **b_real.ts** (1.5KB)\n"));
    }

    #[test]
    fn test_missing_root() {
        let err = build_detailed_report(
            Path::new("/no/such/root"),
            &WalkerConfig::default(),
            "x",
            &fixed_time(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::PathNotFound(_)));
    }
}
