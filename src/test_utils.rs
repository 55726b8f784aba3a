//! Test utilities for creating temporary project trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a tree shaped like a small Node project, with dependency and
    /// build folders that should be pruned.
    pub fn node_project() -> Self {
        let tree = Self::new();
        tree.add_file("package.json", "{}");
        tree.add_file("README.md", "# demo\n");
        tree.add_file(".env", "PORT=3000\n");
        tree.add_file("src/app.ts", "export const app = 1;\n");
        tree.add_file("src/main.ts", "import { app } from './app';\n");
        tree.add_file("node_modules/pkg/index.js", "module.exports = {};\n");
        tree.add_file("dist/bundle.js", "console.log(1);\n");
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
