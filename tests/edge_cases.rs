//! Edge case and error handling tests for treedoc


use harness::{TestTree, run_treedoc};
use std::os::unix::fs::symlink;

// ============================================================================
// Missing Paths
// ============================================================================

#[test]
fn test_missing_path_writes_nothing() {
    let tree = TestTree::new();

    let (_stdout, stderr, success) = run_treedoc(tree.path(), &["does-not-exist", "-m", "both"]);
    assert!(!success, "missing path should fail");
    assert!(stderr.contains("cannot access 'does-not-exist'"), "{}", stderr);
    assert!(!tree.exists("estrutura_projeto.md"));
    assert!(!tree.exists("estrutura_detalhada.md"));
}

#[test]
fn test_file_as_root_fails() {
    let tree = TestTree::new();
    tree.add_file("app.ts", "export {}");

    let (_stdout, stderr, success) = run_treedoc(tree.path(), &["app.ts"]);
    assert!(!success);
    assert!(stderr.contains("is not a directory"), "{}", stderr);
}

#[test]
fn test_unwritable_output_fails() {
    let tree = TestTree::new();
    tree.add_file("app.ts", "export {}");

    let (_stdout, stderr, success) =
        run_treedoc(tree.path(), &["-o", "no_such_dir/report.md"]);
    assert!(!success);
    assert!(stderr.contains("cannot write"), "{}", stderr);
}

// ============================================================================
// Empty Trees
// ============================================================================

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_treedoc(tree.path(), &["-m", "both"]);
    assert!(success);
    assert!(stdout.contains("Statistics: 0 files, 1 directories"), "{}", stdout);

    let simple = tree.read("estrutura_projeto.md");
    assert!(!simple.contains("###"));
    let detailed = tree.read("estrutura_detalhada.md");
    assert!(!detailed.contains("## 📁"));
}

#[test]
fn test_directory_with_only_subdirectories_skipped_in_detailed() {
    let tree = TestTree::new();
    tree.add_dir("empty/deeper");
    tree.add_file("apps/web/index.ts", "export {}");

    let (_stdout, _stderr, success) = run_treedoc(tree.path(), &["-m", "detailed"]);
    assert!(success);
    let detailed = tree.read("estrutura_detalhada.md");
    assert!(!detailed.contains("## 📁 empty"));
    assert!(!detailed.contains("## 📁 apps\n"));
    assert!(detailed.contains("## 📁 apps/web\n"));
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn test_ignored_names_pruned_at_any_depth() {
    let tree = TestTree::new();
    for ignored in [
        "node_modules",
        "dist",
        "build",
        ".git",
        ".vscode",
        ".idea",
        "coverage",
        ".nyc_output",
        "logs",
    ] {
        tree.add_file(&format!("pkg/{}/x.json", ignored), "{}");
    }
    tree.add_file("pkg/keep.json", "{}");

    let (stdout, _stderr, success) = run_treedoc(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("Statistics: 1 files, 2 directories"), "{}", stdout);
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/app.ts", "export {}");
    symlink("..", tree.path().join("subdir").join("parent")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_treedoc(tree.path(), &[]);
    assert!(success, "treedoc should not hang on parent symlink");
    assert!(stdout.contains("Statistics: 1 files, 2 directories"), "{}", stdout);
}

#[test]
fn test_broken_symlink_listed_without_size() {
    let tree = TestTree::new();
    tree.add_file("a.md", "# a");
    symlink(tree.path().join("gone.md"), tree.path().join("b_link.md"))
        .expect("Failed to create symlink");
    tree.add_file("c.md", "# c");

    let (_stdout, _stderr, success) = run_treedoc(tree.path(), &["-m", "detailed"]);
    assert!(success);
    let detailed = tree.read("estrutura_detalhada.md");
    assert!(
        detailed.contains("- **a.md** (3B)\n- **b_link.md**\n- **c.md** (3B)\n"),
        "{}",
        detailed
    );
}

// ============================================================================
// Categories
// ============================================================================

#[test]
fn test_env_prefix_lists_file_in_every_category() {
    let tree = TestTree::new();
    tree.add_file(".env.local", "A=1");
    tree.add_file("app.js", "");

    let (_stdout, _stderr, success) = run_treedoc(tree.path(), &[]);
    assert!(success);
    let report = tree.read("estrutura_projeto.md");
    // accepted multi-membership from the shared prefix rule
    assert_eq!(report.matches("- `.env.local`").count(), 6, "{}", report);
    assert_eq!(report.matches("- `app.js`").count(), 1);
}
