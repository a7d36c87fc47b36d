//! Integration tests for modnuke
//!
//! These tests verify end-to-end workflows between the scanner, the nuker,
//! and the spinner.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::TempDir;

use modnuke::nuker;
use modnuke::scanner::{self, ScanOptions};
use modnuke::spinner::{Spinner, SpinnerOptions};
use modnuke::utils;

fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// project/node_modules/, project/src/file.js, project/.next/cache/,
/// plus a lock file when requested
fn create_project(root: &Path, name: &str, with_lock_file: bool) -> PathBuf {
    let project = root.join(name);
    fs::create_dir_all(project.join("node_modules").join("dep")).unwrap();
    fs::write(project.join("node_modules").join("dep").join("index.js"), "x").unwrap();
    fs::create_dir_all(project.join("src")).unwrap();
    fs::write(project.join("src").join("file.js"), "export {}").unwrap();
    fs::create_dir_all(project.join(".next").join("cache")).unwrap();

    if with_lock_file {
        fs::write(project.join("package-lock.json"), "{}").unwrap();
    }

    project
}

#[test]
fn test_scan_then_nuke_removes_matches_and_nothing_else() {
    let temp_dir = create_test_dir();
    let project = create_project(temp_dir.path(), "project", true);

    let mut found = Vec::new();
    scanner::scan(temp_dir.path(), ScanOptions { lock_files: true }, |path| {
        found.push(path)
    })
    .unwrap();
    assert_eq!(found.len(), 2);

    let mut nuked = Vec::new();
    nuker::nuke(&found, |path| nuked.push(path.to_path_buf())).unwrap();

    // Callbacks fired once per match, in input order
    assert_eq!(nuked, found);
    assert!(!project.join("node_modules").exists());
    assert!(!project.join("package-lock.json").exists());

    // Untouched: sources and the ignored cache directory
    assert!(project.join("src").join("file.js").exists());
    assert!(project.join(".next").join("cache").exists());
}

#[test]
fn test_nuked_count_never_exceeds_found_count() {
    let temp_dir = create_test_dir();
    for name in ["a", "b", "c"] {
        create_project(temp_dir.path(), name, false);
    }

    let mut found = Vec::new();
    scanner::scan(temp_dir.path(), ScanOptions::default(), |path| {
        found.push(path)
    })
    .unwrap();
    let found_count = found.len();
    assert_eq!(found_count, 3);

    let mut nuked_count = 0usize;
    nuker::nuke(&found, |_| {
        nuked_count += 1;
        assert!(nuked_count <= found_count);
    })
    .unwrap();
    assert_eq!(nuked_count, found_count);
}

#[test]
fn test_rescan_after_nuke_finds_nothing() {
    let temp_dir = create_test_dir();
    create_project(temp_dir.path(), "project", true);

    let mut found = Vec::new();
    scanner::scan(temp_dir.path(), ScanOptions { lock_files: true }, |path| {
        found.push(path)
    })
    .unwrap();
    nuker::nuke(&found, |_| {}).unwrap();

    // Second full pass over the same tree: nothing left to find, and
    // re-nuking the stale list is a harmless no-op
    let mut second = Vec::new();
    scanner::scan(temp_dir.path(), ScanOptions { lock_files: true }, |path| {
        second.push(path)
    })
    .unwrap();
    assert!(second.is_empty());

    nuker::nuke(&found, |_| {}).unwrap();
}

#[test]
fn test_full_run_summary_counts_and_elapsed() {
    let temp_dir = create_test_dir();
    for name in ["one", "two", "three"] {
        create_project(temp_dir.path(), name, false);
    }

    let started_at = Instant::now();
    let mut spinner = Spinner::new(SpinnerOptions {
        text: "Searching for node_modules".into(),
        is_tty: false,
        ..Default::default()
    });
    spinner.start().unwrap();

    let mut found = Vec::new();
    scanner::scan(temp_dir.path(), ScanOptions::default(), |path| {
        found.push(path);
        spinner.message(format!("Found {}", found.len())).unwrap();
    })
    .unwrap();

    let mut nuked_count = 0usize;
    nuker::nuke(&found, |_| {
        nuked_count += 1;
        spinner.message(format!("Nuked {nuked_count}")).unwrap();
    })
    .unwrap();

    let elapsed = started_at.elapsed();
    let summary = format!(
        "Nuked {} in {}",
        found.len(),
        utils::format_duration(elapsed)
    );
    spinner.success(&summary).unwrap();

    assert_eq!(found.len(), 3);
    assert_eq!(nuked_count, 3);
    assert!(summary.starts_with("Nuked 3 in "));
}

#[test]
fn test_failed_scan_transitions_spinner_to_error() {
    let temp_dir = create_test_dir();
    let missing = temp_dir.path().join("gone");

    let mut spinner = Spinner::new(SpinnerOptions {
        text: "Searching for node_modules".into(),
        is_tty: false,
        ..Default::default()
    });
    spinner.start().unwrap();

    let result = scanner::scan(&missing, ScanOptions::default(), |_| {});
    assert!(result.is_err());

    spinner
        .error(&format!("Scan failed: {:#}", result.unwrap_err()))
        .unwrap();
}
