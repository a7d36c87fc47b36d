//! Recursive discovery of nukeable paths
//!
//! Walks a directory tree depth-first looking for `node_modules` directories
//! (and optionally package manager lock files). A matched directory is never
//! descended into, and framework cache directories like `.next` are skipped
//! entirely.

use crate::package_manager::PackageManager;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory name that always counts as a match
pub const TARGET_DIR: &str = "node_modules";

/// Framework cache directories that are neither matched nor recursed into
pub const IGNORED_DIRS: &[&str] = &[".next", ".svelte-kit"];

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Also match package manager lock files (package-lock.json, yarn.lock, ...)
    pub lock_files: bool,
}

/// Walk `root` depth-first and invoke `on_found` once per match, in
/// traversal order, before the walk continues.
///
/// Name checks happen in priority order: match first, then the ignore set,
/// then the default of skipping files and recursing into directories.
/// Sibling order is whatever the filesystem enumeration yields, so callers
/// must not rely on a particular order between independent matches.
///
/// The first listing or stat failure aborts the whole scan; matches already
/// delivered to `on_found` are not rolled back.
pub fn scan<F>(root: &Path, options: ScanOptions, mut on_found: F) -> Result<()>
where
    F: FnMut(PathBuf),
{
    let mut walker = WalkDir::new(root).min_depth(1).into_iter();

    while let Some(entry) = walker.next() {
        let entry =
            entry.with_context(|| format!("failed to scan {}", root.display()))?;

        // Non-UTF-8 names can't match any of the fixed name sets; fall
        // through to the default walk behavior.
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if is_match(name, options) {
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            on_found(entry.into_path());
        } else if entry.file_type().is_dir() && IGNORED_DIRS.contains(&name) {
            walker.skip_current_dir();
        }
    }

    Ok(())
}

fn is_match(name: &str, options: ScanOptions) -> bool {
    name == TARGET_DIR
        || (options.lock_files && PackageManager::all_lock_files().any(|lock| lock == name))
}
