//! Batch removal of matched paths
//!
//! Deletion is strictly sequential so the reported count can never run
//! ahead of what has actually been removed from disk.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Remove every path in `paths` in order, invoking `on_nuked` after each
/// completed removal.
///
/// Removal is recursive and forced: non-empty directory trees are removed,
/// and a path that is already absent counts as removed. The first real I/O
/// failure aborts the remaining deletions; paths removed before it stay
/// removed.
pub fn nuke<F>(paths: &[PathBuf], mut on_nuked: F) -> Result<()>
where
    F: FnMut(&Path),
{
    for path in paths {
        remove_path(path).with_context(|| format!("failed to nuke {}", path.display()))?;
        on_nuked(path);
    }

    Ok(())
}

/// Recursively remove a file or directory, tolerating absent paths.
fn remove_path(path: &Path) -> io::Result<()> {
    // symlink_metadata so a symlinked directory is unlinked, not followed
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        // Lost a race with another process; the path is gone either way.
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
