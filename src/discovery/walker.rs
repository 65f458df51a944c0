//! Recursive file discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;
use walkdir::WalkDir;

use crate::discovery::filter::FileFilter;

/// Recursively collect candidate files under `root`.
///
/// Excluded directories are pruned before descent, so nothing beneath them
/// is visited. Traversal order is not guaranteed, but the walk is exhaustive
/// over the non-excluded tree. A traversal failure (for example an
/// unreadable subtree) aborts the walk and propagates to the caller.
pub fn discover_files(root: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && filter.is_excluded_dir(e.path())))
    {
        let entry = entry?;
        if entry.file_type().is_file() && filter.is_candidate(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    debug!(count = files.len(), root = %root.display(), "Discovery complete");

    Ok(files)
}
