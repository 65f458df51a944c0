//! Per-file indentation fixing.
//!
//! Reads a file as UTF-8 text, applies the dedent transform, and writes the
//! result back in place. Failures are reported per file and never abort the
//! surrounding run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::debug;

use crate::dedent::dedent;

/// Error while fixing a single file.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read file: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("file is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    #[error("failed to write file: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl FixError {
    /// The file the error occurred on.
    pub fn path(&self) -> &Path {
        match self {
            FixError::Read { path, .. } => path,
            FixError::Decode { path, .. } => path,
            FixError::Write { path, .. } => path,
        }
    }
}

/// Outcome of fixing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixOutcome {
    /// Whether the rewrite changed the content.
    pub changed: bool,
}

/// Remove the uniform leading indentation from a file, rewriting it in place.
///
/// The whole file is read into memory, transformed, and written back. The
/// content is fully replaced with no backup and no atomic rename, so a
/// failure mid-write can leave the file truncated. An already-dedented file
/// is rewritten with identical content.
pub fn fix_file(path: &Path) -> Result<FixOutcome, FixError> {
    let bytes = fs::read(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| FixError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let dedented = dedent(&content);
    let changed = dedented != content;

    fs::write(path, &dedented).map_err(|source| FixError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), changed, "Fixed file");

    Ok(FixOutcome { changed })
}
