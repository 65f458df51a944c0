//! Path filtering rules for file discovery.
//!
//! Decides which directories are skipped entirely and which files are
//! candidates for normalization (e.g., skip vendored libraries and generated
//! migration scripts).

use std::path::Path;

use crate::{DEFAULT_EXCLUDED_PATHS, DEFAULT_EXTENSION};

/// Configuration for path filtering.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Path substrings whose directories are skipped entirely.
    pub excluded_paths: Vec<String>,
    /// Extension of candidate files (without the leading dot).
    pub extension: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_paths: DEFAULT_EXCLUDED_PATHS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Path filter for determining which files to process.
#[derive(Debug, Clone)]
pub struct FileFilter {
    config: FilterConfig,
}

impl FileFilter {
    /// Create a new file filter with the given configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Create a filter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(FilterConfig::default())
    }

    /// Check if a directory path falls in an excluded subtree.
    ///
    /// Matches by literal substring containment anywhere in the path, so an
    /// exclusion applies at any nesting depth. A multi-component substring
    /// such as `migrations/versions` matches with `/` as the separator.
    pub fn is_excluded_dir(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.config
            .excluded_paths
            .iter()
            .any(|needle| path.contains(needle.as_str()))
    }

    /// Check if a file path matches the candidate extension.
    pub fn is_candidate(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.config.extension)
    }

    /// Get the configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}
