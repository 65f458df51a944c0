//! Configuration types for the normalizer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_EXCLUDED_PATHS, DEFAULT_EXTENSION};

/// Global normalizer configuration.
///
/// The defaults reproduce the hardcoded behavior: walk the current
/// directory for `.py` files, skipping vendored libraries and generated
/// migration scripts. Environment variables override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Root directory to walk.
    pub root: PathBuf,

    /// Extension of candidate files (without the leading dot).
    pub extension: String,

    /// Path substrings whose subtrees are skipped during discovery.
    pub excluded_paths: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_paths: DEFAULT_EXCLUDED_PATHS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl NormalizerConfig {
    /// Load configuration from environment variables.
    ///
    /// `DEDENT_ROOT` sets the root directory, `DEDENT_EXTENSION` the file
    /// extension (a leading dot is tolerated), and `DEDENT_EXCLUDE` a
    /// comma-separated list of excluded path substrings.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            root: std::env::var("DEDENT_ROOT")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.root),
            extension: std::env::var("DEDENT_EXTENSION")
                .ok()
                .map(|e| e.trim_start_matches('.').to_string())
                .unwrap_or(defaults.extension),
            excluded_paths: std::env::var("DEDENT_EXCLUDE")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.excluded_paths),
        }
    }
}
