//! Sequential run orchestration.
//!
//! Walks the tree once, fixes each candidate file in turn, and tallies the
//! outcome. Per-file failures are recorded and skipped; only a traversal
//! failure aborts the run.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::discovery::{discover_files, FileFilter, FilterConfig};
use crate::processing::fix_file;
use crate::types::NormalizerConfig;

/// Result of a normalizer run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Candidate files discovered under the root.
    pub files_found: usize,
    /// Files successfully rewritten.
    pub files_fixed: usize,
    /// Files that failed to read, decode, or write.
    pub files_failed: usize,
    /// The recorded per-file errors.
    pub errors: Vec<RunError>,
}

/// Error recorded for a single file during a run.
#[derive(Debug, Clone)]
pub struct RunError {
    pub path: PathBuf,
    pub error: String,
}

/// Walk the configured root and fix every candidate file in place.
///
/// Prints the operator-facing report to stdout: the found count, one line
/// per processed file, and the final summary. Files are processed strictly
/// sequentially; a failure on one file does not affect the rest.
pub fn run(config: &NormalizerConfig) -> Result<RunResult> {
    let filter = FileFilter::new(FilterConfig {
        excluded_paths: config.excluded_paths.clone(),
        extension: config.extension.clone(),
    });

    let files = discover_files(&config.root, &filter)?;
    let files_found = files.len();

    println!(
        "Found {} {} files to fix",
        files_found,
        language_label(&config.extension)
    );
    info!(files_found, root = %config.root.display(), "Starting normalizer run");

    let mut files_fixed = 0;
    let mut errors = Vec::new();

    for path in files {
        match fix_file(&path) {
            Ok(_) => {
                files_fixed += 1;
                println!("Fixed: {}", path.display());
            }
            Err(e) => {
                println!("Error fixing {}: {}", path.display(), e);
                warn!(path = %path.display(), error = %e, "Failed to fix file");
                errors.push(RunError {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    println!("\nFixed {} files successfully", files_fixed);
    info!(
        fixed = files_fixed,
        failed = errors.len(),
        "Normalizer run complete"
    );

    Ok(RunResult {
        files_found,
        files_fixed,
        files_failed: errors.len(),
        errors,
    })
}

/// Display name for the language associated with a file extension.
fn language_label(extension: &str) -> &str {
    match extension {
        "py" => "Python",
        "rs" => "Rust",
        "js" => "JavaScript",
        "ts" => "TypeScript",
        "go" => "Go",
        "rb" => "Ruby",
        "java" => "Java",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn config_for(root: &Path) -> NormalizerConfig {
        NormalizerConfig {
            root: root.to_path_buf(),
            ..NormalizerConfig::default()
        }
    }

    #[test]
    fn test_run_fixes_all_candidates() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("a.py"), b"    x = 1\n    y = 2\n");
        write_file(&dir.path().join("pkg/b.py"), b"\tdef f():\n\t\tpass\n");

        let result = run(&config_for(dir.path())).unwrap();

        assert_eq!(result.files_found, 2);
        assert_eq!(result.files_fixed, 2);
        assert_eq!(result.files_failed, 0);
        assert_eq!(
            fs::read_to_string(dir.path().join("a.py")).unwrap(),
            "x = 1\ny = 2\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("pkg/b.py")).unwrap(),
            "def f():\n\tpass\n"
        );
    }

    #[test]
    fn test_run_continues_past_failing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("a.py"), b"    x = 1\n");
        write_file(&dir.path().join("b.py"), b"\xff\xfe not utf-8\n");
        write_file(&dir.path().join("c.py"), b"    y = 2\n");

        let result = run(&config_for(dir.path())).unwrap();

        assert_eq!(result.files_found, 3);
        assert_eq!(result.files_fixed, 2);
        assert_eq!(result.files_failed, 1);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].path.ends_with("b.py"));
    }

    #[test]
    fn test_run_skips_excluded_subtrees() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("kept.py"), b"    x = 1\n");
        write_file(
            &dir.path().join(".pythonlibs/lib.py"),
            b"    untouched = True\n",
        );
        write_file(
            &dir.path().join("db/migrations/versions/0001.py"),
            b"    untouched = True\n",
        );

        let result = run(&config_for(dir.path())).unwrap();

        assert_eq!(result.files_found, 1);
        assert_eq!(result.files_fixed, 1);
        // Excluded files keep their indentation.
        assert_eq!(
            fs::read_to_string(dir.path().join(".pythonlibs/lib.py")).unwrap(),
            "    untouched = True\n"
        );
    }

    #[test]
    fn test_run_on_empty_tree() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(&config_for(dir.path())).unwrap();

        assert_eq!(result.files_found, 0);
        assert_eq!(result.files_fixed, 0);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("a.py"), b"    x = 1\n        y = 2\n");

        run(&config_for(dir.path())).unwrap();
        let after_first = fs::read_to_string(dir.path().join("a.py")).unwrap();

        run(&config_for(dir.path())).unwrap();
        let after_second = fs::read_to_string(dir.path().join("a.py")).unwrap();

        assert_eq!(after_first, after_second);
        assert_eq!(after_first, "x = 1\n    y = 2\n");
    }
}
