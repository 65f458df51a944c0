//! File processing for the normalizer.
//!
//! This module provides the per-file fix operation: read, dedent, write
//! back, with failures contained to the file they occurred on.

pub mod fixer;

pub use fixer::{fix_file, FixError, FixOutcome};
