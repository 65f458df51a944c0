//! File discovery for the normalizer.
//!
//! This module provides:
//! - Path filtering (excluded subtrees, extension matching)
//! - Recursive directory traversal producing the candidate file list

pub mod filter;
pub mod walker;

pub use filter::{FileFilter, FilterConfig};
pub use walker::discover_files;
