//! Discovery layer for traversal and file selection.
//!
//! This module handles:
//! - Depth-first directory traversal with per-directory file batches
//! - Exclusion of directory names and `.treecatignore` patterns
//! - Extension and role-substring filtering

pub mod exclude;
pub mod walker;

pub use exclude::{DEFAULT_EXCLUDES, ExcludeFilter, IGNORE_FILE};
pub use walker::{DirectoryBatch, DirectoryWalker, WalkConfig};
