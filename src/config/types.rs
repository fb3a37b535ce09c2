//! Configuration type definitions.

use crate::discovery::DEFAULT_EXCLUDES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for one aggregation run.
///
/// A value of this type fully determines the output: the same config over an
/// unchanged tree produces a byte-identical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Root directory the traversal starts from.
    pub root: PathBuf,
    /// Output document path; truncated and rewritten on each run.
    pub output: PathBuf,
    /// File extensions to include (leading dot optional). Empty means every file.
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub exclude_dirs: Vec<String>,
    /// Path-substring role filters, matched case-insensitively against each
    /// directory's path. Empty means no role gating.
    pub roles: Vec<String>,
    /// Write a section banner per role and service/file headers per member.
    pub group_by_role: bool,
    /// Follow symbolic links during traversal.
    pub follow_symlinks: bool,
    /// Suppress per-file progress lines.
    pub quiet: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("merged.txt"),
            extensions: Vec::new(),
            exclude_dirs: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            roles: Vec::new(),
            group_by_role: false,
            follow_symlinks: false,
            quiet: false,
        }
    }
}

impl MergeConfig {
    /// Replace the extension list, accepting entries with or without a leading dot.
    pub fn with_extensions(mut self, extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Append directory names to the exclusion set.
    pub fn with_excludes(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the role filter list.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}
