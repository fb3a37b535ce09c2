//! Exclusion rules for directory traversal.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Directory names pruned by default: package caches and build output.
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".next", "dist"];

/// Optional per-root ignore file with gitignore syntax.
pub const IGNORE_FILE: &str = ".treecatignore";

/// Decides which directories the traversal never descends into.
///
/// Name-based exclusion is a pure predicate over the directory's own name;
/// pattern-based exclusion comes from an optional `.treecatignore` file at the
/// traversal root and may also match individual files.
#[derive(Default)]
pub struct ExcludeFilter {
    names: Vec<String>,
    patterns: Option<Gitignore>,
}

impl ExcludeFilter {
    /// Create a filter for `root`, loading `.treecatignore` when present.
    pub fn new(root: &Path, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            patterns: Self::load_ignorefile(root),
        }
    }

    /// Create a filter from directory names only, without a pattern file.
    pub fn from_names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            patterns: None,
        }
    }

    fn load_ignorefile(root: &Path) -> Option<Gitignore> {
        let ignore_file = root.join(IGNORE_FILE);
        if !ignore_file.exists() {
            return None;
        }

        let mut builder = GitignoreBuilder::new(root);
        if builder.add(&ignore_file).is_some() {
            return None;
        }
        builder.build().ok()
    }

    /// Check whether a directory name is in the exclusion set.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.names.iter().any(|name| name == dir_name)
    }

    /// Check whether a path matches the `.treecatignore` patterns.
    pub fn is_ignored_path(&self, path: &Path) -> bool {
        self.patterns
            .as_ref()
            .is_some_and(|g| g.matched(path, path.is_dir()).is_ignore())
    }

    /// Check whether a directory should be pruned before descent.
    pub fn is_pruned(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.is_excluded(name))
            || self.is_ignored_path(dir)
    }
}
