//! Directory walking abstraction yielding per-directory file batches.

use crate::discovery::exclude::ExcludeFilter;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// File extensions to include (leading dot optional). Empty means every file.
    pub extensions: Vec<String>,
    /// Role substrings matched case-insensitively against each directory's
    /// path. Empty means every directory qualifies.
    pub role_filters: Vec<String>,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl WalkConfig {
    /// Create a new WalkConfig with the given extensions.
    pub fn new(extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the role substring filters.
    pub fn with_role_filters(mut self, roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.role_filters = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether to follow symlinks.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// One visited directory and its included files, sorted by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBatch {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Depth-first directory walker with exclusion pruning.
///
/// Directories are visited in the order the OS reports them; excluded
/// directories are pruned before descent and never yield files. Files within a
/// batch are sorted lexicographically so a static tree always produces the
/// same sequence.
pub struct DirectoryWalker {
    config: WalkConfig,
    exclude: ExcludeFilter,
}

impl DirectoryWalker {
    /// Create a new DirectoryWalker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self {
            config,
            exclude: ExcludeFilter::default(),
        }
    }

    /// Set an exclusion filter.
    pub fn with_exclude_filter(mut self, filter: ExcludeFilter) -> Self {
        self.exclude = filter;
        self
    }

    /// Check if a file name matches the configured extensions.
    ///
    /// The match is a case-sensitive suffix test, so `js` matches `app.js`
    /// but not `app.JS` or `app.json`.
    fn matches_extension(&self, file_name: &str) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }

        self.config.extensions.iter().any(|ext| {
            let ext = ext.trim_start_matches('.');
            file_name
                .strip_suffix(ext)
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    /// Check if a directory's path contains one of the role substrings.
    fn matches_role(&self, dir: &Path) -> bool {
        if self.config.role_filters.is_empty() {
            return true;
        }

        let path = dir.to_string_lossy().to_lowercase();
        self.config
            .role_filters
            .iter()
            .any(|role| path.contains(&role.to_lowercase()))
    }

    /// Pruning predicate: the root itself is never pruned, matching the
    /// behavior of walking an explicitly named directory.
    fn keep_entry(&self, entry: &DirEntry) -> bool {
        entry.depth() == 0
            || !entry.file_type().is_dir()
            || !self.exclude.is_pruned(entry.path())
    }

    /// Walk the tree and yield one batch per directory with included files.
    pub fn walk<'a>(&'a self, root: &Path) -> impl Iterator<Item = DirectoryBatch> + 'a {
        WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(move |entry| self.keep_entry(entry))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
            .filter(move |entry| self.matches_role(entry.path()))
            .filter_map(move |entry| self.collect_batch(entry.path()))
    }

    /// List a directory's immediate included files, sorted by file name.
    fn collect_batch(&self, dir: &Path) -> Option<DirectoryBatch> {
        let entries = fs::read_dir(dir).ok()?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| self.matches_extension(name))
            })
            .filter(|path| !self.exclude.is_ignored_path(path))
            .collect();

        if files.is_empty() {
            return None;
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Some(DirectoryBatch {
            dir: dir.to_path_buf(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();

        fs::write(dir.path().join("main.js"), "root js").unwrap();
        fs::write(dir.path().join("readme.md"), "docs").unwrap();

        let nested = dir.path().join("lib");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("z.js"), "z").unwrap();
        fs::write(nested.join("a.js"), "a").unwrap();
        fs::write(nested.join("m.css"), "m").unwrap();

        let excluded = dir.path().join("node_modules").join("pkg");
        fs::create_dir_all(&excluded).unwrap();
        fs::write(excluded.join("index.js"), "ignored").unwrap();

        dir
    }

    fn walker(extensions: &[&str]) -> DirectoryWalker {
        DirectoryWalker::new(WalkConfig::new(extensions.iter().copied()))
            .with_exclude_filter(ExcludeFilter::from_names(["node_modules"]))
    }

    #[test]
    fn test_walk_excludes_pruned_directories() {
        let dir = create_test_tree();
        let batches: Vec<_> = walker(&["js"]).walk(dir.path()).collect();

        assert!(
            batches
                .iter()
                .all(|b| !b.dir.to_string_lossy().contains("node_modules"))
        );
    }

    #[test]
    fn test_walk_batch_files_sorted() {
        let dir = create_test_tree();
        let batches: Vec<_> = walker(&["js"]).walk(dir.path()).collect();

        let lib = batches
            .iter()
            .find(|b| b.dir.ends_with("lib"))
            .expect("lib batch");
        let names: Vec<_> = lib
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.js", "z.js"]);
    }

    #[test]
    fn test_walk_filters_extensions() {
        let dir = create_test_tree();
        let batches: Vec<_> = walker(&["css"]).walk(dir.path()).collect();

        assert_eq!(batches.len(), 1);
        assert!(batches[0].files[0].ends_with("m.css"));
    }

    #[test]
    fn test_walk_empty_extension_set_includes_everything() {
        let dir = create_test_tree();
        let batches: Vec<_> = walker(&[]).walk(dir.path()).collect();

        let total: usize = batches.iter().map(|b| b.files.len()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_walk_role_filter() {
        let dir = TempDir::new().unwrap();
        let routes = dir.path().join("svc").join("routes");
        let controllers = dir.path().join("svc").join("controllers");
        fs::create_dir_all(&routes).unwrap();
        fs::create_dir_all(&controllers).unwrap();
        fs::write(routes.join("r.js"), "r").unwrap();
        fs::write(controllers.join("c.js"), "c").unwrap();

        let walker = DirectoryWalker::new(
            WalkConfig::new(["js"]).with_role_filters(["Routes"]),
        );
        let batches: Vec<_> = walker.walk(dir.path()).collect();

        assert_eq!(batches.len(), 1);
        assert!(batches[0].dir.ends_with("routes"));
    }

    #[test]
    fn test_walk_role_filter_matches_subdirectories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("routes").join("v1");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("api.js"), "api").unwrap();

        let walker =
            DirectoryWalker::new(WalkConfig::new(["js"]).with_role_filters(["routes"]));
        let batches: Vec<_> = walker.walk(dir.path()).collect();

        assert_eq!(batches.len(), 1);
        assert!(batches[0].dir.ends_with("v1"));
    }

    #[test]
    fn test_walk_root_itself_never_pruned() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("dist");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("bundle.js"), "bundle").unwrap();

        let walker = DirectoryWalker::new(WalkConfig::new(["js"]))
            .with_exclude_filter(ExcludeFilter::from_names(["dist"]));
        let batches: Vec<_> = walker.walk(&root).collect();

        assert_eq!(batches.len(), 1);
    }

    #[test]
    fn test_walk_excluded_descendants_never_visited() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("node_modules").join("a").join("b");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("deep.js"), "deep").unwrap();

        let batches: Vec<_> = walker(&["js"]).walk(dir.path()).collect();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_matches_extension_suffix_rules() {
        let walker = DirectoryWalker::new(WalkConfig::new(["js", ".ts"]));

        assert!(walker.matches_extension("app.js"));
        assert!(walker.matches_extension("app.ts"));
        assert!(walker.matches_extension("app.test.js"));
        assert!(!walker.matches_extension("app.json"));
        assert!(!walker.matches_extension("app.JS"));
        assert!(!walker.matches_extension("appjs"));
    }

    #[test]
    fn test_walk_nonexistent_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let batches: Vec<_> = walker(&["js"]).walk(&missing).collect();
        assert!(batches.is_empty());
    }
}
