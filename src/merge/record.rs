//! Discovered-file records and group labels.

use std::path::{Path, PathBuf};

/// A file selected for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path as discovered.
    pub path: PathBuf,
    /// Path relative to the traversal root, used in header comments.
    pub display: String,
    /// Bare file name, used in grouped headers.
    pub file_name: String,
}

impl FileRecord {
    pub fn new(path: &Path, root: &Path) -> Self {
        let display = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            display,
            file_name,
        }
    }
}

/// Logical group label for a role directory: the name of its second ancestor.
///
/// The offset fits the `server/<service>/<role>` layout grouped mode was built
/// for; shallower trees fall back to the root's own name.
pub fn service_name(dir: &Path, root: &Path) -> String {
    dir.ancestors()
        .nth(2)
        .and_then(|p| p.file_name())
        .or_else(|| root.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "service".to_string())
}
