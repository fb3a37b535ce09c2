//! Error types for treecat.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// I/O operation types, used to qualify [`TreecatError::Io`] messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Read,
    Write,
    Create,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::Create => write!(f, "create"),
        }
    }
}

/// Unified error type for all treecat operations.
#[derive(Error, Debug)]
pub enum TreecatError {
    /// I/O operation failed.
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    /// Traversal root does not exist.
    #[error("Root not found: {0}")]
    RootNotFound(PathBuf),

    /// Traversal root is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TreecatError {
    /// Create an I/O read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Read,
            source,
        }
    }

    /// Create an I/O write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Write,
            source,
        }
    }

    /// Create an I/O create error.
    pub fn create_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Create,
            source,
        }
    }

    /// Get the root cause of the error chain.
    pub fn root_cause(&self) -> &dyn std::error::Error {
        let mut current: &dyn std::error::Error = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }
}

/// Result type alias for treecat operations.
pub type Result<T> = std::result::Result<T, TreecatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_operation_display() {
        assert_eq!(IoOperation::Read.to_string(), "read");
        assert_eq!(IoOperation::Write.to_string(), "write");
        assert_eq!(IoOperation::Create.to_string(), "create");
    }

    #[test]
    fn test_read_error() {
        let err = TreecatError::read_error(
            "/path/to/file",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("/path/to/file"));
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn test_write_error() {
        let err = TreecatError::write_error(
            "/path/to/file",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/path/to/file"));
        assert!(err.to_string().contains("write"));
    }

    #[test]
    fn test_root_not_found() {
        let err = TreecatError::RootNotFound(PathBuf::from("/missing/dir"));
        assert!(err.to_string().contains("/missing/dir"));
    }

    #[test]
    fn test_not_a_directory() {
        let err = TreecatError::NotADirectory(PathBuf::from("/some/file.txt"));
        assert_eq!(err.to_string(), "Path is not a directory: /some/file.txt");
    }

    #[test]
    fn test_root_cause() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "root cause");
        let err = TreecatError::read_error("/path", io_err);
        let root = err.root_cause();
        assert!(root.to_string().contains("root cause"));
    }
}
