pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod merge;

pub use cli::{Cli, Preset};
pub use config::{CONFIG_FILE, ConfigError, MergeConfig};
pub use discovery::{DEFAULT_EXCLUDES, DirectoryBatch, DirectoryWalker, ExcludeFilter, WalkConfig};
pub use error::{IoOperation, Result, TreecatError};
pub use merge::{Aggregator, FileRecord, MergeSummary, OutputDocument, aggregate};
