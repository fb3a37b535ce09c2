use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Named configuration matching one of the historical merge variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Web sources plus Dart: js, jsx, css, dart
    All,
    /// Web sources only: js, jsx, css
    Web,
    /// Dart sources only
    Flutter,
    /// Grouped routes/controllers documentation for js and ts sources
    ServerDocs,
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "treecat",
    version,
    about = "Concatenate the text files of a directory tree into a single annotated document",
    long_about = "treecat walks a directory tree, prunes excluded directories, selects files by \
extension, and appends each file's content to one output document behind a header comment that \
identifies the source."
)]
pub struct Cli {
    /// Root directory to aggregate (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Output document path (truncated and rewritten on each run)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// File extension to include; repeatable (leading dot optional)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,

    /// Directory name to prune, in addition to the defaults; repeatable
    #[arg(short = 'x', long = "exclude", value_name = "DIR")]
    pub exclude: Vec<String>,

    /// Only include files under directories whose path contains this substring
    /// (case-insensitive); repeatable
    #[arg(short = 'r', long = "role", value_name = "ROLE")]
    pub role: Vec<String>,

    /// Group output by role with section banners and service headers
    #[arg(short, long)]
    pub group: bool,

    /// Start from a named preset configuration
    #[arg(short, long, value_enum, conflicts_with = "config")]
    pub preset: Option<Preset>,

    /// Load options from an explicit config file (yaml, json, or toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a starter .treecat.yaml and exit
    #[arg(long)]
    pub init: bool,

    /// List the available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Follow symbolic links during traversal
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Suppress per-file progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
