//! Merge run handler.

use crate::cli::Cli;
use crate::config::{ConfigError, MergeConfig, preset_config};
use crate::merge::Aggregator;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// Run one aggregation pass from the command line.
pub fn run_merge(cli: &Cli) -> ExitCode {
    let config = match build_config(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::from(2);
        }
    };

    match Aggregator::new(config.clone()).run() {
        Ok(summary) => {
            println!(
                "{} {} files ({} bytes) into {}",
                "Merged".green().bold(),
                summary.files_merged(),
                summary.bytes_written(),
                config.output.display()
            );
            if summary.files_skipped() > 0 {
                println!(
                    "{} {} files skipped (invalid encoding)",
                    "Skipped".yellow().bold(),
                    summary.files_skipped()
                );
            }

            debug!(
                merged = summary.files_merged(),
                skipped = summary.files_skipped(),
                "run completed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Resolve the effective configuration for this invocation.
///
/// The base comes from `--preset`, then an explicit `--config` file, then the
/// discovered project/global config; individual CLI flags override the base.
pub(crate) fn build_config(cli: &Cli) -> Result<MergeConfig, ConfigError> {
    let mut config = if let Some(preset) = cli.preset {
        preset_config(preset)
    } else if let Some(ref path) = cli.config {
        MergeConfig::from_file(path)?
    } else {
        let root = cli.root.as_deref().unwrap_or(Path::new("."));
        MergeConfig::load(Some(root))
    };

    if let Some(ref root) = cli.root {
        config.root = root.clone();
    }
    if let Some(ref output) = cli.output {
        config.output = output.clone();
    }
    if !cli.ext.is_empty() {
        config.extensions = cli.ext.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude_dirs.extend(cli.exclude.iter().cloned());
    }
    if !cli.role.is_empty() {
        config.roles = cli.role.clone();
    }
    if cli.group {
        config.group_by_role = true;
    }
    if cli.follow_symlinks {
        config.follow_symlinks = true;
    }
    if cli.quiet {
        config.quiet = true;
    }

    Ok(config)
}
