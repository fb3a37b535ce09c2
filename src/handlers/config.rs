//! Configuration file handlers.

use crate::cli::Cli;
use crate::config::{CONFIG_FILE, MergeConfig, preset_summaries};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Handle `--init`: write a starter config file.
///
/// The positional path names either the directory to place `.treecat.yaml` in
/// or the config file itself.
pub fn handle_init_config(cli: &Cli) -> ExitCode {
    let target = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = if target.is_dir() {
        target.join(CONFIG_FILE)
    } else {
        target
    };

    if path.exists() {
        eprintln!(
            "{} {} already exists",
            "error:".red().bold(),
            path.display()
        );
        return ExitCode::from(2);
    }

    match fs::write(&path, MergeConfig::generate_template()) {
        Ok(()) => {
            println!("{} {}", "Created".green().bold(), path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} failed to write {}: {}",
                "error:".red().bold(),
                path.display(),
                e
            );
            ExitCode::from(2)
        }
    }
}

/// Handle `--list-presets`.
pub fn handle_list_presets() -> ExitCode {
    for (name, description) in preset_summaries() {
        println!("{:<14} {}", name.bold(), description);
    }
    ExitCode::SUCCESS
}
