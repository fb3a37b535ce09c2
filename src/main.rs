use clap::Parser;
use std::process::ExitCode;
use treecat::{
    Cli,
    handlers::{handle_init_config, handle_list_presets, run_merge},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Handle config initialization
    if cli.init {
        return handle_init_config(&cli);
    }

    // Handle --list-presets
    if cli.list_presets {
        return handle_list_presets();
    }

    run_merge(&cli)
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "treecat=debug" } else { "treecat=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
