//! CLI command handlers.
//!
//! Handler functions for CLI commands, separated from main.rs to enable unit
//! testing.

mod config;
mod merge;

pub use config::{handle_init_config, handle_list_presets};
pub use merge::run_merge;
