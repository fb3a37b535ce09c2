//! Configuration layer for treecat.
//!
//! ## Layers
//! - `types`: the [`MergeConfig`] option structure
//! - `loading`: config file discovery and parsing
//! - `presets`: named configurations matching the historical merge variants
//! - `template`: starter config file generation for `--init`

mod error;
mod loading;
mod presets;
mod template;
mod types;

pub use error::ConfigError;
pub use loading::CONFIG_FILE;
pub use presets::{preset_config, preset_summaries};
pub use types::MergeConfig;
