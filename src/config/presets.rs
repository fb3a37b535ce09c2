//! Named preset configurations.
//!
//! Each preset reproduces one of the historical single-purpose merge scripts as
//! a configuration instance of the one parameterized aggregator.

use crate::cli::Preset;

use super::types::MergeConfig;

/// Resolve a preset to its configuration. The root stays at its default and is
/// expected to be overridden from the command line when needed.
pub fn preset_config(preset: Preset) -> MergeConfig {
    match preset {
        Preset::All => MergeConfig {
            output: "merged_all.txt".into(),
            ..MergeConfig::default()
        }
        .with_extensions(["js", "jsx", "css", "dart"]),

        Preset::Web => MergeConfig {
            output: "merged_web.txt".into(),
            ..MergeConfig::default()
        }
        .with_extensions(["js", "jsx", "css"]),

        Preset::Flutter => MergeConfig {
            output: "merged_dart.txt".into(),
            ..MergeConfig::default()
        }
        .with_extensions(["dart"]),

        Preset::ServerDocs => MergeConfig {
            output: "server_documentation.md".into(),
            group_by_role: true,
            ..MergeConfig::default()
        }
        .with_extensions(["js", "ts"])
        .with_roles(["routes", "controllers"]),
    }
}

/// Name and one-line description for every preset, for `--list-presets`.
pub fn preset_summaries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("all", "js, jsx, css, dart -> merged_all.txt"),
        ("web", "js, jsx, css -> merged_web.txt"),
        ("flutter", "dart -> merged_dart.txt"),
        (
            "server-docs",
            "js, ts grouped by routes/controllers -> server_documentation.md",
        ),
    ]
}
