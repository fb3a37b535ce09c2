//! Configuration template generation.

use super::types::MergeConfig;

impl MergeConfig {
    /// Generate a YAML configuration template with comments.
    pub fn generate_template() -> String {
        r#"# treecat configuration file
# Place this file as .treecat.yaml in the directory you aggregate from.

# =============================================================================
# TRAVERSAL
# =============================================================================
# Root directory the walk starts from.
root: .

# Directory names never descended into.
exclude_dirs:
  - node_modules
  - .next
  - dist

# Follow symbolic links during traversal.
follow_symlinks: false

# An optional .treecatignore file in the root (gitignore syntax) prunes
# additional paths on top of exclude_dirs.

# =============================================================================
# SELECTION
# =============================================================================
# File extensions to include (leading dot optional). Empty means every file.
extensions: []
# extensions:
#   - js
#   - jsx
#   - css

# Only aggregate files under directories whose path contains one of these
# substrings (case-insensitive). Empty means no role gating.
roles: []
# roles:
#   - routes
#   - controllers

# =============================================================================
# OUTPUT
# =============================================================================
# Output document, truncated and rewritten on each run.
output: merged.txt

# Write a section banner per role and service/file headers per member.
group_by_role: false

# Suppress per-file progress lines.
quiet: false
"#
        .to_string()
    }
}
