//! Configuration for documentation generation.

use crate::error::DocsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Project-local config file name, looked up in the walk root.
pub const PROJECT_CONFIG_FILE: &str = ".codedocs.yaml";

/// Default output document name.
pub const DEFAULT_OUTPUT: &str = "CODE_DOCS.md";

/// Generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Directory names never descended into
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: BTreeSet<String>,

    /// File extensions treated as code, with or without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: BTreeSet<String>,

    /// Output document path
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Descend into symlinked directories
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Also prune paths matched by gitignore rules
    #[serde(default)]
    pub respect_gitignore: bool,

    /// Sort siblings by name so output is reproducible
    #[serde(default = "default_sort_entries")]
    pub sort_entries: bool,
}

fn default_exclude_dirs() -> BTreeSet<String> {
    [
        ".git",
        "node_modules",
        "venv",
        "__pycache__",
        ".idea",
        "build",
        "dist",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_extensions() -> BTreeSet<String> {
    [
        ".cpp", ".cc", ".cxx", ".hpp", ".hh", ".h", ".c", ".py", ".ipynb", ".r", ".R", ".cs",
        ".java", ".js", ".ts", ".jsx", ".tsx", ".sql",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_sort_entries() -> bool {
    true
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            extensions: default_extensions(),
            output_path: default_output_path(),
            follow_symlinks: false,
            respect_gitignore: false,
            sort_entries: default_sort_entries(),
        }
    }
}

impl DocsConfig {
    /// Load configuration for a walk root, falling back to defaults.
    ///
    /// Checks `<root>/.codedocs.yaml` first, then the user config file.
    /// Unreadable or malformed files are logged and skipped.
    pub fn load(root: &Path) -> Self {
        let candidates = std::iter::once(root.join(PROJECT_CONFIG_FILE)).chain(user_config_path());

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    tracing::debug!(path = ?path, "Loaded config");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Ignoring config file: {}", e);
                }
            }
        }

        Self::default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, DocsError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| DocsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// User-level config file (`<config_dir>/codedocs/config.yaml`).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codedocs").join("config.yaml"))
}
