//! Tool configuration from the environment.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

/// Environment variable naming the catalog data directory.
pub const DATA_DIR_VAR: &str = "COC_DATA_DIR";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "assets/data";

/// Resolved settings for the `coc-tools` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Directory holding the catalog RON files.
    pub data_dir: PathBuf,
}

impl ToolsConfig {
    /// Resolve the configuration, loading `.env` if present.
    ///
    /// An explicit `data_dir` wins over [`DATA_DIR_VAR`], which wins over
    /// [`DEFAULT_DATA_DIR`].
    #[must_use]
    pub fn from_env(data_dir: Option<PathBuf>) -> Self {
        dotenv().ok();
        Self::resolve(data_dir, env::var(DATA_DIR_VAR).ok())
    }

    fn resolve(explicit: Option<PathBuf>, from_env: Option<String>) -> Self {
        let data_dir = match (explicit, from_env) {
            (Some(dir), _) => dir,
            (None, Some(val)) if !val.trim().is_empty() => PathBuf::from(val),
            _ => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Self { data_dir }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
