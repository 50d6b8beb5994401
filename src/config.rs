//! Runtime configuration: where the catalog and the saved state live.
//!
//! Values come from the environment with logged defaults; command-line flags
//! override them.

use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

pub const CATALOG_ENV: &str = "CARDLE_CATALOG";
pub const STATE_ENV: &str = "CARDLE_STATE";
pub const DEFAULT_CATALOG: &str = "catalog.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub catalog_path: PathBuf,
    pub state_path: PathBuf,
}

impl GameConfig {
    pub fn load() -> Self {
        Self {
            catalog_path: path_var(CATALOG_ENV).unwrap_or_else(|| {
                info!("{CATALOG_ENV} not set, using default: {DEFAULT_CATALOG}");
                PathBuf::from(DEFAULT_CATALOG)
            }),
            state_path: path_var(STATE_ENV).unwrap_or_else(|| {
                let path = default_state_path();
                info!("{STATE_ENV} not set, using default: {}", path.display());
                path
            }),
        }
    }

    /// Replace whichever paths were given explicitly.
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, state: Option<PathBuf>) -> Self {
        if let Some(path) = catalog {
            self.catalog_path = path;
        }
        if let Some(path) = state {
            self.state_path = path;
        }
        self
    }
}

fn path_var(key: &str) -> Option<PathBuf> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            debug!("{key}={value}");
            Some(PathBuf::from(value.trim()))
        }
        _ => None,
    }
}

/// `<data dir>/cardle/state.json`, or `.cardle/state.json` when the platform
/// has no data directory.
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("cardle"))
        .unwrap_or_else(|| PathBuf::from(".cardle"))
        .join("state.json")
}
