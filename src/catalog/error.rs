//! Catalog error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make the catalog unusable. All of them are fatal for a run.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to load catalog from {path}: {source}")]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid catalog JSON
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but holds no vehicles to pick from
    #[error("Catalog contains no vehicles")]
    EmptyCatalog,
}
