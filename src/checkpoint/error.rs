//! Checkpoint error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing saved daily state
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization of the daily payload failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Saved payload could not be understood
    #[error("Malformed persisted state under '{key}': {reason}")]
    Malformed { key: String, reason: String },

    /// The store file exists but is not a JSON object of strings
    #[error("Store file {path} is corrupt: {reason}")]
    StoreCorrupt { path: PathBuf, reason: String },

    /// The backing store file could not be read or written
    #[error("Store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
