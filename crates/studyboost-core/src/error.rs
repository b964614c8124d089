//! Core error types for studyboost-core.
//!
//! Only genuinely unrecoverable conditions surface as errors. Missing or
//! corrupt settings, absent host capabilities and missing UI anchors are
//! recoverable by design and degrade to defaults or no-ops instead.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyboost-core.
#[derive(Error, Debug)]
pub enum AddonError {
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Failed to open the settings store
    #[error("Failed to open settings store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parse errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration write errors
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Invalid configuration or flag value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AddonError
pub type Result<T, E = AddonError> = std::result::Result<T, E>;
