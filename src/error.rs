use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a dataset could not be loaded. Every variant fails the whole request.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Resource file {} not found or not readable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Resource file has no header row")]
    MalformedHeader,

    #[error("Error processing CSV: {0}")]
    Parse(String),
}

/// Invalid or unreadable engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
