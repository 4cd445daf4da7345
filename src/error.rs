//! Error types for the quarantine core

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during quarantine lifecycle operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read the manifest file
    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the manifest file
    #[error("failed to write manifest {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the manifest
    #[error("failed to serialize manifest: {0}")]
    ManifestSerialize(#[from] serde_json::Error),
}

/// Result type for quarantine lifecycle operations
pub type Result<T> = std::result::Result<T, Error>;
