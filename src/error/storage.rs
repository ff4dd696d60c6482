use std::path::PathBuf;

use thiserror::Error;

/// Failures persisting or loading the report-channel configuration file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the configuration file failed.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        /// The file that was being accessed
        path: PathBuf,
        /// The underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file contents could not be encoded or decoded.
    #[error("Invalid config file {path}: {source}")]
    Format {
        /// The file whose contents were invalid
        path: PathBuf,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}
