//! Error types for script serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for script serialization.
pub type WriteResult<T> = Result<T, WriteError>;

/// Errors that can occur while writing an OpenSCAD script.
#[derive(Debug, Error)]
pub enum WriteError {
    /// I/O error during file operations.
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
