//! Error types for layout construction.

use thiserror::Error;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur while building a key layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A key's chain would receive the switch-height drop twice.
    #[error("key '{name}' would receive a second switch-height correction")]
    DoubleCorrection {
        /// The offending key.
        name: String,
    },

    /// A key finished layout construction with no active correction.
    #[error("key '{name}' has no active switch-height correction")]
    MissingCorrection {
        /// The offending key.
        name: String,
    },
}
