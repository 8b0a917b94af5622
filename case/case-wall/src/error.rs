//! Error types for wall synthesis.

use thiserror::Error;

/// Result type for wall synthesis.
pub type WallResult<T> = Result<T, WallError>;

/// Errors that can occur while synthesizing a wall.
#[derive(Debug, Error)]
pub enum WallError {
    /// The anchor ring cannot close into a shell.
    #[error("anchor ring has {count} anchors, need at least 3 to close")]
    RingTooSmall {
        /// Number of anchors provided.
        count: usize,
    },

    /// An anchor's outward offset vanished in plan view.
    #[error("anchor {index} has a degenerate outward direction")]
    DegenerateOutward {
        /// Ring index of the offending anchor.
        index: usize,
    },
}
