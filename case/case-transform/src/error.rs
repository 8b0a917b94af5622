//! Error types for chain construction.

use thiserror::Error;

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors that can occur while wiring transform chains.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Binding the requested parent would create a cycle.
    #[error("binding parent would create a cycle through chain node {id}")]
    CircularParent {
        /// The node the cycle would pass through.
        id: usize,
    },

    /// The requested parent lives in a different chain arena.
    #[error("parent chain belongs to a different chain arena")]
    ForeignChain,
}
