//! Error types for the assembly pipeline.

use thiserror::Error;

/// Result type for assembly operations.
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Errors that can occur while assembling the case.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Layout construction failed.
    #[error("layout error: {0}")]
    Layout(#[from] case_layout::LayoutError),

    /// Wall synthesis failed.
    #[error("wall synthesis error: {0}")]
    Wall(#[from] case_wall::WallError),

    /// Writing an output artifact failed.
    #[error("output error: {0}")]
    Write(#[from] scad_solid::WriteError),
}
