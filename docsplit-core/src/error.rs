//! Core error types

use thiserror::Error;

/// Errors raised while configuring segmentation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The split marker was empty; splitting on "" would cut between every character
    #[error("split marker must not be empty")]
    EmptyMarker,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
