//! Error types for wind grid transforms.

use thiserror::Error;

/// Result type alias using WindError.
pub type WindResult<T> = Result<T, WindError>;

/// Primary error type for loading and unrolling wind components.
#[derive(Debug, Error)]
pub enum WindError {
    // === I/O Errors ===
    /// Reading the input or creating/writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // === Parse Errors ===
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    // === Structure Errors ===
    #[error("Expected a top-level JSON array of wind components")]
    NotAnArray,

    #[error("Missing wind component at index {index} (document has {found} element(s))")]
    MissingComponent { index: usize, found: usize },

    #[error("Wind component {index} has no 'data' field")]
    MissingData { index: usize },

    #[error("Wind component {index} 'data' is not an array of numbers: {source}")]
    InvalidData {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl WindError {
    /// True for failures caused by the shape of the input document rather
    /// than by I/O or JSON syntax.
    pub fn is_structure_error(&self) -> bool {
        matches!(
            self,
            WindError::NotAnArray
                | WindError::MissingComponent { .. }
                | WindError::MissingData { .. }
                | WindError::InvalidData { .. }
        )
    }
}
