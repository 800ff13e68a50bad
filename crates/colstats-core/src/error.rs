//! Error types for column statistics
//!
//! Provides the error type shared by all colstats crates.

use thiserror::Error;

/// Core error type for column statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A value did not have the type the operation needs
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// Rendering a chart failed
    #[error("Visualization error: {0}")]
    Visualization(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("cannot compute {operation} of an empty collection"))
    }

    /// Create an error for a value that is not a number
    pub fn non_numeric(got: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: "numeric value".to_string(),
            got: got.into(),
        }
    }

    /// Returns true for the input-validation family of errors
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InsufficientData { .. })
    }

    /// Returns true for type errors
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
