//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test volume
    #[error("failed to load volume '{path}': {message}")]
    VolumeLoad { path: String, message: String },

    /// Failed to write a label map
    #[error("failed to write labels '{path}': {message}")]
    LabelWrite { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
