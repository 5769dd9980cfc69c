//! I/O error types
//!
//! Provides a unified error type for volume and label-map I/O. Format
//! modules map their underlying library errors into `IoError` variants so
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for volume and image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The data is structurally invalid
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. shape mismatch)
    #[error("core error: {0}")]
    Core(#[from] seedgrow_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
