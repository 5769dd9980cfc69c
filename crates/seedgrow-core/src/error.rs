//! Error types for seedgrow-core
//!
//! Provides a unified error type for grid, volume and label-field
//! operations. Shape and element-type disagreements are detected when a
//! view is built at the boundary, before any working state is allocated.

use crate::pixel::PixelType;
use thiserror::Error;

/// Seedgrow core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Dimensionality or extents disagree
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Element type disagrees with the instantiated pixel type
    #[error("type mismatch: expected {expected} ({} bytes), got {actual} ({} bytes)", .expected.byte_width(), .actual.byte_width())]
    TypeMismatch {
        expected: PixelType,
        actual: PixelType,
    },

    /// Buffer length does not cover the declared shape
    #[error("invalid shape {shape}: buffer holds {len} elements")]
    InvalidShape { shape: String, len: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a [`Error::ShapeMismatch`] from two extent lists.
    pub fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        Error::ShapeMismatch {
            expected: format_dims(expected),
            actual: format_dims(actual),
        }
    }
}

/// Render extents as `AxBxC`; an empty list renders as `()`.
pub fn format_dims(dims: &[usize]) -> String {
    if dims.is_empty() {
        return "()".to_string();
    }
    dims.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("x")
}

/// Result type alias for seedgrow core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dims() {
        assert_eq!(format_dims(&[4, 5]), "4x5");
        assert_eq!(format_dims(&[2, 3, 4]), "2x3x4");
        assert_eq!(format_dims(&[]), "()");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch {
            expected: PixelType::U16,
            actual: PixelType::U8,
        };
        assert_eq!(
            err.to_string(),
            "type mismatch: expected uint16 (2 bytes), got uint8 (1 bytes)"
        );
    }
}
