//! Error types for seedgrow-region

use thiserror::Error;

/// Errors that can occur while setting up a segmentation
///
/// The growth loop itself cannot fail; every error is raised while the
/// engine is being constructed, before any label state exists.
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (shape or element type disagreement)
    #[error("core error: {0}")]
    Core(#[from] seedgrow_core::Error),

    /// Neighborhood not defined for the grid dimensionality
    #[error("unsupported connectivity: {connectivity} is not defined for {ndim}D grids")]
    UnsupportedConnectivity {
        connectivity: &'static str,
        ndim: usize,
    },
}

impl RegionError {
    /// Whether the image and seed map disagree in dimensionality or extents.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            RegionError::Core(seedgrow_core::Error::ShapeMismatch { .. })
        )
    }

    /// Whether an array's element type disagrees with the requested one.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            RegionError::Core(seedgrow_core::Error::TypeMismatch { .. })
        )
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
