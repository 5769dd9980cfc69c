//! Seedgrow Core - Basic data structures for seeded region growing
//!
//! This crate provides the data structures shared by the segmentation
//! engine, the I/O layer and the test framework:
//!
//! - [`Shape`] / [`Coord`] - Grid extents and coordinates (2D or 3D)
//! - [`GridView`] - Read-only, bounds-checked view over a pixel buffer
//! - [`ArrayRef`] - Runtime-typed foreign array handed across the boundary
//! - [`Volume`] - Owned contiguous array
//! - [`LabelField`] - Write-once per-point region labels
//! - [`Pixel`] / [`PixelType`] - Supported element types
//! - [`IntensityWindow`] - Percentile windowing to 8 bits
//!
//! # Axis convention
//!
//! Extents are listed outermost axis first and the last axis varies fastest
//! in memory: `(rows, cols)` in 2D and `(depth, rows, cols)` in 3D.

pub mod error;
pub mod grid;
pub mod labels;
pub mod pixel;
pub mod shape;
pub mod volume;
pub mod window;

pub use error::{Error, Result};
pub use grid::{ArrayRef, GridView};
pub use labels::{LABEL_CAPACITY, LabelField, UNLABELED, UNLABELED_U8};
pub use pixel::{ArrayData, ByteOrder, Pixel, PixelType};
pub use shape::{Coord, CoordIter, Shape};
pub use volume::Volume;
pub use window::{IntensityWindow, window_to_u8};

/// Seed map view: one 8-bit initial region id per grid point, 0 = unseeded
pub type SeedView<'a, const D: usize> = GridView<'a, u8, D>;
