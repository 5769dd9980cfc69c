//! Label fields
//!
//! A [`LabelField`] stores one signed label per grid point. Every entry
//! starts as [`UNLABELED`] and may be claimed exactly once with a region id
//! in `1..=255`; claimed entries are never rewritten.

use crate::error::{Error, Result};
use crate::shape::{Coord, Shape};
use crate::volume::Volume;
use std::num::NonZeroU8;

/// Label value of a grid point no region has claimed
pub const UNLABELED: i32 = -1;

/// Number of distinct region ids an 8-bit seed channel can carry
pub const LABEL_CAPACITY: usize = 256;

/// Value unlabeled points take when narrowed to 8 bits
pub const UNLABELED_U8: u8 = UNLABELED as u8;

/// Mutable per-point label array with write-once semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelField<const D: usize> {
    shape: Shape<D>,
    data: Vec<i32>,
}

impl<const D: usize> LabelField<D> {
    /// Create a field with every point unlabeled.
    pub fn new(shape: Shape<D>) -> Self {
        Self {
            shape,
            data: vec![UNLABELED; shape.len()],
        }
    }

    /// Grid shape.
    pub fn shape(&self) -> Shape<D> {
        self.shape
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field has no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw label values in memory order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Raw label value at a coordinate, or `None` when out of bounds.
    pub fn get(&self, coord: &Coord<D>) -> Option<i32> {
        self.shape.checked_index(coord).map(|i| self.data[i])
    }

    /// Region id at a coordinate, or `None` if unlabeled or out of bounds.
    #[inline]
    pub fn label(&self, coord: &Coord<D>) -> Option<NonZeroU8> {
        let value = self.get(coord)?;
        u8::try_from(value).ok().and_then(NonZeroU8::new)
    }

    /// Whether an in-bounds coordinate is still unlabeled.
    #[inline]
    pub fn is_unlabeled(&self, coord: &Coord<D>) -> bool {
        self.get(coord) == Some(UNLABELED)
    }

    /// Assign `label` to an unlabeled point.
    ///
    /// Returns `false` without writing if the point is already labeled.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid; see [`Self::try_claim`].
    #[inline]
    pub fn claim(&mut self, coord: &Coord<D>, label: NonZeroU8) -> bool {
        assert!(
            self.shape.contains(coord),
            "coordinate {:?} outside grid {}",
            coord,
            self.shape
        );
        let index = self.shape.index(coord);
        let slot = &mut self.data[index];
        if *slot != UNLABELED {
            return false;
        }
        *slot = i32::from(label.get());
        true
    }

    /// Checked form of [`Self::claim`].
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `coord` lies outside the grid.
    /// - [`Error::InvalidParameter`] if `label` is 0.
    pub fn try_claim(&mut self, coord: &Coord<D>, label: u8) -> Result<bool> {
        let label = NonZeroU8::new(label).ok_or_else(|| {
            Error::InvalidParameter("region id 0 cannot be claimed".to_string())
        })?;
        let dims = self.shape.dims();
        if let Some(axis) = (0..D).find(|&a| coord[a] >= dims[a]) {
            return Err(Error::IndexOutOfBounds {
                index: coord[axis],
                len: dims[axis],
            });
        }
        Ok(self.claim(coord, label))
    }

    /// Number of points carrying `label`.
    pub fn count(&self, label: i32) -> usize {
        self.data.iter().filter(|&&v| v == label).count()
    }

    /// Per-id point counts for ids `0..=255`.
    pub fn histogram(&self) -> [usize; LABEL_CAPACITY] {
        let mut counts = [0usize; LABEL_CAPACITY];
        for &v in &self.data {
            if let Ok(id) = u8::try_from(v) {
                counts[id as usize] += 1;
            }
        }
        counts
    }

    /// Number of unlabeled points.
    pub fn unlabeled_count(&self) -> usize {
        self.count(UNLABELED)
    }

    /// Whether every point carries a region id.
    pub fn is_complete(&self) -> bool {
        !self.data.contains(&UNLABELED)
    }

    /// Narrow every label to 8 bits.
    ///
    /// Unlabeled points become [`UNLABELED_U8`] (255), which is
    /// indistinguishable from region id 255.
    pub fn to_u8(&self) -> Volume<u8, D> {
        let data = self.data.iter().map(|&v| v as u8).collect();
        Volume::from_parts(self.shape, data)
    }

    /// Copy the raw labels into an owned volume.
    pub fn to_volume(&self) -> Volume<i32, D> {
        Volume::from_parts(self.shape, self.data.clone())
    }
}
