//! Grid shapes and coordinates
//!
//! A [`Shape`] holds the extents of a `D`-dimensional grid, outermost axis
//! first. Data is laid out with the last axis varying fastest, so a 2D shape
//! reads `(rows, cols)` and a 3D shape `(depth, rows, cols)`.

use crate::error::{Error, Result, format_dims};
use std::fmt;

/// A grid coordinate, outermost axis first
pub type Coord<const D: usize> = [usize; D];

/// Extents of a `D`-dimensional grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape<const D: usize> {
    dims: [usize; D],
}

impl<const D: usize> Shape<D> {
    /// Create a shape from per-axis extents.
    pub fn new(dims: [usize; D]) -> Self {
        Self { dims }
    }

    /// Create a shape from a runtime extent list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `dims` does not have exactly `D`
    /// entries.
    pub fn from_slice(dims: &[usize]) -> Result<Self> {
        let dims: [usize; D] = dims.try_into().map_err(|_| Error::ShapeMismatch {
            expected: format!("{}D array", D),
            actual: format!("{}D array ({})", dims.len(), format_dims(dims)),
        })?;
        Ok(Self { dims })
    }

    /// Number of axes.
    pub const fn ndim(&self) -> usize {
        D
    }

    /// Per-axis extents.
    pub fn dims(&self) -> [usize; D] {
        self.dims
    }

    /// Extent along one axis.
    pub fn extent(&self, axis: usize) -> usize {
        self.dims[axis]
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    /// Total number of grid points, or `None` if it overflows `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        checked_product(&self.dims)
    }

    /// Whether any axis has zero extent.
    pub fn is_empty(&self) -> bool {
        self.dims.contains(&0)
    }

    /// Row-major strides in elements.
    pub fn strides(&self) -> [usize; D] {
        let mut strides = [1usize; D];
        for axis in (0..D.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.dims[axis + 1];
        }
        strides
    }

    /// Whether every axis value lies within `[0, extent)`.
    #[inline]
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        coord.iter().zip(self.dims.iter()).all(|(&c, &d)| c < d)
    }

    /// Linear (row-major) index of an in-bounds coordinate.
    #[inline]
    pub fn index(&self, coord: &Coord<D>) -> usize {
        debug_assert!(self.contains(coord));
        let mut idx = 0;
        for axis in 0..D {
            idx = idx * self.dims[axis] + coord[axis];
        }
        idx
    }

    /// Linear index, or `None` when the coordinate is out of bounds.
    pub fn checked_index(&self, coord: &Coord<D>) -> Option<usize> {
        self.contains(coord).then(|| self.index(coord))
    }

    /// Coordinate of a linear (row-major) index.
    pub fn coord(&self, mut index: usize) -> Coord<D> {
        let mut coord = [0usize; D];
        for axis in (0..D).rev() {
            let extent = self.dims[axis];
            coord[axis] = index % extent;
            index /= extent;
        }
        coord
    }

    /// Apply a signed offset to a coordinate.
    ///
    /// Returns `None` if the result leaves the grid on any axis, so callers
    /// never observe an out-of-range coordinate.
    #[inline]
    pub fn offset(&self, coord: &Coord<D>, delta: &[isize; D]) -> Option<Coord<D>> {
        let mut out = [0usize; D];
        for axis in 0..D {
            let v = coord[axis].checked_add_signed(delta[axis])?;
            if v >= self.dims[axis] {
                return None;
            }
            out[axis] = v;
        }
        Some(out)
    }

    /// Iterate coordinates in memory order (outermost axis slowest).
    pub fn iter(&self) -> CoordIter<D> {
        CoordIter::new(*self, false)
    }

    /// Iterate coordinates with the innermost axis as the slowest loop.
    pub fn iter_innermost_first(&self) -> CoordIter<D> {
        CoordIter::new(*self, true)
    }
}

/// Product of `dims`, or `None` on overflow.
pub(crate) fn checked_product(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

impl<const D: usize> fmt::Display for Shape<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_dims(&self.dims))
    }
}

/// Iterator over every coordinate of a [`Shape`]
#[derive(Debug, Clone)]
pub struct CoordIter<const D: usize> {
    shape: Shape<D>,
    next: usize,
    total: usize,
    reversed: bool,
}

impl<const D: usize> CoordIter<D> {
    fn new(shape: Shape<D>, reversed: bool) -> Self {
        Self {
            shape,
            next: 0,
            total: shape.len(),
            reversed,
        }
    }
}

impl<const D: usize> Iterator for CoordIter<D> {
    type Item = Coord<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let k = self.next;
        self.next += 1;
        if !self.reversed {
            return Some(self.shape.coord(k));
        }
        // axis 0 fastest
        let mut rem = k;
        let mut coord = [0usize; D];
        for (axis, c) in coord.iter_mut().enumerate() {
            let extent = self.shape.dims[axis];
            *c = rem % extent;
            rem /= extent;
        }
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl<const D: usize> ExactSizeIterator for CoordIter<D> {}
