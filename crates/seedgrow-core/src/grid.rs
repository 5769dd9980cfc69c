//! Read-only grid views
//!
//! [`GridView`] is a non-owning, bounds-checked view over a numeric buffer
//! plus its shape and strides. It is built once at the boundary and never
//! outlives the borrow it was created from.
//!
//! [`ArrayRef`] is the runtime-typed form of a foreign array: a borrowed
//! element buffer of any supported [`PixelType`](crate::PixelType) and an
//! extent list of any length. Converting it into a typed view is where
//! dimensionality and element-type mismatches are reported.

use crate::error::{Error, Result, format_dims};
use crate::pixel::{ArrayData, Pixel, PixelType};
use crate::shape::{Coord, CoordIter, Shape, checked_product};

/// Borrowed foreign array with runtime element type and dimensionality
#[derive(Debug, Clone)]
pub struct ArrayRef<'a> {
    data: ArrayData<'a>,
    shape: Vec<usize>,
}

impl<'a> ArrayRef<'a> {
    /// Wrap an element buffer and its extents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the buffer length differs from the
    /// product of `shape`, including when that product overflows.
    pub fn new(data: impl Into<ArrayData<'a>>, shape: &[usize]) -> Result<Self> {
        let data = data.into();
        if checked_product(shape) != Some(data.len()) {
            return Err(Error::InvalidShape {
                shape: format_dims(shape),
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    pub(crate) fn from_parts_unchecked(data: ArrayData<'a>, shape: &[usize]) -> Self {
        Self {
            data,
            shape: shape.to_vec(),
        }
    }

    /// Element buffer.
    pub fn data(&self) -> ArrayData<'a> {
        self.data
    }

    /// Extents, outermost axis first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Element type tag.
    pub fn pixel_type(&self) -> PixelType {
        self.data.pixel_type()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Non-owning, bounds-checked view over a `D`-dimensional buffer
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T, const D: usize> {
    data: &'a [T],
    shape: Shape<D>,
    strides: [usize; D],
}

impl<'a, T: Pixel, const D: usize> GridView<'a, T, D> {
    /// Create a view over a contiguous row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if `data.len()` differs from
    /// `shape.len()`.
    pub fn new(data: &'a [T], shape: Shape<D>) -> Result<Self> {
        if shape.checked_len() != Some(data.len()) {
            return Err(Error::InvalidShape {
                shape: shape.to_string(),
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            shape,
            strides: shape.strides(),
        })
    }

    pub(crate) fn from_parts_unchecked(data: &'a [T], shape: Shape<D>) -> Self {
        debug_assert_eq!(data.len(), shape.len());
        Self {
            data,
            shape,
            strides: shape.strides(),
        }
    }

    /// Create a view with explicit element strides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the farthest addressed element lies
    /// outside `data` or its offset overflows.
    pub fn with_strides(data: &'a [T], shape: Shape<D>, strides: [usize; D]) -> Result<Self> {
        if shape.checked_len().is_none() {
            return Err(Error::InvalidShape {
                shape: shape.to_string(),
                len: data.len(),
            });
        }
        let dims = shape.dims();
        if !shape.is_empty() {
            let last = dims
                .iter()
                .zip(strides.iter())
                .try_fold(0usize, |acc, (&d, &s)| {
                    (d - 1).checked_mul(s).and_then(|step| acc.checked_add(step))
                });
            if last.is_none_or(|last| last >= data.len()) {
                return Err(Error::InvalidShape {
                    shape: shape.to_string(),
                    len: data.len(),
                });
            }
        }
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Build a typed view from a runtime-typed array.
    ///
    /// Dimensionality is checked before element type.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] if the array is not `D`-dimensional.
    /// - [`Error::TypeMismatch`] if its element type is not `T`.
    pub fn from_array(array: &ArrayRef<'a>) -> Result<Self> {
        let shape = Shape::<D>::from_slice(array.shape())?;
        let data = T::from_data(array.data()).ok_or(Error::TypeMismatch {
            expected: T::TYPE,
            actual: array.pixel_type(),
        })?;
        Self::new(data, shape)
    }

    /// Grid shape.
    pub fn shape(&self) -> Shape<D> {
        self.shape
    }

    /// Per-axis extents.
    pub fn dims(&self) -> [usize; D] {
        self.shape.dims()
    }

    /// Element strides.
    pub fn strides(&self) -> [usize; D] {
        self.strides
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Whether the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    #[inline]
    fn offset_of(&self, coord: &Coord<D>) -> usize {
        coord
            .iter()
            .zip(self.strides.iter())
            .map(|(&c, &s)| c * s)
            .sum()
    }

    /// Value at a coordinate, or `None` when out of bounds.
    pub fn get(&self, coord: &Coord<D>) -> Option<T> {
        if !self.shape.contains(coord) {
            return None;
        }
        self.data.get(self.offset_of(coord)).copied()
    }

    /// Value at an in-bounds coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn value(&self, coord: &Coord<D>) -> T {
        assert!(
            self.shape.contains(coord),
            "coordinate {:?} outside grid {}",
            coord,
            self.shape
        );
        self.data[self.offset_of(coord)]
    }

    /// Iterate `(coord, value)` pairs in memory order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord<D>, T)> + '_ {
        self.shape.iter().map(move |c| (c, self.data[self.offset_of(&c)]))
    }

    /// Coordinates in memory order.
    pub fn coords(&self) -> CoordIter<D> {
        self.shape.iter()
    }

    /// Check that another view covers the same extents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the extents differ.
    pub fn ensure_same_shape<U: Pixel>(&self, other: &GridView<'_, U, D>) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::shape_mismatch(&self.dims(), &other.dims()));
        }
        Ok(())
    }
}
