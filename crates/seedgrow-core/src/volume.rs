//! Owned volumes
//!
//! [`Volume`] owns a contiguous row-major buffer together with its
//! [`Shape`]. It is the owned counterpart of [`GridView`]: images and seed
//! maps loaded from disk or synthesized in tests live in a `Volume`, and
//! segmentation results are returned as one.
//!
//! # Examples
//!
//! ```
//! use seedgrow_core::{Shape, Volume};
//!
//! let mut vol: Volume<u16, 3> = Volume::new(Shape::new([2, 3, 4]));
//! vol.set(&[1, 2, 3], 700).unwrap();
//! assert_eq!(vol.get(&[1, 2, 3]), Some(700));
//!
//! let plane = vol.slice(1).unwrap();
//! assert_eq!(plane.dims(), [3, 4]);
//! assert_eq!(plane.get(&[2, 3]), Some(700));
//! ```

use crate::error::{Error, Result, format_dims};
use crate::grid::{ArrayRef, GridView};
use crate::pixel::Pixel;
use crate::shape::{Coord, Shape};

/// Owned `D`-dimensional array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume<T, const D: usize> {
    shape: Shape<D>,
    data: Vec<T>,
}

impl<T: Copy + Default, const D: usize> Volume<T, D> {
    /// Create a volume with every element set to `T::default()`.
    pub fn new(shape: Shape<D>) -> Self {
        Self::filled(shape, T::default())
    }
}

impl<T: Copy, const D: usize> Volume<T, D> {
    /// Create a volume with every element set to `value`.
    pub fn filled(shape: Shape<D>, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Take ownership of a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if `data.len()` differs from
    /// `shape.len()`.
    pub fn from_vec(shape: Shape<D>, data: Vec<T>) -> Result<Self> {
        if shape.checked_len() != Some(data.len()) {
            return Err(Error::InvalidShape {
                shape: shape.to_string(),
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub(crate) fn from_parts(shape: Shape<D>, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.len(), data.len());
        Self { shape, data }
    }

    /// Shape of the volume.
    pub fn shape(&self) -> Shape<D> {
        self.shape
    }

    /// Per-axis extents.
    pub fn dims(&self) -> [usize; D] {
        self.shape.dims()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the volume holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in memory order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable elements in memory order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the volume, returning its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at a coordinate, or `None` when out of bounds.
    pub fn get(&self, coord: &Coord<D>) -> Option<T> {
        self.shape.checked_index(coord).map(|i| self.data[i])
    }

    /// Set the element at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `coord` lies outside the volume.
    pub fn set(&mut self, coord: &Coord<D>, value: T) -> Result<()> {
        let index = self
            .shape
            .checked_index(coord)
            .ok_or_else(|| self.out_of_bounds(coord))?;
        self.data[index] = value;
        Ok(())
    }

    /// Error naming the first axis on which `coord` falls outside.
    fn out_of_bounds(&self, coord: &Coord<D>) -> Error {
        let dims = self.shape.dims();
        let axis = (0..D).find(|&a| coord[a] >= dims[a]).unwrap_or(0);
        Error::IndexOutOfBounds {
            index: coord.get(axis).copied().unwrap_or(0),
            len: dims.get(axis).copied().unwrap_or(0),
        }
    }

    /// Apply `f` to every element.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Volume<U, D> {
        Volume {
            shape: self.shape,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}

impl<T: Pixel, const D: usize> Volume<T, D> {
    /// Borrow the volume as a grid view.
    pub fn view(&self) -> GridView<'_, T, D> {
        GridView::from_parts_unchecked(&self.data, self.shape)
    }

    /// Borrow the volume as a runtime-typed array.
    pub fn as_array(&self) -> ArrayRef<'_> {
        ArrayRef::from_parts_unchecked(T::into_data(&self.data), &self.shape.dims())
    }

    /// Copy a runtime-typed array into an owned volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] or [`Error::TypeMismatch`] as
    /// [`GridView::from_array`] does.
    pub fn from_array(array: &ArrayRef<'_>) -> Result<Self> {
        let view = GridView::<T, D>::from_array(array)?;
        Ok(Self::from_view(&view))
    }

    /// Copy a view into an owned, contiguous volume.
    pub fn from_view(view: &GridView<'_, T, D>) -> Self {
        Self {
            shape: view.shape(),
            data: view.iter().map(|(_, v)| v).collect(),
        }
    }
}

impl<T: Copy> Volume<T, 3> {
    /// Extract one plane along the outermost axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is not below the
    /// outermost extent.
    pub fn slice(&self, index: usize) -> Result<Volume<T, 2>> {
        let [depth, rows, cols] = self.shape.dims();
        if index >= depth {
            return Err(Error::IndexOutOfBounds { index, len: depth });
        }
        let plane = rows * cols;
        let start = index * plane;
        Ok(Volume {
            shape: Shape::new([rows, cols]),
            data: self.data[start..start + plane].to_vec(),
        })
    }

    /// Stack equally shaped planes into a volume.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `planes` is empty.
    /// - [`Error::ShapeMismatch`] if the planes differ in shape.
    pub fn stack(planes: &[Volume<T, 2>]) -> Result<Self> {
        let first = planes
            .first()
            .ok_or_else(|| Error::InvalidParameter("no planes to stack".to_string()))?;
        let [rows, cols] = first.dims();
        let mut data = Vec::with_capacity(planes.len() * rows * cols);
        for plane in planes {
            if plane.dims() != [rows, cols] {
                return Err(Error::ShapeMismatch {
                    expected: format_dims(&[rows, cols]),
                    actual: format_dims(&plane.dims()),
                });
            }
            data.extend_from_slice(&plane.data);
        }
        Ok(Volume {
            shape: Shape::new([planes.len(), rows, cols]),
            data,
        })
    }
}

impl<const D: usize> Volume<u8, D> {
    /// Rename seed ids in place.
    ///
    /// Every `(from, to)` pair is applied simultaneously, so chains such as
    /// `[(2, 0), (3, 2)]` drop id 2 and then rename 3 to 2 without the
    /// renamed entries being dropped in turn.
    pub fn remap_labels(&mut self, pairs: &[(u8, u8)]) {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        for &(from, to) in pairs {
            table[from as usize] = to;
        }
        for v in &mut self.data {
            *v = table[*v as usize];
        }
    }

    /// Number of nonzero entries (seed points).
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelType;

    #[test]
    fn test_from_vec_length_check() {
        assert!(Volume::from_vec(Shape::new([2, 2]), vec![0u8; 4]).is_ok());
        assert!(matches!(
            Volume::from_vec(Shape::new([2, 2]), vec![0u8; 3]),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut vol: Volume<u8, 2> = Volume::new(Shape::new([2, 2]));
        assert!(vol.set(&[1, 1], 5).is_ok());
        assert!(vol.set(&[2, 0], 5).is_err());
        assert_eq!(vol.as_slice(), &[0, 0, 0, 5]);
    }

    #[test]
    fn test_set_reports_offending_axis() {
        let mut vol: Volume<u8, 3> = Volume::new(Shape::new([2, 3, 4]));
        let err = vol.set(&[1, 7, 9], 1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { index: 7, len: 3 }));
        let err = vol.set(&[0, 0, 4], 1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { index: 4, len: 4 }));
    }

    #[test]
    fn test_from_vec_overflowing_shape() {
        let result = Volume::from_vec(Shape::new([usize::MAX, 2]), vec![0u8; 2]);
        assert!(matches!(result, Err(Error::InvalidShape { .. })));
    }

    #[test]
    fn test_slice_and_stack() {
        let data: Vec<u16> = (0..24).collect();
        let vol = Volume::from_vec(Shape::new([2, 3, 4]), data).unwrap();
        let p1 = vol.slice(1).unwrap();
        assert_eq!(p1.as_slice()[0], 12);
        assert!(vol.slice(2).is_err());

        let p0 = vol.slice(0).unwrap();
        let restacked = Volume::stack(&[p0, p1]).unwrap();
        assert_eq!(restacked, vol);

        let odd: Volume<u16, 2> = Volume::new(Shape::new([2, 2]));
        let p0 = vol.slice(0).unwrap();
        assert!(matches!(
            Volume::stack(&[p0, odd]),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_remap_labels_simultaneous() {
        let mut seeds = Volume::from_vec(Shape::new([1, 4]), vec![0u8, 1, 2, 3]).unwrap();
        seeds.remap_labels(&[(2, 0), (3, 2)]);
        assert_eq!(seeds.as_slice(), &[0, 1, 0, 2]);
        assert_eq!(seeds.count_nonzero(), 2);
    }

    #[test]
    fn test_array_round_trip() {
        let vol = Volume::from_vec(Shape::new([2, 3]), vec![-1i16, 2, -3, 4, -5, 6]).unwrap();
        let arr = vol.as_array();
        assert_eq!(arr.pixel_type(), PixelType::I16);
        assert_eq!(arr.shape(), &[2, 3]);
        let copy = Volume::<i16, 2>::from_array(&arr).unwrap();
        assert_eq!(copy, vol);
        assert!(Volume::<u16, 2>::from_array(&arr).is_err());
    }
}
