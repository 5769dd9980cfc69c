//! Dimension- and type-erased segmentation
//!
//! [`SeededRegionGrowing`] is generic over pixel type and dimensionality.
//! Callers holding arrays whose type and rank are only known at run time go
//! through [`Segmenter`] (closed over 2D and 3D) or [`AnySegmenter`]
//! (additionally closed over the supported pixel types). Both implement
//! [`RegionGrower`].

use crate::error::RegionResult;
use crate::grow::{GrowthReport, SeededRegionGrowing};
use crate::options::GrowOptions;
use crate::stats::RegionStatsTable;
use seedgrow_core::error::format_dims;
use seedgrow_core::{ArrayRef, Error, Pixel, PixelType, Volume};

/// 8-bit label output of either dimensionality
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelMap {
    Planar(Volume<u8, 2>),
    Volumetric(Volume<u8, 3>),
}

impl LabelMap {
    /// Extents, outermost axis first.
    pub fn dims(&self) -> Vec<usize> {
        match self {
            LabelMap::Planar(v) => v.dims().to_vec(),
            LabelMap::Volumetric(v) => v.dims().to_vec(),
        }
    }

    pub fn ndim(&self) -> usize {
        match self {
            LabelMap::Planar(_) => 2,
            LabelMap::Volumetric(_) => 3,
        }
    }

    /// Labels in memory order.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            LabelMap::Planar(v) => v.as_slice(),
            LabelMap::Volumetric(v) => v.as_slice(),
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        match self {
            LabelMap::Planar(v) => v.into_vec(),
            LabelMap::Volumetric(v) => v.into_vec(),
        }
    }

    pub fn as_planar(&self) -> Option<&Volume<u8, 2>> {
        match self {
            LabelMap::Planar(v) => Some(v),
            LabelMap::Volumetric(_) => None,
        }
    }

    pub fn as_volumetric(&self) -> Option<&Volume<u8, 3>> {
        match self {
            LabelMap::Volumetric(v) => Some(v),
            LabelMap::Planar(_) => None,
        }
    }
}

impl From<Volume<u8, 2>> for LabelMap {
    fn from(v: Volume<u8, 2>) -> Self {
        LabelMap::Planar(v)
    }
}

impl From<Volume<u8, 3>> for LabelMap {
    fn from(v: Volume<u8, 3>) -> Self {
        LabelMap::Volumetric(v)
    }
}

/// Capability shared by every engine variant
pub trait RegionGrower {
    /// Initialize from the seeds and grow to completion.
    fn segment(&mut self);

    /// Labels narrowed to 8 bits, unlabeled points as 255.
    fn result(&self) -> LabelMap;

    /// Full-width labels in memory order, unlabeled points as -1.
    fn label_values(&self) -> &[i32];

    /// Extents, outermost axis first.
    fn dims(&self) -> Vec<usize>;

    fn region_stats(&self) -> &RegionStatsTable;

    fn report(&self) -> GrowthReport;
}

macro_rules! impl_region_grower {
    ($($d:literal),*) => {
        $(
            impl<T: Pixel> RegionGrower for SeededRegionGrowing<'_, T, $d> {
                fn segment(&mut self) {
                    SeededRegionGrowing::segment(self);
                }

                fn result(&self) -> LabelMap {
                    self.result_u8().into()
                }

                fn label_values(&self) -> &[i32] {
                    self.labels().as_slice()
                }

                fn dims(&self) -> Vec<usize> {
                    self.shape().dims().to_vec()
                }

                fn region_stats(&self) -> &RegionStatsTable {
                    SeededRegionGrowing::region_stats(self)
                }

                fn report(&self) -> GrowthReport {
                    SeededRegionGrowing::report(self)
                }
            }
        )*
    };
}

impl_region_grower!(2, 3);

/// Engine over a fixed pixel type, with dimensionality chosen at run time
#[derive(Debug, Clone)]
pub enum Segmenter<'a, T: Pixel> {
    Planar(SeededRegionGrowing<'a, T, 2>),
    Volumetric(SeededRegionGrowing<'a, T, 3>),
}

impl<'a, T: Pixel> Segmenter<'a, T> {
    /// Select the 2D or 3D engine from the image's dimensionality.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the image is neither 2D nor 3D, or the seed map
    ///   differs from it in dimensionality or extents.
    /// - `TypeMismatch` if the image is not `T` or the seeds are not `u8`.
    pub fn new(
        image: &ArrayRef<'a>,
        seeds: &ArrayRef<'a>,
        options: &GrowOptions,
    ) -> RegionResult<Self> {
        match image.ndim() {
            2 => Ok(Segmenter::Planar(SeededRegionGrowing::from_arrays(
                image, seeds, options,
            )?)),
            3 => Ok(Segmenter::Volumetric(SeededRegionGrowing::from_arrays(
                image, seeds, options,
            )?)),
            _ => Err(Error::ShapeMismatch {
                expected: "2 or 3 axes".to_string(),
                actual: format_dims(image.shape()),
            }
            .into()),
        }
    }

    pub fn ndim(&self) -> usize {
        match self {
            Segmenter::Planar(_) => 2,
            Segmenter::Volumetric(_) => 3,
        }
    }

    fn inner(&self) -> &dyn RegionGrower {
        match self {
            Segmenter::Planar(g) => g,
            Segmenter::Volumetric(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn RegionGrower {
        match self {
            Segmenter::Planar(g) => g,
            Segmenter::Volumetric(g) => g,
        }
    }
}

impl<T: Pixel> RegionGrower for Segmenter<'_, T> {
    fn segment(&mut self) {
        self.inner_mut().segment();
    }

    fn result(&self) -> LabelMap {
        self.inner().result()
    }

    fn label_values(&self) -> &[i32] {
        self.inner().label_values()
    }

    fn dims(&self) -> Vec<usize> {
        self.inner().dims()
    }

    fn region_stats(&self) -> &RegionStatsTable {
        self.inner().region_stats()
    }

    fn report(&self) -> GrowthReport {
        self.inner().report()
    }
}

/// Engine with pixel type and dimensionality chosen at run time
#[derive(Debug, Clone)]
pub enum AnySegmenter<'a> {
    U8(Segmenter<'a, u8>),
    I8(Segmenter<'a, i8>),
    U16(Segmenter<'a, u16>),
    I16(Segmenter<'a, i16>),
    U32(Segmenter<'a, u32>),
}

impl<'a> AnySegmenter<'a> {
    /// Build the engine matching the image's element type and rank.
    ///
    /// # Errors
    ///
    /// As [`Segmenter::new`]; `TypeMismatch` can only come from the seeds.
    pub fn new(
        image: &ArrayRef<'a>,
        seeds: &ArrayRef<'a>,
        options: &GrowOptions,
    ) -> RegionResult<Self> {
        Ok(match image.pixel_type() {
            PixelType::U8 => AnySegmenter::U8(Segmenter::new(image, seeds, options)?),
            PixelType::I8 => AnySegmenter::I8(Segmenter::new(image, seeds, options)?),
            PixelType::U16 => AnySegmenter::U16(Segmenter::new(image, seeds, options)?),
            PixelType::I16 => AnySegmenter::I16(Segmenter::new(image, seeds, options)?),
            PixelType::U32 => AnySegmenter::U32(Segmenter::new(image, seeds, options)?),
        })
    }

    /// Element type of the image being segmented.
    pub fn pixel_type(&self) -> PixelType {
        match self {
            AnySegmenter::U8(_) => PixelType::U8,
            AnySegmenter::I8(_) => PixelType::I8,
            AnySegmenter::U16(_) => PixelType::U16,
            AnySegmenter::I16(_) => PixelType::I16,
            AnySegmenter::U32(_) => PixelType::U32,
        }
    }

    fn inner(&self) -> &dyn RegionGrower {
        match self {
            AnySegmenter::U8(s) => s,
            AnySegmenter::I8(s) => s,
            AnySegmenter::U16(s) => s,
            AnySegmenter::I16(s) => s,
            AnySegmenter::U32(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn RegionGrower {
        match self {
            AnySegmenter::U8(s) => s,
            AnySegmenter::I8(s) => s,
            AnySegmenter::U16(s) => s,
            AnySegmenter::I16(s) => s,
            AnySegmenter::U32(s) => s,
        }
    }
}

impl RegionGrower for AnySegmenter<'_> {
    fn segment(&mut self) {
        self.inner_mut().segment();
    }

    fn result(&self) -> LabelMap {
        self.inner().result()
    }

    fn label_values(&self) -> &[i32] {
        self.inner().label_values()
    }

    fn dims(&self) -> Vec<usize> {
        self.inner().dims()
    }

    fn region_stats(&self) -> &RegionStatsTable {
        self.inner().region_stats()
    }

    fn report(&self) -> GrowthReport {
        self.inner().report()
    }
}

/// Segment a runtime-typed image in one call.
///
/// # Errors
///
/// As [`AnySegmenter::new`].
pub fn segment_array(
    image: &ArrayRef<'_>,
    seeds: &ArrayRef<'_>,
    options: &GrowOptions,
) -> RegionResult<LabelMap> {
    let mut segmenter = AnySegmenter::new(image, seeds, options)?;
    segmenter.segment();
    Ok(segmenter.result())
}
