//! Neighborhood model
//!
//! Adjacency is a fixed list of signed offsets, enumerated in a fixed order.
//! The order matters: when two candidate neighbors are equally similar to a
//! region, the one listed first wins.

use crate::error::{RegionError, RegionResult};
use seedgrow_core::{Coord, Shape};
use std::fmt;

/// Connectivity type for adjacency queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectivityType {
    /// 2D, axis-aligned neighbors only
    FourWay,
    /// 2D, axis-aligned plus diagonal neighbors
    EightWay,
    /// 3D, face-adjacent neighbors only
    SixWay,
    /// 3D, face, edge and corner neighbors
    TwentySixWay,
}

// (axis0, axis1) pairs; the first four form the 4-way set.
const EIGHT_WAY: [[isize; 2]; 8] = [
    [0, -1],
    [0, 1],
    [-1, 0],
    [1, 0],
    [1, 1],
    [-1, 1],
    [1, -1],
    [-1, -1],
];

const SIX_WAY: [[isize; 3]; 6] = [
    [0, 0, -1],
    [0, 0, 1],
    [0, -1, 0],
    [0, 1, 0],
    [-1, 0, 0],
    [1, 0, 0],
];

impl ConnectivityType {
    /// Default connectivity for a dimensionality: 8-way in 2D, 6-way in 3D.
    pub fn default_for(ndim: usize) -> Option<Self> {
        match ndim {
            2 => Some(Self::EightWay),
            3 => Some(Self::SixWay),
            _ => None,
        }
    }

    /// Dimensionality this connectivity is defined for.
    pub fn ndim(self) -> usize {
        match self {
            Self::FourWay | Self::EightWay => 2,
            Self::SixWay | Self::TwentySixWay => 3,
        }
    }

    /// Number of neighbors per point.
    pub fn neighbor_count(self) -> usize {
        match self {
            Self::FourWay => 4,
            Self::EightWay => 8,
            Self::SixWay => 6,
            Self::TwentySixWay => 26,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::FourWay => "4-way",
            Self::EightWay => "8-way",
            Self::SixWay => "6-way",
            Self::TwentySixWay => "26-way",
        }
    }

    /// Offsets in enumeration order, one `Vec` per neighbor.
    fn offset_table(self) -> Vec<Vec<isize>> {
        match self {
            Self::FourWay => EIGHT_WAY[..4].iter().map(|o| o.to_vec()).collect(),
            Self::EightWay => EIGHT_WAY.iter().map(|o| o.to_vec()).collect(),
            Self::SixWay => SIX_WAY.iter().map(|o| o.to_vec()).collect(),
            Self::TwentySixWay => {
                let mut table = Vec::with_capacity(26);
                for dz in -1..=1isize {
                    for dy in -1..=1isize {
                        for dx in -1..=1isize {
                            if (dz, dy, dx) != (0, 0, 0) {
                                table.push(vec![dz, dy, dx]);
                            }
                        }
                    }
                }
                table
            }
        }
    }
}

impl fmt::Display for ConnectivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Offset set for a `D`-dimensional grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood<const D: usize> {
    connectivity: ConnectivityType,
    offsets: Vec<[isize; D]>,
}

impl<const D: usize> Neighborhood<D> {
    /// Build the offset set for `connectivity`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnsupportedConnectivity`] if `connectivity`
    /// is not defined for `D` dimensions.
    pub fn new(connectivity: ConnectivityType) -> RegionResult<Self> {
        if connectivity.ndim() != D {
            return Err(RegionError::UnsupportedConnectivity {
                connectivity: connectivity.name(),
                ndim: D,
            });
        }
        let offsets = connectivity
            .offset_table()
            .into_iter()
            .map(|o| std::array::from_fn(|axis| o[axis]))
            .collect();
        Ok(Self {
            connectivity,
            offsets,
        })
    }

    /// Default neighborhood for `D` dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnsupportedConnectivity`] unless `D` is 2 or 3.
    pub fn default_for_dim() -> RegionResult<Self> {
        let connectivity = ConnectivityType::default_for(D).ok_or(
            RegionError::UnsupportedConnectivity {
                connectivity: "default",
                ndim: D,
            },
        )?;
        Self::new(connectivity)
    }

    pub fn connectivity(&self) -> ConnectivityType {
        self.connectivity
    }

    pub fn offsets(&self) -> &[[isize; D]] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// In-bounds neighbors of `coord`, in enumeration order.
    #[inline]
    pub fn neighbors<'s>(
        &'s self,
        shape: &'s Shape<D>,
        coord: &'s Coord<D>,
    ) -> impl Iterator<Item = Coord<D>> + 's {
        self.offsets
            .iter()
            .filter_map(move |delta| shape.offset(coord, delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_counts() {
        for c in [
            ConnectivityType::FourWay,
            ConnectivityType::EightWay,
            ConnectivityType::SixWay,
            ConnectivityType::TwentySixWay,
        ] {
            assert_eq!(c.offset_table().len(), c.neighbor_count());
        }
    }

    #[test]
    fn test_dimensionality_check() {
        assert!(Neighborhood::<2>::new(ConnectivityType::EightWay).is_ok());
        assert!(Neighborhood::<3>::new(ConnectivityType::SixWay).is_ok());
        assert!(matches!(
            Neighborhood::<3>::new(ConnectivityType::EightWay),
            Err(RegionError::UnsupportedConnectivity { ndim: 3, .. })
        ));
        assert!(Neighborhood::<2>::new(ConnectivityType::TwentySixWay).is_err());
        assert!(Neighborhood::<4>::default_for_dim().is_err());
    }

    #[test]
    fn test_defaults() {
        let n2 = Neighborhood::<2>::default_for_dim().unwrap();
        assert_eq!(n2.connectivity(), ConnectivityType::EightWay);
        let n3 = Neighborhood::<3>::default_for_dim().unwrap();
        assert_eq!(n3.connectivity(), ConnectivityType::SixWay);
        assert_eq!(n3.offsets()[0], [0, 0, -1]);
    }

    #[test]
    fn test_offsets_unique_and_unit() {
        let n = Neighborhood::<3>::new(ConnectivityType::TwentySixWay).unwrap();
        let mut seen = n.offsets().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 26);
        assert!(n.offsets().iter().all(|o| o.iter().all(|d| d.abs() <= 1)));
        assert_eq!(n.offsets()[0], [-1, -1, -1]);
    }

    #[test]
    fn test_corner_neighbors_stay_in_bounds() {
        let shape = Shape::new([3, 4]);
        let n = Neighborhood::<2>::default_for_dim().unwrap();
        let corner = [0, 0];
        let found: Vec<_> = n.neighbors(&shape, &corner).collect();
        assert_eq!(found, vec![[0, 1], [1, 0], [1, 1]]);

        let far = [2, 3];
        let found: Vec<_> = n.neighbors(&shape, &far).collect();
        assert_eq!(found, vec![[2, 2], [1, 3], [1, 2]]);
    }
}
