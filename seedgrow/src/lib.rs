//! Seedgrow - Seeded region growing segmentation
//!
//! Partitions a 2D or 3D integer image into labeled regions grown outward
//! from operator-marked seed points. Every unlabeled point is claimed by the
//! region whose running mean intensity it matches best, in the order the
//! growth frontier reaches it.
//!
//! # Overview
//!
//! - Grids, owned volumes and label fields ([`seedgrow_core`])
//! - The growth engine and its runtime-dispatched variants ([`region`])
//! - Raw volume input and PGM / PNG label output ([`io`])
//!
//! # Example
//!
//! ```
//! use seedgrow::region::{GrowOptions, SeededRegionGrowing};
//! use seedgrow::{Shape, Volume};
//!
//! let shape = Shape::new([4, 4]);
//! let image = Volume::from_vec(shape, vec![
//!     10, 10, 50, 50,
//!     10, 10, 50, 50,
//!     12, 11, 48, 49,
//!     13, 12, 47, 48u8,
//! ]).unwrap();
//! let mut seeds: Volume<u8, 2> = Volume::new(shape);
//! seeds.set(&[0, 0], 1).unwrap();
//! seeds.set(&[0, 3], 2).unwrap();
//!
//! let mut grower =
//!     SeededRegionGrowing::new(image.view(), seeds.view(), &GrowOptions::default()).unwrap();
//! grower.segment();
//! let labels = grower.result_u8();
//! assert_eq!(labels.get(&[0, 0]), Some(1));
//! assert_eq!(labels.get(&[0, 3]), Some(2));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use seedgrow_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use seedgrow_io as io;
pub use seedgrow_region as region;
