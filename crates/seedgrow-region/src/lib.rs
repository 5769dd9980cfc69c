//! seedgrow-region - Seeded region growing segmentation
//!
//! This crate partitions a 2D or 3D integer image into labeled regions grown
//! outward from seed points:
//!
//! - **Neighborhood model** - 4-/8-way adjacency in 2D, 6-way (or opt-in
//!   26-way) in 3D, enumerated in a fixed order
//! - **Region statistics** - Per-region voxel count and running mean
//! - **Growth engine** - FIFO frontier driven, write-once labeling
//! - **Runtime dispatch** - Engines selected from an array's element type
//!   and rank
//! - **Verification** - Connectivity and statistics checks on results
//!
//! # Examples
//!
//! ## Segmenting a runtime-typed array
//!
//! ```
//! use seedgrow_core::ArrayRef;
//! use seedgrow_region::{GrowOptions, segment_array};
//!
//! let image: Vec<u16> = vec![100; 8];
//! let mut seeds = vec![0u8; 8];
//! seeds[5] = 7;
//!
//! let image = ArrayRef::new(&image[..], &[2, 2, 2]).unwrap();
//! let seeds = ArrayRef::new(&seeds[..], &[2, 2, 2]).unwrap();
//! let labels = segment_array(&image, &seeds, &GrowOptions::default()).unwrap();
//! assert!(labels.as_slice().iter().all(|&v| v == 7));
//! ```
//!
//! ## Choosing a neighborhood
//!
//! ```
//! use seedgrow_region::{ConnectivityType, GrowOptions};
//!
//! let options = GrowOptions::new().with_connectivity(ConnectivityType::FourWay);
//! assert_eq!(options.connectivity, Some(ConnectivityType::FourWay));
//! ```

pub mod connectivity;
pub mod error;
pub mod frontier;
pub mod grow;
pub mod options;
pub mod segmenter;
pub mod stats;
pub mod verify;

// Re-export core types
pub use seedgrow_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use connectivity::{ConnectivityType, Neighborhood};
pub use frontier::Frontier;
pub use grow::{GrowthReport, SeededRegionGrowing};
pub use options::{GrowOptions, SeedScanOrder};
pub use segmenter::{AnySegmenter, LabelMap, RegionGrower, Segmenter, segment_array};
pub use stats::{RegionStats, RegionStatsTable};
pub use verify::{find_disconnected, verify_connectivity, verify_means, verify_stats};
