//! Seeded region growing engine
//!
//! Regions start from the nonzero points of an 8-bit seed map and grow one
//! voxel at a time. Each frontier entry, when dequeued, claims the single
//! unlabeled neighbor whose intensity is closest to its region's current
//! mean; the claimed voxel is then queued again once for every unlabeled
//! neighbor it still has. Growth order between competing regions is
//! decided by arrival order in the FIFO, not by a global ranking.
//!
//! # Examples
//!
//! ```
//! use seedgrow_core::{GridView, Shape};
//! use seedgrow_region::{GrowOptions, SeededRegionGrowing};
//!
//! let image: Vec<u8> = vec![
//!     10, 10, 50, 50,
//!     10, 10, 50, 50,
//!     12, 11, 48, 49,
//!     13, 12, 47, 48,
//! ];
//! let mut seeds = vec![0u8; 16];
//! seeds[0] = 1;
//! seeds[3] = 2;
//!
//! let shape = Shape::new([4, 4]);
//! let image = GridView::new(&image[..], shape).unwrap();
//! let seeds = GridView::new(&seeds[..], shape).unwrap();
//!
//! let mut grower = SeededRegionGrowing::new(image, seeds, &GrowOptions::default()).unwrap();
//! grower.segment();
//! let labels = grower.result_u8();
//! assert_eq!(&labels.as_slice()[..4], &[1, 1, 2, 2]);
//! ```

use crate::connectivity::{ConnectivityType, Neighborhood};
use crate::error::RegionResult;
use crate::frontier::Frontier;
use crate::options::{GrowOptions, SeedScanOrder};
use crate::stats::RegionStatsTable;
use seedgrow_core::{
    ArrayRef, Coord, GridView, LabelField, Pixel, SeedView, Shape, UNLABELED_U8, Volume,
};
use std::num::NonZeroU8;
use tracing::{debug, trace, warn};

/// Counters describing one growth run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthReport {
    /// Seed voxels labeled at initialization
    pub seeds: usize,
    /// Frontier entries dequeued
    pub iterations: usize,
    /// Voxels claimed by growth (seeds excluded)
    pub claimed: usize,
    /// Total frontier pushes, seeds included
    pub enqueued: usize,
    /// Largest frontier length reached
    pub peak_frontier: usize,
    /// Voxels no region reached
    pub unlabeled: usize,
}

/// Region growing engine over a `D`-dimensional grid of `T`
///
/// The engine borrows the image and seed map for its whole lifetime and
/// owns its label field, region statistics and frontier exclusively.
#[derive(Debug, Clone)]
pub struct SeededRegionGrowing<'a, T: Pixel, const D: usize> {
    image: GridView<'a, T, D>,
    seeds: SeedView<'a, D>,
    neighborhood: Neighborhood<D>,
    scan_order: SeedScanOrder,
    labels: LabelField<D>,
    stats: RegionStatsTable,
    frontier: Frontier<D>,
    report: GrowthReport,
}

impl<'a, T: Pixel, const D: usize> SeededRegionGrowing<'a, T, D> {
    /// Create an engine for an image and a seed map of the same shape.
    ///
    /// # Errors
    ///
    /// - [`RegionError::Core`] wrapping `ShapeMismatch` if the extents differ.
    /// - [`RegionError::UnsupportedConnectivity`] if the requested
    ///   connectivity is not defined for `D` dimensions.
    ///
    /// [`RegionError::Core`]: crate::RegionError::Core
    /// [`RegionError::UnsupportedConnectivity`]: crate::RegionError::UnsupportedConnectivity
    pub fn new(
        image: GridView<'a, T, D>,
        seeds: SeedView<'a, D>,
        options: &GrowOptions,
    ) -> RegionResult<Self> {
        image.ensure_same_shape(&seeds)?;
        let neighborhood = match options.connectivity {
            Some(connectivity) => Neighborhood::new(connectivity)?,
            None => Neighborhood::default_for_dim()?,
        };
        Ok(Self {
            image,
            seeds,
            neighborhood,
            scan_order: options.scan_order,
            labels: LabelField::new(image.shape()),
            stats: RegionStatsTable::new(),
            frontier: Frontier::new(),
            report: GrowthReport::default(),
        })
    }

    /// Create an engine from runtime-typed arrays.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`Self::new`], fails with
    /// `ShapeMismatch` if either array is not `D`-dimensional and with
    /// `TypeMismatch` if the image is not `T` or the seeds are not `u8`.
    pub fn from_arrays(
        image: &ArrayRef<'a>,
        seeds: &ArrayRef<'a>,
        options: &GrowOptions,
    ) -> RegionResult<Self> {
        let image = GridView::<T, D>::from_array(image)?;
        let seeds = GridView::<u8, D>::from_array(seeds)?;
        Self::new(image, seeds, options)
    }

    /// Reset all state and label the seed points.
    ///
    /// Every nonzero seed is written to the label field, folded into its
    /// region's statistics and queued once, in the configured scan order.
    pub fn initialize(&mut self) {
        let shape = self.image.shape();
        self.labels = LabelField::new(shape);
        self.stats.clear();
        self.frontier.clear();
        self.report = GrowthReport::default();

        let coords = match self.scan_order {
            SeedScanOrder::MemoryOrder => shape.iter(),
            SeedScanOrder::InnermostFirst => shape.iter_innermost_first(),
        };
        let mut reserved_id_seen = false;
        for coord in coords {
            let Some(id) = NonZeroU8::new(self.seeds.value(&coord)) else {
                continue;
            };
            reserved_id_seen |= id.get() == UNLABELED_U8;
            self.labels.claim(&coord, id);
            self.stats.add_value(id, self.image.value(&coord).to_f64());
            self.frontier.push(coord);
            self.report.seeds += 1;
        }

        if reserved_id_seen {
            warn!(
                "seed id {} present; it is indistinguishable from unlabeled in 8-bit output",
                UNLABELED_U8
            );
        }
        debug!(
            shape = %shape,
            connectivity = %self.neighborhood.connectivity(),
            seeds = self.report.seeds,
            regions = self.stats.region_count(),
            "initialized region growing"
        );
    }

    /// Dequeue and process one frontier entry.
    ///
    /// Returns `false` once the frontier is empty. Driving growth this way
    /// yields the same labels as [`Self::process_seeds`], and the label
    /// field and statistics agree with each other after every step. The
    /// frontier counters in [`Self::report`] are filled in by
    /// [`Self::process_seeds`].
    pub fn step(&mut self) -> bool {
        let Some(p) = self.frontier.pop() else {
            return false;
        };
        self.report.iterations += 1;
        let Some(label) = self.labels.label(&p) else {
            return true;
        };
        let shape = self.image.shape();
        let region = *self.stats.get(label.get());

        let mut best: Option<(Coord<D>, f64)> = None;
        for n in self.neighborhood.neighbors(&shape, &p) {
            if !self.labels.is_unlabeled(&n) {
                continue;
            }
            let sigma = region.sigma(self.image.value(&n).to_f64());
            if best.is_none_or(|(_, min)| sigma < min) {
                best = Some((n, sigma));
            }
        }
        let Some((winner, sigma)) = best else {
            return true;
        };

        self.labels.claim(&winner, label);
        self.stats
            .add_value(label, self.image.value(&winner).to_f64());
        self.report.claimed += 1;
        trace!(?winner, label = label.get(), sigma, "claimed");

        let open = self
            .neighborhood
            .neighbors(&shape, &winner)
            .filter(|q| self.labels.is_unlabeled(q))
            .count();
        self.frontier.push_repeated(winner, open);
        true
    }

    /// Drain the frontier, growing every region until no entry remains.
    pub fn process_seeds(&mut self) {
        while self.step() {}

        self.report.enqueued = self.frontier.enqueued();
        self.report.peak_frontier = self.frontier.peak();
        self.report.unlabeled = self.labels.unlabeled_count();
        debug!(
            iterations = self.report.iterations,
            claimed = self.report.claimed,
            enqueued = self.report.enqueued,
            peak_frontier = self.report.peak_frontier,
            unlabeled = self.report.unlabeled,
            "region growing finished"
        );
    }

    /// Initialize from the seeds and grow to completion.
    ///
    /// Calling this again restarts from the seeds and produces the same
    /// labels.
    pub fn segment(&mut self) {
        self.initialize();
        self.process_seeds();
    }

    /// Labels narrowed to 8 bits, unlabeled points as 255.
    ///
    /// Before [`Self::segment`] this is all 255.
    pub fn result_u8(&self) -> Volume<u8, D> {
        self.labels.to_u8()
    }

    /// Full-width label field, unlabeled points as -1.
    pub fn labels(&self) -> &LabelField<D> {
        &self.labels
    }

    /// Consume the engine, keeping the label field.
    pub fn into_labels(self) -> LabelField<D> {
        self.labels
    }

    pub fn region_stats(&self) -> &RegionStatsTable {
        &self.stats
    }

    pub fn report(&self) -> GrowthReport {
        self.report
    }

    pub fn shape(&self) -> Shape<D> {
        self.image.shape()
    }

    pub fn image(&self) -> &GridView<'a, T, D> {
        &self.image
    }

    pub fn seeds(&self) -> &SeedView<'a, D> {
        &self.seeds
    }

    pub fn neighborhood(&self) -> &Neighborhood<D> {
        &self.neighborhood
    }

    pub fn connectivity(&self) -> ConnectivityType {
        self.neighborhood.connectivity()
    }
}
