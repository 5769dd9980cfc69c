//! Per-region running statistics
//!
//! Each region keeps a voxel count and an incrementally updated mean. The
//! mean is folded one value at a time (`mean += (v - mean) / count`), so the
//! result depends only on the order values arrive in.

use seedgrow_core::LABEL_CAPACITY;
use std::num::NonZeroU8;
use std::ops::Index;

/// Count and running mean of one region
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionStats {
    count: usize,
    mean: f64,
}

impl RegionStats {
    /// Fold one intensity into the statistics.
    #[inline]
    pub fn add_value(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    /// Number of voxels folded in.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean intensity; 0 for an empty region.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Absolute difference between `value` and the current mean.
    #[inline]
    pub fn sigma(&self, value: f64) -> f64 {
        (value - self.mean).abs()
    }
}

/// Statistics for every region id `0..=255`
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStatsTable {
    entries: Vec<RegionStats>,
}

impl Default for RegionStatsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionStatsTable {
    /// Create a table with every region empty.
    pub fn new() -> Self {
        Self {
            entries: vec![RegionStats::default(); LABEL_CAPACITY],
        }
    }

    /// Statistics of region `id`.
    pub fn get(&self, id: u8) -> &RegionStats {
        &self.entries[id as usize]
    }

    /// Fold one intensity into region `id`.
    #[inline]
    pub fn add_value(&mut self, id: NonZeroU8, value: f64) {
        self.entries[id.get() as usize].add_value(value);
    }

    /// Empty every region.
    pub fn clear(&mut self) {
        self.entries.fill(RegionStats::default());
    }

    /// Non-empty regions in ascending id order.
    pub fn regions(&self) -> impl Iterator<Item = (NonZeroU8, &RegionStats)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .filter_map(|(id, s)| NonZeroU8::new(id as u8).map(|id| (id, s)))
    }

    /// Number of non-empty regions.
    pub fn region_count(&self) -> usize {
        self.regions().count()
    }

    /// Total voxels across all regions.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|s| s.count).sum()
    }
}

impl Index<u8> for RegionStatsTable {
    type Output = RegionStats;

    fn index(&self, id: u8) -> &RegionStats {
        self.get(id)
    }
}
