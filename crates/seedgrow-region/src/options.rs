//! Growth options

use crate::connectivity::ConnectivityType;

/// Order in which seed points are queued at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedScanOrder {
    /// Memory order: outermost axis slowest, last axis fastest
    #[default]
    MemoryOrder,
    /// Innermost (column) axis as the slowest loop, axis 0 fastest
    InnermostFirst,
}

/// Options for seeded region growing
#[derive(Debug, Clone, Default)]
pub struct GrowOptions {
    /// Neighborhood; `None` selects 8-way in 2D and 6-way in 3D
    pub connectivity: Option<ConnectivityType>,
    /// Seed queueing order
    pub scan_order: SeedScanOrder,
}

impl GrowOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    /// Set seed scan order
    pub fn with_scan_order(mut self, scan_order: SeedScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }
}
