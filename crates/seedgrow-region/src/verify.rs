//! Output checks
//!
//! Independent re-computations of properties every growth result must
//! satisfy. They do not share code with the engine's growth loop.

use crate::connectivity::Neighborhood;
use crate::stats::RegionStatsTable;
use seedgrow_core::{Coord, GridView, LabelField, Pixel, SeedView};
use std::collections::VecDeque;

/// First labeled point not reachable from a seed of its own label.
///
/// Reachability follows `neighborhood` through points carrying the same
/// label. Returns `None` when every labeled point is reachable.
pub fn find_disconnected<const D: usize>(
    labels: &LabelField<D>,
    seeds: &SeedView<'_, D>,
    neighborhood: &Neighborhood<D>,
) -> Option<Coord<D>> {
    let shape = labels.shape();
    let mut reached = vec![false; shape.len()];
    let mut queue = VecDeque::new();

    for (coord, seed) in seeds.iter() {
        if seed != 0 && labels.get(&coord) == Some(i32::from(seed)) {
            reached[shape.index(&coord)] = true;
            queue.push_back(coord);
        }
    }

    while let Some(p) = queue.pop_front() {
        let label = labels.get(&p);
        for n in neighborhood.neighbors(&shape, &p) {
            let i = shape.index(&n);
            if !reached[i] && labels.get(&n) == label {
                reached[i] = true;
                queue.push_back(n);
            }
        }
    }

    shape
        .iter()
        .find(|c| labels.label(c).is_some() && !reached[shape.index(c)])
}

/// Whether every labeled point connects back to a same-label seed.
pub fn verify_connectivity<const D: usize>(
    labels: &LabelField<D>,
    seeds: &SeedView<'_, D>,
    neighborhood: &Neighborhood<D>,
) -> bool {
    find_disconnected(labels, seeds, neighborhood).is_none()
}

/// Whether each region's count matches the number of points carrying it.
pub fn verify_stats<const D: usize>(labels: &LabelField<D>, stats: &RegionStatsTable) -> bool {
    let histogram = labels.histogram();
    histogram[0] == 0
        && (1..=u8::MAX).all(|id| stats.get(id).count() == histogram[id as usize])
}

/// Whether each region's mean matches its points' intensities within `tolerance`.
pub fn verify_means<T: Pixel, const D: usize>(
    image: &GridView<'_, T, D>,
    labels: &LabelField<D>,
    stats: &RegionStatsTable,
    tolerance: f64,
) -> bool {
    let mut sums = vec![0.0f64; seedgrow_core::LABEL_CAPACITY];
    for (coord, value) in image.iter() {
        if let Some(id) = labels.label(&coord) {
            sums[id.get() as usize] += value.to_f64();
        }
    }
    stats.regions().all(|(id, region)| {
        let exact = sums[id.get() as usize] / region.count() as f64;
        (exact - region.mean()).abs() <= tolerance
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::ConnectivityType;
    use seedgrow_core::Shape;

    #[test]
    fn test_detects_island() {
        let shape = Shape::new([1, 5]);
        let mut labels = LabelField::new(shape);
        for c in [[0, 0], [0, 1], [0, 3]] {
            labels.try_claim(&c, 1).unwrap();
        }
        let seeds = [1u8, 0, 0, 0, 0];
        let seeds = GridView::new(&seeds[..], shape).unwrap();
        let n = Neighborhood::new(ConnectivityType::EightWay).unwrap();
        assert_eq!(find_disconnected(&labels, &seeds, &n), Some([0, 3]));
        assert!(!verify_connectivity(&labels, &seeds, &n));

        labels.try_claim(&[0, 2], 1).unwrap();
        assert!(verify_connectivity(&labels, &seeds, &n));
    }

    #[test]
    fn test_diagonal_needs_eight_way() {
        let shape = Shape::new([2, 2]);
        let mut labels = LabelField::new(shape);
        labels.try_claim(&[0, 0], 2).unwrap();
        labels.try_claim(&[1, 1], 2).unwrap();
        let seeds = [2u8, 0, 0, 0];
        let seeds = GridView::new(&seeds[..], shape).unwrap();
        let eight = Neighborhood::new(ConnectivityType::EightWay).unwrap();
        let four = Neighborhood::new(ConnectivityType::FourWay).unwrap();
        assert!(verify_connectivity(&labels, &seeds, &eight));
        assert!(!verify_connectivity(&labels, &seeds, &four));
    }

    #[test]
    fn test_stats_and_means() {
        let shape = Shape::new([1, 3]);
        let image = [2u8, 4, 9];
        let image = GridView::new(&image[..], shape).unwrap();
        let mut labels = LabelField::new(shape);
        labels.try_claim(&[0, 0], 5).unwrap();
        labels.try_claim(&[0, 1], 5).unwrap();

        let mut stats = RegionStatsTable::new();
        let id = std::num::NonZeroU8::new(5).unwrap();
        stats.add_value(id, 2.0);
        assert!(!verify_stats(&labels, &stats));
        stats.add_value(id, 4.0);
        assert!(verify_stats(&labels, &stats));
        assert!(verify_means(&image, &labels, &stats, 1e-12));
    }
}
