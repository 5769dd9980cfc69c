//! Synthetic images and seed maps
//!
//! All random fixtures take an explicit seed so a failing regression run
//! can be reproduced exactly. Builders panic if a volume cannot be formed
//! from the generated buffer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seedgrow_core::{Shape, Volume};

/// Two-level image split along `axis`.
///
/// Elements whose coordinate on `axis` is below `split` get `low`, the
/// rest get `high`.
pub fn split_image<const D: usize>(
    shape: Shape<D>,
    axis: usize,
    split: usize,
    low: u8,
    high: u8,
) -> Volume<u8, D> {
    let data = shape
        .iter()
        .map(|c| if c[axis] < split { low } else { high })
        .collect();
    Volume::from_vec(shape, data).expect("one element per grid point")
}

/// Uniform random 8-bit image.
pub fn random_image<const D: usize>(shape: Shape<D>, seed: u64) -> Volume<u8, D> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..shape.len()).map(|_| rng.random::<u8>()).collect();
    Volume::from_vec(shape, data).expect("one element per grid point")
}

/// Uniform random 16-bit image with values in `0..=max`.
pub fn random_image_u16<const D: usize>(shape: Shape<D>, max: u16, seed: u64) -> Volume<u16, D> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..shape.len())
        .map(|_| rng.random_range(0..=max))
        .collect();
    Volume::from_vec(shape, data).expect("one element per grid point")
}

/// Seed map with up to `count` seed points at random positions.
///
/// Ids are drawn from `1..=max_id`. Positions may repeat, in which case the
/// later draw wins, so the map can hold fewer than `count` seeds.
pub fn sparse_seeds<const D: usize>(
    shape: Shape<D>,
    count: usize,
    max_id: u8,
    seed: u64,
) -> Volume<u8, D> {
    let mut seeds: Volume<u8, D> = Volume::new(shape);
    if shape.is_empty() || max_id == 0 {
        return seeds;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let index = rng.random_range(0..shape.len());
        let id = rng.random_range(1..=max_id);
        seeds.as_mut_slice()[index] = id;
    }
    seeds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_image() {
        let img = split_image(Shape::new([2, 4]), 1, 2, 10, 200);
        assert_eq!(img.as_slice(), &[10, 10, 200, 200, 10, 10, 200, 200]);
    }

    #[test]
    fn test_random_fixtures_are_reproducible() {
        let shape = Shape::new([4, 5, 6]);
        assert_eq!(random_image(shape, 7), random_image(shape, 7));
        assert_eq!(
            random_image_u16(shape, 4095, 3),
            random_image_u16(shape, 4095, 3)
        );
        assert!(
            random_image_u16(shape, 4095, 3)
                .as_slice()
                .iter()
                .all(|&v| v <= 4095)
        );
    }

    #[test]
    fn test_fixtures_fill_every_point() {
        let shape = Shape::new([3, 4, 5]);
        assert_eq!(split_image(shape, 0, 1, 0, 1).dims(), [3, 4, 5]);
        assert_eq!(random_image(shape, 1).len(), 60);
        assert_eq!(random_image_u16(shape, 9, 1).len(), 60);
    }

    #[test]
    fn test_sparse_seeds_ids_in_range() {
        let seeds = sparse_seeds(Shape::new([8, 8]), 10, 3, 42);
        let n = seeds.count_nonzero();
        assert!(n >= 1 && n <= 10);
        assert!(seeds.as_slice().iter().all(|&v| v <= 3));
    }
}
