//! Volumetric region growing regression test
//!
//! Run with:
//! ```
//! cargo test -p seedgrow-region --test grow3d_reg
//! ```

use seedgrow_core::{GridView, Shape, Volume};
use seedgrow_region::{
    ConnectivityType, GrowOptions, SeededRegionGrowing, verify_connectivity, verify_stats,
};
use seedgrow_test::RegParams;
use seedgrow_test::fixtures::random_image;

/// Three planes: the first at 10, the other two at 90.
fn layered() -> Volume<u8, 3> {
    let shape = Shape::new([3, 4, 5]);
    let data = shape
        .iter()
        .map(|[z, _, _]| if z == 0 { 10 } else { 90 })
        .collect();
    Volume::from_vec(shape, data).unwrap()
}

fn layered_seeds() -> Volume<u8, 3> {
    let mut seeds: Volume<u8, 3> = Volume::new(Shape::new([3, 4, 5]));
    seeds.set(&[0, 1, 2], 1).unwrap();
    seeds.set(&[2, 2, 2], 2).unwrap();
    seeds
}

#[test]
fn grow3d_reg() {
    let mut rp = RegParams::new("grow3d");

    // --- Test 1: single seed fills a 2x2x2 volume ---
    eprintln!("// --- Test 1: single seed, 2x2x2 ---");
    let shape = Shape::new([2, 2, 2]);
    let mut filled = 0;
    for trial in 0..20u64 {
        let image = random_image(shape, trial);
        for index in 0..shape.len() {
            let mut seeds: Volume<u8, 3> = Volume::new(shape);
            seeds.as_mut_slice()[index] = 9;
            let mut grower =
                SeededRegionGrowing::new(image.view(), seeds.view(), &GrowOptions::default())
                    .unwrap();
            grower.segment();
            let labels = grower.result_u8();
            assert!(
                labels.as_slice().iter().all(|&v| v == 9),
                "trial {} seed {}: {:?}",
                trial,
                index,
                labels.as_slice()
            );
            assert_eq!(grower.report().claimed, 7);
            filled += 1;
        }
    }
    rp.compare_values(160.0, filled as f64, 0.0); // 1

    // --- Test 2: layered volume, 6-way ---
    eprintln!("// --- Test 2: layered volume, 6-way ---");
    let image = layered();
    let seeds = layered_seeds();
    let mut grower =
        SeededRegionGrowing::new(image.view(), seeds.view(), &GrowOptions::default()).unwrap();
    assert_eq!(grower.connectivity(), ConnectivityType::SixWay);
    grower.segment();
    let labels = grower.result_u8();

    // Region 1 takes the first plane and the first two rows of the second.
    let mut expected = vec![2u8; 60];
    expected[..30].fill(1);
    rp.compare_strings(&expected, labels.as_slice()); // 2

    let report = grower.report();
    rp.compare_values(58.0, report.claimed as f64, 0.0); // 3
    rp.compare_values(125.0, report.enqueued as f64, 0.0); // 4
    rp.compare_values(37.0, report.peak_frontier as f64, 0.0); // 5
    let stats = grower.region_stats();
    rp.compare_values(30.0, stats[1].count() as f64, 0.0); // 6
    rp.compare_values(110.0 / 3.0, stats[1].mean(), 1e-9); // 7
    rp.compare_values(90.0, stats[2].mean(), 1e-9); // 8
    assert!(verify_stats(grower.labels(), stats));
    assert!(verify_connectivity(
        grower.labels(),
        &seeds.view(),
        grower.neighborhood()
    ));

    let plane = labels.slice(1).unwrap();
    let mut expected = vec![2u8; 20];
    expected[..10].fill(1);
    rp.compare_strings(&expected, plane.as_slice()); // 9

    // --- Test 3: layered volume, opt-in 26-way ---
    eprintln!("// --- Test 3: layered volume, 26-way ---");
    let options = GrowOptions::new().with_connectivity(ConnectivityType::TwentySixWay);
    let mut grower = SeededRegionGrowing::new(image.view(), seeds.view(), &options).unwrap();
    grower.segment();
    let stats = grower.region_stats();
    rp.compare_values(32.0, stats[1].count() as f64, 0.0); // 10
    rp.compare_values(28.0, stats[2].count() as f64, 0.0); // 11
    rp.compare_values(393.0, grower.report().enqueued as f64, 0.0); // 12
    assert!(verify_stats(grower.labels(), stats));
    assert!(verify_connectivity(
        grower.labels(),
        &seeds.view(),
        grower.neighborhood()
    ));

    // --- Test 4: 2D connectivity rejected for volumes ---
    eprintln!("// --- Test 4: connectivity / rank mismatch ---");
    let options = GrowOptions::new().with_connectivity(ConnectivityType::EightWay);
    let err = SeededRegionGrowing::new(image.view(), seeds.view(), &options).unwrap_err();
    eprintln!("expected error: {}", err);
    assert!(!err.is_shape_mismatch());

    let other: Volume<u8, 3> = Volume::new(Shape::new([3, 5, 4]));
    let err = SeededRegionGrowing::new(image.view(), other.view(), &GrowOptions::default())
        .unwrap_err();
    assert!(err.is_shape_mismatch());

    // Views on foreign strided memory work the same as contiguous ones.
    let padded: Vec<u8> = (0..2 * 2 * 3).map(|i| if i % 3 == 2 { 0 } else { 40 }).collect();
    let image = GridView::with_strides(&padded[..], shape, [6, 3, 1]).unwrap();
    let seeds = [0u8, 0, 0, 0, 0, 0, 0, 4];
    let seeds = GridView::new(&seeds[..], shape).unwrap();
    let mut grower = SeededRegionGrowing::new(image, seeds, &GrowOptions::default()).unwrap();
    grower.segment();
    rp.compare_values(8.0, grower.region_stats()[4].count() as f64, 0.0); // 13
    rp.compare_values(40.0, grower.region_stats()[4].mean(), 1e-9); // 14

    assert!(rp.cleanup(), "grow3d regression test failed");
}
