//! Planar region growing regression test
//!
//! Run with:
//! ```
//! cargo test -p seedgrow-region --test grow2d_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p seedgrow-region --test grow2d_reg
//! ```

use seedgrow_core::{GridView, Shape, UNLABELED_U8, Volume};
use seedgrow_io::FileFormat;
use seedgrow_region::{
    ConnectivityType, GrowOptions, SeedScanOrder, SeededRegionGrowing, verify_connectivity,
    verify_means, verify_stats,
};
use seedgrow_test::RegParams;
use seedgrow_test::fixtures::split_image;

const CLUSTERS: [u8; 16] = [
    10, 10, 50, 50, //
    10, 10, 50, 50, //
    12, 11, 48, 49, //
    13, 12, 47, 48,
];

fn cluster_seeds() -> [u8; 16] {
    let mut seeds = [0u8; 16];
    seeds[0] = 1; // (0, 0)
    seeds[3] = 2; // (0, 3)
    seeds
}

fn run(image: &[u8], seeds: &[u8], dims: [usize; 2], options: &GrowOptions) -> Volume<u8, 2> {
    let shape = Shape::new(dims);
    let image = GridView::new(image, shape).unwrap();
    let seeds = GridView::new(seeds, shape).unwrap();
    let mut grower = SeededRegionGrowing::new(image, seeds, options).unwrap();
    grower.segment();
    grower.result_u8()
}

#[test]
fn grow2d_reg() {
    let mut rp = RegParams::new("grow2d");
    let seeds = cluster_seeds();
    let shape = Shape::new([4, 4]);

    // --- Test 1: two clusters, default 8-way ---
    eprintln!("// --- Test 1: two clusters, 8-way ---");
    let image = GridView::new(&CLUSTERS[..], shape).unwrap();
    let seed_view = GridView::new(&seeds[..], shape).unwrap();
    let mut grower = SeededRegionGrowing::new(image, seed_view, &GrowOptions::default()).unwrap();
    grower.segment();
    let labels8 = grower.result_u8();
    rp.write_labels_and_check(&labels8, FileFormat::Pgm).unwrap(); // 1

    // Region 1 reaches the high cluster through the diagonals on rows 1-3,
    // because its frontier entries keep arriving first in the FIFO.
    let expected8 = [
        1, 1, 2, 2, //
        1, 1, 1, 2, //
        1, 1, 1, 1, //
        1, 1, 1, 1,
    ];
    rp.compare_strings(&expected8, labels8.as_slice()); // 2

    let report = grower.report();
    eprintln!("8-way report: {:?}", report);
    rp.compare_values(2.0, report.seeds as f64, 0.0); // 3
    rp.compare_values(14.0, report.claimed as f64, 0.0); // 4
    rp.compare_values(38.0, report.iterations as f64, 0.0); // 5
    rp.compare_values(38.0, report.enqueued as f64, 0.0); // 6
    rp.compare_values(21.0, report.peak_frontier as f64, 0.0); // 7
    rp.compare_values(0.0, report.unlabeled as f64, 0.0); // 8

    let stats = grower.region_stats();
    rp.compare_values(13.0, stats[1].count() as f64, 0.0); // 9
    rp.compare_values(330.0 / 13.0, stats[1].mean(), 1e-9); // 10
    rp.compare_values(3.0, stats[2].count() as f64, 0.0); // 11
    rp.compare_values(50.0, stats[2].mean(), 1e-9); // 12
    assert!(verify_stats(grower.labels(), stats));
    assert!(verify_means(&image, grower.labels(), stats, 1e-9));
    assert!(verify_connectivity(
        grower.labels(),
        &seed_view,
        grower.neighborhood()
    ));

    // --- Test 2: two clusters, 4-way ---
    eprintln!("// --- Test 2: two clusters, 4-way ---");
    let four = GrowOptions::new().with_connectivity(ConnectivityType::FourWay);
    let mut grower = SeededRegionGrowing::new(image, seed_view, &four).unwrap();
    grower.segment();
    let labels4 = grower.result_u8();
    rp.write_labels_and_check(&labels4, FileFormat::Pgm).unwrap(); // 13

    // The boundary falls between columns 1 and 2 on every row.
    for row in 0..4 {
        for col in 0..4 {
            let expected = if col < 2 { 1 } else { 2 };
            assert_eq!(
                labels4.get(&[row, col]),
                Some(expected),
                "4-way label at ({}, {})",
                row,
                col
            );
        }
    }
    let stats = grower.region_stats();
    rp.compare_values(8.0, stats[1].count() as f64, 0.0); // 14
    rp.compare_values(11.0, stats[1].mean(), 1e-9); // 15
    rp.compare_values(8.0, stats[2].count() as f64, 0.0); // 16
    rp.compare_values(49.0, stats[2].mean(), 1e-9); // 17
    rp.compare_values(22.0, grower.report().enqueued as f64, 0.0); // 18

    // --- Test 3: two-phase split ---
    eprintln!("// --- Test 3: two-phase split ---");
    let split = split_image(Shape::new([6, 8]), 1, 4, 20, 200);
    let mut seeds = vec![0u8; 48];
    seeds[2 * 8 + 1] = 1;
    seeds[3 * 8 + 6] = 2;

    let labels = run(split.as_slice(), &seeds, [6, 8], &GrowOptions::default());
    let mut expected = vec![2u8; 48];
    for row in 0..6 {
        let width = if row == 0 { 4 } else { 3 };
        expected[row * 8..row * 8 + width].fill(1);
    }
    rp.compare_strings(&expected, labels.as_slice()); // 19

    let labels = run(
        split.as_slice(),
        &seeds,
        [6, 8],
        &GrowOptions::new().with_connectivity(ConnectivityType::FourWay),
    );
    let mut expected = vec![2u8; 48];
    for row in 0..6 {
        let width = if row < 2 { 4 } else { 3 };
        expected[row * 8..row * 8 + width].fill(1);
    }
    rp.compare_strings(&expected, labels.as_slice()); // 20

    // --- Test 4: seed scan order ---
    eprintln!("// --- Test 4: seed scan order ---");
    let flat = [30u8; 16];
    let mut seeds = [0u8; 16];
    seeds[3 * 4] = 1; // (3, 0)
    seeds[3] = 2; // (0, 3)

    let memory = run(&flat, &seeds, [4, 4], &GrowOptions::default());
    let expected = [
        2, 2, 2, 2, //
        2, 2, 2, 2, //
        1, 1, 1, 2, //
        1, 1, 1, 1,
    ];
    rp.compare_strings(&expected, memory.as_slice()); // 21

    let innermost = run(
        &flat,
        &seeds,
        [4, 4],
        &GrowOptions::new().with_scan_order(SeedScanOrder::InnermostFirst),
    );
    let expected = [
        2, 2, 2, 2, //
        1, 2, 2, 2, //
        1, 1, 1, 1, //
        1, 1, 1, 1,
    ];
    rp.compare_strings(&expected, innermost.as_slice()); // 22

    // --- Test 5: unreachable remainder ---
    eprintln!("// --- Test 5: unreachable remainder ---");
    let line = [4u8, 5, 6];
    let seeds = [0u8, 1, 0];
    let labels = run(&line, &seeds, [1, 3], &GrowOptions::default());
    rp.compare_strings(&[1, 1, UNLABELED_U8], labels.as_slice()); // 23

    assert!(rp.cleanup(), "grow2d regression test failed");
}
