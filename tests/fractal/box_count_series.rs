use ndarray::Array2;
use rstest::*;
use solar_descriptors::estimators::approaches::fractal::{
    BoxCount, binarize, box_count, box_count_series,
};

use crate::test_helpers::filled_square;

fn square_mask(size: usize, start: usize, end: usize) -> Array2<bool> {
    binarize(&filled_square(size, start, end), 0.5).unwrap()
}

#[rstest]
#[case(64, 1)]
#[case(32, 4)]
#[case(16, 12)]
#[case(8, 20)]
#[case(4, 36)]
fn square_boundary_boxes(#[case] size: usize, #[case] expected: usize) {
    // square spans 13..50, so no box edge is aligned with its border
    let mask = square_mask(64, 13, 50);
    assert_eq!(box_count(mask.view(), size), expected);
}

#[test]
fn series_runs_from_largest_box_down_to_four() {
    let mask = square_mask(64, 13, 50);
    let series = box_count_series(mask.view());
    let expected = [(64, 1), (32, 4), (16, 12), (8, 20), (4, 36)]
        .map(|(size, count)| BoxCount { size, count });
    assert_eq!(series.samples(), &expected);
}

#[test]
fn full_and_empty_tiles_are_not_counted() {
    let all_on = Array2::from_elem((16, 16), true);
    let all_off = Array2::from_elem((16, 16), false);
    for size in [4, 8, 16] {
        assert_eq!(box_count(all_on.view(), size), 0);
        assert_eq!(box_count(all_off.view(), size), 0);
    }
}

#[test]
fn partial_edge_tiles_are_aggregated() {
    // 10 × 10 fully on: with size 4 the right/bottom tiles hold 4×2, 2×4 and 2×2 pixels
    let mask = Array2::from_elem((10, 10), true);
    // 4 interior full tiles are skipped, 5 partial edge tiles never reach 16
    assert_eq!(box_count(mask.view(), 4), 5);
}

#[test]
fn aligned_square_has_no_boundary_at_its_own_scale() {
    // square borders sit exactly on 16-pixel tile edges
    let mask = square_mask(64, 16, 48);
    assert_eq!(box_count(mask.view(), 16), 0);
    assert_eq!(box_count(mask.view(), 32), 4);
}

#[test]
#[should_panic(expected = "box size must be positive")]
fn zero_box_size_panics() {
    let mask = Array2::from_elem((4, 4), true);
    box_count(mask.view(), 0);
}

#[test]
fn rectangular_mask_uses_shorter_side() {
    let mask = Array2::from_shape_fn((20, 70), |(r, c)| (r + c) % 2 == 0);
    let sizes: Vec<usize> = box_count_series(mask.view()).iter().map(|s| s.size).collect();
    assert_eq!(sizes, vec![16, 8, 4]);
}
