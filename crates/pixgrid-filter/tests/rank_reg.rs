//! Rank and smoothing regression test
//!
//! Median, average and high-boost filters on the spot fixture, plus the
//! even-window median tie-break.

use pixgrid_filter::{
    BorderPolicy, WindowOptions, average_filter, average_filter_with, high_boost, lower_median,
    median_filter, median_filter_with,
};
use pixgrid_test::{RegParams, load_test_image};

#[test]
fn rank_reg() {
    let mut rp = RegParams::new("rank");

    let spot = load_test_image("spot.pgm").expect("load spot.pgm");
    let flat = spot.darken(255).expect("darken").lighten(10).expect("lighten");

    // 1, 2: the median removes an isolated spot at any window size
    rp.compare_grids(&flat, &median_filter(&spot, 3).expect("median 3"));
    let opts = WindowOptions::new(5).border(BorderPolicy::Extend);
    rp.compare_grids(&flat, &median_filter_with(&spot, &opts).expect("median 5"));

    // 3: the average spreads it: (24 * 10 + 200) / 25 = 17.6 -> 18
    let avg = average_filter_with(&spot, &opts).expect("average 5");
    rp.compare_values(18.0, avg.get_gray(2, 2).map_or(-1.0, f64::from), 0.0);

    // 4: 3x3 average: (8 * 10 + 200) / 9 = 31.1 -> 31
    let avg3 = average_filter(&spot, 3).expect("average 3");
    rp.compare_values(31.0, avg3.get_gray(2, 2).map_or(-1.0, f64::from), 0.0);

    // 5, 6: lower-middle tie-break on even counts
    rp.compare_values(
        20.0,
        lower_median(&mut [40, 10, 30, 20]).map_or(-1.0, f64::from),
        0.0,
    );
    rp.compare_values(
        3.0,
        lower_median(&mut [6, 5, 4, 3, 2, 1]).map_or(-1.0, f64::from),
        0.0,
    );

    // 7: high boost with k = 1.5: 200 + round(190 * 1.5) saturates
    let boosted = high_boost(&spot, 1.5).expect("high_boost");
    rp.compare_values(255.0, boosted.get_gray(2, 2).map_or(-1.0, f64::from), 0.0);

    // 8: and leaves the flat background alone
    rp.compare_values(10.0, boosted.get_gray(0, 4).map_or(-1.0, f64::from), 0.0);

    // 9: even windows are rejected
    rp.compare_values(1.0, if median_filter(&spot, 4).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "rank regression test failed");
}
