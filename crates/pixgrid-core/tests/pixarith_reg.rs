//! Point and arithmetic regression test
//!
//! Negative, darken, lighten, add, subtract, multiply and channel
//! split/merge on the fixtures.

use pixgrid_core::{Error, ImageGrid, merge_channels, validate_compatibility};
use pixgrid_test::{RegParams, load_test_image};

fn grays(grid: &ImageGrid) -> Vec<u8> {
    grid.pixels().iter().filter_map(|p| p.as_gray()).collect()
}

#[test]
fn pixarith_reg() {
    let mut rp = RegParams::new("pixarith");

    let ramp = load_test_image("ramp.pgm").expect("load ramp.pgm");
    let counting = load_test_image("counting.pgm").expect("load counting.pgm");
    let rgb = load_test_image("tiny.ppm").expect("load tiny.ppm");

    // 1: negative is an involution
    rp.compare_grids(&ramp, &ramp.negative().negative());

    // 2, 3: darken then lighten saturates instead of wrapping
    let dark = ramp.darken(50).expect("darken");
    rp.compare_strings(&[0, 0, 0, 0, 0, 0, 10, 20, 30, 40, 50, 60], &grays(&dark));
    let light = ramp.lighten(200).expect("lighten");
    rp.compare_strings(
        &[200, 210, 220, 230, 240, 250, 255, 255, 255, 255, 255, 255],
        &grays(&light),
    );

    // 4: add doubles
    let doubled = counting.add(&counting).expect("add");
    rp.compare_strings(&[0, 2, 4, 6, 8, 10, 12, 14, 16], &grays(&doubled));

    // 5: subtract to zero
    let zero = counting.subtract(&counting).expect("subtract");
    rp.compare_strings(&[0; 9], &grays(&zero));

    // 6: multiply equals add for factor 2
    rp.compare_grids(&doubled, &counting.multiply(2.0).expect("multiply"));

    // 7, 8: mismatched kinds and levels are incompatible
    let checker = load_test_image("checker.pbm").expect("load checker.pbm");
    let kind_err = counting.add(&checker).unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(kind_err, Error::IncompatibleImages(_)) { 1.0 } else { 0.0 },
        0.0,
    );
    let mut relabeled = counting.clone();
    relabeled.set_max_level(255).expect("set_max_level");
    rp.compare_values(
        1.0,
        if validate_compatibility(&counting, &relabeled).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    // 9: channel split and merge round-trips
    let [r, g, b] = rgb.extract_channels().expect("extract_channels");
    rp.compare_grids(&rgb, &merge_channels(&r, &g, &b).expect("merge_channels"));

    // 10: red channel holds the red values
    rp.compare_strings(&[255, 0, 0, 10, 40, 70], &grays(&r));

    // 11: invalid level leaves the grid untouched
    let mut target = ramp.clone();
    let failed = target.lighten_inplace(300).is_err() && target.darken_inplace(-5).is_err();
    rp.compare_values(1.0, if failed { 1.0 } else { 0.0 }, 0.0);
    rp.compare_grids(&ramp, &target);

    assert!(rp.cleanup(), "pixarith regression test failed");
}
