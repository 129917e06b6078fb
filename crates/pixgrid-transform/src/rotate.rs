//! Orthogonal rotation and mirroring
//!
//! Coordinates follow the grid convention: `x` is the column, `y` the
//! row, both 0-based. For a `w x h` source:
//!
//! | Operation             | `(x, y)` moves to        | Output size |
//! |-----------------------|--------------------------|-------------|
//! | `rotate_90` clockwise | `(h - 1 - y, x)`         | `h x w`     |
//! | `rotate_90` counter   | `(y, w - 1 - x)`         | `h x w`     |
//! | `rotate_180`          | `(w - 1 - x, h - 1 - y)` | `w x h`     |
//! | `mirror_vertical`     | `(w - 1 - x, y)`         | `w x h`     |
//! | `mirror_horizontal`   | `(x, h - 1 - y)`         | `w x h`     |

use crate::TransformResult;
use pixgrid_core::ImageGrid;
use tracing::trace;

/// Rotate by a multiple of 90 degrees clockwise.
///
/// `quads` is taken modulo 4; 0 returns a copy.
pub fn rotate_orth(grid: &ImageGrid, quads: u32) -> TransformResult<ImageGrid> {
    match quads % 4 {
        0 => Ok(grid.deep_clone()),
        1 => rotate_90(grid, true),
        2 => rotate_180(grid),
        _ => rotate_90(grid, false),
    }
}

/// Rotate an image 90 degrees
///
/// # Arguments
/// * `grid` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(grid: &ImageGrid, clockwise: bool) -> TransformResult<ImageGrid> {
    let w = grid.width();
    let h = grid.height();
    trace!(width = w, height = h, clockwise, "rotate_90");

    // Output dimensions are swapped
    let mut out = ImageGrid::new(grid.kind(), grid.max_level() as u32, h, w)?;

    for y in 0..h {
        for x in 0..w {
            let val = grid.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out.set_pixel_unchecked(nx, ny, val);
        }
    }

    Ok(out)
}

/// Rotate an image 90 degrees counterclockwise (270 clockwise)
pub fn rotate_270(grid: &ImageGrid) -> TransformResult<ImageGrid> {
    rotate_90(grid, false)
}

/// Rotate an image 180 degrees
pub fn rotate_180(grid: &ImageGrid) -> TransformResult<ImageGrid> {
    let mut out = grid.deep_clone();
    rotate_180_in_place(&mut out);
    Ok(out)
}

/// Mirror about the vertical axis: columns are reversed.
pub fn mirror_vertical(grid: &ImageGrid) -> TransformResult<ImageGrid> {
    let w = grid.width();
    let h = grid.height();
    trace!(width = w, height = h, "mirror_vertical");

    let mut out = grid.create_template();
    for y in 0..h {
        for x in 0..w {
            let val = grid.get_pixel_unchecked(x, y);
            out.set_pixel_unchecked(w - 1 - x, y, val);
        }
    }

    Ok(out)
}

/// Mirror about the horizontal axis: rows are reversed.
pub fn mirror_horizontal(grid: &ImageGrid) -> TransformResult<ImageGrid> {
    let w = grid.width();
    let h = grid.height();
    trace!(width = w, height = h, "mirror_horizontal");

    let mut out = grid.create_template();
    for (y, row) in grid.rows().enumerate() {
        let ny = h - 1 - y as u32;
        for (x, val) in row.iter().enumerate() {
            out.set_pixel_unchecked(x as u32, ny, *val);
        }
    }

    Ok(out)
}

/// Rotate an image in place by 180 degrees
pub fn rotate_180_in_place(grid: &mut ImageGrid) {
    let w = grid.width();
    let h = grid.height();
    trace!(width = w, height = h, "rotate_180_in_place");

    // Swap pixels from opposite corners
    let total = w as u64 * h as u64;
    for i in 0..total / 2 {
        let x1 = (i % w as u64) as u32;
        let y1 = (i / w as u64) as u32;
        let x2 = w - 1 - x1;
        let y2 = h - 1 - y1;

        let val1 = grid.get_pixel_unchecked(x1, y1);
        let val2 = grid.get_pixel_unchecked(x2, y2);

        grid.set_pixel_unchecked(x1, y1, val2);
        grid.set_pixel_unchecked(x2, y2, val1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgrid_core::{ImageKind, PixelValue};

    /// 3 wide, 2 tall: `[[1, 2, 3], [4, 5, 6]]`
    fn sample() -> ImageGrid {
        let pixels = (1..=6).map(PixelValue::gray).collect();
        ImageGrid::from_pixels(ImageKind::Grayscale, 255, 3, 2, pixels).unwrap()
    }

    fn values(g: &ImageGrid) -> Vec<Vec<u8>> {
        g.rows()
            .map(|r| r.iter().map(|p| p.as_gray().unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_rotate_90_clockwise() {
        let r = rotate_90(&sample(), true).unwrap();
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(values(&r), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
    }

    #[test]
    fn test_rotate_90_counterclockwise() {
        let r = rotate_90(&sample(), false).unwrap();
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(values(&r), vec![vec![3, 6], vec![2, 5], vec![1, 4]]);
        assert_eq!(rotate_270(&sample()).unwrap(), r);
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let original = sample();
        let mut g = original.clone();
        for _ in 0..4 {
            g = rotate_90(&g, true).unwrap();
        }
        assert_eq!(g, original);
    }

    #[test]
    fn test_cw_then_ccw_is_identity() {
        let g = sample();
        let back = rotate_90(&rotate_90(&g, true).unwrap(), false).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_rotate_180() {
        let r = rotate_180(&sample()).unwrap();
        assert_eq!(values(&r), vec![vec![6, 5, 4], vec![3, 2, 1]]);
        assert_eq!(rotate_orth(&sample(), 2).unwrap(), r);
        assert_eq!(
            rotate_90(&rotate_90(&sample(), true).unwrap(), true).unwrap(),
            r
        );
    }

    #[test]
    fn test_rotate_180_in_place_odd_count() {
        let pixels = (1..=9).map(PixelValue::gray).collect();
        let mut g = ImageGrid::from_pixels(ImageKind::Grayscale, 255, 3, 3, pixels).unwrap();
        rotate_180_in_place(&mut g);
        assert_eq!(values(&g), vec![vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]]);
    }

    #[test]
    fn test_mirrors() {
        let v = mirror_vertical(&sample()).unwrap();
        assert_eq!(values(&v), vec![vec![3, 2, 1], vec![6, 5, 4]]);
        let h = mirror_horizontal(&sample()).unwrap();
        assert_eq!(values(&h), vec![vec![4, 5, 6], vec![1, 2, 3]]);
        // both mirrors compose to a half turn
        assert_eq!(
            mirror_horizontal(&v).unwrap(),
            rotate_180(&sample()).unwrap()
        );
    }

    #[test]
    fn test_rotate_orth_wraps() {
        let g = sample();
        assert_eq!(rotate_orth(&g, 0).unwrap(), g);
        assert_eq!(rotate_orth(&g, 4).unwrap(), g);
        assert_eq!(rotate_orth(&g, 5).unwrap(), rotate_90(&g, true).unwrap());
        assert_eq!(rotate_orth(&g, 3).unwrap(), rotate_90(&g, false).unwrap());
    }

    #[test]
    fn test_rgb_metadata_preserved() {
        let pixels = vec![PixelValue::rgb(1, 2, 3), PixelValue::rgb(4, 5, 6)];
        let g = ImageGrid::from_pixels(ImageKind::Rgb, 200, 2, 1, pixels).unwrap();
        let r = rotate_90(&g, true).unwrap();
        assert_eq!(r.kind(), ImageKind::Rgb);
        assert_eq!(r.max_level(), 200);
        assert_eq!(r.get_pixel(0, 1).unwrap(), PixelValue::rgb(4, 5, 6));
    }
}
