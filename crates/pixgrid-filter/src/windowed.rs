//! Windowed mean
//!
//! Each output channel is the rounded mean of its `k x k` neighborhood:
//! `round(sum / k^2)`, half away from zero.

use crate::FilterResult;
use crate::neighborhood::{WindowOptions, map_windows};
use pixgrid_core::{ImageGrid, round_channel};

/// Average filter with a `size x size` window
pub fn average_filter(grid: &ImageGrid, size: u32) -> FilterResult<ImageGrid> {
    average_filter_with(grid, &WindowOptions::new(size))
}

/// Average filter with explicit window options
pub fn average_filter_with(grid: &ImageGrid, options: &WindowOptions) -> FilterResult<ImageGrid> {
    let area = options.area() as f64;
    map_windows(grid, options, |window| {
        let sum: u32 = window.iter().map(|&v| v as u32).sum();
        round_channel(sum as f64 / area)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgrid_core::{ImageKind, PixelValue};

    #[test]
    fn test_average_constant_image() {
        let g = ImageGrid::new(ImageKind::Grayscale, 255, 4, 4)
            .unwrap()
            .lighten(50)
            .unwrap();
        assert_eq!(average_filter(&g, 3).unwrap(), g);
        assert_eq!(average_filter(&g, 5).unwrap(), g);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // 3x1 [0, 0, 9]: rows repeat, so each window is a column triple x3
        let pixels = vec![PixelValue::gray(0), PixelValue::gray(0), PixelValue::gray(9)];
        let g = ImageGrid::from_pixels(ImageKind::Grayscale, 255, 3, 1, pixels).unwrap();
        let out = average_filter(&g, 3).unwrap();
        let values: Vec<u8> = out.pixels().iter().map(|p| p.as_gray().unwrap()).collect();
        // [0, 0, 0], [0, 0, 9], [0, 9, 9]
        assert_eq!(values, vec![0, 3, 6]);

        // 2x1 [0, 1]: 3 / 9 -> 0 and 6 / 9 -> 1
        let pixels = vec![PixelValue::gray(0), PixelValue::gray(1)];
        let g = ImageGrid::from_pixels(ImageKind::Grayscale, 255, 2, 1, pixels).unwrap();
        let out = average_filter(&g, 3).unwrap();
        assert_eq!(out.get_pixel(0, 0).unwrap(), PixelValue::gray(0));
        assert_eq!(out.get_pixel(1, 0).unwrap(), PixelValue::gray(1));
    }

    #[test]
    fn test_average_size_one_is_identity() {
        let pixels = vec![PixelValue::gray(1), PixelValue::gray(2)];
        let g = ImageGrid::from_pixels(ImageKind::Grayscale, 255, 1, 2, pixels).unwrap();
        assert_eq!(average_filter(&g, 1).unwrap(), g);
    }

    #[test]
    fn test_average_rgb_and_validation() {
        let pixels = vec![PixelValue::rgb(0, 90, 255); 4];
        let g = ImageGrid::from_pixels(ImageKind::Rgb, 255, 2, 2, pixels).unwrap();
        assert_eq!(average_filter(&g, 3).unwrap(), g);
        assert!(average_filter(&g, 4).is_err());
    }
}
