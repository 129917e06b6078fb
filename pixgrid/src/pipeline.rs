//! Laplacian, high-boost and equalization chained into one enhancement.

use crate::PipelineResult;
use pixgrid_core::ImageGrid;
use pixgrid_filter::{FilterResult, high_boost, laplacian_filter};
use std::path::Path;
use tracing::{debug, info};

/// Boost factor used when none is given.
pub const DEFAULT_BOOST: f64 = 1.5;

/// Enhance a grayscale image: Laplacian filter, then high-boost with
/// factor `k`, then histogram equalization.
///
/// The filters saturate at 255 whatever the maximum level; equalization
/// folds anything above the maximum level into the top bin, so the
/// result always fits the input's maximum level.
///
/// # Errors
///
/// - `k` not finite
/// - RGB input, rejected at the equalization step
pub fn enhance(grid: &ImageGrid, k: f64) -> FilterResult<ImageGrid> {
    debug!(width = grid.width(), height = grid.height(), k, "enhance");
    let edges = laplacian_filter(grid)?;
    let boosted = high_boost(&edges, k)?;
    Ok(boosted.equalize()?)
}

/// Read `input`, [`enhance`] it and write the result to `output`.
pub fn enhance_file<P, Q>(input: P, output: Q, k: f64) -> PipelineResult<ImageGrid>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let grid = pixgrid_io::read_image(input.as_ref())?;
    let result = enhance(&grid, k)?;
    pixgrid_io::write_image(&result, output.as_ref())?;
    info!(output = %output.as_ref().display(), "wrote enhanced image");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgrid_core::{Error, ImageKind, PixelValue};
    use pixgrid_filter::FilterError;

    #[test]
    fn test_enhance_flat_image() {
        // laplacian of a flat image is black; equalizing all zeros maps
        // level 0 to round(254 * 1.0)
        let g = ImageGrid::new(ImageKind::Grayscale, 255, 4, 4)
            .unwrap()
            .lighten(90)
            .unwrap();
        let out = enhance(&g, DEFAULT_BOOST).unwrap();
        assert!(out.pixels().iter().all(|p| *p == PixelValue::gray(254)));
    }

    #[test]
    fn test_enhance_low_max_level() {
        // center 15 gives a Laplacian of 60, boosted to 150, far above
        // max 15; it equalizes with the top bin: round(14 * 8/9) = 12
        // for the background, round(14 * 1.0) = 14 for the center
        let g = pixgrid_io::read_pnm_mem(b"P2 3 3 15 0 0 0 0 15 0 0 0 0").unwrap();
        let out = enhance(&g, DEFAULT_BOOST).unwrap();
        assert_eq!(out.max_level(), 15);
        assert_eq!(out.get_pixel(1, 1).unwrap(), PixelValue::gray(14));
        let background = out
            .pixels()
            .iter()
            .filter(|p| **p == PixelValue::gray(12))
            .count();
        assert_eq!(background, 8);
    }

    #[test]
    fn test_enhance_rejects_rgb() {
        let g = ImageGrid::new(ImageKind::Rgb, 255, 2, 2).unwrap();
        let err = enhance(&g, DEFAULT_BOOST).unwrap_err();
        assert!(matches!(
            err,
            FilterError::Core(Error::UnsupportedKind { .. })
        ));
    }
}
