//! Image enhancement
//!
//! - [`laplacian_filter`]: convolution with the `laplace` preset
//! - [`high_boost`]: sharpening by adding back a scaled detail mask
//!
//! High-boost computes, with every step clamped into `0..=255`:
//!
//! ```text
//! blurred = median_filter(image, 3)
//! mask    = image - blurred
//! result  = image + mask * k
//! ```
//!
//! Each step clamps on its own, so negative detail (pixels darker than
//! their median) is lost at the subtraction and never darkens the result.

use crate::rank::median_filter;
use crate::{FilterResult, KernelPreset, convolve};
use pixgrid_core::ImageGrid;
use tracing::debug;

/// Laplacian edge filter
pub fn laplacian_filter(grid: &ImageGrid) -> FilterResult<ImageGrid> {
    convolve(grid, &KernelPreset::Laplace.kernel())
}

/// High-boost filter with boost factor `k`
///
/// # Errors
///
/// Returns [`FilterError::Core`](crate::FilterError::Core) wrapping
/// [`Error::InvalidParameter`](pixgrid_core::Error::InvalidParameter) if
/// `k` is not finite.
pub fn high_boost(grid: &ImageGrid, k: f64) -> FilterResult<ImageGrid> {
    debug!(width = grid.width(), height = grid.height(), k, "high_boost");
    let blurred = median_filter(grid, 3)?;
    let mask = grid.subtract(&blurred)?;
    let boost = mask.multiply(k)?;
    Ok(grid.add(&boost)?)
}
