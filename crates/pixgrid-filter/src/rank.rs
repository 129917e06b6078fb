//! Rank filtering
//!
//! Median filtering over square windows. For an even number of values
//! the lower of the two middle values is taken; the two are never
//! averaged.

use crate::FilterResult;
use crate::neighborhood::{WindowOptions, map_windows};
use pixgrid_core::ImageGrid;

/// Lower median of `values`, sorting them in place.
///
/// Returns the element at index `(len - 1) / 2` of the sorted slice: the
/// exact middle for odd lengths, the lower-middle (`len / 2 - 1`) for even
/// lengths, and `None` for an empty slice.
///
/// ```
/// use pixgrid_filter::lower_median;
///
/// assert_eq!(lower_median(&mut [9, 1, 5]), Some(5));
/// assert_eq!(lower_median(&mut [4, 1, 3, 2]), Some(2));
/// ```
pub fn lower_median(values: &mut [u8]) -> Option<u8> {
    values.sort_unstable();
    values.get(values.len().checked_sub(1)? / 2).copied()
}

/// Median filter with a `size x size` window
pub fn median_filter(grid: &ImageGrid, size: u32) -> FilterResult<ImageGrid> {
    median_filter_with(grid, &WindowOptions::new(size))
}

/// Median filter with explicit window options
pub fn median_filter_with(grid: &ImageGrid, options: &WindowOptions) -> FilterResult<ImageGrid> {
    // odd sizes never give an empty window
    map_windows(grid, options, |window| lower_median(window).unwrap_or(0))
}
