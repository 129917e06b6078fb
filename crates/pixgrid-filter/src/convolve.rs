//! Convolution operations
//!
//! Output channel = round(sum of coefficient * window value), clamped into
//! `0..=255`. Coefficient `(kx, ky)` multiplies the window value at offset
//! `(kx - r, ky - r)`, so asymmetric kernels such as `edge` and `emboss`
//! are applied as written, without flipping.
//!
//! Borders are handled by edge extension, see
//! [`BorderPolicy::Extend`](crate::BorderPolicy::Extend).

use crate::neighborhood::{WindowOptions, map_windows};
use crate::{FilterResult, Kernel, KernelPreset};
use pixgrid_core::{ImageGrid, round_channel};
use tracing::debug;

/// Convolve an image with a kernel
///
/// RGB images are convolved one channel at a time.
pub fn convolve(grid: &ImageGrid, kernel: &Kernel) -> FilterResult<ImageGrid> {
    map_windows(grid, &WindowOptions::new(kernel.size()), |window| {
        round_channel(kernel.apply(window))
    })
}

/// Convolve an image with a named preset kernel
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`](crate::FilterError::InvalidKernel)
/// for an unknown name; the message lists every valid preset.
///
/// # Example
///
/// ```
/// use pixgrid_core::{ImageGrid, ImageKind};
/// use pixgrid_filter::convolve_preset;
///
/// let grid = ImageGrid::new(ImageKind::Grayscale, 255, 4, 4).unwrap();
/// assert!(convolve_preset(&grid, "sharpen").is_ok());
/// assert!(convolve_preset(&grid, "nope").is_err());
/// ```
pub fn convolve_preset(grid: &ImageGrid, name: &str) -> FilterResult<ImageGrid> {
    let preset: KernelPreset = name.parse()?;
    debug!(%preset, "convolve with preset");
    convolve(grid, &preset.kernel())
}
