//! Sliding-window neighborhoods
//!
//! Every windowed filter in this crate is a function from the `k x k`
//! neighborhood of a pixel to a new channel value. [`map_windows`] walks
//! the grid, gathers each neighborhood under a [`BorderPolicy`] and hands
//! it to that function, once per channel.
//!
//! Window values are gathered row-major: offsets run `dy = -r..=r`
//! outermost and `dx = -r..=r` innermost, where `r = k / 2`. Kernel
//! coefficients use the same order.

use crate::{FilterError, FilterResult};
use pixgrid_core::{GridShape, ImageGrid};
use tracing::trace;

/// How window offsets that fall outside the grid are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderPolicy {
    /// Substitute the nearest in-bounds coordinate, each axis clamped
    /// independently. Edge pixels are repeated outward.
    #[default]
    Extend,
}

impl BorderPolicy {
    /// Map a possibly out-of-bounds coordinate to the pixel it reads.
    #[inline]
    pub fn resolve(self, shape: GridShape, x: i64, y: i64) -> (u32, u32) {
        match self {
            BorderPolicy::Extend => (shape.clamp_x(x), shape.clamp_y(y)),
        }
    }
}

/// Window size and border handling for a neighborhood filter.
///
/// ```
/// use pixgrid_filter::{BorderPolicy, WindowOptions};
///
/// let opts = WindowOptions::new(5).border(BorderPolicy::Extend);
/// assert_eq!(opts.radius(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    size: u32,
    border: BorderPolicy,
}

impl WindowOptions {
    /// A `size x size` window with the default border policy.
    pub fn new(size: u32) -> Self {
        WindowOptions {
            size,
            border: BorderPolicy::default(),
        }
    }

    /// Set the border policy.
    pub fn border(mut self, border: BorderPolicy) -> Self {
        self.border = border;
        self
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn border_policy(&self) -> BorderPolicy {
        self.border
    }

    /// Half the window size, rounded down.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// Number of values in one window.
    #[inline]
    pub fn area(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Check that the size is odd (and therefore at least 1).
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] otherwise.
    pub fn validate(&self) -> FilterResult<()> {
        if self.size % 2 == 0 {
            return Err(FilterError::InvalidParameters(format!(
                "window size must be odd and at least 1, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

/// Gather the neighborhood of `(x, y)` for one channel into `buf`.
fn fill_window(
    grid: &ImageGrid,
    options: &WindowOptions,
    x: u32,
    y: u32,
    channel: usize,
    buf: &mut Vec<u8>,
) {
    let shape = grid.shape();
    let r = options.radius() as i64;
    buf.clear();
    for dy in -r..=r {
        for dx in -r..=r {
            let (sx, sy) = options
                .border_policy()
                .resolve(shape, x as i64 + dx, y as i64 + dy);
            buf.push(grid.get_pixel_unchecked(sx, sy).channel(channel));
        }
    }
}

/// The neighborhood of `(x, y)` for one channel, row-major.
///
/// # Errors
///
/// - [`FilterError::InvalidParameters`] if the window size is even or the
///   channel does not exist for this image kind
/// - [`FilterError::Core`] if `(x, y)` is outside the grid
pub fn window_values(
    grid: &ImageGrid,
    x: u32,
    y: u32,
    channel: usize,
    options: &WindowOptions,
) -> FilterResult<Vec<u8>> {
    options.validate()?;
    grid.get_pixel(x, y)?;
    if channel >= grid.kind().channels() {
        return Err(FilterError::InvalidParameters(format!(
            "channel {channel} out of range for {} image",
            grid.kind().name()
        )));
    }
    let mut buf = Vec::with_capacity(options.area());
    fill_window(grid, options, x, y, channel, &mut buf);
    Ok(buf)
}

/// Build a new grid whose every channel value is `f` applied to the
/// matching neighborhood of the source.
///
/// The result has the source's kind, dimensions and maximum level. RGB
/// grids are processed one channel at a time; `f` never sees values from
/// two channels in the same window.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if the window size is even.
pub fn map_windows<F>(grid: &ImageGrid, options: &WindowOptions, mut f: F) -> FilterResult<ImageGrid>
where
    F: FnMut(&mut [u8]) -> u8,
{
    options.validate()?;
    trace!(
        width = grid.width(),
        height = grid.height(),
        size = options.size(),
        border = ?options.border_policy(),
        "map_windows"
    );

    let channels = grid.kind().channels();
    let mut out = grid.create_template();
    let mut buf = Vec::with_capacity(options.area());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let mut pixel = out.get_pixel_unchecked(x, y);
            for c in 0..channels {
                fill_window(grid, options, x, y, c, &mut buf);
                pixel.set_channel(c, f(&mut buf));
            }
            out.set_pixel_unchecked(x, y, pixel);
        }
    }
    Ok(out)
}
