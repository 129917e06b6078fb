//! ImageGrid - The main image container
//!
//! An [`ImageGrid`] owns a rectangular matrix of [`PixelValue`]s plus the
//! Netpbm metadata that goes with it: the image kind (bitmap, grayscale
//! or RGB), the dimensions and the maximum level.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major in a single `Vec`
//! - Coordinates are 0-based: `x` in `0..width`, `y` in `0..height`
//! - Bitmap and grayscale grids hold only [`PixelValue::Gray`];
//!   RGB grids hold only [`PixelValue::Rgb`]
//!
//! # Ownership model
//!
//! A grid exclusively owns its pixels. `clone()` is a deep copy, so the
//! non-in-place operations (which clone, then mutate the clone) never
//! affect the receiver.

mod access;
pub mod arith;
mod channels;
mod histogram;
mod point;

pub use channels::{Channel, merge_channels};
pub use histogram::Histogram;

use crate::error::{Error, Result};
use crate::pixel::PixelValue;
use std::fmt;
use std::str::FromStr;

/// Netpbm image kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// `P1`: black and white, one gray level per pixel
    Bitmap,
    /// `P2`: one gray level per pixel
    Grayscale,
    /// `P3`: red, green and blue per pixel
    Rgb,
}

impl ImageKind {
    /// The Netpbm magic for this kind (`P1`, `P2` or `P3`).
    pub fn magic(self) -> &'static str {
        match self {
            ImageKind::Bitmap => "P1",
            ImageKind::Grayscale => "P2",
            ImageKind::Rgb => "P3",
        }
    }

    /// Short lowercase name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ImageKind::Bitmap => "bitmap",
            ImageKind::Grayscale => "grayscale",
            ImageKind::Rgb => "rgb",
        }
    }

    /// Whether pixels of this kind are single gray levels.
    #[inline]
    pub fn is_single_channel(self) -> bool {
        !matches!(self, ImageKind::Rgb)
    }

    /// Number of channels per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        if self.is_single_channel() { 1 } else { 3 }
    }

    /// The zero pixel for this kind.
    pub fn black(self) -> PixelValue {
        match self {
            ImageKind::Rgb => PixelValue::rgb(0, 0, 0),
            _ => PixelValue::gray(0),
        }
    }

    /// Whether `pixel` is a valid variant for this kind.
    #[inline]
    pub fn accepts(self, pixel: &PixelValue) -> bool {
        match pixel {
            PixelValue::Gray(_) => self.is_single_channel(),
            PixelValue::Rgb(_) => !self.is_single_channel(),
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

impl FromStr for ImageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "P1" => Ok(ImageKind::Bitmap),
            "P2" => Ok(ImageKind::Grayscale),
            "P3" => Ok(ImageKind::Rgb),
            _ => Err(Error::InvalidParameter(format!(
                "unknown image kind {s:?} (expected P1, P2 or P3)"
            ))),
        }
    }
}

/// Width and height of a grid, with the index arithmetic that goes with
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    width: u32,
    height: u32,
}

impl GridShape {
    /// Create a shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(GridShape { width, height })
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always `false`: a shape has at least one pixel.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// The shape with width and height swapped.
    #[inline]
    pub fn transposed(self) -> Self {
        GridShape {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether `(x, y)` lies inside the shape.
    #[inline]
    pub fn contains(self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major index of `(x, y)`. Does not check bounds.
    #[inline]
    pub fn index(self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Clamp a signed coordinate to the nearest in-bounds column.
    #[inline]
    pub fn clamp_x(self, x: i64) -> u32 {
        x.clamp(0, self.width as i64 - 1) as u32
    }

    /// Clamp a signed coordinate to the nearest in-bounds row.
    #[inline]
    pub fn clamp_y(self, y: i64) -> u32 {
        y.clamp(0, self.height as i64 - 1) as u32
    }

    fn check(self, x: u32, y: u32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// ImageGrid - pixels plus Netpbm metadata
///
/// # Examples
///
/// ```
/// use pixgrid_core::{ImageGrid, ImageKind, PixelValue};
///
/// let mut grid = ImageGrid::new(ImageKind::Grayscale, 255, 3, 2).unwrap();
/// grid.set_pixel(2, 1, PixelValue::gray(7)).unwrap();
/// assert_eq!(grid.get_pixel(2, 1).unwrap(), PixelValue::gray(7));
/// assert!(grid.get_pixel(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGrid {
    kind: ImageKind,
    max_level: u8,
    shape: GridShape,
    pixels: Vec<PixelValue>,
}

impl ImageGrid {
    /// Create a zero-filled grid.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::InvalidMaxLevel`] if `max_level` is not in `1..=255`
    pub fn new(kind: ImageKind, max_level: u32, width: u32, height: u32) -> Result<Self> {
        let shape = GridShape::new(width, height)?;
        let max_level = check_max_level(max_level)?;
        Ok(ImageGrid {
            kind,
            max_level,
            shape,
            pixels: vec![kind.black(); shape.len()],
        })
    }

    /// Create a grid from prefilled rows.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`ImageGrid::new`], returns
    /// [`Error::InvalidDimension`] if the number of rows or the length of
    /// any row disagrees with `height`/`width`, and
    /// [`Error::PixelKindMismatch`] if any pixel variant does not match
    /// `kind`.
    pub fn from_rows(
        kind: ImageKind,
        max_level: u32,
        width: u32,
        height: u32,
        rows: Vec<Vec<PixelValue>>,
    ) -> Result<Self> {
        let shape = GridShape::new(width, height)?;
        if rows.len() != height as usize {
            return Err(Error::InvalidDimension {
                width,
                height: rows.len() as u32,
            });
        }
        if let Some(row) = rows.iter().find(|r| r.len() != width as usize) {
            return Err(Error::InvalidDimension {
                width: row.len() as u32,
                height,
            });
        }
        let pixels = rows.into_iter().flatten().collect();
        Self::from_pixels(kind, max_level, shape.width, shape.height, pixels)
    }

    /// Create a grid from row-major pixels.
    ///
    /// # Errors
    ///
    /// As [`ImageGrid::from_rows`]; a pixel count other than
    /// `width * height` is reported as [`Error::InvalidParameter`].
    pub fn from_pixels(
        kind: ImageKind,
        max_level: u32,
        width: u32,
        height: u32,
        pixels: Vec<PixelValue>,
    ) -> Result<Self> {
        let shape = GridShape::new(width, height)?;
        let max_level = check_max_level(max_level)?;
        if pixels.len() != shape.len() {
            return Err(Error::InvalidParameter(format!(
                "expected {} pixels for {}x{} image, got {}",
                shape.len(),
                width,
                height,
                pixels.len()
            )));
        }
        if let Some(bad) = pixels.iter().find(|p| !kind.accepts(p)) {
            return Err(Error::PixelKindMismatch {
                expected: kind.black().kind_name(),
                actual: bad.kind_name(),
            });
        }
        Ok(ImageGrid {
            kind,
            max_level,
            shape,
            pixels,
        })
    }

    /// Create a grid of the same kind, max level and shape, zero-filled.
    pub fn create_template(&self) -> ImageGrid {
        self.with_shape(self.shape)
    }

    /// Create a zero-filled grid with this grid's kind and max level but a
    /// different shape.
    pub(crate) fn with_shape(&self, shape: GridShape) -> ImageGrid {
        ImageGrid {
            kind: self.kind,
            max_level: self.max_level,
            shape,
            pixels: vec![self.kind.black(); shape.len()],
        }
    }

    /// Create a grid of the given shape from a pixel function.
    ///
    /// Used by operations that remap positions: `f(x, y)` is the pixel of
    /// the new grid at `(x, y)`.
    pub fn from_fn(
        kind: ImageKind,
        max_level: u8,
        shape: GridShape,
        mut f: impl FnMut(u32, u32) -> PixelValue,
    ) -> ImageGrid {
        let mut pixels = Vec::with_capacity(shape.len());
        for y in 0..shape.height {
            for x in 0..shape.width {
                pixels.push(f(x, y));
            }
        }
        ImageGrid {
            kind,
            max_level,
            shape,
            pixels,
        }
    }

    /// A fully independent copy. Same as `clone()`.
    #[inline]
    pub fn deep_clone(&self) -> ImageGrid {
        self.clone()
    }

    #[inline]
    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    #[inline]
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Set the maximum level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxLevel`] if `max_level` is not in `1..=255`.
    pub fn set_max_level(&mut self, max_level: u32) -> Result<()> {
        self.max_level = check_max_level(max_level)?;
        Ok(())
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.shape.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.shape.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[PixelValue] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[PixelValue]> {
        self.pixels.chunks_exact(self.shape.width as usize)
    }

    /// Get row `y`.
    pub fn row(&self, y: u32) -> Option<&[PixelValue]> {
        if y >= self.shape.height {
            return None;
        }
        let start = self.shape.index(0, y);
        Some(&self.pixels[start..start + self.shape.width as usize])
    }

    /// Copy the pixels out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<PixelValue>> {
        self.rows().map(<[PixelValue]>::to_vec).collect()
    }

    /// Mutable access to all pixels for in-place point operations.
    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [PixelValue] {
        &mut self.pixels
    }

    /// Check that every pixel is at most `max_level`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending
    /// pixel.
    pub fn check_levels(&self) -> Result<()> {
        let max = self.max_level;
        match self.pixels.iter().position(|p| p.max_channel() > max) {
            None => Ok(()),
            Some(i) => {
                let w = self.shape.width as usize;
                Err(Error::InvalidParameter(format!(
                    "pixel ({}, {}) has value {} above maximum level {}",
                    i % w,
                    i / w,
                    self.pixels[i].max_channel(),
                    max
                )))
            }
        }
    }

    pub(crate) fn require_single_channel(&self) -> Result<()> {
        if self.kind.is_single_channel() {
            Ok(())
        } else {
            Err(Error::UnsupportedKind {
                expected: "bitmap or grayscale",
                actual: self.kind.name(),
            })
        }
    }
}

fn check_max_level(max_level: u32) -> Result<u8> {
    match u8::try_from(max_level) {
        Ok(level) if level > 0 => Ok(level),
        _ => Err(Error::InvalidMaxLevel(max_level)),
    }
}
