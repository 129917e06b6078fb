//! Pixel access functions
//!
//! Bounds-checked and unchecked getters and setters for individual
//! pixels. Coordinates are 0-based.

use super::ImageGrid;
use crate::error::{Error, Result};
use crate::pixel::PixelValue;

impl ImageGrid {
    /// Get the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `x >= width` or
    /// `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<PixelValue> {
        self.shape.check(x, y)?;
        Ok(self.pixels[self.shape.index(x, y)])
    }

    /// Get a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the row-major index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> PixelValue {
        self.pixels[self.shape.index(x, y)]
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if the coordinate is outside the grid
    /// - [`Error::PixelKindMismatch`] if `pixel` is not the variant this
    ///   image kind stores
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: PixelValue) -> Result<()> {
        self.shape.check(x, y)?;
        if !self.kind.accepts(&pixel) {
            return Err(Error::PixelKindMismatch {
                expected: self.kind.black().kind_name(),
                actual: pixel.kind_name(),
            });
        }
        let idx = self.shape.index(x, y);
        self.pixels[idx] = pixel;
        Ok(())
    }

    /// Set a pixel without bounds or kind checking.
    ///
    /// # Panics
    ///
    /// Panics if the row-major index falls outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: PixelValue) {
        let idx = self.shape.index(x, y);
        self.pixels[idx] = pixel;
    }

    /// Get the gray level at `(x, y)`.
    ///
    /// Returns `None` if the coordinate is out of bounds or the image is RGB.
    pub fn get_gray(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y).ok().and_then(|p| p.as_gray())
    }
}
