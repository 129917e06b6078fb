//! Point operations
//!
//! Whole-image negative, darken and lighten. Each comes as a copying
//! method returning a new grid and an `_inplace` method that mutates the
//! receiver. Level arguments are validated before any pixel is touched.

use super::ImageGrid;
use crate::error::{Error, Result};
use crate::pixel::{Level, PixelValue, Tone};
use tracing::trace;

impl ImageGrid {
    /// Negative image: every channel `v` becomes `255 - v`.
    pub fn negative(&self) -> ImageGrid {
        let mut result = self.deep_clone();
        result.negative_inplace();
        result
    }

    /// Darken by `level`, saturating at 0.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if `level` is not an integer
    /// - [`Error::LevelOutOfRange`] if `level` is outside `0..=255`
    ///
    /// # Example
    ///
    /// ```
    /// use pixgrid_core::{ImageGrid, ImageKind, PixelValue};
    ///
    /// let row = vec![PixelValue::gray(10), PixelValue::gray(20)];
    /// let grid = ImageGrid::from_rows(ImageKind::Grayscale, 255, 2, 1, vec![row]).unwrap();
    /// let dark = grid.darken(15).unwrap();
    /// assert_eq!(dark.get_pixel(0, 0).unwrap(), PixelValue::gray(0));
    /// assert_eq!(dark.get_pixel(1, 0).unwrap(), PixelValue::gray(5));
    /// ```
    pub fn darken<L>(&self, level: L) -> Result<ImageGrid>
    where
        L: TryInto<Level, Error = Error>,
    {
        let level = level.try_into()?;
        let mut result = self.deep_clone();
        result.apply_level(level, <PixelValue as Tone>::darken);
        Ok(result)
    }

    /// Lighten by `level`, saturating at 255.
    ///
    /// # Errors
    ///
    /// As [`ImageGrid::darken`].
    pub fn lighten<L>(&self, level: L) -> Result<ImageGrid>
    where
        L: TryInto<Level, Error = Error>,
    {
        let level = level.try_into()?;
        let mut result = self.deep_clone();
        result.apply_level(level, <PixelValue as Tone>::lighten);
        Ok(result)
    }

    /// In-place version of [`ImageGrid::negative`].
    pub fn negative_inplace(&mut self) {
        trace!(width = self.width(), height = self.height(), "negative");
        self.pixels_mut().iter_mut().for_each(|p| p.negative());
    }

    /// In-place version of [`ImageGrid::darken`].
    ///
    /// On error the grid is left unchanged.
    pub fn darken_inplace<L>(&mut self, level: L) -> Result<()>
    where
        L: TryInto<Level, Error = Error>,
    {
        let level = level.try_into()?;
        self.apply_level(level, <PixelValue as Tone>::darken);
        Ok(())
    }

    /// In-place version of [`ImageGrid::lighten`].
    ///
    /// On error the grid is left unchanged.
    pub fn lighten_inplace<L>(&mut self, level: L) -> Result<()>
    where
        L: TryInto<Level, Error = Error>,
    {
        let level = level.try_into()?;
        self.apply_level(level, <PixelValue as Tone>::lighten);
        Ok(())
    }

    fn apply_level(&mut self, level: Level, op: fn(&mut PixelValue, Level)) {
        trace!(
            width = self.width(),
            height = self.height(),
            level = level.value(),
            "point op"
        );
        for pixel in self.pixels_mut() {
            op(pixel, level);
        }
    }
}
