//! Histogram functions
//!
//! Gray-level histograms and global histogram equalization for bitmap
//! and grayscale images.
//!
//! Counts are stored densely, indexed by level, so every walk over a
//! histogram visits levels in ascending numeric order. Equalization
//! depends on that order for its cumulative frequencies.
//!
//! Point operations and filters only saturate at 255, so a grid can hold
//! values above its maximum level. Here those values count as the
//! maximum level.

use super::ImageGrid;
use crate::error::Result;
use crate::pixel::{PixelValue, round_channel};
use tracing::debug;

/// Occurrence count for every level in `0..=max_level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Maximum level covered; the histogram has `max_level + 1` bins.
    #[inline]
    pub fn max_level(&self) -> u8 {
        (self.counts.len() - 1) as u8
    }

    /// Count for `level`, or `None` if `level > max_level`.
    #[inline]
    pub fn count(&self, level: u8) -> Option<u64> {
        self.counts.get(level as usize).copied()
    }

    /// All counts, indexed by level.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// `(level, count)` pairs in ascending level order, including zero
    /// counts.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().enumerate().map(|(l, &c)| (l as u8, c))
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Relative frequency of each level.
    pub fn frequencies(&self) -> Vec<f64> {
        let total = self.total() as f64;
        self.counts.iter().map(|&c| c as f64 / total).collect()
    }

    /// Running sum of [`Histogram::frequencies`], level `L` including
    /// itself.
    pub fn cumulative_frequencies(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.frequencies()
            .into_iter()
            .map(|f| {
                acc += f;
                acc
            })
            .collect()
    }

    /// Equalization lookup table: level `L` maps to
    /// `round((max_level - 1) * cumulative_frequency[L])`, clamped into
    /// `0..=255`.
    pub fn equalization_table(&self) -> Vec<u8> {
        let scale = (self.max_level() as f64 - 1.0).max(0.0);
        self.cumulative_frequencies()
            .into_iter()
            .map(|cf| round_channel(scale * cf))
            .collect()
    }
}

impl ImageGrid {
    /// Gray-level histogram over `0..=max_level`.
    ///
    /// A pixel above the maximum level lands in the top bin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`](crate::Error::UnsupportedKind)
    /// for RGB images.
    ///
    /// # Example
    ///
    /// ```
    /// use pixgrid_core::{ImageGrid, ImageKind, PixelValue};
    ///
    /// let pixels = vec![PixelValue::gray(0), PixelValue::gray(2), PixelValue::gray(2)];
    /// let grid = ImageGrid::from_pixels(ImageKind::Grayscale, 3, 3, 1, pixels).unwrap();
    /// let hist = grid.histogram().unwrap();
    /// assert_eq!(hist.counts(), &[1, 0, 2, 0]);
    /// ```
    pub fn histogram(&self) -> Result<Histogram> {
        self.require_single_channel()?;

        let max = self.max_level();
        let mut counts = vec![0u64; max as usize + 1];
        for pixel in self.pixels() {
            counts[pixel.channel(0).min(max) as usize] += 1;
        }
        Ok(Histogram { counts })
    }

    /// Global histogram equalization.
    ///
    /// Pixels above the maximum level take the maximum level's mapping.
    ///
    /// # Errors
    ///
    /// As [`ImageGrid::histogram`].
    pub fn equalize(&self) -> Result<ImageGrid> {
        let mut result = self.deep_clone();
        result.equalize_inplace()?;
        Ok(result)
    }

    /// In-place version of [`ImageGrid::equalize`].
    pub fn equalize_inplace(&mut self) -> Result<()> {
        let table = self.histogram()?.equalization_table();
        let max = self.max_level();
        debug!(
            width = self.width(),
            height = self.height(),
            levels = table.len(),
            "equalizing histogram"
        );
        for pixel in self.pixels_mut() {
            *pixel = PixelValue::gray(table[pixel.channel(0).min(max) as usize]);
        }
        Ok(())
    }
}
