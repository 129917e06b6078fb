//! RGB channel operations
//!
//! Splitting an RGB image into three grayscale images and merging three
//! grayscale images back into one RGB image.

use super::{ImageGrid, ImageKind};
use crate::error::{Error, Result};
use crate::pixel::PixelValue;
use tracing::trace;

/// Color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in red, green, blue order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of the channel inside an RGB pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl ImageGrid {
    /// Extract one channel as a grayscale image with this image's
    /// dimensions and maximum level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] unless the image is RGB.
    pub fn channel(&self, channel: Channel) -> Result<ImageGrid> {
        if self.kind() != ImageKind::Rgb {
            return Err(Error::UnsupportedKind {
                expected: "rgb",
                actual: self.kind().name(),
            });
        }
        let idx = channel.index();
        let pixels = self
            .pixels()
            .iter()
            .map(|p| PixelValue::gray(p.channel(idx)))
            .collect();
        ImageGrid::from_pixels(
            ImageKind::Grayscale,
            self.max_level() as u32,
            self.width(),
            self.height(),
            pixels,
        )
    }

    /// Split into `[red, green, blue]` grayscale images.
    ///
    /// [`merge_channels`] with the three results in the same order
    /// reproduces this image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] unless the image is RGB.
    pub fn extract_channels(&self) -> Result<[ImageGrid; 3]> {
        trace!(width = self.width(), height = self.height(), "extract_channels");
        Ok([
            self.channel(Channel::Red)?,
            self.channel(Channel::Green)?,
            self.channel(Channel::Blue)?,
        ])
    }
}

/// Merge three single-channel images into one RGB image.
///
/// Pixel `(x, y)` of the result is `RGB(red[x, y], green[x, y], blue[x, y])`.
/// The result takes the red image's maximum level.
///
/// # Errors
///
/// - [`Error::UnsupportedKind`] if any input is an RGB image
/// - [`Error::IncompatibleImages`] if the inputs differ in dimensions or
///   maximum level
pub fn merge_channels(red: &ImageGrid, green: &ImageGrid, blue: &ImageGrid) -> Result<ImageGrid> {
    for img in [red, green, blue] {
        img.require_single_channel()?;
    }
    for img in [green, blue] {
        if img.shape() != red.shape() {
            return Err(Error::IncompatibleImages(format!(
                "channel dimensions differ: {}x{} vs {}x{}",
                red.width(),
                red.height(),
                img.width(),
                img.height()
            )));
        }
        if img.max_level() != red.max_level() {
            return Err(Error::IncompatibleImages(format!(
                "channel maximum levels differ: {} vs {}",
                red.max_level(),
                img.max_level()
            )));
        }
    }
    trace!(width = red.width(), height = red.height(), "merge_channels");

    let pixels = red
        .pixels()
        .iter()
        .zip(green.pixels())
        .zip(blue.pixels())
        .map(|((r, g), b)| PixelValue::rgb(r.channel(0), g.channel(0), b.channel(0)))
        .collect();
    ImageGrid::from_pixels(
        ImageKind::Rgb,
        red.max_level() as u32,
        red.width(),
        red.height(),
        pixels,
    )
}
