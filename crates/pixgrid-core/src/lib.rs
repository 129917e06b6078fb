//! pixgrid core - Pixel values and image grids
//!
//! This crate provides the data structures and point operations shared by
//! every other pixgrid crate:
//!
//! - [`ImageGrid`] - The image container (kind, maximum level, pixels)
//! - [`PixelValue`] / [`Gray`] / [`Rgb`] - Pixel representations
//! - [`Tone`] - Saturating point operations on a single pixel
//! - [`Level`] - Validated operation level
//! - [`Histogram`] - Gray-level histogram and equalization table
//! - [`Channel`] / [`merge_channels`] - RGB channel split and merge
//!
//! Point operations (`negative`, `darken`, `lighten`), image arithmetic
//! (`add`, `subtract`, `multiply`), histograms and equalization are
//! methods on [`ImageGrid`].

pub mod error;
pub mod grid;
pub mod pixel;

pub use error::{Error, Result};
pub use grid::arith::{is_compatible, validate_compatibility};
pub use grid::{Channel, GridShape, Histogram, ImageGrid, ImageKind, merge_channels};
pub use pixel::{CHANNEL_MAX, Gray, Level, PixelValue, Rgb, Tone, clamp_channel, round_channel};
