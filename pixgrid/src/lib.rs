//! pixgrid - Pixel-grid processing for Netpbm images
//!
//! pixgrid reads plain-text Netpbm images (`P1` bitmap, `P2` grayscale,
//! `P3` RGB) into an [`ImageGrid`] and transforms them with:
//!
//! - Point operations (negative, darken, lighten)
//! - Image arithmetic (add, subtract, scalar multiply)
//! - Histograms and histogram equalization
//! - RGB channel extraction and merging
//! - Orthogonal rotations and mirrors
//! - Neighborhood filters (average, median, kernel convolution, high-boost)
//!
//! # Example
//!
//! ```
//! use pixgrid::{ImageGrid, ImageKind, PixelValue};
//!
//! let row = vec![PixelValue::gray(10), PixelValue::gray(20), PixelValue::gray(30)];
//! let grid = ImageGrid::from_rows(ImageKind::Grayscale, 255, 3, 1, vec![row]).unwrap();
//! let dark = grid.darken(10).unwrap();
//! assert_eq!(dark.get_pixel(0, 0).unwrap(), PixelValue::gray(0));
//!
//! let turned = pixgrid::transform::rotate_90(&grid, true).unwrap();
//! assert_eq!((turned.width(), turned.height()), (1, 3));
//! ```

mod pipeline;
mod pipeline_error;

// Re-export core types (primary data structures used everywhere)
pub use pixgrid_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixgrid_filter as filter;
pub use pixgrid_io as io;
pub use pixgrid_transform as transform;

pub use pipeline_error::{PipelineError, PipelineResult};
pub use pipeline::{DEFAULT_BOOST, enhance, enhance_file};
