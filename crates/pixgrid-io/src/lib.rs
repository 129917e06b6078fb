//! pixgrid-io - Netpbm reading and writing
//!
//! Decodes and encodes the plain-text Netpbm kinds:
//!
//! | Magic | Kind      | Values per pixel |
//! |-------|-----------|------------------|
//! | `P1`  | bitmap    | 1                |
//! | `P2`  | grayscale | 1                |
//! | `P3`  | RGB       | 3                |
//!
//! Readers and writers work on any [`Read`](std::io::Read) /
//! [`Write`](std::io::Write); [`read_image`] and [`write_image`] are the
//! file-path conveniences.

mod error;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use pnm::{
    WriteOptions, read_pnm, read_pnm_mem, tokenize, write_pnm, write_pnm_mem, write_pnm_with,
};

use pixgrid_core::ImageGrid;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::trace;

/// Read an image from a file path.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be opened or read, otherwise the
/// decode errors of [`read_pnm`].
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<ImageGrid> {
    let path = path.as_ref();
    trace!(path = %path.display(), "read_image");
    let file = File::open(path)?;
    read_pnm(BufReader::new(file))
}

/// Write an image to a file path, replacing any existing file.
pub fn write_image<P: AsRef<Path>>(grid: &ImageGrid, path: P) -> IoResult<()> {
    write_image_with(grid, path, &WriteOptions::default())
}

/// Write an image to a file path with explicit options.
pub fn write_image_with<P: AsRef<Path>>(
    grid: &ImageGrid,
    path: P,
    options: &WriteOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), kind = %grid.kind(), "write_image");
    let file = File::create(path)?;
    write_pnm_with(grid, BufWriter::new(file), options)
}
