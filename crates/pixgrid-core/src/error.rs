//! Error types for pixgrid-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Variants fall into three families that callers can tell apart:
//!
//! - validation failures (bad dimensions, out-of-range levels,
//!   out-of-bounds access, wrong image kind), see [`Error::is_validation`]
//! - [`Error::TypeMismatch`] for level arguments that are not integers
//! - [`Error::IncompatibleImages`] for binary operations on images that
//!   do not share shape, kind and maximum level

use thiserror::Error;

/// pixgrid-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Maximum level outside 1..=255
    #[error("invalid maximum level: {0} (must be between 1 and 255)")]
    InvalidMaxLevel(u32),

    /// Operation level outside 0..=255
    #[error("level must be between (inclusive) 0 and 255, {0} found")]
    LevelOutOfRange(i128),

    /// Operation level that is not an integer
    #[error("level must be an integer, received {0}")]
    TypeMismatch(String),

    /// Pixel coordinate outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Operation not defined for this image kind
    #[error("unsupported image kind: expected {expected}, got {actual}")]
    UnsupportedKind {
        expected: &'static str,
        actual: &'static str,
    },

    /// Pixel variant does not match the image (or the other operand)
    #[error("pixel kind mismatch: expected {expected}, got {actual}")]
    PixelKindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Binary operation on images with different shape, kind or max level
    #[error("incompatible images: {0}")]
    IncompatibleImages(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Whether this error belongs to the validation family.
    ///
    /// Type mismatches and incompatible operands are reported as their own
    /// kinds and return `false`.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::TypeMismatch(_) | Error::IncompatibleImages(_))
    }
}

/// Result type alias for pixgrid-core operations
pub type Result<T> = std::result::Result<T, Error>;
