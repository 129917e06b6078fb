//! I/O error types
//!
//! Decoding failures are split by cause so callers (and tests) can tell
//! which check fired:
//!
//! - [`IoError::InvalidHeader`]: missing or unrecognized magic
//! - [`IoError::InvalidFile`]: non-numeric tokens, wrong token counts,
//!   pixel values outside the declared range
//! - [`IoError::InvalidConfig`]: non-positive or oversized width, height
//!   or maximum level
//!
//! Together these form the parse-error family, see
//! [`IoError::is_parse_error`].

use thiserror::Error;

/// Error type for Netpbm I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or unrecognized header
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Structurally invalid file contents
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Width, height or maximum level out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] pixgrid_core::Error),
}

impl IoError {
    /// Whether this error came from decoding malformed contents.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IoError::InvalidHeader(_) | IoError::InvalidFile(_) | IoError::InvalidConfig(_)
        )
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
