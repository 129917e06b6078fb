//! Error types for pixgrid-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixgrid_core::Error),

    /// Unknown kernel preset name
    #[error("invalid kernel {name:?}, valid kernels are: {valid}")]
    InvalidKernel {
        /// The name that was asked for
        name: String,
        /// Comma-separated list of every preset name
        valid: String,
    },

    /// Invalid parameters (window size, kernel shape)
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl FilterError {
    /// Whether this error is a validation failure, including validation
    /// failures raised by the core crate.
    pub fn is_validation(&self) -> bool {
        match self {
            FilterError::Core(e) => e.is_validation(),
            FilterError::InvalidKernel { .. } | FilterError::InvalidParameters(_) => true,
        }
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
