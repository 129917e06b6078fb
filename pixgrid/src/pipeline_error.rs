//! Error type for the end-to-end pipeline

use thiserror::Error;

/// Errors from [`enhance_file`](crate::enhance_file)
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading or writing an image failed
    #[error("io error: {0}")]
    Io(#[from] pixgrid_io::IoError),

    /// A filter step failed
    #[error("filter error: {0}")]
    Filter(#[from] pixgrid_filter::FilterError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
