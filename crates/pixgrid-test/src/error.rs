//! Harness errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or write a fixture or regression output.
///
/// Comparison failures are not errors; [`RegParams`](crate::RegParams)
/// records them and reports them from `cleanup`.
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture or golden image could not be decoded
    #[error("cannot load {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: pixgrid_io::IoError,
    },

    /// A regression output could not be encoded
    #[error("cannot write {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: pixgrid_io::IoError,
    },

    /// Copying or reading golden files failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
