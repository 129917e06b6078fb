//! pixgrid-test - Regression harness shared by the pixgrid crates
//!
//! A regression test opens a [`RegParams`], runs a numbered sequence of
//! checks against small Netpbm fixtures and asserts on
//! [`RegParams::cleanup`]. Checks that produce an image can be pinned to
//! a golden file under `tests/golden/`.
//!
//! `REGTEST_MODE` selects what happens to those images:
//!
//! - `compare` (default): outputs must match their golden files
//! - `generate`: outputs become the new golden files
//! - `display`: outputs are written to `tests/regout/` and left alone
//!
//! ```ignore
//! use pixgrid_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("rotate");
//! let ramp = load_test_image("ramp.pgm")?;
//! rp.compare_values(4.0, ramp.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixgrid_core::ImageGrid;
use std::path::{Path, PathBuf};

/// Decode a fixture from `tests/data/images/`.
pub fn load_test_image(name: &str) -> TestResult<ImageGrid> {
    let path = test_data_path(name);
    pixgrid_io::read_image(&path).map_err(|source| TestError::ImageLoad { path, source })
}

// crates/pixgrid-test -> workspace root
fn workspace_root() -> &'static Path {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(crate_dir)
}

/// Path of fixture `name`.
pub fn test_data_path(name: &str) -> PathBuf {
    workspace_root().join("tests/data/images").join(name)
}

/// Directory holding the committed golden images.
pub fn golden_dir() -> PathBuf {
    workspace_root().join("tests/golden")
}

/// Scratch directory for regression outputs.
pub fn regout_dir() -> PathBuf {
    workspace_root().join("tests/regout")
}
