//! pixgrid-filter - Neighborhood filtering operations
//!
//! This crate provides windowed filters over
//! [`ImageGrid`](pixgrid_core::ImageGrid)s:
//!
//! - Sliding-window neighborhoods with edge extension ([`map_windows`])
//! - Average and median filters
//! - Convolution with arbitrary odd-square kernels and named 3x3 presets
//! - Laplacian and high-boost enhancement
//!
//! All filters process RGB images one channel at a time and round half
//! away from zero before clamping into `0..=255`.

pub mod convolve;
pub mod enhance;
mod error;
pub mod kernel;
pub mod neighborhood;
pub mod rank;
pub mod windowed;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, KernelPreset};
pub use neighborhood::{BorderPolicy, WindowOptions, map_windows, window_values};

// Re-export commonly used functions
pub use convolve::{convolve, convolve_preset};
pub use enhance::{high_boost, laplacian_filter};
pub use rank::{lower_median, median_filter, median_filter_with};
pub use windowed::{average_filter, average_filter_with};
