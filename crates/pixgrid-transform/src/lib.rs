//! pixgrid-transform - Geometric transformations for pixgrid
//!
//! Position-only remappings of an [`ImageGrid`](pixgrid_core::ImageGrid):
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Vertical and horizontal mirrors
//!
//! None of them change a pixel value, the image kind or the maximum level.

mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{
    mirror_horizontal, mirror_vertical, rotate_90, rotate_180, rotate_180_in_place, rotate_270,
    rotate_orth,
};
