//! Image arithmetic operations
//!
//! Pixel-wise operations between two images and with a scalar:
//!
//! - Addition (`add`, `add_inplace`)
//! - Subtraction (`subtract`, `subtract_inplace`)
//! - Scalar multiplication (`multiply`, `multiply_inplace`)
//!
//! Every channel result is clamped into `0..=255`. Binary operations
//! require both images to share width, height, kind and maximum level;
//! see [`validate_compatibility`].

use super::ImageGrid;
use crate::error::{Error, Result};
use crate::pixel::{PixelValue, Tone};
use tracing::trace;

/// Check that two images can be combined pixel-wise.
///
/// # Errors
///
/// Returns [`Error::IncompatibleImages`] describing the first difference
/// found in dimensions, kind or maximum level.
pub fn validate_compatibility(a: &ImageGrid, b: &ImageGrid) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(Error::IncompatibleImages(format!(
            "dimensions differ: {}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }
    if a.kind() != b.kind() {
        return Err(Error::IncompatibleImages(format!(
            "kinds differ: {} vs {}",
            a.kind(),
            b.kind()
        )));
    }
    if a.max_level() != b.max_level() {
        return Err(Error::IncompatibleImages(format!(
            "maximum levels differ: {} vs {}",
            a.max_level(),
            b.max_level()
        )));
    }
    Ok(())
}

/// Boolean form of [`validate_compatibility`].
pub fn is_compatible(a: &ImageGrid, b: &ImageGrid) -> bool {
    validate_compatibility(a, b).is_ok()
}

#[derive(Debug, Clone, Copy)]
enum ArithBinaryOp {
    Add,
    Subtract,
}

impl ImageGrid {
    /// Add another image to this one: `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleImages`] if the images differ in
    /// dimensions, kind or maximum level.
    ///
    /// # Example
    ///
    /// ```
    /// use pixgrid_core::{ImageGrid, ImageKind, PixelValue};
    ///
    /// let a = ImageGrid::from_pixels(ImageKind::Grayscale, 255, 1, 1, vec![PixelValue::gray(200)]).unwrap();
    /// let sum = a.add(&a).unwrap();
    /// assert_eq!(sum.get_pixel(0, 0).unwrap(), PixelValue::gray(255));
    /// ```
    pub fn add(&self, other: &ImageGrid) -> Result<ImageGrid> {
        let mut result = self.deep_clone();
        result.arith_binary_inplace(other, ArithBinaryOp::Add)?;
        Ok(result)
    }

    /// Subtract another image from this one: `self - other`, clipped at 0.
    ///
    /// # Errors
    ///
    /// As [`ImageGrid::add`].
    pub fn subtract(&self, other: &ImageGrid) -> Result<ImageGrid> {
        let mut result = self.deep_clone();
        result.arith_binary_inplace(other, ArithBinaryOp::Subtract)?;
        Ok(result)
    }

    /// Multiply every channel by `factor`.
    ///
    /// Results are rounded half away from zero and clamped, so negative
    /// factors give black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is not finite.
    pub fn multiply(&self, factor: f64) -> Result<ImageGrid> {
        let mut result = self.deep_clone();
        result.multiply_inplace(factor)?;
        Ok(result)
    }

    /// In-place version of [`ImageGrid::add`].
    pub fn add_inplace(&mut self, other: &ImageGrid) -> Result<()> {
        self.arith_binary_inplace(other, ArithBinaryOp::Add)
    }

    /// In-place version of [`ImageGrid::subtract`].
    pub fn subtract_inplace(&mut self, other: &ImageGrid) -> Result<()> {
        self.arith_binary_inplace(other, ArithBinaryOp::Subtract)
    }

    /// In-place version of [`ImageGrid::multiply`].
    pub fn multiply_inplace(&mut self, factor: f64) -> Result<()> {
        if !factor.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "factor must be finite, got {factor}"
            )));
        }
        trace!(width = self.width(), height = self.height(), factor, "multiply");
        for pixel in self.pixels_mut() {
            pixel.scalar_multiply(factor);
        }
        Ok(())
    }

    fn arith_binary_inplace(&mut self, other: &ImageGrid, op: ArithBinaryOp) -> Result<()> {
        validate_compatibility(self, other)?;
        trace!(width = self.width(), height = self.height(), ?op, "arith");

        let apply: fn(&mut PixelValue, &PixelValue) -> Result<()> = match op {
            ArithBinaryOp::Add => <PixelValue as Tone>::add,
            ArithBinaryOp::Subtract => <PixelValue as Tone>::subtract,
        };
        // Kinds match, so every pixel pair is the same variant.
        for (dst, src) in self.pixels_mut().iter_mut().zip(other.pixels()) {
            apply(dst, src)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageKind;

    /// 3x3 grayscale image with values 0..9 row-major.
    fn counting_image() -> ImageGrid {
        let pixels = (0..9).map(PixelValue::gray).collect();
        ImageGrid::from_pixels(ImageKind::Grayscale, 255, 3, 3, pixels).unwrap()
    }

    fn grays(g: &ImageGrid) -> Vec<u8> {
        g.pixels().iter().map(|p| p.as_gray().unwrap()).collect()
    }

    #[test]
    fn test_add_images() {
        let img1 = counting_image();
        let img2 = counting_image();
        let sum = img1.add(&img2).unwrap();
        assert_eq!(grays(&sum), vec![0, 2, 4, 6, 8, 10, 12, 14, 16]);
        assert_eq!(grays(&img1), (0..9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_subtract_images() {
        let mut img1 = counting_image();
        let img2 = counting_image();
        img1.subtract_inplace(&img2).unwrap();
        assert_eq!(grays(&img1), vec![0; 9]);
    }

    #[test]
    fn test_add_clipping() {
        let a = counting_image().lighten(250).unwrap();
        let sum = a.add(&a).unwrap();
        assert!(grays(&sum).iter().all(|&v| v == 255));
    }

    #[test]
    fn test_subtract_clipping() {
        let a = counting_image();
        let b = a.lighten(5).unwrap();
        assert_eq!(grays(&a.subtract(&b).unwrap()), vec![0; 9]);
    }

    #[test]
    fn test_incompatible_kind() {
        let a = counting_image();
        let pixels = (0..9).map(|v| PixelValue::gray(v % 2)).collect();
        let b = ImageGrid::from_pixels(ImageKind::Bitmap, 255, 3, 3, pixels).unwrap();
        assert!(!is_compatible(&a, &b));
        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, Error::IncompatibleImages(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_incompatible_dimensions_and_max_level() {
        let a = counting_image();
        let b = ImageGrid::new(ImageKind::Grayscale, 255, 9, 1).unwrap();
        assert!(matches!(a.subtract(&b), Err(Error::IncompatibleImages(_))));

        let mut c = counting_image();
        c.set_max_level(8).unwrap();
        assert!(matches!(a.add(&c), Err(Error::IncompatibleImages(_))));
    }

    #[test]
    fn test_failed_inplace_leaves_receiver() {
        let mut a = counting_image();
        let b = ImageGrid::new(ImageKind::Rgb, 255, 3, 3).unwrap();
        assert!(a.add_inplace(&b).is_err());
        assert_eq!(grays(&a), (0..9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_multiply() {
        let a = counting_image();
        let m = a.multiply(1.5).unwrap();
        // 1.5 -> 2, 4.5 -> 5, 7.5 -> 8 (half away from zero)
        assert_eq!(grays(&m), vec![0, 2, 3, 5, 6, 8, 9, 11, 12]);
        assert!(a.multiply(f64::NAN).is_err());
        assert!(grays(&a.multiply(-2.0).unwrap()).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_rgb_arith() {
        let a = ImageGrid::from_pixels(ImageKind::Rgb, 255, 1, 1, vec![PixelValue::rgb(100, 200, 50)])
            .unwrap();
        let b = ImageGrid::from_pixels(ImageKind::Rgb, 255, 1, 1, vec![PixelValue::rgb(50, 100, 100)])
            .unwrap();
        assert_eq!(a.add(&b).unwrap().pixels()[0], PixelValue::rgb(150, 255, 150));
        assert_eq!(a.subtract(&b).unwrap().pixels()[0], PixelValue::rgb(50, 100, 0));
        assert_eq!(a.multiply(2.0).unwrap().pixels()[0], PixelValue::rgb(200, 255, 100));
    }
}
