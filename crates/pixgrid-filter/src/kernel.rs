//! Convolution kernels
//!
//! A [`Kernel`] is an odd-sized square of coefficients stored row-major,
//! anchored at its center. [`KernelPreset`] names the built-in 3x3
//! kernels.

use crate::{FilterError, FilterResult};
use std::fmt;
use std::str::FromStr;

/// A square convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width and height of the kernel
    size: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `size` is even or
    /// `data.len() != size * size`.
    pub fn from_slice(size: u32, data: &[f64]) -> FilterResult<Self> {
        if size % 2 == 0 {
            return Err(FilterError::InvalidParameters(format!(
                "kernel size must be odd, got {size}"
            )));
        }
        let expected = size as usize * size as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidParameters(format!(
                "kernel of size {size} needs {expected} values, got {}",
                data.len()
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Look up a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] listing every valid name.
    pub fn preset(name: &str) -> FilterResult<Self> {
        Ok(name.parse::<KernelPreset>()?.kernel())
    }

    /// Get the kernel size.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the coefficient at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.data.get((y * self.size + x) as usize).copied()
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Scale the kernel so that values sum to 1.
    ///
    /// Kernels summing to zero (edge detectors) are left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() < f64::EPSILON {
            return;
        }
        for v in &mut self.data {
            *v /= sum;
        }
    }

    /// Weighted sum of a row-major window of the same size.
    pub(crate) fn apply(&self, window: &[u8]) -> f64 {
        self.data
            .iter()
            .zip(window)
            .map(|(k, &v)| k * v as f64)
            .sum()
    }
}

/// Built-in 3x3 kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelPreset {
    Identity,
    Edge,
    Laplace,
    Laplace2,
    Sharpen,
    BoxBlur,
    GaussianBlur,
    Emboss,
}

impl KernelPreset {
    /// Every preset, in the order their names are listed in errors.
    pub const ALL: [KernelPreset; 8] = [
        KernelPreset::Identity,
        KernelPreset::Edge,
        KernelPreset::Laplace,
        KernelPreset::Laplace2,
        KernelPreset::Sharpen,
        KernelPreset::BoxBlur,
        KernelPreset::GaussianBlur,
        KernelPreset::Emboss,
    ];

    /// The lookup name.
    pub fn name(self) -> &'static str {
        match self {
            KernelPreset::Identity => "identity",
            KernelPreset::Edge => "edge",
            KernelPreset::Laplace => "laplace",
            KernelPreset::Laplace2 => "laplace2",
            KernelPreset::Sharpen => "sharpen",
            KernelPreset::BoxBlur => "box_blur",
            KernelPreset::GaussianBlur => "gaussian_blur",
            KernelPreset::Emboss => "emboss",
        }
    }

    /// Row-major coefficients.
    pub fn coefficients(self) -> [f64; 9] {
        match self {
            KernelPreset::Identity => [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            KernelPreset::Edge => [1.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0],
            KernelPreset::Laplace => [0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0],
            KernelPreset::Laplace2 => [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
            KernelPreset::Sharpen => [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
            KernelPreset::BoxBlur => [1.0 / 9.0; 9],
            KernelPreset::GaussianBlur => [
                1.0 / 16.0,
                2.0 / 16.0,
                1.0 / 16.0,
                2.0 / 16.0,
                4.0 / 16.0,
                2.0 / 16.0,
                1.0 / 16.0,
                2.0 / 16.0,
                1.0 / 16.0,
            ],
            KernelPreset::Emboss => [-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0],
        }
    }

    /// The preset as a [`Kernel`].
    pub fn kernel(self) -> Kernel {
        Kernel {
            size: 3,
            data: self.coefficients().to_vec(),
        }
    }

    /// Comma-separated list of every preset name.
    pub fn valid_names() -> String {
        Self::ALL.map(KernelPreset::name).join(", ")
    }
}

impl fmt::Display for KernelPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelPreset {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| FilterError::InvalidKernel {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        for preset in KernelPreset::ALL {
            assert_eq!(preset.name().parse::<KernelPreset>().unwrap(), preset);
            let k = Kernel::preset(preset.name()).unwrap();
            assert_eq!(k.size(), 3);
            assert_eq!(k.data(), &preset.coefficients());
        }
    }

    #[test]
    fn test_unknown_preset_lists_names() {
        let err = Kernel::preset("blur").unwrap_err();
        assert!(err.is_validation());
        let msg = err.to_string();
        for preset in KernelPreset::ALL {
            assert!(msg.contains(preset.name()), "{msg}");
        }
        match err {
            FilterError::InvalidKernel { name, .. } => assert_eq!(name, "blur"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_preset_sums() {
        let near = |a: f64, b: f64| (a - b).abs() < 1e-12;
        assert!(near(KernelPreset::Identity.kernel().sum(), 1.0));
        assert!(near(KernelPreset::BoxBlur.kernel().sum(), 1.0));
        assert!(near(KernelPreset::GaussianBlur.kernel().sum(), 1.0));
        assert!(near(KernelPreset::Sharpen.kernel().sum(), 1.0));
        assert!(near(KernelPreset::Emboss.kernel().sum(), 1.0));
        assert!(near(KernelPreset::Laplace.kernel().sum(), 0.0));
        assert!(near(KernelPreset::Laplace2.kernel().sum(), 0.0));
        assert!(near(KernelPreset::Edge.kernel().sum(), 0.0));
    }

    #[test]
    fn test_from_slice_and_get() {
        let k = Kernel::from_slice(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        assert_eq!(k.get(0, 0), Some(1.0));
        assert_eq!(k.get(2, 1), Some(6.0));
        assert_eq!(k.get(3, 0), None);
        assert!(Kernel::from_slice(2, &[1.0; 4]).is_err());
        assert!(Kernel::from_slice(3, &[1.0; 8]).is_err());
    }

    #[test]
    fn test_normalize() {
        let mut k = Kernel::from_slice(3, &[2.0; 9]).unwrap();
        k.normalize();
        assert!((k.sum() - 1.0).abs() < 1e-12);

        let mut edge = KernelPreset::Edge.kernel();
        edge.normalize();
        assert_eq!(edge, KernelPreset::Edge.kernel());
    }
}
