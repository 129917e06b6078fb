//! Pixel values
//!
//! A pixel is either a single gray level ([`Gray`]) or a red/green/blue
//! triple ([`Rgb`]); [`PixelValue`] is the closed variant stored in an
//! [`ImageGrid`](crate::ImageGrid). All three implement [`Tone`], the
//! shared set of saturating point operations.
//!
//! # Saturation
//!
//! Every channel lives in `0..=255`. Operations compute in a wider
//! integer (or `f64` for scaling) and clamp back, so no operation can
//! wrap around.
//!
//! # Rounding
//!
//! [`Tone::scalar_multiply`] rounds half away from zero
//! (`2.5 -> 3`, `0.5 -> 1`), the behaviour of [`f64::round`].

use crate::error::{Error, Result};

/// Maximum value of any channel.
pub const CHANNEL_MAX: u8 = 255;

/// Clamp a wide intermediate into a channel value.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, CHANNEL_MAX as i32) as u8
}

/// Round (half away from zero) and clamp a floating-point result into a
/// channel value. NaN maps to 0.
#[inline]
pub fn round_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, CHANNEL_MAX as f64) as u8
}

/// An operation level in `0..=255`.
///
/// Operations such as [`ImageGrid::darken`](crate::ImageGrid::darken)
/// accept anything convertible into a `Level`, so the conversion is where
/// bad arguments are rejected:
///
/// - integers outside `0..=255` give [`Error::LevelOutOfRange`]
/// - fractional or non-finite floats and non-numeric strings give
///   [`Error::TypeMismatch`]
///
/// ```
/// use pixgrid_core::{Error, Level};
///
/// assert_eq!(Level::try_from(10).unwrap().value(), 10);
/// assert_eq!(Level::try_from(256), Err(Error::LevelOutOfRange(256)));
/// assert!(matches!(Level::try_from(0.5), Err(Error::TypeMismatch(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(u8);

impl Level {
    /// The level as a channel value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    // i128 holds every primitive integer argument without loss
    fn from_wide(value: i128) -> Result<Self> {
        if (0..=i128::from(CHANNEL_MAX)).contains(&value) {
            Ok(Level(value as u8))
        } else {
            Err(Error::LevelOutOfRange(value))
        }
    }

    fn from_float(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Error::TypeMismatch(format!("float {value}")));
        }
        if value < i128::MIN as f64 || value > i128::MAX as f64 {
            return Err(Error::TypeMismatch(format!("float {value}")));
        }
        Self::from_wide(value as i128)
    }
}

macro_rules! level_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Level {
                type Error = Error;

                fn try_from(value: $t) -> Result<Self> {
                    Level::from_wide(value as i128)
                }
            }
        )*
    };
}

level_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TryFrom<f64> for Level {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Level::from_float(value)
    }
}

impl TryFrom<f32> for Level {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        Level::from_float(value as f64)
    }
}

impl TryFrom<&str> for Level {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let parsed: i128 = value
            .trim()
            .parse()
            .map_err(|_| Error::TypeMismatch(format!("string {value:?}")))?;
        Level::from_wide(parsed)
    }
}

/// Saturating point operations shared by every pixel representation.
///
/// All methods mutate in place and keep each channel inside `0..=255`.
pub trait Tone {
    /// Replace each channel `v` with `255 - v`.
    fn negative(&mut self);

    /// Subtract `level` from each channel, saturating at 0.
    fn darken(&mut self, level: Level);

    /// Add `level` to each channel, saturating at 255.
    fn lighten(&mut self, level: Level);

    /// Channel-wise saturating addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelKindMismatch`] if the operands are different
    /// pixel variants.
    fn add(&mut self, other: &Self) -> Result<()>;

    /// Channel-wise saturating subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelKindMismatch`] if the operands are different
    /// pixel variants.
    fn subtract(&mut self, other: &Self) -> Result<()>;

    /// Multiply each channel by `factor`, rounding half away from zero and
    /// clamping into `0..=255`.
    fn scalar_multiply(&mut self, factor: f64);
}

/// A single gray level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gray(pub u8);

impl Gray {
    /// Get the gray level.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Tone for Gray {
    fn negative(&mut self) {
        self.0 = CHANNEL_MAX - self.0;
    }

    fn darken(&mut self, level: Level) {
        self.0 = self.0.saturating_sub(level.value());
    }

    fn lighten(&mut self, level: Level) {
        self.0 = self.0.saturating_add(level.value());
    }

    fn add(&mut self, other: &Self) -> Result<()> {
        self.0 = self.0.saturating_add(other.0);
        Ok(())
    }

    fn subtract(&mut self, other: &Self) -> Result<()> {
        self.0 = self.0.saturating_sub(other.0);
        Ok(())
    }

    fn scalar_multiply(&mut self, factor: f64) {
        self.0 = round_channel(self.0 as f64 * factor);
    }
}

/// A red/green/blue triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create an RGB triple.
    #[inline]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Channels in red, green, blue order.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    fn zip_with(&mut self, other: &Rgb, f: impl Fn(u8, u8) -> u8) {
        self.red = f(self.red, other.red);
        self.green = f(self.green, other.green);
        self.blue = f(self.blue, other.blue);
    }

    fn map(&mut self, f: impl Fn(u8) -> u8) {
        self.red = f(self.red);
        self.green = f(self.green);
        self.blue = f(self.blue);
    }
}

impl Tone for Rgb {
    fn negative(&mut self) {
        self.map(|v| CHANNEL_MAX - v);
    }

    fn darken(&mut self, level: Level) {
        self.map(|v| v.saturating_sub(level.value()));
    }

    fn lighten(&mut self, level: Level) {
        self.map(|v| v.saturating_add(level.value()));
    }

    fn add(&mut self, other: &Self) -> Result<()> {
        self.zip_with(other, u8::saturating_add);
        Ok(())
    }

    fn subtract(&mut self, other: &Self) -> Result<()> {
        self.zip_with(other, u8::saturating_sub);
        Ok(())
    }

    fn scalar_multiply(&mut self, factor: f64) {
        self.map(|v| round_channel(v as f64 * factor));
    }
}

/// A pixel stored in an image grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelValue {
    /// Single gray level (used by bitmap and grayscale images)
    Gray(Gray),
    /// Color triple (used by RGB images)
    Rgb(Rgb),
}

impl PixelValue {
    /// Create a gray pixel.
    #[inline]
    pub fn gray(level: u8) -> Self {
        PixelValue::Gray(Gray(level))
    }

    /// Create an RGB pixel.
    #[inline]
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        PixelValue::Rgb(Rgb::new(red, green, blue))
    }

    /// Name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PixelValue::Gray(_) => "gray",
            PixelValue::Rgb(_) => "rgb",
        }
    }

    /// Number of channels (1 or 3).
    #[inline]
    pub fn channel_count(&self) -> usize {
        match self {
            PixelValue::Gray(_) => 1,
            PixelValue::Rgb(_) => 3,
        }
    }

    /// Get channel `index` (0 for gray; 0, 1, 2 for red, green, blue).
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.channel_count()`.
    #[inline]
    pub fn channel(&self, index: usize) -> u8 {
        match (self, index) {
            (PixelValue::Gray(g), 0) => g.0,
            (PixelValue::Rgb(c), 0) => c.red,
            (PixelValue::Rgb(c), 1) => c.green,
            (PixelValue::Rgb(c), 2) => c.blue,
            _ => panic!("channel {index} out of range for {} pixel", self.kind_name()),
        }
    }

    /// Set channel `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.channel_count()`.
    #[inline]
    pub fn set_channel(&mut self, index: usize, value: u8) {
        let name = self.kind_name();
        match (self, index) {
            (PixelValue::Gray(g), 0) => g.0 = value,
            (PixelValue::Rgb(c), 0) => c.red = value,
            (PixelValue::Rgb(c), 1) => c.green = value,
            (PixelValue::Rgb(c), 2) => c.blue = value,
            _ => panic!("channel {index} out of range for {name} pixel"),
        }
    }

    /// The gray level, if this is a gray pixel.
    pub fn as_gray(&self) -> Option<u8> {
        match self {
            PixelValue::Gray(g) => Some(g.0),
            PixelValue::Rgb(_) => None,
        }
    }

    /// The color triple, if this is an RGB pixel.
    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            PixelValue::Gray(_) => None,
            PixelValue::Rgb(c) => Some(*c),
        }
    }

    /// Largest channel value.
    pub fn max_channel(&self) -> u8 {
        match self {
            PixelValue::Gray(g) => g.0,
            PixelValue::Rgb(c) => c.red.max(c.green).max(c.blue),
        }
    }
}

impl From<Gray> for PixelValue {
    fn from(g: Gray) -> Self {
        PixelValue::Gray(g)
    }
}

impl From<Rgb> for PixelValue {
    fn from(c: Rgb) -> Self {
        PixelValue::Rgb(c)
    }
}

impl Tone for PixelValue {
    fn negative(&mut self) {
        match self {
            PixelValue::Gray(g) => g.negative(),
            PixelValue::Rgb(c) => c.negative(),
        }
    }

    fn darken(&mut self, level: Level) {
        match self {
            PixelValue::Gray(g) => g.darken(level),
            PixelValue::Rgb(c) => c.darken(level),
        }
    }

    fn lighten(&mut self, level: Level) {
        match self {
            PixelValue::Gray(g) => g.lighten(level),
            PixelValue::Rgb(c) => c.lighten(level),
        }
    }

    fn add(&mut self, other: &Self) -> Result<()> {
        let expected = self.kind_name();
        match (self, other) {
            (PixelValue::Gray(a), PixelValue::Gray(b)) => a.add(b),
            (PixelValue::Rgb(a), PixelValue::Rgb(b)) => a.add(b),
            _ => Err(Error::PixelKindMismatch {
                expected,
                actual: other.kind_name(),
            }),
        }
    }

    fn subtract(&mut self, other: &Self) -> Result<()> {
        let expected = self.kind_name();
        match (self, other) {
            (PixelValue::Gray(a), PixelValue::Gray(b)) => a.subtract(b),
            (PixelValue::Rgb(a), PixelValue::Rgb(b)) => a.subtract(b),
            _ => Err(Error::PixelKindMismatch {
                expected,
                actual: other.kind_name(),
            }),
        }
    }

    fn scalar_multiply(&mut self, factor: f64) {
        match self {
            PixelValue::Gray(g) => g.scalar_multiply(factor),
            PixelValue::Rgb(c) => c.scalar_multiply(factor),
        }
    }
}
