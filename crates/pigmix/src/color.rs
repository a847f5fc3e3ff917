//! Additive RGB colors and their HSV representation.
//!
//! Neither type is ever persisted. They are computed on demand from pigment
//! colors for rendering and display, and serve as the targets when converting
//! back into pigment space.

use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_all, distance_squared, format_hashed, from_8bit, hsv_to_rgb, lerp, pack, parse_hashed,
    rgb_to_hsv, to_8bit, unpack,
};
use crate::error::{ColorFormatError, OutOfBoundsError};
use crate::Float;

/// Create a new additive color from 24-bit integer coordinates.
///
/// Like [`AdditiveColor::from_24bit`], this macro creates a new color from
/// 24-bit integer coordinates. However, it also is safe to use in const
/// expressions.
///
/// Rust currently does not allow floating point operations in const functions
/// for this crate's minimum supported version. However, it does allow them in
/// const expressions, notably as arguments to a const function. Hence, this
/// macro scales the integer coordinates before passing them to a const
/// constructor.
///
/// ```
/// # use pigmix::{rgb, AdditiveColor};
/// const ORANGE: AdditiveColor = rgb!(0xff, 0x80, 0x00);
/// assert_eq!(ORANGE.to_packed(), 0xff8000);
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::AdditiveColor::new_unchecked([
            $r as $crate::Float / 255.0,
            $g as $crate::Float / 255.0,
            $b as $crate::Float / 255.0,
        ])
    };
}

/// An additive RGB color.
///
/// All three coordinates are in unit range `0..=1`. The public constructors
/// clamp their inputs, whereas [`AdditiveColor::interpolate`] does not, since
/// it doubles as extrapolation for overshooting animations.
///
/// Equality is exact coordinate equality. For comparing colors as displayed,
/// compare their [`AdditiveColor::to_24bit`] representations instead.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "pigmix"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdditiveColor {
    coordinates: [Float; 3],
}

impl AdditiveColor {
    /// White.
    pub const WHITE: AdditiveColor = rgb!(255, 255, 255);

    /// Black.
    pub const BLACK: AdditiveColor = rgb!(0, 0, 0);

    /// Create a new additive color with the given coordinates.
    ///
    /// Coordinates outside unit range are clamped.
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self {
            coordinates: clamp_all(&[r, g, b]),
        }
    }

    /// Create a new additive color without clamping the coordinates.
    ///
    /// This constructor exists for [`rgb!`] and internal computations that
    /// are known to stay within unit range.
    #[doc(hidden)]
    #[inline]
    pub const fn new_unchecked(coordinates: [Float; 3]) -> Self {
        Self { coordinates }
    }

    /// Create a new additive color from 24-bit coordinates.
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new_unchecked(from_8bit([r, g, b]))
    }

    /// Convert this color to 24-bit coordinates.
    ///
    /// Coordinates are clamped before being scaled and rounded.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_8bit(&self.coordinates)
    }

    /// Create a new additive color from its packed `0xRRGGBB` representation.
    ///
    /// # Panics
    ///
    /// If the most significant byte is not zero. Such an integer does not
    /// describe an additive color and indicates a broken invariant in the
    /// caller. Use `AdditiveColor::try_from` for untrusted input.
    pub fn from_packed(packed: u32) -> Self {
        assert!(
            packed <= 0xff_ffff,
            "packed color {:#x} should have a zero most significant byte",
            packed
        );
        Self::new_unchecked(from_8bit(unpack::<3>(packed)))
    }

    /// Convert this color to its packed `0xRRGGBB` representation.
    pub fn to_packed(&self) -> u32 {
        pack(self.to_24bit())
    }

    /// Get the red coordinate.
    #[inline]
    pub fn r(&self) -> Float {
        self.coordinates[0]
    }

    /// Get the green coordinate.
    #[inline]
    pub fn g(&self) -> Float {
        self.coordinates[1]
    }

    /// Get the blue coordinate.
    #[inline]
    pub fn b(&self) -> Float {
        self.coordinates[2]
    }

    /// Clamp this color's coordinates to unit range.
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn clamp(&self) -> Self {
        Self::new_unchecked(clamp_all(&self.coordinates))
    }

    /// Linearly interpolate between this and the other color.
    ///
    /// The fraction is not clamped. Values outside `0..=1` extrapolate, and
    /// the result may then fall outside unit range.
    ///
    /// ```
    /// # use pigmix::AdditiveColor;
    /// let gray = AdditiveColor::BLACK.interpolate(&AdditiveColor::WHITE, 0.5);
    /// assert_eq!(gray.as_ref(), &[0.5, 0.5, 0.5]);
    /// ```
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn interpolate(&self, other: &Self, fraction: Float) -> Self {
        Self::new_unchecked(lerp(fraction, &self.coordinates, &other.coordinates))
    }

    /// Compute the squared Euclidian distance between this and the other
    /// color.
    pub fn distance_squared(&self, other: &Self) -> Float {
        distance_squared(&self.coordinates, &other.coordinates)
    }

    /// Convert this color to HSV.
    pub fn to_hsv(&self) -> DisplayColor {
        DisplayColor::from_rgb(self)
    }

    /// Convert the HSV color to an additive color.
    pub fn from_hsv(color: &DisplayColor) -> Self {
        color.to_rgb()
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl AdditiveColor {
    /// Create a new additive color with the given coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub fn py_new(r: Float, g: Float, b: Float) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a hashed hexadecimal color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "parse")]
    pub fn py_parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    /// Create a new additive color from its packed representation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_packed")]
    pub fn py_from_packed(packed: u32) -> Result<Self, OutOfBoundsError> {
        Self::try_from(packed)
    }

    /// Get the packed representation. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_packed")]
    pub fn py_to_packed(&self) -> u32 {
        self.to_packed()
    }

    /// Get the coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Interpolate between this and the other color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "interpolate")]
    pub fn py_interpolate(&self, other: &Self, fraction: Float) -> Self {
        self.interpolate(other, fraction)
    }

    /// Convert this color to HSV. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsv")]
    pub fn py_to_hsv(&self) -> DisplayColor {
        self.to_hsv()
    }

    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Default for AdditiveColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl AsRef<[Float; 3]> for AdditiveColor {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl From<[u8; 3]> for AdditiveColor {
    fn from(value: [u8; 3]) -> Self {
        Self::new_unchecked(from_8bit(value))
    }
}

impl From<AdditiveColor> for [u8; 3] {
    fn from(value: AdditiveColor) -> Self {
        value.to_24bit()
    }
}

impl TryFrom<u32> for AdditiveColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value <= 0xff_ffff {
            Ok(Self::from_packed(value))
        } else {
            Err(OutOfBoundsError::new(value as usize, 0..=0xff_ffff))
        }
    }
}

impl FromStr for AdditiveColor {
    type Err = ColorFormatError;

    /// Parse a color in `#rgb` or `#rrggbb` format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s).map(Self::from)
    }
}

impl std::fmt::Display for AdditiveColor {
    /// Format this color in `#rrggbb` format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hashed(&self.to_24bit(), f)
    }
}

// ====================================================================================================================

/// An HSV color.
///
/// This is an alternate representation of an [`AdditiveColor`] with the hue in
/// degrees `0..360` and saturation and value in unit range. It is a pure
/// derived representation and converts losslessly in both directions, up to
/// floating point error.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "pigmix"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayColor {
    coordinates: [Float; 3],
}

impl DisplayColor {
    /// Create a new HSV color.
    ///
    /// The hue is reduced modulo 360º, saturation and value are clamped.
    pub fn new(hue: Float, saturation: Float, value: Float) -> Self {
        let hue = hue.rem_euclid(360.0);
        let hue = if hue.is_nan() || hue >= 360.0 { 0.0 } else { hue };
        let [saturation, value] = clamp_all(&[saturation, value]);
        Self {
            coordinates: [hue, saturation, value],
        }
    }

    /// Convert the additive color to HSV.
    ///
    /// An achromatic color has hue zero, and black also has saturation zero.
    pub fn from_rgb(color: &AdditiveColor) -> Self {
        Self {
            coordinates: rgb_to_hsv(color.as_ref()),
        }
    }

    /// Convert this HSV color to an additive color.
    pub fn to_rgb(&self) -> AdditiveColor {
        AdditiveColor::new_unchecked(hsv_to_rgb(&self.coordinates))
    }

    /// Get the hue.
    #[inline]
    pub fn hue(&self) -> Float {
        self.coordinates[0]
    }

    /// Get the saturation.
    #[inline]
    pub fn saturation(&self) -> Float {
        self.coordinates[1]
    }

    /// Get the value.
    #[inline]
    pub fn value(&self) -> Float {
        self.coordinates[2]
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl DisplayColor {
    /// Create a new HSV color. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(hue: Float, saturation: Float, value: Float) -> Self {
        Self::new(hue, saturation, value)
    }

    /// Get the coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Convert to an additive color. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> AdditiveColor {
        self.to_rgb()
    }

    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl AsRef<[Float; 3]> for DisplayColor {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl From<AdditiveColor> for DisplayColor {
    fn from(value: AdditiveColor) -> Self {
        Self::from_rgb(&value)
    }
}

impl From<DisplayColor> for AdditiveColor {
    fn from(value: DisplayColor) -> Self {
        value.to_rgb()
    }
}

#[cfg(test)]
mod test {
    use super::{AdditiveColor, DisplayColor};
    use crate::error::{ColorFormatError, OutOfBoundsError};
    use crate::{assert_close_enough, Float};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_construction() {
        let color = AdditiveColor::new(-0.5, 0.25, 1.5);
        assert_eq!(color.as_ref(), &[0.0, 0.25, 1.0]);
        assert_eq!(AdditiveColor::default(), AdditiveColor::WHITE);
        assert_eq!(AdditiveColor::from_24bit(255, 0, 255), rgb!(255, 0, 255));
    }

    #[test]
    fn test_packing() -> Result<(), OutOfBoundsError> {
        let color = AdditiveColor::from_packed(0x3366cc);
        assert_eq!(color.to_24bit(), [0x33, 0x66, 0xcc]);
        assert_eq!(color.to_packed(), 0x3366cc);
        assert_eq!(AdditiveColor::from_packed(0).as_ref(), &[0.0, 0.0, 0.0]);
        assert_eq!(AdditiveColor::WHITE.to_packed(), 0xffffff);

        assert_eq!(AdditiveColor::try_from(0xffffff_u32)?, AdditiveColor::WHITE);
        assert_eq!(
            AdditiveColor::try_from(0x01000000_u32),
            Err(OutOfBoundsError::new(0x01000000_usize, 0..=0xff_ffff))
        );

        Ok(())
    }

    #[test]
    #[should_panic(expected = "most significant byte")]
    fn test_packing_with_garbage() {
        let _ = AdditiveColor::from_packed(0xff000000);
    }

    #[test]
    fn test_string() -> Result<(), ColorFormatError> {
        let color: AdditiveColor = "#ff8000".parse()?;
        assert_eq!(color.to_packed(), 0xff8000);
        assert_eq!(format!("{}", color), "#ff8000");
        assert_eq!(format!("{}", "#abc".parse::<AdditiveColor>()?), "#aabbcc");
        assert_eq!(
            "ff8000".parse::<AdditiveColor>(),
            Err(ColorFormatError::UnknownFormat)
        );

        Ok(())
    }

    #[test]
    fn test_interpolation() {
        let black = AdditiveColor::BLACK;
        let white = AdditiveColor::WHITE;

        assert_eq!(black.interpolate(&white, 0.0), black);
        assert_eq!(black.interpolate(&white, 1.0), white);
        assert_eq!(black.interpolate(&white, 0.25).as_ref(), &[0.25, 0.25, 0.25]);

        // Extrapolation overshoots and is not clamped...
        let overshoot = black.interpolate(&white, 1.5);
        assert_eq!(overshoot.as_ref(), &[1.5, 1.5, 1.5]);
        // ...until asked for.
        assert_eq!(overshoot.clamp(), white);
    }

    #[test]
    fn test_distance() {
        assert_eq!(AdditiveColor::BLACK.distance_squared(&AdditiveColor::WHITE), 3.0);
        assert_eq!(AdditiveColor::WHITE.distance_squared(&AdditiveColor::WHITE), 0.0);

        let red = rgb!(255, 0, 0);
        let orange = rgb!(255, 128, 0);
        let blue = rgb!(0, 0, 255);
        assert!(red.distance_squared(&orange) < red.distance_squared(&blue));
        assert_eq!(red.distance_squared(&blue), blue.distance_squared(&red));
    }

    #[test]
    fn test_hsv() {
        let hsv = rgb!(255, 0, 0).to_hsv();
        assert_eq!(hsv.as_ref(), &[0.0, 1.0, 1.0]);
        assert_eq!(AdditiveColor::from_hsv(&hsv), rgb!(255, 0, 0));

        let gray = AdditiveColor::new(0.5, 0.5, 0.5).to_hsv();
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
        assert_eq!(gray.value(), 0.5);

        let black = AdditiveColor::BLACK.to_hsv();
        assert_eq!(black.as_ref(), &[0.0, 0.0, 0.0]);

        let normalized = DisplayColor::new(-120.0, 1.5, -1.0);
        assert_eq!(normalized.as_ref(), &[240.0, 1.0, 0.0]);
    }

    #[test]
    fn test_hsv_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let color = AdditiveColor::new(rng.random(), rng.random(), rng.random());
            let round_trip = AdditiveColor::from(DisplayColor::from(color));
            assert_close_enough!(*round_trip.as_ref(), *color.as_ref(), 1e-5 as Float);
        }
    }
}
