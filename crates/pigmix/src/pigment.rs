//! Pigment colors with three and four channels.
//!
//! [`PigmentColorK`] is the canonical, persisted color representation. It
//! mixes like paint: dyeing adds pigment, bleaching removes it, and every
//! operation clamps each channel to unit range. [`PigmentColor`] is the
//! three-channel variant without black.

use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_all, distance_squared, format_pigment, from_8bit, lerp, pack, parse_pigment, solve,
    to_8bit, to_hash_bits, unpack,
};
use crate::error::ColorFormatError;
use crate::opt::SolverOptions;
use crate::palette::NamedColorTable;
use crate::{AdditiveColor, Float, PigmentCube};

/// A pigment color with red, yellow, and blue channels.
///
/// This is the three-channel variant of [`PigmentColorK`], which lacks the
/// black channel. Its inverse conversion solves for three channels only and
/// hence runs with the smaller iteration cap of
/// [`SolverOptions::THREE_CHANNEL`].
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "pigmix"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PigmentColor {
    coordinates: [Float; 3],
}

impl PigmentColor {
    /// Create a new pigment color. Channels are clamped to unit range.
    pub fn new(red: Float, yellow: Float, blue: Float) -> Self {
        Self {
            coordinates: clamp_all(&[red, yellow, blue]),
        }
    }

    /// Get the red channel.
    #[inline]
    pub fn red(&self) -> Float {
        self.coordinates[0]
    }

    /// Get the yellow channel.
    #[inline]
    pub fn yellow(&self) -> Float {
        self.coordinates[1]
    }

    /// Get the blue channel.
    #[inline]
    pub fn blue(&self) -> Float {
        self.coordinates[2]
    }

    /// Add the given amount of black.
    pub fn with_black(&self, black: Float) -> PigmentColorK {
        PigmentColorK::from_pigment(self, black)
    }

    /// Convert this pigment color to an additive color with the standard
    /// pigment cube.
    pub fn to_rgb(&self) -> AdditiveColor {
        self.to_rgb_with(&PigmentCube::STANDARD)
    }

    /// Convert this pigment color to an additive color with the given pigment
    /// cube.
    pub fn to_rgb_with(&self, cube: &PigmentCube) -> AdditiveColor {
        AdditiveColor::new_unchecked(cube.blend(&self.coordinates))
    }

    /// Find the pigment color closest to the given additive color.
    ///
    /// This associated function runs the inverse solver with
    /// [`SolverOptions::THREE_CHANNEL`]. It never fails. If the target cannot
    /// be mixed from red, yellow, and blue alone, the result is the best
    /// approximation found.
    pub fn from_rgb(target: &AdditiveColor) -> Self {
        Self::solve(target, &SolverOptions::THREE_CHANNEL)
    }

    /// Find the pigment color closest to the given additive color with the
    /// given solver options.
    pub fn solve(target: &AdditiveColor, options: &SolverOptions) -> Self {
        let cube = PigmentCube::STANDARD;
        let solution = solve(target.as_ref(), |guess: &[Float; 3]| cube.blend(guess), options);
        Self {
            coordinates: solution.coordinates,
        }
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl PigmentColor {
    /// Create a new pigment color. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(red: Float, yellow: Float, blue: Float) -> Self {
        Self::new(red, yellow, blue)
    }

    /// Get the channels. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Convert to an additive color. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> AdditiveColor {
        self.to_rgb()
    }

    /// Find the closest pigment color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_rgb")]
    pub fn py_from_rgb(target: &AdditiveColor) -> Self {
        Self::from_rgb(target)
    }

    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl AsRef<[Float; 3]> for PigmentColor {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl From<PigmentColorK> for PigmentColor {
    fn from(value: PigmentColorK) -> Self {
        value.hue()
    }
}

// ====================================================================================================================

/// The amount of pigment a single dye adds to its channels.
pub const DYE_STRENGTH: Float = 0.25;

/// The amount of pigment a single bleach removes from every channel.
pub const BLEACH_STRENGTH: Float = 0.25;

/// A pigment color with red, yellow, blue, and black channels.
///
/// This is the canonical color representation: it is what items and
/// containers store and what the persistence layer packs into a `u32`. All
/// channels are in unit range, which every constructor and operation
/// enforces.
///
/// # Conversion to RGB
///
/// The hue channels are mapped through the [`PigmentCube`], after which the
/// black channel linearly blends the result towards the cube's near-black
/// anchor. The inverse conversion has no closed form and instead runs a
/// gradient descent. For the colors of the standard
/// [`NamedColorTable`], [`PigmentColorK::from_rgb`] skips the solver and
/// returns the table's precomputed pigment color.
///
/// # Equality
///
/// Equality is exact channel equality, which is what change detection
/// requires. To determine whether two pigment colors merely look the same,
/// use [`PigmentColorK::is_equivalent`].
///
/// ```
/// # use pigmix::PigmentColorK;
/// let mauve = PigmentColorK::new(0.5, 0.0, 0.5, 0.1);
/// let darker = mauve.dye(&PigmentColorK::new(0.0, 0.0, 0.0, 0.2));
/// assert_ne!(mauve, darker);
/// assert_eq!(darker.to_packed(), 0x80_00_80_4d);
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "pigmix"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PigmentColorK {
    coordinates: [Float; 4],
}

impl PigmentColorK {
    /// No pigment at all, i.e., the bare medium.
    pub const WHITE: PigmentColorK = PigmentColorK::new_unchecked([0.0, 0.0, 0.0, 0.0]);

    /// Pure black pigment.
    pub const BLACK: PigmentColorK = PigmentColorK::new_unchecked([0.0, 0.0, 0.0, 1.0]);

    /// Pure red pigment.
    pub const RED: PigmentColorK = PigmentColorK::new_unchecked([1.0, 0.0, 0.0, 0.0]);

    /// Pure yellow pigment.
    pub const YELLOW: PigmentColorK = PigmentColorK::new_unchecked([0.0, 1.0, 0.0, 0.0]);

    /// Pure blue pigment.
    pub const BLUE: PigmentColorK = PigmentColorK::new_unchecked([0.0, 0.0, 1.0, 0.0]);

    /// Create a new pigment color. Channels are clamped to unit range, with
    /// not-a-number becoming zero.
    pub fn new(red: Float, yellow: Float, blue: Float, black: Float) -> Self {
        Self {
            coordinates: clamp_all(&[red, yellow, blue, black]),
        }
    }

    /// Create a new pigment color from coordinates known to be in unit range.
    pub(crate) const fn new_unchecked(coordinates: [Float; 4]) -> Self {
        Self { coordinates }
    }

    /// Create a new pigment color from a three-channel color and black.
    pub fn from_pigment(pigment: &PigmentColor, black: Float) -> Self {
        let [red, yellow, blue] = *pigment.as_ref();
        Self::new(red, yellow, blue, black)
    }

    /// Get the red, yellow, and blue channels without black.
    pub fn hue(&self) -> PigmentColor {
        let [red, yellow, blue, _] = self.coordinates;
        PigmentColor {
            coordinates: [red, yellow, blue],
        }
    }

    /// Get the red channel.
    #[inline]
    pub fn red(&self) -> Float {
        self.coordinates[0]
    }

    /// Get the yellow channel.
    #[inline]
    pub fn yellow(&self) -> Float {
        self.coordinates[1]
    }

    /// Get the blue channel.
    #[inline]
    pub fn blue(&self) -> Float {
        self.coordinates[2]
    }

    /// Get the black channel.
    #[inline]
    pub fn black(&self) -> Float {
        self.coordinates[3]
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Create a new pigment color from its 8-bit channels.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new_unchecked(from_8bit(bytes))
    }

    /// Convert this pigment color to 8-bit channels.
    pub fn to_bytes(&self) -> [u8; 4] {
        to_8bit(&self.coordinates)
    }

    /// Create a new pigment color from its packed `0xRRYYBBKK` representation.
    ///
    /// Every `u32` is a valid packed pigment color. Packing and unpacking
    /// round-trip losslessly at 8-bit precision.
    ///
    /// ```
    /// # use pigmix::PigmentColorK;
    /// let color = PigmentColorK::from_packed(0);
    /// assert_eq!(color, PigmentColorK::WHITE);
    /// assert_eq!(PigmentColorK::from_packed(0x12345678).to_packed(), 0x12345678);
    /// ```
    pub fn from_packed(packed: u32) -> Self {
        Self::from_bytes(unpack::<4>(packed))
    }

    /// Convert this pigment color to its packed `0xRRYYBBKK` representation.
    pub fn to_packed(&self) -> u32 {
        pack(self.to_bytes())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this pigment color to an additive color on a white base.
    pub fn to_rgb(&self) -> AdditiveColor {
        self.to_rgb_with(&PigmentCube::STANDARD)
    }

    /// Convert this pigment color to an additive color on the given base.
    ///
    /// The base replaces the white corner of the standard pigment cube. This
    /// is how a renderer shows dye on a tinted medium.
    pub fn to_rgb_on(&self, base: &AdditiveColor) -> AdditiveColor {
        self.to_rgb_with(&PigmentCube::STANDARD.with_white(base))
    }

    /// Convert this pigment color to an additive color with the given cube.
    pub fn to_rgb_with(&self, cube: &PigmentCube) -> AdditiveColor {
        AdditiveColor::new_unchecked(cube.blend_with_black(&self.coordinates))
    }

    /// Find the pigment color closest to the given additive color.
    ///
    /// If the target is exactly the color of an entry in the standard
    /// [`NamedColorTable`], this associated function returns that entry's
    /// precomputed pigment color. Otherwise, it runs the inverse solver with
    /// [`SolverOptions::FOUR_CHANNEL`]. Either way, it never fails.
    pub fn from_rgb(target: &AdditiveColor) -> Self {
        if let Some(entry) = NamedColorTable::standard().find_by_rgb(target) {
            return *entry.pigment();
        }

        Self::solve(target, None, &SolverOptions::FOUR_CHANNEL)
    }

    /// Find the pigment color that, on the given base, is closest to the given
    /// additive color.
    pub fn from_rgb_on(target: &AdditiveColor, base: &AdditiveColor) -> Self {
        Self::solve(target, Some(base), &SolverOptions::FOUR_CHANNEL)
    }

    /// Run the inverse solver.
    ///
    /// This associated function always runs the gradient descent, using the
    /// standard pigment cube with the optional base substituted for the white
    /// corner. The result is clamped to unit range. If the solver exhausts its
    /// iterations, the result is the best approximation found.
    pub fn solve(
        target: &AdditiveColor,
        base: Option<&AdditiveColor>,
        options: &SolverOptions,
    ) -> Self {
        let cube = match base {
            Some(base) => PigmentCube::STANDARD.with_white(base),
            None => PigmentCube::STANDARD,
        };

        let solution = solve(
            target.as_ref(),
            |guess: &[Float; 4]| cube.blend_with_black(guess),
            options,
        );
        Self::new_unchecked(solution.coordinates)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Dye this pigment color with the given pigment.
    ///
    /// This method adds the channels and clamps the result. It does not
    /// mutate this color. Callers that charge for dyeing should compare the
    /// result with this color and only charge if they differ.
    ///
    /// ```
    /// # use pigmix::{Dye, PigmentColorK};
    /// let red = PigmentColorK::RED;
    /// assert_eq!(red.dye(&Dye::Red.delta()), red);
    /// assert_ne!(red.dye(&Dye::Blue.delta()), red);
    /// ```
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn dye(&self, delta: &Self) -> Self {
        let mut coordinates = self.coordinates;
        for (c, d) in coordinates.iter_mut().zip(delta.coordinates) {
            *c += d;
        }
        Self::new_unchecked(clamp_all(&coordinates))
    }

    /// Bleach this pigment color.
    ///
    /// This method removes the same amount from every channel and clamps the
    /// result. It does not mutate this color. Negative amounts are treated as
    /// zero, so bleaching never adds pigment.
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn bleach(&self, amount: Float) -> Self {
        let amount = amount.max(0.0);
        Self::new_unchecked(clamp_all(&self.coordinates.map(|c| c - amount)))
    }

    /// Scale every channel by the given factor and clamp the result.
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn scale(&self, factor: Float) -> Self {
        Self::new_unchecked(clamp_all(&self.coordinates.map(|c| c * factor)))
    }

    /// Interpolate between this and the other pigment color and clamp the
    /// result.
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn interpolate(&self, other: &Self, fraction: Float) -> Self {
        Self::new_unchecked(clamp_all(&lerp(
            fraction,
            &self.coordinates,
            &other.coordinates,
        )))
    }

    /// Compute the squared Euclidian distance across all four channels.
    pub fn distance_squared(&self, other: &Self) -> Float {
        distance_squared(&self.coordinates, &other.coordinates)
    }

    /// Compute the Euclidian distance across all four channels.
    pub fn distance(&self, other: &Self) -> Float {
        self.distance_squared(other).sqrt()
    }

    /// Determine whether this and the other pigment color look the same.
    ///
    /// Two pigment colors are equivalent if they convert to the same 24-bit
    /// additive color. Since pigment space is redundant, for example, gray
    /// can be mixed from black or from all three hues, equivalent colors need
    /// not be equal.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.to_rgb().to_24bit() == other.to_rgb().to_24bit()
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl PigmentColorK {
    /// Create a new pigment color. <i class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (red, yellow, blue, black=0.0))]
    pub fn py_new(red: Float, yellow: Float, blue: Float, black: Float) -> Self {
        Self::new(red, yellow, blue, black)
    }

    /// Parse a pigment color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "parse")]
    pub fn py_parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    /// Create a new pigment color from its packed representation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_packed")]
    pub fn py_from_packed(packed: u32) -> Self {
        Self::from_packed(packed)
    }

    /// Get the packed representation. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_packed")]
    pub fn py_to_packed(&self) -> u32 {
        self.to_packed()
    }

    /// Get the channels. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [Float; 4] {
        self.coordinates
    }

    /// Convert to an additive color, optionally on a base. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "to_rgb", signature = (base=None))]
    pub fn py_to_rgb(&self, base: Option<AdditiveColor>) -> AdditiveColor {
        match base {
            Some(base) => self.to_rgb_on(&base),
            None => self.to_rgb(),
        }
    }

    /// Find the closest pigment color, optionally on a base. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_rgb", signature = (target, base=None))]
    pub fn py_from_rgb(target: AdditiveColor, base: Option<AdditiveColor>) -> Self {
        match base {
            Some(base) => Self::from_rgb_on(&target, &base),
            None => Self::from_rgb(&target),
        }
    }

    /// Dye this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "dye")]
    pub fn py_dye(&self, delta: &Self) -> Self {
        self.dye(delta)
    }

    /// Bleach this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "bleach")]
    pub fn py_bleach(&self, amount: Float) -> Self {
        self.bleach(amount)
    }

    /// Determine whether the colors look the same. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "is_equivalent")]
    pub fn py_is_equivalent(&self, other: &Self) -> bool {
        self.is_equivalent(other)
    }

    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// Channels are clamped and free of not-a-number, so equality is reflexive.
impl Eq for PigmentColorK {}

impl Hash for PigmentColorK {
    fn hash<H: Hasher>(&self, state: &mut H) {
        to_hash_bits(&self.coordinates).hash(state);
    }
}

impl AsRef<[Float; 4]> for PigmentColorK {
    fn as_ref(&self) -> &[Float; 4] {
        &self.coordinates
    }
}

impl From<[Float; 4]> for PigmentColorK {
    fn from(value: [Float; 4]) -> Self {
        let [red, yellow, blue, black] = value;
        Self::new(red, yellow, blue, black)
    }
}

impl From<PigmentColor> for PigmentColorK {
    fn from(value: PigmentColor) -> Self {
        Self::from_pigment(&value, 0.0)
    }
}

impl FromStr for PigmentColorK {
    type Err = ColorFormatError;

    /// Parse a pigment color in `pigment(r y b)` or `pigment(r y b k)`
    /// format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pigment(s).map(Self::new_unchecked)
    }
}

impl std::fmt::Display for PigmentColorK {
    /// Format this pigment color in `pigment(r y b k)` format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_pigment(&self.coordinates, f)
    }
}

// ====================================================================================================================

/// A dye.
///
/// Each dye adds a fixed amount of pigment. The primary dyes add
/// [`DYE_STRENGTH`] to their channel, whereas the secondary dyes split it
/// evenly between two channels.
#[cfg_attr(feature = "pyffi", pyclass(eq, eq_int, frozen, hash, module = "pigmix"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dye {
    Red,
    Yellow,
    Blue,
    Black,
    Orange,
    Green,
    Purple,
}

impl Dye {
    /// The number of dyes.
    pub const COUNT: usize = 7;

    /// Get all dyes in canonical order.
    pub const fn all() -> [Dye; Dye::COUNT] {
        use Dye::*;
        [Red, Yellow, Blue, Black, Orange, Green, Purple]
    }

    /// Get the pigment this dye adds.
    pub fn delta(&self) -> PigmentColorK {
        let full = DYE_STRENGTH;
        let half = DYE_STRENGTH / 2.0;
        let coordinates = match self {
            Dye::Red => [full, 0.0, 0.0, 0.0],
            Dye::Yellow => [0.0, full, 0.0, 0.0],
            Dye::Blue => [0.0, 0.0, full, 0.0],
            Dye::Black => [0.0, 0.0, 0.0, full],
            Dye::Orange => [half, half, 0.0, 0.0],
            Dye::Green => [0.0, half, half, 0.0],
            Dye::Purple => [half, 0.0, half, 0.0],
        };
        PigmentColorK::new_unchecked(coordinates)
    }

    /// Get this dye's name.
    pub fn name(&self) -> &'static str {
        match self {
            Dye::Red => "red",
            Dye::Yellow => "yellow",
            Dye::Blue => "blue",
            Dye::Black => "black",
            Dye::Orange => "orange",
            Dye::Green => "green",
            Dye::Purple => "purple",
        }
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Dye {
    /// Get the pigment this dye adds. <i class=python-only>Python only!</i>
    #[pyo3(name = "delta")]
    pub fn py_delta(&self) -> PigmentColorK {
        self.delta()
    }

    /// Get this dye's name. <i class=python-only>Python only!</i>
    #[pyo3(name = "name")]
    pub fn py_name(&self) -> &'static str {
        self.name()
    }
}

impl FromStr for Dye {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dye::all()
            .into_iter()
            .find(|dye| dye.name().eq_ignore_ascii_case(s))
            .ok_or(ColorFormatError::UnknownName)
    }
}

impl std::fmt::Display for Dye {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
