//! Utility module with pigmix's errors.
//!
//! The color math itself has no failure modes: conversions are total and the
//! inverse solver always produces its best approximation. The errors here
//! cover fallible *inputs*, i.e., integers and strings that may not describe a
//! color at all.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=0xff_ffff` for packed [`AdditiveColor`](crate::AdditiveColor)s,
///     whose most significant byte must be zero;
///   * `0..=len-1` for index values of a
///     [`NamedColorTable`](crate::palette::NamedColorTable).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:#x} does not fit into range {:#x}..={:#x}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Like the rest of the crate's errors, this enumeration has unit variants
/// only, which keeps it compatible with PyO3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#` or
    /// `pigment`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit.
    UnexpectedCharacters,

    /// A functional color format without the opening parenthesis. For example,
    /// `pigment 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For example,
    /// `pigment(1 0 0` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is missing a coordinate. For example, `pigment(1
    /// 0)` is missing the blue coordinate.
    MissingCoordinate,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `pigment(1.0 0..1 0.0)` has a malformed second
    /// coordinate.
    MalformedFloat,

    /// A pigment color format with a coordinate outside unit range. For
    /// example, `pigment(1 2 0)` has an out-of-range second coordinate.
    OutOfRangeCoordinate,

    /// A pigment color format with more than four coordinates.
    TooManyCoordinates,

    /// A name that does not identify a dye or palette entry.
    UnknownName,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should start with `#` or `pigment(` but does not")
            }
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 or 4 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            OutOfRangeCoordinate => {
                f.write_str("pigment coordinates should be between 0 and 1 but one is not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have at most 4 coordinates but has more")
            }
            UnknownName => f.write_str("color name should be a known dye or palette entry"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
