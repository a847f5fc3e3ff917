#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Python integration requires the `pyffi` feature."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//! # Pigmix: Mixing Colors Like Paint
//!
//! Pigmix models colors the way a dyer or painter thinks about them: as
//! amounts of red, yellow, and blue pigment plus black. Adding pigment makes
//! a color darker and, as with real paint, blue and yellow make green. Yet
//! everything that renders or persists colors deals in additive RGB. Hence
//! this crate's core is the conversion between the two:
//!
//!   * The forward mapping from pigment to RGB is exact. It interpolates
//!     between the eight corners of a [`PigmentCube`], after biasing pigment
//!     amounts towards those corners, and then blends the result towards
//!     near-black by the amount of black.
//!   * The inverse mapping from RGB to pigment has no closed form. Instead,
//!     [`PigmentColorK::from_rgb`] runs a short gradient descent, configured
//!     through [`opt::SolverOptions`]. It never fails: if a color cannot be
//!     mixed from pigments, the result is the closest approximation found.
//!
//! On top of that, the crate provides:
//!
//!   * Clamped mixing with [`PigmentColorK::dye`] and
//!     [`PigmentColorK::bleach`], with fixed amounts for every [`Dye`].
//!   * Packing [`PigmentColorK`] into a `u32` for persistence.
//!   * The [`palette`] module's named colors and nearest-color classification.
//!   * The [`label`] module's memoized color names.
//!   * [`AdditiveColor`] and [`DisplayColor`] for RGB and HSV, respectively.
//!
//!
//! # Example
//!
//! ```
//! # use pigmix::{Dye, PigmentColorK};
//! # use pigmix::palette::NamedColorTable;
//! let mut color = PigmentColorK::WHITE;
//! for _ in 0..4 {
//!     color = color.dye(&Dye::Yellow.delta()).dye(&Dye::Red.delta());
//! }
//!
//! let (entry, _) = NamedColorTable::standard().classify(&color);
//! assert_eq!(entry.name(), "orange");
//!
//! let packed = color.to_packed();
//! assert_eq!(packed, 0xffff0000);
//! assert_eq!(PigmentColorK::from_packed(packed), color);
//! ```
//!
//!
//! # Feature Flags
//!
//!   * **`f64`** (default) selects `f64` as [`Float`]. Without it, the crate
//!     computes with `f32`.
//!   * **`pyffi`** enables Python bindings via [PyO3](https://pyo3.rs).
//!
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and leaves
//! installing a logger to the application. It logs the construction of the
//! standard palette and any solver run that stops at its iteration cap at
//! debug level, and label recomputation at trace level.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
mod core;
mod cube;
pub mod error;
pub mod label;
pub mod opt;
pub mod palette;
mod pigment;

#[doc(hidden)]
pub use core::{is_close_enough, tolerance};

pub use color::{AdditiveColor, DisplayColor};
pub use cube::PigmentCube;
pub use pigment::{Dye, PigmentColor, PigmentColorK, BLEACH_STRENGTH, DYE_STRENGTH};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn pigmix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<AdditiveColor>()?;
    m.add_class::<DisplayColor>()?;
    m.add_class::<PigmentColor>()?;
    m.add_class::<PigmentColorK>()?;
    m.add_class::<Dye>()?;
    m.add_class::<label::Dyeable>()?;

    m.add("DYE_STRENGTH", DYE_STRENGTH)?;
    m.add("BLEACH_STRENGTH", BLEACH_STRENGTH)?;
    Ok(())
}
