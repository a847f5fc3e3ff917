//! Memoized labels derived from pigment colors.
//!
//! Classifying a pigment color is cheap but not free, and display code asks
//! for a color's name far more often than the color changes. A
//! [`DerivedLabelCache`] remembers the most recently derived value together
//! with the color it was derived from, and [`Dyeable`] pairs an owned pigment
//! color with such a cache.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::palette::NamedColorTable;
use crate::pigment::BLEACH_STRENGTH;
use crate::{AdditiveColor, Dye, Float, PigmentColorK};

/// A cache for a value derived from a pigment color.
///
/// The cache is either dirty or clean. Reading a dirty cache computes the
/// value, stores it together with a snapshot of the color, and leaves the
/// cache clean. The owner of the color must invalidate the cache whenever it
/// mutates the color. As a backstop, reading with a color other than the
/// snapshot also recomputes the value.
///
/// The cache has no interior mutability. Reading takes `&mut self`, so sharing
/// a cache across threads requires external locking.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedLabelCache<T> {
    state: Option<(PigmentColorK, T)>,
}

impl<T> DerivedLabelCache<T> {
    /// Create a new, dirty cache.
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// Mark this cache as dirty.
    pub fn invalidate(&mut self) {
        self.state = None;
    }

    /// Determine whether this cache is dirty.
    pub fn is_dirty(&self) -> bool {
        self.state.is_none()
    }

    /// Get the color the cached value was derived from, if the cache is
    /// clean.
    pub fn key(&self) -> Option<&PigmentColorK> {
        self.state.as_ref().map(|(key, _)| key)
    }

    /// Get the value for the given color, computing it only if necessary.
    pub fn get_or_compute<F>(&mut self, color: &PigmentColorK, compute: F) -> &T
    where
        F: FnOnce(&PigmentColorK) -> T,
    {
        if matches!(&self.state, Some((key, _)) if key != color) {
            self.state = None;
        }

        let (_, value) = self.state.get_or_insert_with(|| {
            log::trace!("deriving label for {}", color);
            (*color, compute(color))
        });
        value
    }
}

impl<T> Default for DerivedLabelCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ====================================================================================================================

/// An owned, dyeable pigment color with a cached name.
///
/// This is the shape of any item or container that stores a pigment color:
/// mutations go through [`Dyeable::dye`], [`Dyeable::bleach`], or
/// [`Dyeable::set`], each of which invalidates the cached name, and
/// [`Dyeable::label`] classifies the color against the standard palette only
/// when needed.
///
/// Dyeing and bleaching report whether the color actually changed. Callers
/// that consume a dye or bleach per application should do so only if it did.
///
/// ```
/// # use pigmix::label::Dyeable;
/// # use pigmix::{Dye, PigmentColorK};
/// let mut cloth = Dyeable::new(PigmentColorK::WHITE);
/// assert_eq!(cloth.label(), "white");
///
/// for _ in 0..4 {
///     assert!(cloth.apply(Dye::Red));
/// }
/// assert_eq!(cloth.label(), "red");
/// assert!(!cloth.apply(Dye::Red));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(module = "pigmix"))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dyeable {
    color: PigmentColorK,
    label: DerivedLabelCache<&'static str>,
}

impl Dyeable {
    /// Create a new dyeable with the given color.
    pub fn new(color: PigmentColorK) -> Self {
        Self {
            color,
            label: DerivedLabelCache::new(),
        }
    }

    /// Get the color.
    pub fn color(&self) -> PigmentColorK {
        self.color
    }

    /// Replace the color.
    pub fn set(&mut self, color: PigmentColorK) {
        self.color = color;
        self.label.invalidate();
    }

    /// Dye with the given pigment. This method returns whether the color
    /// changed.
    pub fn dye(&mut self, delta: &PigmentColorK) -> bool {
        self.update(self.color.dye(delta))
    }

    /// Apply the given dye. This method returns whether the color changed.
    pub fn apply(&mut self, dye: Dye) -> bool {
        self.dye(&dye.delta())
    }

    /// Bleach by the given amount. This method returns whether the color
    /// changed.
    pub fn bleach(&mut self, amount: Float) -> bool {
        self.update(self.color.bleach(amount))
    }

    /// Bleach by [`BLEACH_STRENGTH`]. This method returns whether the color
    /// changed.
    pub fn bleach_once(&mut self) -> bool {
        self.bleach(BLEACH_STRENGTH)
    }

    fn update(&mut self, color: PigmentColorK) -> bool {
        let changed = self.color != color;
        self.set(color);
        changed
    }

    /// Get the name of the standard palette entry closest to the color.
    pub fn label(&mut self) -> &'static str {
        *self.label.get_or_compute(&self.color, |color| {
            NamedColorTable::standard().classify(color).0.name()
        })
    }

    /// Convert the color to an additive color.
    pub fn to_rgb(&self) -> AdditiveColor {
        self.color.to_rgb()
    }

    /// Convert the color to an additive color on the given base.
    pub fn to_rgb_on(&self, base: &AdditiveColor) -> AdditiveColor {
        self.color.to_rgb_on(base)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Dyeable {
    /// Create a new dyeable. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(color: PigmentColorK) -> Self {
        Self::new(color)
    }

    /// Get the color. <i class=python-only>Python only!</i>
    #[getter(color)]
    pub fn py_color(&self) -> PigmentColorK {
        self.color
    }

    /// Replace the color. <i class=python-only>Python only!</i>
    #[setter(color)]
    pub fn py_set(&mut self, color: PigmentColorK) {
        self.set(color)
    }

    /// Apply the given dye. <i class=python-only>Python only!</i>
    #[pyo3(name = "apply")]
    pub fn py_apply(&mut self, dye: Dye) -> bool {
        self.apply(dye)
    }

    /// Bleach by the given amount. <i class=python-only>Python only!</i>
    #[pyo3(name = "bleach", signature = (amount=BLEACH_STRENGTH))]
    pub fn py_bleach(&mut self, amount: Float) -> bool {
        self.bleach(amount)
    }

    /// Get the name. <i class=python-only>Python only!</i>
    #[pyo3(name = "label")]
    pub fn py_label(&mut self) -> &'static str {
        self.label()
    }

    pub fn __repr__(&self) -> String {
        format!("Dyeable({})", self.color)
    }
}

#[cfg(test)]
mod test {
    use super::{DerivedLabelCache, Dyeable};
    use crate::palette::{NamedColorTable, PaletteEntry};
    use crate::{Dye, PigmentColorK};

    #[test]
    fn test_cache() {
        let table = NamedColorTable::new([
            PaletteEntry::from_pigment("light", PigmentColorK::new(0.0, 0.0, 0.0, 0.0)),
            PaletteEntry::from_pigment("dark", PigmentColorK::new(0.0, 0.0, 0.0, 1.0)),
        ]);
        let mut computed = 0;
        let mut classify = |color: &PigmentColorK| {
            computed += 1;
            table.classify(color).0.name().to_string()
        };

        let x = PigmentColorK::new(0.0, 0.0, 0.0, 0.2);
        let y = PigmentColorK::new(0.0, 0.0, 0.0, 0.8);

        let mut cache = DerivedLabelCache::new();
        assert!(cache.is_dirty());
        assert_eq!(cache.get_or_compute(&x, &mut classify), "light");
        assert_eq!(cache.get_or_compute(&x, &mut classify), "light");
        assert_eq!(cache.key(), Some(&x));
        assert!(!cache.is_dirty());

        // The owner mutates X to Y and invalidates.
        cache.invalidate();
        assert!(cache.is_dirty());
        assert_eq!(cache.get_or_compute(&y, &mut classify), "dark");

        // An owner forgetting to invalidate still does not see a stale label.
        assert_eq!(cache.get_or_compute(&x, &mut classify), "light");
        assert_eq!(computed, 3);
    }

    #[test]
    fn test_dyeable() {
        let mut cloth = Dyeable::new(PigmentColorK::WHITE);
        assert_eq!(cloth.label(), "white");
        assert_eq!(cloth.to_rgb(), PigmentColorK::WHITE.to_rgb());

        // Bleaching white is a no-op.
        assert!(!cloth.bleach_once());
        assert_eq!(cloth.color(), PigmentColorK::WHITE);

        for _ in 0..4 {
            assert!(cloth.apply(Dye::Red));
        }
        assert!(!cloth.apply(Dye::Red));
        assert_eq!(cloth.color(), PigmentColorK::RED);
        assert_eq!(cloth.label(), "red");

        for _ in 0..4 {
            assert!(cloth.apply(Dye::Blue));
        }
        assert_eq!(cloth.label(), "purple");

        assert!(cloth.bleach(1.0));
        assert_eq!(cloth.label(), "white");

        cloth.set(PigmentColorK::BLACK);
        assert_eq!(cloth.label(), "black");
    }

    #[test]
    fn test_conservative_invalidation() {
        let mut cloth = Dyeable::new(PigmentColorK::BLACK);
        assert_eq!(cloth.label(), "black");
        assert!(!cloth.label.is_dirty());

        // Even a mutation that changes nothing invalidates.
        assert!(!cloth.apply(Dye::Black));
        assert!(cloth.label.is_dirty());
        assert_eq!(cloth.label(), "black");
    }
}
