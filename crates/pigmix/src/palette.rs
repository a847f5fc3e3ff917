//! Named colors and nearest-color classification.
//!
//! A [`NamedColorTable`] is an ordered list of [`PaletteEntry`] values, each
//! pairing a stable name with an additive color and its pigment color. The
//! pigment color is computed exactly once, when the entry is created, and
//! classification compares pigment colors only. The table returned by
//! [`NamedColorTable::standard`] is process-wide and built on first use.
//!
//! ```
//! # use pigmix::palette::NamedColorTable;
//! # use pigmix::PigmentColorK;
//! let table = NamedColorTable::standard();
//! let (entry, distance) = table.classify(&PigmentColorK::new(0.9, 0.05, 0.0, 0.0));
//! assert_eq!(entry.name(), "red");
//! assert!(distance < 0.2);
//! ```

use std::sync::OnceLock;

use crate::core::{distance_squared, find_closest};
use crate::error::OutOfBoundsError;
use crate::opt::SolverOptions;
use crate::{rgb, AdditiveColor, Float, PigmentColorK};

/// A named color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteEntry {
    name: &'static str,
    rgb: AdditiveColor,
    pigment: PigmentColorK,
}

impl PaletteEntry {
    /// Create a new entry for a color defined in pigment terms.
    ///
    /// The additive color is the forward mapping of the pigment color.
    pub fn from_pigment(name: &'static str, pigment: PigmentColorK) -> Self {
        Self {
            name,
            rgb: pigment.to_rgb(),
            pigment,
        }
    }

    /// Create a new entry for a color defined in additive terms.
    ///
    /// This associated function runs the inverse solver once. For targets
    /// outside the pigment cube's gamut, the pigment color is the best
    /// approximation, but the entry's additive color is still the given one.
    pub fn from_rgb(name: &'static str, rgb: AdditiveColor) -> Self {
        Self {
            name,
            rgb,
            pigment: PigmentColorK::solve(&rgb, None, &SolverOptions::FOUR_CHANNEL),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the additive color.
    pub fn rgb(&self) -> &AdditiveColor {
        &self.rgb
    }

    /// Get the pigment color.
    pub fn pigment(&self) -> &PigmentColorK {
        &self.pigment
    }
}

// --------------------------------------------------------------------------------------------------------------------

enum Swatch {
    Pigment(PigmentColorK),
    Rgb(AdditiveColor),
}

#[rustfmt::skip]
const STANDARD_SWATCHES: [(&str, Swatch); 17] = [
    ("white",      Swatch::Pigment(PigmentColorK::WHITE)),
    ("light_gray", Swatch::Rgb(rgb!(0xc0, 0xc0, 0xc0))),
    ("gray",       Swatch::Rgb(rgb!(0x80, 0x80, 0x80))),
    ("dark_gray",  Swatch::Rgb(rgb!(0x40, 0x40, 0x40))),
    ("black",      Swatch::Pigment(PigmentColorK::BLACK)),
    ("red",        Swatch::Pigment(PigmentColorK::RED)),
    ("orange",     Swatch::Rgb(rgb!(0xff, 0x80, 0x00))),
    ("yellow",     Swatch::Pigment(PigmentColorK::YELLOW)),
    ("lime",       Swatch::Rgb(rgb!(0x9a, 0xcd, 0x32))),
    ("green",      Swatch::Rgb(rgb!(0x00, 0xa8, 0x33))),
    ("cyan",       Swatch::Rgb(rgb!(0x3d, 0x9c, 0xa8))),
    ("light_blue", Swatch::Rgb(rgb!(0x87, 0xce, 0xeb))),
    ("blue",       Swatch::Pigment(PigmentColorK::BLUE)),
    ("purple",     Swatch::Rgb(rgb!(0x80, 0x00, 0x80))),
    ("magenta",    Swatch::Rgb(rgb!(0xc0, 0x40, 0x80))),
    ("pink",       Swatch::Rgb(rgb!(0xff, 0xb6, 0xc1))),
    ("brown",      Swatch::Rgb(rgb!(0x8b, 0x45, 0x13))),
];

/// An ordered table of named colors.
///
/// Order matters for classification only: if two entries are equally close to
/// a pigment color, the earlier entry wins. That makes classification
/// deterministic, though which of two equidistant names wins carries no
/// further meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedColorTable {
    entries: Vec<PaletteEntry>,
}

impl NamedColorTable {
    /// Create a new table with the given entries.
    pub fn new(entries: impl IntoIterator<Item = PaletteEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Get the standard table.
    ///
    /// The standard table has 17 entries, from `white` through grays, black,
    /// and hues to `brown`. Entries defined in pigment terms, i.e., white,
    /// black, red, yellow, and blue, are exact. All others are solved for on
    /// first access, which is also when this function logs the table's
    /// construction.
    pub fn standard() -> &'static NamedColorTable {
        static STANDARD: OnceLock<NamedColorTable> = OnceLock::new();

        STANDARD.get_or_init(|| {
            let table = Self::new(STANDARD_SWATCHES.iter().map(|(name, swatch)| match swatch {
                Swatch::Pigment(pigment) => PaletteEntry::from_pigment(*name, *pigment),
                Swatch::Rgb(rgb) => PaletteEntry::from_rgb(*name, *rgb),
            }));
            log::debug!("built standard palette with {} entries", table.len());
            table
        })
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry with the given index.
    ///
    /// The error reports the range of valid indices. For an empty table, that
    /// range is the empty `1..=0`, since no index is valid.
    pub fn entry(&self, index: usize) -> Result<&PaletteEntry, OutOfBoundsError> {
        self.entries.get(index).ok_or_else(|| match self.entries.len() {
            0 => OutOfBoundsError::new(index, 1..=0),
            len => OutOfBoundsError::new(index, 0..=len - 1),
        })
    }

    /// Get the entry with the given name.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Find the first entry with exactly the given additive color.
    pub fn find_by_rgb(&self, rgb: &AdditiveColor) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| &entry.rgb == rgb)
    }

    /// Get an iterator over the entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Find the entry closest to the given pigment color.
    ///
    /// This method computes the Euclidian distance across all four pigment
    /// channels and returns the closest entry together with its distance. On
    /// ties, the first entry in table order wins.
    ///
    /// # Panics
    ///
    /// If this table is empty.
    pub fn classify(&self, color: &PigmentColorK) -> (&PaletteEntry, Float) {
        let closest = find_closest(
            color.as_ref(),
            self.entries.iter().map(|entry| entry.pigment.as_ref()),
            distance_squared,
        );

        let Some((index, distance)) = closest else {
            panic!("unable to classify {} with empty color table", color);
        };
        (&self.entries[index], distance.sqrt())
    }
}

impl<'a> IntoIterator for &'a NamedColorTable {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod test {
    use super::{NamedColorTable, PaletteEntry};
    use crate::error::OutOfBoundsError;
    use crate::opt::SolverOptions;
    use crate::{rgb, PigmentColorK, PigmentCube};

    #[test]
    fn test_standard() {
        let table = NamedColorTable::standard();
        assert_eq!(table.len(), 17);
        assert_eq!(table.entry(0).map(PaletteEntry::name), Ok("white"));
        assert_eq!(table.entry(16).map(PaletteEntry::name), Ok("brown"));
        assert_eq!(
            table.entry(17),
            Err(OutOfBoundsError::new(17_usize, 0..=16))
        );

        let black = table.get("black");
        assert!(black.is_some());
        if let Some(black) = black {
            assert_eq!(black.pigment(), &PigmentColorK::BLACK);
            assert_eq!(black.rgb(), &PigmentCube::BLACK);
        }
        assert!(table.get("mauve").is_none());

        // Every entry's pigment color is in unit range.
        for entry in table {
            assert!(entry.pigment().as_ref().iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_find_by_rgb() {
        let table = NamedColorTable::standard();
        let orange = table.find_by_rgb(&rgb!(0xff, 0x80, 0x00));
        assert_eq!(orange.map(PaletteEntry::name), Some("orange"));
        assert!(table.find_by_rgb(&rgb!(0xff, 0x80, 0x01)).is_none());

        // Well within gamut, so the solver got close.
        if let Some(orange) = orange {
            let margin = SolverOptions::FOUR_CHANNEL.error_margin();
            assert!(orange.pigment().to_rgb().distance_squared(orange.rgb()) <= margin);
        }
    }

    #[test]
    fn test_classify() {
        let table = NamedColorTable::standard();

        for (pigment, name) in [
            (PigmentColorK::new(0.0, 0.0, 0.0, 1.0), "black"),
            (PigmentColorK::new(0.0, 0.0, 0.0, 0.0), "white"),
            (PigmentColorK::new(1.0, 0.0, 0.0, 0.0), "red"),
            (PigmentColorK::new(0.9, 0.05, 0.0, 0.0), "red"),
            (PigmentColorK::new(0.8, 0.8, 0.0, 0.0), "orange"),
            (PigmentColorK::new(0.05, 0.05, 0.05, 0.95), "black"),
            (PigmentColorK::new(0.0, 0.0, 0.9, 0.1), "blue"),
            (PigmentColorK::new(0.2, 0.25, 0.45, 0.25), "gray"),
            (PigmentColorK::new(0.9, 0.0, 0.9, 0.0), "purple"),
        ] {
            let (entry, _) = table.classify(&pigment);
            assert_eq!(entry.name(), name, "classifying {}", pigment);
        }

        let (entry, distance) = table.classify(&PigmentColorK::BLACK);
        assert_eq!(entry.name(), "black");
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_tie_break() {
        let table = NamedColorTable::new([
            PaletteEntry::from_pigment("first", PigmentColorK::new(0.0, 0.0, 0.0, 0.25)),
            PaletteEntry::from_pigment("second", PigmentColorK::new(0.0, 0.0, 0.0, 0.75)),
            PaletteEntry::from_pigment("third", PigmentColorK::new(0.0, 0.0, 0.0, 0.25)),
        ]);

        let middle = PigmentColorK::new(0.0, 0.0, 0.0, 0.5);
        for _ in 0..10 {
            let (entry, distance) = table.classify(&middle);
            assert_eq!(entry.name(), "first");
            assert_eq!(distance, 0.25);
        }

        let (entry, _) = table.classify(&PigmentColorK::new(0.0, 0.0, 0.0, 0.3));
        assert_eq!(entry.name(), "first");
    }

    #[test]
    #[should_panic(expected = "empty color table")]
    fn test_empty() {
        let table = NamedColorTable::new([]);
        assert!(table.is_empty());
        table.classify(&PigmentColorK::WHITE);
    }

    #[test]
    fn test_entry_on_empty_table() {
        let table = NamedColorTable::new([]);
        let error = table.entry(0);
        assert_eq!(error, Err(OutOfBoundsError::new(0_usize, 1..=0)));

        if let Err(error) = error {
            assert!(error.expected.is_empty());
            assert!(!error.expected.contains(&0));
        }
    }
}
