use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting that two coordinate arrays are close enough.
///
/// Given two coordinate arrays of the same length, this macro checks that no
/// pair of corresponding coordinates differs by more than the tolerance. The
/// tolerance defaults to a small multiple of the floating point resolution but
/// may also be given as third argument.
///
/// # Panics
///
/// This macro panics if any pair of coordinates is too far apart. Its message
/// places the coordinates below each other at the beginning of subsequent lines
/// for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($cs1:expr, $cs2:expr $(,)?) => {
        $crate::assert_close_enough!($cs1, $cs2, $crate::tolerance())
    };
    ($cs1:expr, $cs2:expr, $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance) = ($cs1, $cs2, $tolerance);
        assert!(
            $crate::is_close_enough(&cs1, &cs2, tolerance),
            "coordinates differ by more than {:e}:\n{:?}\n{:?}",
            tolerance,
            cs1,
            cs2
        );
    };
}

/// The default tolerance for [`assert_close_enough`].
#[doc(hidden)]
#[inline]
pub fn tolerance() -> Float {
    <Float as FloatExt>::TOLERANCE
}

/// Determine whether the two coordinate arrays are within the given tolerance
/// of each other.
///
/// It is only public because the [`assert_close_enough`] test macro uses it.
#[doc(hidden)]
pub fn is_close_enough<const N: usize>(
    coordinates1: &[Float; N],
    coordinates2: &[Float; N],
    tolerance: Float,
) -> bool {
    coordinates1
        .iter()
        .zip(coordinates2)
        .all(|(c1, c2)| (c1 - c2).abs() <= tolerance)
}

/// Normalize coordinates for hashing.
///
/// Exact equality of pigment colors is plain floating point equality. Hashing
/// must agree with it, which only breaks for `-0.0` versus `0.0` and
/// not-a-number. Since all pigment channels are clamped, neither survives
/// construction, but hashing through this function keeps the two consistent
/// regardless.
pub(crate) fn to_hash_bits<const N: usize>(coordinates: &[Float; N]) -> [Bits; N] {
    coordinates.map(|c| {
        // Both zeros and not-a-number collapse into positive zero.
        let c = if c.is_nan() || c == 0.0 { 0.0 } else { c };
        c.to_bits()
    })
}

#[cfg(test)]
mod test {
    use super::{is_close_enough, to_hash_bits};
    use crate::Float;

    #[test]
    fn test_close_enough() {
        assert!(is_close_enough(&[0.0, 0.5], &[0.000001, 0.5], 1e-5));
        assert!(!is_close_enough(&[0.0, 0.5], &[0.0001, 0.5], 1e-5));
        assert_close_enough!([0.1 as Float, 0.2, 0.3], [0.1, 0.2, 0.3]);
        assert_close_enough!([0.1 as Float], [0.1002], 1e-3);
    }

    #[test]
    fn test_hash_bits() {
        assert_eq!(to_hash_bits(&[-0.0, 0.5]), to_hash_bits(&[0.0, 0.5]));
        assert_eq!(to_hash_bits(&[Float::NAN]), to_hash_bits(&[0.0]));
        assert_ne!(to_hash_bits(&[0.25]), to_hash_bits(&[0.5]));
    }
}
