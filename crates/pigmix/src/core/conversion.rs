use super::clamp_unit;
use crate::Float;

/// Convert the given 8-bit integer coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_8bit<const N: usize>(bytes: [u8; N]) -> [Float; N] {
    bytes.map(|b| b as Float / 255.0)
}

/// Convert the floating point coordinates to 8-bit integer coordinates.
///
/// This function clamps coordinates to unit range before scaling them, so the
/// result is well-defined even for out-of-range coordinates.
#[inline]
pub(crate) fn to_8bit<const N: usize>(coordinates: &[Float; N]) -> [u8; N] {
    coordinates.map(|c| (clamp_unit(c) * 255.0).round() as u8)
}

/// Pack the bytes into a `u32`, with the first byte most significant.
#[inline]
pub(crate) fn pack<const N: usize>(bytes: [u8; N]) -> u32 {
    bytes
        .iter()
        .fold(0_u32, |packed, &byte| (packed << 8) | byte as u32)
}

/// Unpack the `u32` into bytes, with the first byte most significant.
///
/// For `N < 4`, the most significant bytes are ignored.
#[inline]
pub(crate) fn unpack<const N: usize>(packed: u32) -> [u8; N] {
    let mut bytes = [0_u8; N];
    for (index, byte) in bytes.iter_mut().enumerate() {
        *byte = (packed >> (8 * (N - 1 - index))) as u8;
    }
    bytes
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to hue, saturation, and value.
///
/// The hue is in degrees `0..360`, saturation and value in unit range. An
/// achromatic color has hue zero, black has saturation zero.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let hue = if chroma == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / chroma + 2.0)
    } else {
        60.0 * ((r - g) / chroma + 4.0)
    };

    // Rounding may push a hue just below 360º onto 360º.
    let hue = if hue >= 360.0 { hue - 360.0 } else { hue };
    let saturation = if max == 0.0 { 0.0 } else { chroma / max };

    [hue, saturation, max]
}

/// Convert hue, saturation, and value to RGB coordinates.
///
/// The hue may have any magnitude; it is reduced modulo 360º.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, val] = *value;
    let chroma = val * saturation;
    let hue_prime = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (hue_prime.rem_euclid(2.0) - 1.0).abs());
    let m = val - chroma;

    let [r, g, b] = match hue_prime as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod test {
    use super::{from_8bit, hsv_to_rgb, pack, rgb_to_hsv, to_8bit, unpack};
    use crate::{assert_close_enough, Float};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_8bit() {
        assert_eq!(from_8bit([0_u8, 255]), [0.0, 1.0]);
        assert_eq!(to_8bit(&[0.0, 0.5, 1.0]), [0_u8, 128, 255]);
        assert_eq!(to_8bit(&[-0.5, 1.5]), [0_u8, 255]);

        for byte in 0..=255_u8 {
            assert_eq!(to_8bit(&from_8bit([byte])), [byte]);
        }
    }

    #[test]
    fn test_packing() {
        assert_eq!(pack([0x12_u8, 0x34, 0x56]), 0x123456);
        assert_eq!(pack([0x12_u8, 0x34, 0x56, 0x78]), 0x12345678);
        assert_eq!(unpack::<3>(0x123456), [0x12, 0x34, 0x56]);
        assert_eq!(unpack::<4>(0x12345678), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(unpack::<3>(0xff123456), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_hsv() {
        assert_eq!(rgb_to_hsv(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsv(&[1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
        assert_eq!(rgb_to_hsv(&[1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[0.0, 1.0, 0.0]), [120.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[0.0, 0.0, 1.0]), [240.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[1.0, 0.0, 1.0]), [300.0, 1.0, 1.0]);

        assert_eq!(hsv_to_rgb(&[0.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(&[120.0, 1.0, 1.0]), [0.0, 1.0, 0.0]);
        assert_eq!(hsv_to_rgb(&[240.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(hsv_to_rgb(&[600.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(hsv_to_rgb(&[42.0, 0.0, 0.25]), [0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_hsv_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..10_000 {
            let rgb: [Float; 3] = [rng.random(), rng.random(), rng.random()];
            let hsv = rgb_to_hsv(&rgb);
            assert!((0.0..360.0).contains(&hsv[0]));
            assert!((0.0..=1.0).contains(&hsv[1]));
            assert!((0.0..=1.0).contains(&hsv[2]));
            assert_close_enough!(hsv_to_rgb(&hsv), rgb, 1e-5);
        }
    }
}
