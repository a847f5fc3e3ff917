//! The pigment cube, i.e., the forward mapping from pigment space to RGB.

use crate::core::{bias, lerp};
use crate::{rgb, AdditiveColor, Float};

/// The pigment cube.
///
/// The pigment cube assigns an additive color to each of the eight
/// combinations of red, yellow, and blue pigment being fully present or
/// absent. The corner without any pigment is white, the paper or fabric the
/// pigments are applied to. Any other mixture is the trilinear interpolation
/// between the corners.
///
/// Corners are indexed by a 3-bit number, with red as most significant and
/// blue as least significant bit:
///
/// | Index | Pigments           | Standard color        |
/// | ----: | ------------------ | --------------------- |
/// | 0     | none               | white                 |
/// | 1     | blue               | `(0.163, 0.373, 0.6)` |
/// | 2     | yellow             | yellow                |
/// | 3     | yellow, blue       | `(0.0, 0.66, 0.2)`    |
/// | 4     | red                | red                   |
/// | 5     | red, blue          | `(0.5, 0.0, 0.5)`     |
/// | 6     | red, yellow        | orange                |
/// | 7     | red, yellow, blue  | `(0.2, 0.094, 0.0)`   |
///
/// Before interpolating, each pigment amount is biased with `3t² − 2t³`,
/// which is the identity at the corners but pulls mixtures towards them. Real
/// paint mixes into more saturated hues than plain trilinear interpolation
/// would suggest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PigmentCube {
    corners: [[Float; 3]; 8],
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const STANDARD_CORNERS: [[Float; 3]; 8] = [
    [1.0,   1.0,   1.0  ],
    [0.163, 0.373, 0.6  ],
    [1.0,   1.0,   0.0  ],
    [0.0,   0.66,  0.2  ],
    [1.0,   0.0,   0.0  ],
    [0.5,   0.0,   0.5  ],
    [1.0,   0.5,   0.0  ],
    [0.2,   0.094, 0.0  ],
];

impl PigmentCube {
    /// The standard pigment cube on a white base.
    pub const STANDARD: PigmentCube = PigmentCube {
        corners: STANDARD_CORNERS,
    };

    /// The near-black anchor that the black channel blends towards.
    pub const BLACK: AdditiveColor = rgb!(20, 20, 20);

    /// Create a new pigment cube with the given corners.
    pub const fn with_corners(corners: [[Float; 3]; 8]) -> Self {
        Self { corners }
    }

    /// Create a copy of this pigment cube with a different white corner.
    ///
    /// The white corner is the color of the medium itself. Substituting a
    /// tinted base, say, an undyed wool, re-bases every mixture onto that
    /// base.
    #[must_use = "method returns a new cube and does not mutate the original value"]
    pub fn with_white(&self, white: &AdditiveColor) -> Self {
        let mut corners = self.corners;
        corners[0] = *white.as_ref();
        Self { corners }
    }

    /// Get this cube's white corner.
    pub fn white(&self) -> AdditiveColor {
        AdditiveColor::new_unchecked(self.corners[0])
    }

    /// Get the corner for the given combination of pigments.
    pub fn corner(&self, red: bool, yellow: bool, blue: bool) -> AdditiveColor {
        let index = (red as usize) << 2 | (yellow as usize) << 1 | blue as usize;
        AdditiveColor::new_unchecked(self.corners[index])
    }

    /// Map red, yellow, and blue pigment amounts to RGB coordinates.
    ///
    /// This method biases the amounts and then interpolates along the blue
    /// axis first, then yellow, and finally red.
    pub(crate) fn blend(&self, pigment: &[Float; 3]) -> [Float; 3] {
        let [r, y, b] = pigment.map(bias);
        let c = &self.corners;

        let c00 = lerp(b, &c[0b000], &c[0b001]);
        let c01 = lerp(b, &c[0b010], &c[0b011]);
        let c10 = lerp(b, &c[0b100], &c[0b101]);
        let c11 = lerp(b, &c[0b110], &c[0b111]);

        let c0 = lerp(y, &c00, &c01);
        let c1 = lerp(y, &c10, &c11);

        lerp(r, &c0, &c1)
    }

    /// Map red, yellow, blue, and black pigment amounts to RGB coordinates.
    ///
    /// The black channel is applied last, as a linear interpolation towards
    /// [`PigmentCube::BLACK`]. Unlike the hues, it is not biased.
    pub(crate) fn blend_with_black(&self, pigment: &[Float; 4]) -> [Float; 3] {
        let [r, y, b, k] = *pigment;
        lerp(k, &self.blend(&[r, y, b]), Self::BLACK.as_ref())
    }
}

impl Default for PigmentCube {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod test {
    use super::PigmentCube;
    use crate::{assert_close_enough, AdditiveColor};

    #[test]
    fn test_corners() {
        let cube = PigmentCube::STANDARD;

        for index in 0..8_usize {
            let red = index & 0b100 != 0;
            let yellow = index & 0b010 != 0;
            let blue = index & 0b001 != 0;
            let pigment = [red, yellow, blue].map(|present| if present { 1.0 } else { 0.0 });

            assert_eq!(&cube.blend(&pigment), cube.corner(red, yellow, blue).as_ref());
        }

        assert_eq!(cube.white(), AdditiveColor::WHITE);
        assert_eq!(cube.blend(&[0.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);
        assert_eq!(cube.blend(&[1.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_midpoints() {
        let cube = PigmentCube::STANDARD;

        // The bias is the identity at 0.5, so the center is the plain average.
        let center = cube.blend(&[0.5, 0.5, 0.5]);
        let average = [
            (1.0 + 0.163 + 1.0 + 0.0 + 1.0 + 0.5 + 1.0 + 0.2) / 8.0,
            (1.0 + 0.373 + 1.0 + 0.66 + 0.0 + 0.0 + 0.5 + 0.094) / 8.0,
            (1.0 + 0.6 + 0.0 + 0.2 + 0.0 + 0.5 + 0.0 + 0.0) / 8.0,
        ];
        assert_close_enough!(center, average, 1e-12);

        // A quarter of red pigment is biased down to 0.15625.
        assert_close_enough!(cube.blend(&[0.25, 0.0, 0.0]), [1.0, 0.84375, 0.84375], 1e-12);
    }

    #[test]
    fn test_black() {
        let cube = PigmentCube::STANDARD;

        assert_eq!(cube.blend_with_black(&[0.0, 0.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);
        assert_eq!(
            &cube.blend_with_black(&[0.3, 0.6, 0.9, 1.0]),
            PigmentCube::BLACK.as_ref()
        );

        // Black is not biased: a quarter of black is a quarter of the way.
        let quarter = cube.blend_with_black(&[0.0, 0.0, 0.0, 0.25]);
        let expected = AdditiveColor::WHITE.interpolate(&PigmentCube::BLACK, 0.25);
        assert_close_enough!(quarter, *expected.as_ref(), 1e-12);
    }

    #[test]
    fn test_white_point() {
        let wool = AdditiveColor::new(0.9, 0.85, 0.7);
        let cube = PigmentCube::STANDARD.with_white(&wool);

        assert_eq!(cube.white(), wool);
        assert_eq!(&cube.blend(&[0.0, 0.0, 0.0]), wool.as_ref());
        // Fully saturated pigments do not see the base at all.
        assert_eq!(cube.blend(&[1.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
        assert_eq!(cube.corner(true, true, true), PigmentCube::STANDARD.corner(true, true, true));
    }
}
