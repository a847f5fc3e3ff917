use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the tolerance for
/// approximate comparisons, which depends on the floating point
/// representation.
pub(crate) trait FloatExt {
    /// The largest per-coordinate difference still considered equal by
    /// [`assert_close_enough`](crate::assert_close_enough).
    const TOLERANCE: Self;
}

impl FloatExt for f64 {
    const TOLERANCE: f64 = 1e-9;
}

impl FloatExt for f32 {
    const TOLERANCE: f32 = 1e-5;
}

// --------------------------------------------------------------------------------------------------------------------

/// Bias an interpolation factor towards the ends of the unit range.
///
/// This is the smoothstep polynomial `3t² − 2t³`. It is the identity at 0 and
/// 1 but flattens out near both, which pulls mixed pigments towards the
/// corners and edges of the pigment cube and hence towards saturated hues.
#[inline]
pub(crate) fn bias(t: Float) -> Float {
    t * t * (3.0 - 2.0 * t)
}

/// Clamp the value to unit range `0..=1`.
///
/// Not-a-number becomes zero.
#[inline]
pub(crate) fn clamp_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamp every coordinate to unit range `0..=1`.
#[inline]
pub(crate) fn clamp_all<const N: usize>(coordinates: &[Float; N]) -> [Float; N] {
    coordinates.map(clamp_unit)
}

/// Linearly interpolate between the two coordinate arrays.
///
/// The fraction is not clamped, so values outside `0..=1` extrapolate. The
/// result is exactly the first coordinates for fraction 0 and exactly the
/// second coordinates for fraction 1.
#[must_use = "function returns new coordinates and does not mutate original values"]
#[inline]
pub(crate) fn lerp<const N: usize>(
    fraction: Float,
    coordinates1: &[Float; N],
    coordinates2: &[Float; N],
) -> [Float; N] {
    let mut result = *coordinates1;
    for (c, c2) in result.iter_mut().zip(coordinates2) {
        *c = (1.0 - fraction) * *c + fraction * c2;
    }
    result
}

/// Compute the squared Euclidian distance between the two coordinate arrays.
#[inline]
pub(crate) fn distance_squared<const N: usize>(
    coordinates1: &[Float; N],
    coordinates2: &[Float; N],
) -> Float {
    coordinates1
        .iter()
        .zip(coordinates2)
        .map(|(c1, c2)| (c1 - c2) * (c1 - c2))
        .sum()
}

/// Find the candidate closest to the origin.
///
/// This function compares the origin to every candidate, computing the
/// distance metric with the given function, and returns the index and distance
/// of the closest candidate, or `None` if there are no candidates. On ties, the
/// first candidate wins.
pub(crate) fn find_closest<'c, C, F, const N: usize>(
    origin: &[Float; N],
    candidates: C,
    mut compute_distance: F,
) -> Option<(usize, Float)>
where
    C: IntoIterator<Item = &'c [Float; N]>,
    F: FnMut(&[Float; N], &[Float; N]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index.map(|index| (index, min_distance))
}
