//! Scalar helpers shared by the entity types.

use num_traits::Float;

/// `1 / sqrt(x)`. Zero gives infinity and negative input gives NaN.
#[inline]
pub fn inverse_sqrt<T: Float>(x: T) -> T {
    x.sqrt().recip()
}

/// Approximate `1 / sqrt(x)` for positive normal `x`.
///
/// The initial estimate comes from the bit pattern of `x` and is refined by two
/// Newton steps, giving a relative error below 1e-5.
#[inline]
pub fn fast_inverse_sqrt(x: f32) -> f32 {
    let half = x * 0.5;
    let mut y = f32::from_bits(0x5f37_5a86 - (x.to_bits() >> 1));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

/// Approximate `sqrt(x)` for positive normal `x`, zero maps to zero.
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    if x > 0.0 {
        x * fast_inverse_sqrt(x)
    } else {
        0.0
    }
}

/// Cosine and sine of half the angle, the scalar parts of a rotation operator.
#[inline]
pub fn half_angle<T: Float>(angle: T) -> (T, T) {
    let half = angle / (T::one() + T::one());
    let (sin, cos) = half.sin_cos();
    (cos, sin)
}

/// Clamp into `[0, 1]`.
#[inline]
pub fn saturate<T: Float>(x: T) -> T {
    x.max(T::zero()).min(T::one())
}

/// Clamp into `[-1, 1]` before `asin` or `acos`.
#[inline]
pub fn clamp_unit<T: Float>(x: T) -> T {
    x.max(-T::one()).min(T::one())
}
