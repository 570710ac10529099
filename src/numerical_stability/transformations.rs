//! Scalar helpers shared by the penalties and the verification layer.
//!
//! Provides generic-float building blocks that would otherwise be
//! re-implemented in every penalty:
//!
//! # Provided items
//! - [`cast`]: convert an `f64` literal into the working float type.
//! - [`to_f64`]: widen a working float into `f64` for error payloads and
//!   solver back-ends.
//! - [`soft_threshold`]: the proximal operator of `t * |x|`.
//! - [`within_tolerance`]: the mixed absolute/relative closeness test used
//!   by the Moreau and derivative checks.
//! - [`sqrt_epsilon`]: `sqrt(T::epsilon())`, the default tolerance scale.
use ndarray::NdFloat;
use num_traits::NumCast;

/// Convert an `f64` constant into `T`.
///
/// For `f32`/`f64` the conversion always succeeds (`f32` rounds to
/// nearest). A failed conversion yields `NaN` so that it propagates into
/// any validation downstream instead of panicking.
#[inline]
pub fn cast<T: NdFloat>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}

/// Widen `value` into `f64`; `NaN` if the conversion is not representable.
#[inline]
pub fn to_f64<T: NdFloat>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Soft-thresholding: `sign(x) * max(|x| - threshold, 0)`.
///
/// This is the proximal operator of `threshold * |x|`. `threshold` is
/// assumed non-negative.
///
/// # Examples
/// ```rust
/// # use rust_proximal::numerical_stability::soft_threshold;
/// assert_eq!(soft_threshold(3.0_f64, 1.0), 2.0);
/// assert_eq!(soft_threshold(-0.5_f64, 1.0), 0.0);
/// ```
#[inline]
pub fn soft_threshold<T: NdFloat>(x: T, threshold: T) -> T {
    let shrunk = (x.abs() - threshold).max(T::zero());
    if shrunk == T::zero() { T::zero() } else { x.signum() * shrunk }
}

/// `|expected - found| <= atol + rtol * |found|`.
///
/// Same convention as NumPy's `isclose`: the relative part scales with the
/// second argument. Any `NaN` operand makes the comparison fail.
#[inline]
pub fn within_tolerance<T: NdFloat>(expected: T, found: T, rtol: T, atol: T) -> bool {
    (expected - found).abs() <= atol + rtol * found.abs()
}

/// `sqrt(T::epsilon())`: about `3.5e-4` for `f32` and `1.5e-8` for `f64`.
#[inline]
pub fn sqrt_epsilon<T: NdFloat>() -> T {
    T::epsilon().sqrt()
}
