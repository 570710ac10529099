//! numerical_stability — small generic-float helpers.
//!
//! Purpose
//! -------
//! Collect the scalar primitives shared by the penalty implementations and
//! the verification layer, so that every module agrees on how constants are
//! cast into the working precision, how soft-thresholding is computed, and
//! what "close enough" means for a given dtype.
//!
//! Key behaviors
//! -------------
//! - `cast` / `to_f64` move values between `f64` and the working float `T`
//!   (`f32` or `f64`) without panicking.
//! - `soft_threshold` implements the L1 proximal step used by the
//!   `gamma = 0` limit of the Log penalty.
//! - `within_tolerance` is the mixed `atol + rtol * |found|` closeness test.
//! - `sqrt_epsilon` gives the default tolerance scale for a dtype.
//!
//! Conventions
//! -----------
//! - All helpers are pure, allocation-free and `#[inline]`.
//! - Generic code is bounded by `ndarray::NdFloat`.

pub mod transformations;

pub use self::transformations::{cast, soft_threshold, sqrt_epsilon, to_f64, within_tolerance};
