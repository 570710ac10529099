//! Configuration for the verification checks.
//!
//! - [`Tolerance`]: mixed relative/absolute tolerance for element-wise
//!   comparisons, with a dtype-aware default.
//! - [`MoreauOptions`]: tolerance plus a `verbose` flag for the Moreau check.
//! - [`OracleOptions`]: grid resolution and Brent settings for the prox
//!   optimality oracle.
//! - [`DerivativeOptions`]: tolerance for the finite-difference check.
//!
//! All constructors validate their inputs and return
//! [`VerifyError`](crate::verification::errors::VerifyError) on bad values.
use ndarray::NdFloat;

use crate::{
    numerical_stability::{sqrt_epsilon, to_f64},
    verification::errors::{VerifyError, VerifyResult},
};

/// Element-wise closeness: `|expected - found| <= atol + rtol * |found|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    pub rtol: T,
    pub atol: T,
}

impl<T: NdFloat> Tolerance<T> {
    /// Build a tolerance from explicit values.
    ///
    /// # Errors
    /// Returns [`VerifyError::InvalidTolerance`] if either value is
    /// non-finite or negative.
    pub fn new(rtol: T, atol: T) -> VerifyResult<Self> {
        let rtol = verify_tolerance("rtol", rtol)?;
        let atol = verify_tolerance("atol", atol)?;
        Ok(Self { rtol, atol })
    }

    /// `rtol = atol = sqrt(T::epsilon())`.
    ///
    /// Roughly `3.5e-4` for `f32` and `1.5e-8` for `f64`, which leaves room
    /// for the handful of roundings in `prox` and `prox_dual`.
    pub fn for_dtype() -> Self {
        let scale = sqrt_epsilon::<T>();
        Self { rtol: scale, atol: scale }
    }
}

impl<T: NdFloat> Default for Tolerance<T> {
    fn default() -> Self {
        Self::for_dtype()
    }
}

/// Options for [`verify_moreau`](crate::verification::moreau::verify_moreau).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoreauOptions<T> {
    pub tolerance: Tolerance<T>,
    /// Print a one-line summary to stderr (only with the `obs_slog` feature).
    pub verbose: bool,
}

impl<T: NdFloat> MoreauOptions<T> {
    pub fn new(tolerance: Tolerance<T>, verbose: bool) -> Self {
        Self { tolerance, verbose }
    }
}

impl<T: NdFloat> Default for MoreauOptions<T> {
    fn default() -> Self {
        Self { tolerance: Tolerance::for_dtype(), verbose: false }
    }
}

/// Options for the brute-force prox oracle.
///
/// - `grid_points`: number of evenly spaced points scanned on
///   `[min(0, x), max(0, x)]` before refinement (≥ 2).
/// - `max_iter`: iteration cap for each Brent refinement (≥ 1).
/// - `tol`: relative slack allowed when comparing objective values
///   (finite, ≥ 0).
/// - `verbose`: attach a slog observer to each Brent run (`obs_slog` only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OracleOptions {
    pub grid_points: usize,
    pub max_iter: u64,
    pub tol: f64,
    pub verbose: bool,
}

impl OracleOptions {
    /// # Errors
    /// Returns [`VerifyError::InvalidOracleOptions`] if `grid_points < 2`,
    /// `max_iter == 0`, or `tol` is non-finite or negative.
    pub fn new(grid_points: usize, max_iter: u64, tol: f64, verbose: bool) -> VerifyResult<Self> {
        if grid_points < 2 {
            return Err(VerifyError::InvalidOracleOptions {
                name: "grid_points",
                value: grid_points as f64,
                reason: "Grid needs at least two points.",
            });
        }
        if max_iter == 0 {
            return Err(VerifyError::InvalidOracleOptions {
                name: "max_iter",
                value: 0.0,
                reason: "Maximum iterations must be positive.",
            });
        }
        if !tol.is_finite() || tol < 0.0 {
            return Err(VerifyError::InvalidOracleOptions {
                name: "tol",
                value: tol,
                reason: "Tolerance must be finite and non-negative.",
            });
        }
        Ok(Self { grid_points, max_iter, tol, verbose })
    }
}

impl Default for OracleOptions {
    fn default() -> Self {
        Self { grid_points: 200, max_iter: 100, tol: 1e-8, verbose: false }
    }
}

/// Options for [`check_derivative`](crate::verification::derivative::check_derivative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeOptions {
    pub tolerance: Tolerance<f64>,
}

impl Default for DerivativeOptions {
    fn default() -> Self {
        Self { tolerance: Tolerance { rtol: 1e-5, atol: 1e-5 } }
    }
}

// ---- Helper Methods ----

fn verify_tolerance<T: NdFloat>(name: &'static str, value: T) -> VerifyResult<T> {
    if !value.is_finite() || value < T::zero() {
        return Err(VerifyError::InvalidTolerance {
            name,
            value: to_f64(value),
            reason: "Tolerance must be finite and non-negative.",
        });
    }
    Ok(value)
}
