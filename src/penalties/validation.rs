//! Validation helpers for penalty parameters and proximal step sizes.
//!
//! - **Scale**: [`verify_sigma`]: finite and strictly positive.
//! - **SCAD shape**: [`verify_scad_shape`]: finite and strictly above 2.
//! - **Log shape**: [`verify_log_shape`]: finite and non-negative.
//! - **Step size**: [`verify_tau`]: finite and strictly positive.
//!
//! Each helper returns the validated value so constructors can bind it in
//! one expression. Comparisons are written so that `NaN` always fails.
use crate::{
    numerical_stability::{cast, to_f64},
    penalties::errors::{PenaltyError, PenaltyResult},
};
use ndarray::NdFloat;

/// Validate the penalty scale `sigma`.
///
/// # Errors
/// Returns [`PenaltyError::InvalidParameter`] if `sigma` is non-finite or ≤ 0.
pub fn verify_sigma<T: NdFloat>(sigma: T) -> PenaltyResult<T> {
    if !sigma.is_finite() {
        return Err(PenaltyError::InvalidParameter {
            name: "sigma",
            value: to_f64(sigma),
            reason: "Scale must be finite.",
        });
    }
    if sigma <= T::zero() {
        return Err(PenaltyError::InvalidParameter {
            name: "sigma",
            value: to_f64(sigma),
            reason: "Scale must be strictly positive.",
        });
    }
    Ok(sigma)
}

/// Validate the SCAD shape parameter `a`.
///
/// # Errors
/// Returns [`PenaltyError::InvalidParameter`] if `a` is non-finite or ≤ 2.
pub fn verify_scad_shape<T: NdFloat>(a: T) -> PenaltyResult<T> {
    if !a.is_finite() {
        return Err(PenaltyError::InvalidParameter {
            name: "a",
            value: to_f64(a),
            reason: "Shape must be finite.",
        });
    }
    if a <= cast(2.0) {
        return Err(PenaltyError::InvalidParameter {
            name: "a",
            value: to_f64(a),
            reason: "Constant a must be strictly greater than 2.",
        });
    }
    Ok(a)
}

/// Validate the Log shape parameter `gamma`.
///
/// `gamma = 0` is accepted; the Log penalty treats it as its L1 limit.
///
/// # Errors
/// Returns [`PenaltyError::InvalidParameter`] if `gamma` is non-finite or < 0.
pub fn verify_log_shape<T: NdFloat>(gamma: T) -> PenaltyResult<T> {
    if !gamma.is_finite() {
        return Err(PenaltyError::InvalidParameter {
            name: "gamma",
            value: to_f64(gamma),
            reason: "Shape must be finite.",
        });
    }
    if gamma < T::zero() {
        return Err(PenaltyError::InvalidParameter {
            name: "gamma",
            value: to_f64(gamma),
            reason: "Shape must be non-negative.",
        });
    }
    Ok(gamma)
}

/// Validate a proximal step size.
///
/// # Errors
/// Returns [`PenaltyError::InvalidTau`] if `tau` is non-finite or ≤ 0.
pub fn verify_tau<T: NdFloat>(tau: T) -> PenaltyResult<T> {
    if !tau.is_finite() {
        return Err(PenaltyError::InvalidTau {
            value: to_f64(tau),
            reason: "Step size must be finite.",
        });
    }
    if tau <= T::zero() {
        return Err(PenaltyError::InvalidTau {
            value: to_f64(tau),
            reason: "Step size must be strictly positive.",
        });
    }
    Ok(tau)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accept/reject boundaries of every validator, including NaN/inf.
    //
    // They intentionally DO NOT cover:
    // - How constructors combine validators (tested with each penalty).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the SCAD shape boundary: `a <= 2` is rejected, `a > 2` accepted.
    //
    // Given
    // -----
    // - a ∈ {1.7, 2.0} (invalid) and a ∈ {2.0 + 1e-12, 3.7} (valid).
    //
    // Expect
    // ------
    // - Invalid inputs map to `InvalidParameter { name: "a", .. }`.
    fn verify_scad_shape_enforces_strict_lower_bound() {
        for bad in [1.7_f64, 2.0] {
            match verify_scad_shape(bad) {
                Err(PenaltyError::InvalidParameter { name, value, .. }) => {
                    assert_eq!(name, "a");
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidParameter for a = {bad}, got {other:?}"),
            }
        }
        assert_eq!(verify_scad_shape(2.0_f64 + 1e-12).unwrap(), 2.0 + 1e-12);
        assert_eq!(verify_scad_shape(3.7_f32).unwrap(), 3.7_f32);
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite parameters are rejected by every validator.
    //
    // Given
    // -----
    // - NaN and +inf inputs.
    //
    // Expect
    // ------
    // - All four validators return errors.
    fn validators_reject_non_finite_values() {
        for bad in [f64::NAN, f64::INFINITY] {
            assert!(verify_sigma(bad).is_err());
            assert!(verify_scad_shape(bad).is_err());
            assert!(verify_log_shape(bad).is_err());
            assert!(verify_tau(bad).is_err());
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the sign constraints on sigma, gamma and tau.
    //
    // Given
    // -----
    // - sigma = 0, gamma = -0.1, tau = 0 (invalid); gamma = 0 (valid).
    //
    // Expect
    // ------
    // - Zero sigma/tau and negative gamma are rejected; zero gamma passes.
    fn validators_enforce_sign_constraints() {
        assert!(matches!(
            verify_sigma(0.0_f64),
            Err(PenaltyError::InvalidParameter { name: "sigma", .. })
        ));
        assert!(matches!(
            verify_log_shape(-0.1_f64),
            Err(PenaltyError::InvalidParameter { name: "gamma", .. })
        ));
        assert!(matches!(verify_tau(0.0_f32), Err(PenaltyError::InvalidTau { .. })));
        assert_eq!(verify_log_shape(0.0_f64).unwrap(), 0.0);
        assert_eq!(verify_tau(2.0_f64).unwrap(), 2.0);
    }
}
