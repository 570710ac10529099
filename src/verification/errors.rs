//! Errors raised by the verification utilities.
//!
//! [`VerifyError`] covers three families:
//! - configuration errors (`InvalidTolerance`, `InvalidOracleOptions`);
//! - check failures (`MoreauViolated`, `ProxNotOptimal`,
//!   `DerivativeMismatch`);
//! - propagated errors from the penalties and the `argmin` back-end.
//!
//! `argmin::core::Error` values never leak out of this module tree: they are
//! normalised through `From<argmin::core::Error>`, which first recovers our
//! own [`VerifyError`] if a cost function raised one.
use argmin::core::{ArgminError, Error};

use crate::penalties::errors::PenaltyError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for verification routines.
pub type VerifyResult<T> = Result<T, VerifyError>;

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyError {
    // ---- Propagated ----
    /// Error raised by a penalty (invalid `tau`, invalid parameters).
    Penalty(PenaltyError),

    // ---- Options ----
    /// Tolerances must be finite and non-negative.
    InvalidTolerance { name: &'static str, value: f64, reason: &'static str },

    /// Oracle options are out of range.
    InvalidOracleOptions { name: &'static str, value: f64, reason: &'static str },

    // ---- Checks ----
    /// `x_i != prox(x, τ)_i + τ prox_dual(x/τ, 1/τ)_i` within tolerance.
    MoreauViolated { index: usize, expected: f64, found: f64, rtol: f64, atol: f64 },

    /// The closed-form prox is beaten by the brute-force minimiser.
    ProxNotOptimal { index: usize, prox_value: f64, prox_cost: f64, oracle_value: f64, oracle_cost: f64 },

    /// Analytic derivative disagrees with central finite differences.
    DerivativeMismatch { index: usize, analytic: f64, numeric: f64 },

    // ---- Solver ----
    /// The 1-D prox objective evaluated to NaN or ±inf.
    NonFiniteObjective { point: f64, value: f64 },

    /// Wrapper for `argmin` errors that are not ours.
    BackendError { text: String },
}

impl std::error::Error for VerifyError {}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyError::Penalty(err) => write!(f, "Penalty error: {err}"),
            VerifyError::InvalidTolerance { name, value, reason } => {
                write!(f, "Invalid tolerance {name} = {value}: {reason}")
            }
            VerifyError::InvalidOracleOptions { name, value, reason } => {
                write!(f, "Invalid oracle option {name} = {value}: {reason}")
            }
            VerifyError::MoreauViolated { index, expected, found, rtol, atol } => {
                write!(
                    f,
                    "Moreau identity violated at index {index}: expected {expected}, \
                     reconstructed {found} (rtol = {rtol}, atol = {atol})"
                )
            }
            VerifyError::ProxNotOptimal { index, prox_value, prox_cost, oracle_value, oracle_cost } => {
                write!(
                    f,
                    "Proximal output at index {index} is not a global minimiser: \
                     prox = {prox_value} (cost {prox_cost}), oracle = {oracle_value} (cost {oracle_cost})"
                )
            }
            VerifyError::DerivativeMismatch { index, analytic, numeric } => {
                write!(
                    f,
                    "Derivative mismatch at index {index}: analytic {analytic}, finite difference {numeric}"
                )
            }
            VerifyError::NonFiniteObjective { point, value } => {
                write!(f, "Non-finite prox objective {value} at z = {point}")
            }
            VerifyError::BackendError { text } => write!(f, "Backend error: {text}"),
        }
    }
}

impl From<PenaltyError> for VerifyError {
    fn from(err: PenaltyError) -> Self {
        VerifyError::Penalty(err)
    }
}

impl From<Error> for VerifyError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<VerifyError>() {
            Ok(ours) => return ours,
            Err(err) => err,
        };
        match original_err.downcast::<ArgminError>() {
            Ok(argmin_err) => VerifyError::BackendError { text: argmin_err.to_string() },
            Err(err) => VerifyError::BackendError { text: err.to_string() },
        }
    }
}

/// Convert a [`VerifyError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<VerifyError> for PyErr {
    fn from(err: VerifyError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
