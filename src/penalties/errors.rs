//! Errors for penalty construction and proximal evaluation.
//!
//! This module defines [`PenaltyError`], used by every penalty in the crate,
//! and the [`PenaltyResult`] alias. It implements `Display`/`Error` and, with
//! the `python-bindings` feature, converts to a Python `ValueError`.
//!
//! ## Conventions
//! - Offending values are stored as `f64` regardless of the working
//!   precision of the penalty, so one error type serves `f32` and `f64`.
//! - `reason` strings state the violated constraint.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for penalty operations that may produce [`PenaltyError`].
pub type PenaltyResult<T> = Result<T, PenaltyError>;

/// Domain errors raised by penalty constructors and proximal operators.
#[derive(Debug, Clone, PartialEq)]
pub enum PenaltyError {
    // ---- Construction ----
    /// A penalty parameter (`sigma`, `a`, `gamma`) is outside its domain.
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    // ---- Proximal operators ----
    /// Step size passed to `prox`/`prox_dual` must be finite and > 0.
    InvalidTau { value: f64, reason: &'static str },
}

impl std::error::Error for PenaltyError {}

impl std::fmt::Display for PenaltyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenaltyError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid parameter {name} = {value}: {reason}")
            }
            PenaltyError::InvalidTau { value, reason } => {
                write!(f, "Invalid step size tau = {value}: {reason}")
            }
        }
    }
}

/// Convert a [`PenaltyError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<PenaltyError> for PyErr {
    fn from(err: PenaltyError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that both variants embed their payload in the `Display` output.
    //
    // Given
    // -----
    // - `InvalidParameter` for `a = 1.7` and `InvalidTau` for `tau = -2`.
    //
    // Expect
    // ------
    // - Messages mention the parameter name and offending value.
    fn penalty_error_display_includes_payload() {
        // Arrange
        let shape = PenaltyError::InvalidParameter {
            name: "a",
            value: 1.7,
            reason: "must be strictly greater than 2",
        };
        let tau = PenaltyError::InvalidTau { value: -2.0, reason: "must be positive" };

        // Act
        let shape_msg = shape.to_string();
        let tau_msg = tau.to_string();

        // Assert
        assert!(shape_msg.contains("a = 1.7"), "got: {shape_msg}");
        assert!(shape_msg.contains("greater than 2"), "got: {shape_msg}");
        assert!(tau_msg.contains("-2"), "got: {tau_msg}");
    }
}
