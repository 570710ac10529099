//! Finite-difference check of analytic penalty derivatives.
//!
//! Compares [`Differentiable::derivative`] with the central-difference
//! gradient of [`ProxOperator::evaluate`] computed by `finitediff`. Both
//! penalties in this crate have a kink at zero where the analytic
//! derivative is defined as `0`; the symmetric central difference also
//! returns `0` there, so zero entries are checked like any other.
use finitediff::FiniteDiff;
use ndarray::{Array1, ArrayView1};

use crate::{
    numerical_stability::within_tolerance,
    penalties::traits::{Differentiable, ProxOperator},
    verification::{
        errors::{VerifyError, VerifyResult},
        options::DerivativeOptions,
    },
};

/// Check `penalty.derivative(x)` against central finite differences.
///
/// # Errors
/// Returns [`VerifyError::DerivativeMismatch`] for the first element where
/// `|numeric - analytic| > atol + rtol · |analytic|`, or where either value
/// is not finite.
pub fn check_derivative<P>(
    penalty: &P, x: ArrayView1<'_, f64>, opts: &DerivativeOptions,
) -> VerifyResult<()>
where
    P: ProxOperator<f64> + Differentiable<f64>,
{
    let analytic = penalty.derivative(x);
    let point: Array1<f64> = x.to_owned();
    let numeric = point.central_diff(&|z: &Array1<f64>| penalty.evaluate(z.view()));

    let (rtol, atol) = (opts.tolerance.rtol, opts.tolerance.atol);
    for (index, (&a, &n)) in analytic.iter().zip(numeric.iter()).enumerate() {
        if !within_tolerance(n, a, rtol, atol) {
            return Err(VerifyError::DerivativeMismatch { index, analytic: a, numeric: n });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::penalties::{Log, PenaltyResult, Scad};
    use ndarray::array;

    /// SCAD with the sign of its derivative flipped.
    struct FlippedScad(Scad<f64>);

    impl ProxOperator<f64> for FlippedScad {
        fn evaluate(&self, x: ArrayView1<'_, f64>) -> f64 {
            self.0.evaluate(x)
        }

        fn prox(&self, x: ArrayView1<'_, f64>, tau: f64) -> PenaltyResult<Array1<f64>> {
            self.0.prox(x, tau)
        }
    }

    impl Differentiable<f64> for FlippedScad {
        fn derivative(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
            -self.0.derivative(x)
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify analytic derivatives agree with finite differences, including
    // at the SCAD breakpoints and at the origin.
    //
    // Given
    // -----
    // - SCAD(1, 3.7) at x = [-5, -3.7, -1, 0, 0.5, 1, 2, 3.7, 6].
    // - Log(2, 5) and Log(1, 0.5) at x = [-4, -0.3, 0, 0.1, 2.5].
    //
    // Expect
    // ------
    // - `check_derivative` returns Ok for every penalty.
    fn analytic_derivatives_match_finite_differences() {
        let opts = DerivativeOptions::default();
        let scad = Scad::new(1.0_f64, 3.7).unwrap();
        let x_scad = array![-5.0, -3.7, -1.0, 0.0, 0.5, 1.0, 2.0, 3.7, 6.0];
        let x_log = array![-4.0, -0.3, 0.0, 0.1, 2.5];

        check_derivative(&scad, x_scad.view(), &opts).unwrap();
        check_derivative(&Log::new(2.0_f64, 5.0).unwrap(), x_log.view(), &opts).unwrap();
        check_derivative(&Log::new(1.0_f64, 0.5).unwrap(), x_log.view(), &opts).unwrap();
    }

    #[test]
    // Purpose
    // -------
    // Ensure a wrong derivative is reported at the first non-zero slope.
    //
    // Given
    // -----
    // - `FlippedScad` at x = [0, 0.5]; the slope at 0.5 is sigma = 1.
    //
    // Expect
    // ------
    // - `DerivativeMismatch` at index 1 with analytic -1 and numeric ≈ 1.
    fn wrong_derivative_is_reported() {
        let flipped = FlippedScad(Scad::new(1.0_f64, 3.7).unwrap());

        let err = check_derivative(&flipped, array![0.0, 0.5].view(), &DerivativeOptions::default())
            .unwrap_err();

        match err {
            VerifyError::DerivativeMismatch { index, analytic, numeric } => {
                assert_eq!(index, 1);
                assert_eq!(analytic, -1.0);
                assert!((numeric - 1.0).abs() < 1e-6);
            }
            other => panic!("expected DerivativeMismatch, got {other:?}"),
        }
    }
}
