//! Moreau decomposition checker.
//!
//! For any proper, closed function `f` and step `τ > 0`,
//!
//! ```text
//! x = prox_{τ f}(x) + τ · prox_{f*/τ}(x / τ)
//! ```
//!
//! which in this crate's API reads
//! `x == prox(x, τ) + τ · prox_dual(x / τ, 1 / τ)`.
//!
//! [`verify_moreau`] reports the first violating element with its
//! tolerance; [`check_moreau`] folds a violation into `Ok(false)` and keeps
//! `Err` for invalid inputs only.
use ndarray::{ArrayView1, NdFloat, Zip};

use crate::{
    numerical_stability::{to_f64, within_tolerance},
    penalties::{traits::ProxOperator, validation::verify_tau},
    verification::{
        errors::{VerifyError, VerifyResult},
        options::{MoreauOptions, Tolerance},
    },
};

/// `true` iff the Moreau identity holds element-wise for `penalty` at `x`
/// with the dtype default tolerance (`rtol = atol = sqrt(ε)`).
///
/// # Errors
/// [`VerifyError::Penalty`] if `tau` is not finite and positive.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use rust_proximal::penalties::Log;
/// # use rust_proximal::verification::check_moreau;
/// let log = Log::new(2.0_f64, 5.0).unwrap();
/// let x = array![-3.0, 0.1, 7.5];
/// assert!(check_moreau(&log, x.view(), 2.0).unwrap());
/// ```
pub fn check_moreau<T, P>(penalty: &P, x: ArrayView1<'_, T>, tau: T) -> VerifyResult<bool>
where
    T: NdFloat,
    P: ProxOperator<T> + ?Sized,
{
    match verify_moreau(penalty, x, tau, &MoreauOptions::default()) {
        Ok(()) => Ok(true),
        Err(VerifyError::MoreauViolated { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Verify the Moreau identity element-wise.
///
/// Reconstructs `r = prox(x, τ) + τ · prox_dual(x / τ, 1 / τ)` and compares
/// each `x_i` to `r_i` with `|x_i − r_i| <= atol + rtol · |r_i|`.
///
/// # Errors
/// - [`VerifyError::Penalty`] if `tau` is invalid.
/// - [`VerifyError::MoreauViolated`] for the first element outside the
///   tolerance (including NaN reconstructions).
pub fn verify_moreau<T, P>(
    penalty: &P, x: ArrayView1<'_, T>, tau: T, opts: &MoreauOptions<T>,
) -> VerifyResult<()>
where
    T: NdFloat,
    P: ProxOperator<T> + ?Sized,
{
    let tau = verify_tau(tau)?;
    let primal = penalty.prox(x, tau)?;
    let scaled = x.mapv(|xi| xi / tau);
    let dual = penalty.prox_dual(scaled.view(), T::one() / tau)?;
    let reconstructed = Zip::from(&primal).and(&dual).map_collect(|&p, &d| p + tau * d);

    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_summary(x, &primal, &dual, &reconstructed);
    }

    let Tolerance { rtol, atol } = opts.tolerance;
    for (index, (&expected, &found)) in x.iter().zip(reconstructed.iter()).enumerate() {
        if !within_tolerance(expected, found, rtol, atol) {
            return Err(VerifyError::MoreauViolated {
                index,
                expected: to_f64(expected),
                found: to_f64(found),
                rtol: to_f64(rtol),
                atol: to_f64(atol),
            });
        }
    }
    Ok(())
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_summary<T: NdFloat>(
    x: ArrayView1<'_, T>, primal: &ndarray::Array1<T>, dual: &ndarray::Array1<T>,
    reconstructed: &ndarray::Array1<T>,
) {
    let worst = x
        .iter()
        .zip(reconstructed.iter())
        .map(|(&e, &f)| to_f64((e - f).abs()))
        .fold(0.0_f64, f64::max);
    eprintln!(
        "moreau: n = {}, sum(prox) = {:.6}, sum(prox_dual) = {:.6}, max |x - r| = {:.3e}",
        x.len(),
        to_f64(primal.sum()),
        to_f64(dual.sum()),
        worst
    );
}
