//! Brute-force optimality check for closed-form proximal operators.
//!
//! Purpose
//! -------
//! Confirm that `prox(x, τ)` returns a *global* minimiser of the separable
//! objective `½ (z − x_i)² + τ f(z)` for every element, which matters for
//! the non-convex penalties in this crate where a local stationary point is
//! easy to return by mistake.
//!
//! Method
//! ------
//! For each element:
//! 1. scan `grid_points` evenly spaced points of `[min(0, x_i), max(0, x_i)]`
//!    (the minimiser of an even penalty that is non-decreasing in `|z|` lies
//!    between `0` and `x_i`);
//! 2. refine around the best grid point with `argmin`'s `BrentOpt`;
//! 3. fail with [`VerifyError::ProxNotOptimal`] when the closed-form cost
//!    exceeds the oracle cost by more than `tol · (1 + |oracle cost|)`.
//!
//! The check is one-sided: a closed-form output that beats the oracle passes.
use argmin::{
    core::{Executor, State},
    solver::brent::BrentOpt,
};
use ndarray::ArrayView1;

use crate::{
    penalties::traits::ProxOperator,
    verification::{
        adapter::ScalarProxObjective,
        errors::{VerifyError, VerifyResult},
        options::OracleOptions,
    },
};

/// Check that `penalty.prox(x, tau)` is an element-wise global minimiser.
///
/// # Errors
/// - [`VerifyError::Penalty`] if `tau` is invalid.
/// - [`VerifyError::ProxNotOptimal`] on the first element where the oracle
///   finds a strictly better point.
/// - [`VerifyError::NonFiniteObjective`] / [`VerifyError::BackendError`] if
///   the 1-D solver fails.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use rust_proximal::penalties::Scad;
/// # use rust_proximal::verification::{check_prox_optimality, OracleOptions};
/// let scad = Scad::new(1.0_f64, 2.1).unwrap();
/// let x = array![-4.0, -1.5, 0.3, 2.2, 7.0];
/// check_prox_optimality(&scad, x.view(), 2.0, &OracleOptions::default()).unwrap();
/// ```
pub fn check_prox_optimality<P: ProxOperator<f64>>(
    penalty: &P, x: ArrayView1<'_, f64>, tau: f64, opts: &OracleOptions,
) -> VerifyResult<()> {
    let prox = penalty.prox(x, tau)?;
    for (index, (&target, &prox_value)) in x.iter().zip(prox.iter()).enumerate() {
        let objective = ScalarProxObjective::new(penalty, target, tau);
        let prox_cost = objective.value(prox_value)?;
        let (oracle_value, oracle_cost) = minimise_scalar(&objective, opts)?;
        if prox_cost > oracle_cost + opts.tol * (1.0 + oracle_cost.abs()) {
            return Err(VerifyError::ProxNotOptimal {
                index,
                prox_value,
                prox_cost,
                oracle_value,
                oracle_cost,
            });
        }
    }
    Ok(())
}

// ---- Helper Methods ----

/// Grid scan over `[min(0, x), max(0, x)]` followed by a Brent refinement
/// on the two cells adjacent to the best grid point.
fn minimise_scalar<P: ProxOperator<f64>>(
    objective: &ScalarProxObjective<'_, P>, opts: &OracleOptions,
) -> VerifyResult<(f64, f64)> {
    let lo = objective.target.min(0.0);
    let hi = objective.target.max(0.0);
    if lo == hi {
        return Ok((lo, objective.value(lo)?));
    }

    let last = opts.grid_points - 1;
    let step = (hi - lo) / last as f64;
    let point_at = |k: usize| if k == last { hi } else { lo + step * k as f64 };

    let mut best_k = 0;
    let mut best = (lo, objective.value(lo)?);
    for k in 1..=last {
        let z = point_at(k);
        let cost = objective.value(z)?;
        if cost < best.1 {
            best_k = k;
            best = (z, cost);
        }
    }

    let left = point_at(best_k.saturating_sub(1));
    let right = point_at((best_k + 1).min(last));
    let solver = BrentOpt::new(left, right);
    let problem = ScalarProxObjective::new(objective.penalty, objective.target, objective.tau);
    let executor =
        Executor::new(problem, solver).configure(|state| state.max_iters(opts.max_iter));
    #[cfg(feature = "obs_slog")]
    let executor = if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        executor.add_observer(observer, argmin::core::observers::ObserverMode::Always)
    } else {
        executor
    };

    let result = executor.run()?;
    let state = result.state();
    if let Some(&z) = state.get_best_param() {
        let cost = state.get_best_cost();
        if cost < best.1 {
            best = (z, cost);
        }
    }
    Ok(best)
}
