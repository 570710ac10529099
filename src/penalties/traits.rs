//! Public trait surface for penalties.
//!
//! - [`ProxOperator`]: the three operations every penalty exposes:
//!   `evaluate`, `prox`, and `prox_dual`.
//! - [`Differentiable`]: optional elementwise derivative, used by the
//!   finite-difference check in `verification::derivative`.
//!
//! Convention: `prox(x, tau)` returns `argmin_z 0.5 * ||z - x||^2 + tau * f(z)`,
//! i.e. the minimiser of `0.5 / tau * ||z - x||^2 + f(z)`.
use crate::penalties::{errors::PenaltyResult, validation::verify_tau};
use ndarray::{Array1, ArrayView1, NdFloat, Zip};

/// Penalty function with a proximal operator and its dual.
///
/// Required:
/// - `evaluate(x) -> T`: the penalty value `f(x)`.
/// - `prox(x, tau) -> PenaltyResult<Array1<T>>`: the proximal operator of
///   `tau * f`. Implementations must validate `tau` (see [`verify_tau`]).
///
/// Provided:
/// - `prox_dual(x, tau)`: the proximal operator of `tau * f*` (convex
///   conjugate), computed through the Moreau identity
///   `prox_dual(x, tau) = x - tau * prox(x / tau, 1 / tau)`.
pub trait ProxOperator<T: NdFloat> {
    // Required methods
    fn evaluate(&self, x: ArrayView1<'_, T>) -> T;
    fn prox(&self, x: ArrayView1<'_, T>, tau: T) -> PenaltyResult<Array1<T>>;

    // Provided methods
    fn prox_dual(&self, x: ArrayView1<'_, T>, tau: T) -> PenaltyResult<Array1<T>> {
        let tau = verify_tau(tau)?;
        let scaled = x.mapv(|xi| xi / tau);
        let primal = self.prox(scaled.view(), T::one() / tau)?;
        Ok(Zip::from(&x).and(&primal).map_collect(|&xi, &pi| xi - tau * pi))
    }
}

/// Penalty with an elementwise derivative.
///
/// `derivative(x)[i]` is `d f / d x_i`. At `x_i = 0`, where the sparsity
/// penalties in this crate have a kink, implementations return `0`.
pub trait Differentiable<T: NdFloat> {
    fn derivative(&self, x: ArrayView1<'_, T>) -> Array1<T>;
}
