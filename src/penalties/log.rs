//! Logarithmic sparsity penalty.
//!
//! For scale `σ > 0` and shape `γ ≥ 0`,
//!
//! ```text
//! log_pen(x) = σ / ln(γ + 1) · Σᵢ ln(γ |xᵢ| + 1)
//! ```
//!
//! The normalisation by `ln(γ + 1)` makes `log_pen(±1) = σ` for every `γ`.
//! As `γ → 0` the ratio `ln(1 + γ v) / ln(1 + γ)` tends to `v`, so the
//! penalty converges to `σ ‖x‖₁`; `γ = 0` (and any subnormal `γ`) is
//! evaluated as that limit. Values are computed as `σ · ln(1 + γ v) / ln(1 + γ)`
//! so that no intermediate overflows as `γ` shrinks.
//!
//! ## Proximal operator
//! `prox(x, τ)` minimises `½ (z − x)² + τ log_pen(z)` elementwise. With
//! `k = τσ / ln(1 + γ)` and `v = |x|`, stationary points on `z ≥ 0` solve
//!
//! ```text
//! γ z² + (1 − γ v) z + (k γ − v) = 0
//! ```
//!
//! Only the larger root can be a local minimum, so the global minimiser is
//! whichever of `{0, larger root}` has the smaller objective. For `γ = 0`
//! the operator is soft-thresholding at `τσ`.
use crate::{
    numerical_stability::{cast, soft_threshold},
    penalties::{
        errors::PenaltyResult,
        traits::{Differentiable, ProxOperator},
        validation::{verify_log_shape, verify_sigma, verify_tau},
    },
};
use ndarray::{Array1, ArrayView1, NdFloat};

/// Log penalty with validated scale `sigma` and shape `gamma`.
///
/// # Invariants
/// - `sigma` is finite and `> 0`.
/// - `gamma` is finite and `>= 0`; `gamma == 0` selects the L1 limit.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use rust_proximal::penalties::{Log, ProxOperator};
/// let log = Log::new(2.0_f64, 1.0).unwrap();
/// // log_pen(±1) = sigma for any gamma.
/// assert!((log.evaluate(array![1.0, -1.0].view()) - 4.0).abs() < 1e-12);
///
/// // gamma = 0 is the L1 limit.
/// let l1 = Log::new(2.0_f64, 0.0).unwrap();
/// assert_eq!(l1.evaluate(array![0.5, -1.5].view()), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Log<T> {
    sigma: T,
    gamma: T,
}

impl<T: NdFloat> Log<T> {
    /// Shape used by [`Log::with_default_shape`].
    pub const DEFAULT_GAMMA: f64 = 1.3;

    /// Construct a Log penalty.
    ///
    /// # Errors
    /// - [`PenaltyError::InvalidParameter`](crate::penalties::PenaltyError::InvalidParameter)
    ///   with `name = "sigma"` if `sigma` is non-finite or ≤ 0.
    /// - [`PenaltyError::InvalidParameter`](crate::penalties::PenaltyError::InvalidParameter)
    ///   with `name = "gamma"` if `gamma` is non-finite or < 0.
    pub fn new(sigma: T, gamma: T) -> PenaltyResult<Self> {
        let sigma = verify_sigma(sigma)?;
        let gamma = verify_log_shape(gamma)?;
        Ok(Self { sigma, gamma })
    }

    /// Construct a Log penalty with `gamma = 1.3`.
    pub fn with_default_shape(sigma: T) -> PenaltyResult<Self> {
        Self::new(sigma, cast(Self::DEFAULT_GAMMA))
    }

    /// Scale `sigma`.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Shape `gamma`; `0` selects the L1 limit.
    pub fn gamma(&self) -> T {
        self.gamma
    }

    /// True when the penalty is evaluated as `sigma * |x|`.
    ///
    /// That is the case for `gamma == 0` and for subnormal `gamma`, where
    /// `ln(1 + γ v) / ln(1 + γ)` equals `v` to working precision but can no
    /// longer be computed without losing most of its digits.
    pub fn is_l1_limit(&self) -> bool {
        self.gamma < T::min_positive_value()
    }

    /// Per-element penalty values.
    pub fn elementwise(&self, x: ArrayView1<'_, T>) -> Array1<T> {
        x.mapv(|xi| self.scalar_value(xi))
    }

    /// `ln(1 + γ v) / ln(1 + γ)`, the per-element value divided by `σ`.
    ///
    /// No intermediate overflows for tiny normal `γ`. Only called outside
    /// the L1 limit.
    fn log_ratio(&self, v: T) -> T {
        (self.gamma * v).ln_1p() / self.gamma.ln_1p()
    }

    fn scalar_value(&self, xi: T) -> T {
        if self.is_l1_limit() {
            self.sigma * xi.abs()
        } else {
            self.sigma * self.log_ratio(xi.abs())
        }
    }

    fn scalar_prox(&self, xi: T, tau: T) -> T {
        if self.is_l1_limit() {
            return soft_threshold(xi, tau * self.sigma);
        }
        let gamma = self.gamma;
        let one = T::one();
        let two = one + one;
        let four = two + two;
        let half: T = cast(0.5);

        let v = xi.abs();
        let tau_sigma = tau * self.sigma;
        // k γ with k = τσ / ln(1 + γ); bounded by τσ γ for every γ > 0.
        let k_gamma = tau_sigma * (gamma / gamma.ln_1p());
        let objective = |z: T| half * (z - v) * (z - v) + tau_sigma * self.log_ratio(z);

        let b = gamma * v - one;
        let discriminant = b * b - four * gamma * (k_gamma - v);
        if discriminant < T::zero() {
            return T::zero();
        }
        // Larger root, in the form that avoids cancellation for b < 0.
        let sqrt_disc = discriminant.sqrt();
        let root = if b >= T::zero() {
            (b + sqrt_disc) / (two * gamma)
        } else {
            two * (k_gamma - v) / (b - sqrt_disc)
        };
        let root = root.min(v);
        if root > T::zero() && objective(root) < objective(T::zero()) {
            xi.signum() * root
        } else {
            T::zero()
        }
    }

    fn scalar_derivative(&self, xi: T) -> T {
        if xi == T::zero() {
            return T::zero();
        }
        let slope = if self.is_l1_limit() {
            self.sigma
        } else {
            let gamma = self.gamma;
            self.sigma * (gamma / gamma.ln_1p()) / (gamma * xi.abs() + T::one())
        };
        xi.signum() * slope
    }
}

impl<T: NdFloat> ProxOperator<T> for Log<T> {
    fn evaluate(&self, x: ArrayView1<'_, T>) -> T {
        if self.is_l1_limit() {
            return self.sigma * x.mapv(|xi| xi.abs()).sum();
        }
        self.sigma * x.mapv(|xi| self.log_ratio(xi.abs())).sum()
    }

    fn prox(&self, x: ArrayView1<'_, T>, tau: T) -> PenaltyResult<Array1<T>> {
        let tau = verify_tau(tau)?;
        Ok(x.mapv(|xi| self.scalar_prox(xi, tau)))
    }
}

impl<T: NdFloat> Differentiable<T> for Log<T> {
    fn derivative(&self, x: ArrayView1<'_, T>) -> Array1<T> {
        x.mapv(|xi| self.scalar_derivative(xi))
    }
}
