//! Smoothly Clipped Absolute Deviation (SCAD) penalty.
//!
//! For scale `σ > 0` and shape `a > 2`, the elementwise penalty of
//! `v = |x|` is
//!
//! ```text
//!            ⎧ σ v                                  v ≤ σ
//! scad(v) =  ⎨ (2 a σ v − v² − σ²) / (2 (a − 1))    σ < v ≤ a σ
//!            ⎩ (a + 1) σ² / 2                       v > a σ
//! ```
//!
//! i.e. an L1 term near the origin, a constant (hard-thresholding) plateau
//! for large magnitudes, and a quadratic spline in between. The spline makes
//! the function continuous and differentiable at both breakpoints.
//!
//! ## Proximal operator
//! `prox(x, τ)` minimises `½ (z − x)² + τ scad(z)` exactly for every
//! `τ > 0`. Each piece of `scad` gives a one-dimensional quadratic, so the
//! global minimiser is the best of three closed-form candidates:
//! - inner piece: soft-threshold of `|x|` by `τσ`, clamped to `[0, σ]`;
//! - middle piece: the stationary point `((a−1)|x| − aστ) / ((a−1) − τ)`
//!   clamped to `[σ, aσ]` when the piece is convex (`τ < a − 1`), otherwise
//!   its endpoint `aσ`;
//! - plateau: `max(|x|, aσ)`.
//!
//! For `τ = 1` this reduces to the classical Fan–Li thresholding rule.
use crate::{
    numerical_stability::cast,
    penalties::{
        errors::PenaltyResult,
        traits::{Differentiable, ProxOperator},
        validation::{verify_scad_shape, verify_sigma, verify_tau},
    },
};
use ndarray::{Array1, ArrayView1, NdFloat};

/// SCAD penalty with validated scale `sigma` and shape `a`.
///
/// # Invariants
/// - `sigma` is finite and `> 0`.
/// - `a` is finite and `> 2`.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use rust_proximal::penalties::{Scad, ProxOperator};
/// let scad = Scad::new(1.0_f64, 3.7).unwrap();
/// // Small magnitudes behave like sigma * |x|.
/// assert_eq!(scad.evaluate(array![0.25, -0.5].view()), 0.75);
/// // Large magnitudes sit on the (a + 1) sigma^2 / 2 plateau.
/// assert!((scad.evaluate(array![10.0].view()) - 2.35).abs() < 1e-12);
///
/// assert!(Scad::new(1.0_f64, 1.7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scad<T> {
    sigma: T,
    a: T,
}

impl<T: NdFloat> Scad<T> {
    /// Shape used by [`Scad::with_default_shape`] (Fan & Li's recommendation).
    pub const DEFAULT_A: f64 = 3.7;

    /// Construct a SCAD penalty.
    ///
    /// # Errors
    /// - [`PenaltyError::InvalidParameter`](crate::penalties::PenaltyError::InvalidParameter)
    ///   with `name = "sigma"` if `sigma` is non-finite or ≤ 0.
    /// - [`PenaltyError::InvalidParameter`](crate::penalties::PenaltyError::InvalidParameter)
    ///   with `name = "a"` if `a` is non-finite or ≤ 2.
    pub fn new(sigma: T, a: T) -> PenaltyResult<Self> {
        let sigma = verify_sigma(sigma)?;
        let a = verify_scad_shape(a)?;
        Ok(Self { sigma, a })
    }

    /// Construct a SCAD penalty with `a = 3.7`.
    pub fn with_default_shape(sigma: T) -> PenaltyResult<Self> {
        Self::new(sigma, cast(Self::DEFAULT_A))
    }

    /// Scale `sigma`, the L1 slope near the origin.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Shape `a`; the plateau starts at `a * sigma`.
    pub fn a(&self) -> T {
        self.a
    }

    /// Per-element penalty values; `evaluate(x)` equals their sum up to
    /// rounding.
    pub fn elementwise(&self, x: ArrayView1<'_, T>) -> Array1<T> {
        x.mapv(|xi| self.scalar_value(xi))
    }

    fn scalar_value(&self, xi: T) -> T {
        let (sigma, a) = (self.sigma, self.a);
        let one = T::one();
        let two = one + one;
        let v = xi.abs();
        if v <= sigma {
            sigma * v
        } else if v <= a * sigma {
            (two * a * sigma * v - v * v - sigma * sigma) / (two * (a - one))
        } else {
            (a + one) * sigma * sigma / two
        }
    }

    /// `½ (z − v)² + τ scad(z)`.
    fn prox_objective(&self, z: T, v: T, tau: T) -> T {
        let half: T = cast(0.5);
        half * (z - v) * (z - v) + tau * self.scalar_value(z)
    }

    fn scalar_prox(&self, xi: T, tau: T) -> T {
        let (sigma, a) = (self.sigma, self.a);
        let one = T::one();
        let v = xi.abs();
        let a_sigma = a * sigma;

        let inner = (v - tau * sigma).max(T::zero()).min(sigma);
        let curvature = (a - one) - tau;
        let middle = if curvature > T::zero() {
            (((a - one) * v - a_sigma * tau) / curvature).max(sigma).min(a_sigma)
        } else {
            a_sigma
        };
        let plateau = v.max(a_sigma);

        let mut best = inner;
        let mut best_obj = self.prox_objective(inner, v, tau);
        for candidate in [middle, plateau] {
            let obj = self.prox_objective(candidate, v, tau);
            if obj < best_obj {
                best = candidate;
                best_obj = obj;
            }
        }
        if best == T::zero() { T::zero() } else { xi.signum() * best }
    }

    fn scalar_derivative(&self, xi: T) -> T {
        let (sigma, a) = (self.sigma, self.a);
        let v = xi.abs();
        if v == T::zero() {
            return T::zero();
        }
        let slope = if v <= sigma {
            sigma
        } else if v <= a * sigma {
            (a * sigma - v) / (a - T::one())
        } else {
            T::zero()
        };
        xi.signum() * slope
    }
}

impl<T: NdFloat> ProxOperator<T> for Scad<T> {
    /// `σ · Σ_{|x_i| ≤ σ} |x_i|` plus the spline and plateau terms.
    ///
    /// The L1 entries are summed before scaling, so an input lying entirely
    /// inside `[-σ, σ]` evaluates to exactly `σ * x.mapv(abs).sum()`.
    fn evaluate(&self, x: ArrayView1<'_, T>) -> T {
        let sigma = self.sigma;
        let l1 = x.mapv(|xi| if xi.abs() <= sigma { xi.abs() } else { T::zero() });
        let rest = x.mapv(|xi| if xi.abs() <= sigma { T::zero() } else { self.scalar_value(xi) });
        sigma * l1.sum() + rest.sum()
    }

    fn prox(&self, x: ArrayView1<'_, T>, tau: T) -> PenaltyResult<Array1<T>> {
        let tau = verify_tau(tau)?;
        Ok(x.mapv(|xi| self.scalar_prox(xi, tau)))
    }
}

impl<T: NdFloat> Differentiable<T> for Scad<T> {
    fn derivative(&self, x: ArrayView1<'_, T>) -> Array1<T> {
        x.mapv(|xi| self.scalar_derivative(xi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::penalties::errors::PenaltyError;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Constructor validation, including the `a > 2` boundary.
    // - The three regimes of `evaluate` and continuity at the breakpoints.
    // - Closed-form proximal values for `tau = 1` (Fan–Li rule) and the
    //   non-convex middle piece (`tau >= a - 1`).
    // - Oddness of `prox` and the default dual implementation.
    //
    // They intentionally DO NOT cover:
    // - Global optimality against a numerical oracle and the Moreau identity
    //   on random data; see `verification` and `tests/`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `Scad::new` rejects `a <= 2`, including `a = 2` exactly,
    // and accepts values just above.
    //
    // Given
    // -----
    // - `(sigma, a) = (1.0, 1.7)`, `(1.0, 2.0)` in f64 and f32, and
    //   `(1.0, 2.0 + 1e-9)`.
    //
    // Expect
    // ------
    // - `InvalidParameter { name: "a" }` for 1.7 and 2.0, `Ok` just above.
    fn scad_new_enforces_shape_above_two() {
        // Act
        let err = Scad::new(1.0_f64, 1.7).unwrap_err();
        let ok = Scad::new(1.0_f64, 2.0 + 1e-9);

        // Assert
        match err {
            PenaltyError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "a");
                assert_eq!(value, 1.7);
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
        assert!(ok.is_ok());
        for at_boundary in [Scad::new(1.0_f64, 2.0).err(), Scad::new(1.0_f32, 2.0).err()] {
            assert!(matches!(
                at_boundary,
                Some(PenaltyError::InvalidParameter { name: "a", value, .. }) if value == 2.0
            ));
        }
        assert!(Scad::new(0.0_f64, 3.7).is_err());
        assert_eq!(Scad::<f64>::with_default_shape(1.0).unwrap().a(), 3.7);
    }

    #[test]
    // Purpose
    // -------
    // Check each regime of the penalty on hand-computed values.
    //
    // Given
    // -----
    // - sigma = 1, a = 3 and inputs 0.5, -2.0, 5.0.
    //
    // Expect
    // ------
    // - 0.5 (L1), (12 − 4 − 1)/4 = 1.75 (spline), (3+1)/2 = 2 (plateau).
    fn scad_elementwise_matches_closed_form_regimes() {
        // Arrange
        let scad = Scad::new(1.0_f64, 3.0).unwrap();

        // Act
        let values = scad.elementwise(array![0.5, -2.0, 5.0].view());

        // Assert
        assert_relative_eq!(values[0], 0.5);
        assert_relative_eq!(values[1], 1.75);
        assert_relative_eq!(values[2], 2.0);
        assert_relative_eq!(scad.evaluate(array![0.5, -2.0, 5.0].view()), 4.25);
    }

    #[test]
    // Purpose
    // -------
    // Verify the L1 regime is exact for scales that are not powers of two.
    //
    // Given
    // -----
    // - sigma ∈ {0.3, 0.7, 1.1, 3.0}; 50 deterministic 10-element vectors
    //   per scale with every |x_i| <= sigma.
    //
    // Expect
    // ------
    // - `evaluate(x) == sigma * x.mapv(abs).sum()` bit for bit, in f64 and
    //   f32.
    fn scad_l1_regime_is_exact_for_any_sigma() {
        for sigma in [0.3_f64, 0.7, 1.1, 3.0] {
            let scad = Scad::new(sigma, 3.7).unwrap();
            let scad32 = Scad::new(sigma as f32, 3.7).unwrap();
            for seed in 0..50_u32 {
                // Irrational-step sequence folded into [-sigma, sigma].
                let x = Array1::from_iter((0..10).map(|i| {
                    let t = ((seed * 10 + i) as f64 * 0.618_033_988_749_895).fract();
                    sigma * (2.0 * t - 1.0)
                }));
                let x32 = x.mapv(|v| v as f32).mapv(|v| v.clamp(-(sigma as f32), sigma as f32));

                assert_eq!(scad.evaluate(x.view()), sigma * x.mapv(f64::abs).sum());
                assert_eq!(
                    scad32.evaluate(x32.view()),
                    (sigma as f32) * x32.mapv(f32::abs).sum()
                );
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the penalty is continuous at both breakpoints.
    //
    // Given
    // -----
    // - sigma = 2, a = 3.7; points just below and above sigma and a*sigma.
    //
    // Expect
    // ------
    // - Left and right values agree to within 1e-9.
    fn scad_is_continuous_at_breakpoints() {
        let scad = Scad::new(2.0_f64, 3.7).unwrap();
        let h = 1e-10;
        for knot in [2.0, 7.4] {
            let left = scad.evaluate(array![knot - h].view());
            let right = scad.evaluate(array![knot + h].view());
            assert!((left - right).abs() < 1e-9, "jump at {knot}: {left} vs {right}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the proximal operator against the Fan–Li thresholding rule.
    //
    // Given
    // -----
    // - sigma = 1, a = 3.7, tau = 1 and inputs covering all three pieces:
    //   0.5 (dead zone), 1.5 (soft-threshold), 3.0 (middle), 5.0 (identity).
    //
    // Expect
    // ------
    // - 0, 0.5, (2.7*3 − 3.7)/1.7, 5.
    fn scad_prox_matches_fan_li_rule_for_unit_step() {
        // Arrange
        let scad = Scad::new(1.0_f64, 3.7).unwrap();
        let x = array![0.5, 1.5, 3.0, 5.0, -3.0];

        // Act
        let p = scad.prox(x.view(), 1.0).unwrap();

        // Assert
        assert_eq!(p[0], 0.0);
        assert_relative_eq!(p[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(p[2], (2.7 * 3.0 - 3.7) / 1.7, epsilon = 1e-12);
        assert_relative_eq!(p[3], 5.0);
        assert_relative_eq!(p[4], -p[2], epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Exercise the non-convex middle piece (`tau >= a - 1`), where the
    // candidate search must pick between shrinking to zero and keeping `x`.
    //
    // Given
    // -----
    // - sigma = 1, a = 2.1, tau = 2 (so a − 1 − tau < 0).
    // - x = 1.0 (close to the origin) and x = 6.0 (far in the plateau).
    //
    // Expect
    // ------
    // - x = 1.0 maps to 0 (objective 0.5 beats 2.0 at z = x).
    // - x = 6.0 maps to itself (objective 3.1 beats 18 at 0).
    fn scad_prox_handles_nonconvex_middle_piece() {
        // Arrange
        let scad = Scad::new(1.0_f64, 2.1).unwrap();

        // Act
        let p = scad.prox(array![1.0, 6.0].view(), 2.0).unwrap();

        // Assert
        assert_eq!(p[0], 0.0);
        assert_eq!(p[1], 6.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid step sizes are rejected by both prox and prox_dual.
    //
    // Given
    // -----
    // - tau = 0 and tau = NaN.
    //
    // Expect
    // ------
    // - `PenaltyError::InvalidTau` in every case.
    fn scad_prox_rejects_invalid_tau() {
        let scad = Scad::new(1.0_f32, 3.7).unwrap();
        let x = array![1.0_f32, -2.0];
        for tau in [0.0_f32, f32::NAN] {
            assert!(matches!(scad.prox(x.view(), tau), Err(PenaltyError::InvalidTau { .. })));
            assert!(matches!(scad.prox_dual(x.view(), tau), Err(PenaltyError::InvalidTau { .. })));
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the analytic derivative on each piece and at zero.
    //
    // Given
    // -----
    // - sigma = 1, a = 3; inputs 0, 0.5, -2, 5.
    //
    // Expect
    // ------
    // - 0, 1, −(3 − 2)/2 = −0.5, 0.
    fn scad_derivative_matches_piecewise_slope() {
        let scad = Scad::new(1.0_f64, 3.0).unwrap();
        let d = scad.derivative(array![0.0, 0.5, -2.0, 5.0].view());
        assert_eq!(d, array![0.0, 1.0, -0.5, 0.0]);
    }
}
