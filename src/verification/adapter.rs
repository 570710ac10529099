//! Adapter that exposes one coordinate of a proximal problem as an `argmin`
//! cost function.
//!
//! For a separable penalty `f`, the proximal objective splits per element:
//! `h_i(z) = ½ (z − x_i)² + τ f(z)`. [`ScalarProxObjective`] evaluates
//! `h_i` at a scalar `z` by calling the penalty on a length-one vector, which
//! lets the 1-D `BrentOpt` solver minimise it directly.
use argmin::core::{CostFunction, Error};
use ndarray::arr1;

use crate::{penalties::traits::ProxOperator, verification::errors::VerifyError};

#[derive(Debug, Clone)]
pub struct ScalarProxObjective<'a, P> {
    pub penalty: &'a P,
    pub target: f64,
    pub tau: f64,
}

impl<'a, P: ProxOperator<f64>> ScalarProxObjective<'a, P> {
    pub fn new(penalty: &'a P, target: f64, tau: f64) -> Self {
        Self { penalty, target, tau }
    }

    /// `½ (z − target)² + τ f(z)`, or [`VerifyError::NonFiniteObjective`].
    pub fn value(&self, z: f64) -> Result<f64, VerifyError> {
        let diff = z - self.target;
        let output = 0.5 * diff * diff + self.tau * self.penalty.evaluate(arr1(&[z]).view());
        if !output.is_finite() {
            return Err(VerifyError::NonFiniteObjective { point: z, value: output });
        }
        Ok(output)
    }
}

impl<'a, P: ProxOperator<f64>> CostFunction for ScalarProxObjective<'a, P> {
    type Param = f64;
    type Output = f64;

    /// # Errors
    /// Returns [`VerifyError::NonFiniteObjective`] (wrapped) if the objective
    /// is NaN or infinite at `z`.
    fn cost(&self, z: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.value(*z)?)
    }
}
