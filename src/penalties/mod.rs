//! penalties — concave sparsity penalties and their proximal operators.
//!
//! Purpose
//! -------
//! Provide the SCAD and Log penalties as small, immutable value types that
//! evaluate the penalty, its proximal operator, and the proximal operator of
//! its convex conjugate through a single trait, [`ProxOperator`].
//!
//! Key behaviors
//! -------------
//! - [`Scad`]: L1 near the origin, constant plateau beyond `a·sigma`, and a
//!   quadratic spline in between; exact global proximal operator for any
//!   step size.
//! - [`Log`]: `sigma / ln(gamma + 1) · Σ ln(gamma |x| + 1)`, with `gamma = 0`
//!   evaluated as its L1 limit.
//! - [`ProxOperator::prox_dual`] is provided once for every penalty via the
//!   Moreau identity.
//! - [`Differentiable`] exposes elementwise derivatives (zero at the kink).
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are validated at construction; a constructed penalty is
//!   always in its domain and is never mutated afterwards.
//! - Proximal calls validate `tau` and return
//!   [`PenaltyError::InvalidTau`] instead of producing NaNs.
//! - Outputs have the same length and dtype as the input vector.
//!
//! Conventions
//! -----------
//! - `prox(x, tau) = argmin_z ½‖z − x‖² + tau · f(z)`.
//! - Generic over the working float `T: ndarray::NdFloat` (`f32`, `f64`).
//! - Inputs are passed as `ArrayView1<'_, T>`; call `.view()` on owned
//!   arrays.
//!
//! Downstream usage
//! ----------------
//! - Verification utilities in [`crate::verification`] accept any
//!   `ProxOperator` and check the Moreau identity, global optimality of
//!   `prox`, and derivative consistency.
//! - Python bindings wrap `Scad<f64>` and `Log<f64>`.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule pin closed-form values, boundary
//!   validation, and hand-computed proximal outputs.
//! - Integration tests under `tests/` run the seeded random scenarios in
//!   both `f32` and `f64`.

pub mod errors;
pub mod log;
pub mod scad;
pub mod traits;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{PenaltyError, PenaltyResult};
pub use self::log::Log;
pub use self::scad::Scad;
pub use self::traits::{Differentiable, ProxOperator};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_proximal::penalties::prelude::*;
//
// to import the main penalty surface in a single line.

pub mod prelude {
    pub use super::errors::{PenaltyError, PenaltyResult};
    pub use super::log::Log;
    pub use super::scad::Scad;
    pub use super::traits::{Differentiable, ProxOperator};
}
