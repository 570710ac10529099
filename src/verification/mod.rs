//! verification — numerical checks for proximal operators.
//!
//! Purpose
//! -------
//! Provide reusable checks that any [`ProxOperator`](crate::penalties::ProxOperator)
//! implementation can be run through: the Moreau decomposition, global
//! optimality of the closed-form `prox`, and consistency of analytic
//! derivatives.
//!
//! Key behaviors
//! -------------
//! - [`check_moreau`] / [`verify_moreau`]: element-wise
//!   `x == prox(x, τ) + τ · prox_dual(x / τ, 1 / τ)` with a dtype-aware
//!   tolerance.
//! - [`check_prox_optimality`]: grid scan plus `argmin` Brent refinement of
//!   each scalar prox objective (f64 only).
//! - [`check_derivative`]: `finitediff` central differences of `evaluate`
//!   against `Differentiable::derivative` (f64 only).
//!
//! Invariants & assumptions
//! ------------------------
//! - Penalties are separable: the oracle evaluates them on length-one
//!   vectors.
//! - Checks are pure; with the `obs_slog` feature and `verbose = true`,
//!   diagnostics go to stderr.
//!
//! Conventions
//! -----------
//! - Failures carry the first offending index and its values as `f64`.
//! - `argmin` errors are normalised into [`VerifyError`] and never leak.

pub mod adapter;
pub mod derivative;
pub mod errors;
pub mod moreau;
pub mod options;
pub mod prox_oracle;

pub use self::derivative::check_derivative;
pub use self::errors::{VerifyError, VerifyResult};
pub use self::moreau::{check_moreau, verify_moreau};
pub use self::options::{DerivativeOptions, MoreauOptions, OracleOptions, Tolerance};
pub use self::prox_oracle::check_prox_optimality;
