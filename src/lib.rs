//! rust_proximal — concave sparsity penalties and their proximal operators,
//! with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the penalties to Python via the `_rust_proximal` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: [`penalties`] (SCAD, Log, the
//!   `ProxOperator` trait), [`verification`] (Moreau, optimality, and
//!   derivative checks), and [`numerical_stability`] (scalar helpers).
//! - With `python-bindings`, define the `SCAD` and `Log` classes and the
//!   `moreau` function, registered under the `rust_proximal.proximal` and
//!   `rust_proximal.utils` submodules.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue and error mapping.
//! - Python-facing penalties are `f64`; Rust callers may also use `f32`.
//!
//! Conventions
//! -----------
//! - `prox(x, tau)` minimises `½‖z − x‖² + tau · f(z)`; `proxdual` is the
//!   proximal operator of the convex conjugate.
//! - Errors are typed in Rust and become `ValueError` / `TypeError` at the
//!   PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ndarray::array;
//! use rust_proximal::penalties::{ProxOperator, Scad};
//! use rust_proximal::verification::check_moreau;
//!
//! let scad = Scad::new(1.0_f64, 3.7).unwrap();
//! let x = array![-5.0, 0.4, 2.0];
//! let z = scad.prox(x.view(), 2.0).unwrap();
//! assert_eq!(z.len(), 3);
//! assert!(check_moreau(&scad, x.view(), 2.0).unwrap());
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; seeded scenarios for `f32` and
//!   `f64` live in `tests/`.

pub mod numerical_stability;
pub mod penalties;
pub mod utils;
pub mod verification;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    penalties::{Log, ProxOperator, Scad},
    utils::extract_vector,
    verification::check_moreau,
};

/// SCAD — Python-facing wrapper for [`Scad<f64>`].
///
/// Constructed from Python via `SCAD(sigma, a=3.7)`; raises `ValueError` if
/// `sigma <= 0` or `a <= 2`.
///
/// - `__call__(x)`: penalty value.
/// - `prox(x, tau)`, `proxdual(x, tau)`: proximal operators, returned as
///   new float64 arrays.
/// - `sigma`, `a`: read-only properties.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_proximal.proximal", name = "SCAD", frozen)]
pub struct PyScad {
    inner: Scad<f64>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyScad {
    #[new]
    #[pyo3(signature = (sigma, a = 3.7), text_signature = "(sigma, a=3.7)")]
    pub fn new(sigma: f64, a: f64) -> PyResult<Self> {
        Ok(PyScad { inner: Scad::new(sigma, a)? })
    }

    pub fn __call__<'py>(&self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<f64> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.evaluate(x.view()))
    }

    pub fn prox<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, tau: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.prox(x.view(), tau)?.to_vec().into_pyarray(py))
    }

    pub fn proxdual<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, tau: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.prox_dual(x.view(), tau)?.to_vec().into_pyarray(py))
    }

    #[getter]
    pub fn sigma(&self) -> f64 {
        self.inner.sigma()
    }

    #[getter]
    pub fn a(&self) -> f64 {
        self.inner.a()
    }

    pub fn __repr__(&self) -> String {
        format!("SCAD(sigma={}, a={})", self.inner.sigma(), self.inner.a())
    }
}

/// Log — Python-facing wrapper for [`Log<f64>`].
///
/// Constructed from Python via `Log(sigma, gamma=1.3)`; raises `ValueError`
/// if `sigma <= 0` or `gamma < 0`. `gamma = 0` behaves as `sigma * |x|`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_proximal.proximal", name = "Log", frozen)]
pub struct PyLog {
    inner: Log<f64>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyLog {
    #[new]
    #[pyo3(signature = (sigma, gamma = 1.3), text_signature = "(sigma, gamma=1.3)")]
    pub fn new(sigma: f64, gamma: f64) -> PyResult<Self> {
        Ok(PyLog { inner: Log::new(sigma, gamma)? })
    }

    pub fn __call__<'py>(&self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<f64> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.evaluate(x.view()))
    }

    pub fn prox<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, tau: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.prox(x.view(), tau)?.to_vec().into_pyarray(py))
    }

    pub fn proxdual<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, tau: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.prox_dual(x.view(), tau)?.to_vec().into_pyarray(py))
    }

    #[getter]
    pub fn sigma(&self) -> f64 {
        self.inner.sigma()
    }

    #[getter]
    pub fn gamma(&self) -> f64 {
        self.inner.gamma()
    }

    pub fn __repr__(&self) -> String {
        format!("Log(sigma={}, gamma={})", self.inner.sigma(), self.inner.gamma())
    }
}

/// Moreau decomposition check for a `SCAD` or `Log` instance.
///
/// Returns `True` iff `x == prox(x, tau) + tau * proxdual(x / tau, 1 / tau)`
/// element-wise within `sqrt(eps)` tolerances.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (penalty, x, tau), text_signature = "(penalty, x, tau)")]
pub fn moreau<'py>(
    py: Python<'py>, penalty: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>, tau: f64,
) -> PyResult<bool> {
    let x = extract_vector(py, x)?;
    if let Ok(scad) = penalty.downcast::<PyScad>() {
        return Ok(check_moreau(&scad.get().inner, x.view(), tau)?);
    }
    if let Ok(log) = penalty.downcast::<PyLog>() {
        return Ok(check_moreau(&log.get().inner, x.view(), tau)?);
    }
    Err(PyTypeError::new_err("penalty must be a SCAD or Log instance"))
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_proximal<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let proximal_mod = PyModule::new(_py, "proximal")?;
    let utils_mod = PyModule::new(_py, "utils")?;
    proximal_module(_py, m, &proximal_mod)?;
    utils_module(_py, m, &utils_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_proximal.proximal", proximal_mod)?;
    modules.set_item("rust_proximal.utils", utils_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn proximal_module<'py>(
    _py: Python, rust_proximal: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyScad>()?;
    m.add_class::<PyLog>()?;
    rust_proximal.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn utils_module<'py>(
    _py: Python, rust_proximal: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(moreau, m)?)?;
    rust_proximal.add_submodule(m)?;
    Ok(())
}
