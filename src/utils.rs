//! Conversion helpers for the Python bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature.
#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Copy a 1-D float64 input into an owned `Array1<f64>`.
///
/// Accepted inputs, tried in order:
/// - a contiguous `numpy.ndarray[float64]`;
/// - any object with a `to_numpy()` method returning such an array
///   (e.g. `pandas.Series`);
/// - a Python sequence of floats.
///
/// # Errors
/// Raises `TypeError` if none of the above applies.
#[cfg(feature = "python-bindings")]
pub fn extract_vector<'py>(_py: Python<'py>, raw: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    if let Some(values) = contiguous_values(raw) {
        return Ok(values);
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Some(values) = contiguous_values(&obj) {
            return Ok(values);
        }
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(Array1::from(vec))
}

#[cfg(feature = "python-bindings")]
fn contiguous_values(obj: &Bound<'_, PyAny>) -> Option<Array1<f64>> {
    let arr = obj.extract::<PyReadonlyArray1<f64>>().ok()?;
    let slice = arr.as_slice().ok()?;
    Some(Array1::from(slice.to_vec()))
}
