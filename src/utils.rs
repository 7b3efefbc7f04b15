//! Python-side input conversion helpers.
#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Copy residuals from a 1-D numpy array, a pandas Series, or any float
/// sequence into an owned vector.
///
/// Non-contiguous arrays are copied element-wise; anything else falls back
/// to PyO3's sequence extraction.
#[cfg(feature = "python-bindings")]
pub fn extract_residuals(raw_data: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    if let Some(values) = read_array(raw_data) {
        return Ok(values);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Some(values) = read_array(&obj) {
            return Ok(values);
        }
    }

    raw_data.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })
}

#[cfg(feature = "python-bindings")]
fn read_array(obj: &Bound<'_, PyAny>) -> Option<Vec<f64>> {
    let arr = obj.extract::<PyReadonlyArray1<f64>>().ok()?;
    Some(arr.as_array().to_vec())
}
