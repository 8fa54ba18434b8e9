//! Conversions between Python arrays and Rust vectors.
use anyhow::Result;
use ndarray::Array1;
use numpy::PyArrayDyn;
use pyo3::{IntoPy, PyAny, PyObject, Python};

/// Converts a numpy array object to a flat `Vec<f32>`.
///
/// Accepts float32 and float64 arrays; float64 values are narrowed.
pub fn pyany_to_vec(obj: &PyAny) -> Result<Vec<f32>> {
    if let Ok(arr) = obj.extract::<&PyArrayDyn<f32>>() {
        return Ok(arr.readonly().as_array().iter().cloned().collect());
    }
    let arr = obj.extract::<&PyArrayDyn<f64>>()?;
    Ok(arr.readonly().as_array().iter().map(|x| *x as f32).collect())
}

/// Converts a flat action vector to a float32 numpy array object.
pub fn vec_to_pyobj(py: Python, v: &[f32]) -> PyObject {
    let arr = Array1::from(v.to_vec()).into_dyn();
    PyArrayDyn::<f32>::from_array(py, &arr).into_py(py)
}
