use mintri::{GeomCfg, TriangleError};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(points: Vec<(f64, f64)>) -> Vec<Vector2<f64>> {
    points.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
}

pub fn points_to_py(points: &[Vector2<f64>]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

pub fn cfg_from_py(eps: Option<f64>) -> PyResult<GeomCfg> {
    match eps {
        None => Ok(GeomCfg::default()),
        Some(e) if e.is_finite() && e > 0.0 => Ok(GeomCfg::with_eps(e)),
        Some(e) => Err(PyValueError::new_err(format!(
            "eps must be a positive finite number, got {e}"
        ))),
    }
}

pub fn map_triangle_err(err: TriangleError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
