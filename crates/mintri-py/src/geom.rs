//! Geometry bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{cfg_from_py, map_triangle_err, points_from_py, points_to_py};
use pyo3::prelude::*;

/// Minimum-area enclosing triangle: `([(x, y); 3], area)`.
#[pyfunction]
#[pyo3(signature = (points, eps=None))]
pub fn min_enclosing_triangle(
    points: Vec<(f64, f64)>,
    eps: Option<f64>,
) -> PyResult<(Vec<(f64, f64)>, f64)> {
    let cfg = cfg_from_py(eps)?;
    let pts = points_from_py(points);
    let t = mintri::min_enclosing_triangle_with(&pts, cfg).map_err(map_triangle_err)?;
    Ok((points_to_py(&t.vertices), t.area))
}

/// Convex hull in counterclockwise order.
#[pyfunction]
pub fn convex_hull(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    points_to_py(&mintri::geom2::convex_hull(&points_from_py(points)))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(min_enclosing_triangle, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    Ok(())
}
