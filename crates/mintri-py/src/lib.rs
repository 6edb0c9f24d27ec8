//! PyO3 bindings for the enclosing-triangle solver.
//!
//! Notes
//! - Keep bindings thin: points cross the boundary as `(x, y)` tuples and
//!   results come back as plain tuples/lists.
//! - Errors map to `ValueError` with the library's message.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn mintri_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    Ok(())
}
