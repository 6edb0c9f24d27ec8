//! Minimum-area triangle enclosing a planar point set.
//!
//! Purpose
//! - Compute the smallest triangle containing every input point, in linear
//!   time in the number of convex-hull vertices.
//!
//! Why this design
//! - The hull is swept with one triangle side (C) flush against each hull
//!   edge in turn. Two monotone indices locate the other supporting sides,
//!   and the resulting candidate is kept only if every side midpoint touches
//!   the polygon. The smallest surviving candidate is the global minimum.
//! - The ε used by every tolerant comparison is a parameter (`GeomCfg`), not a
//!   global, so tests and callers can tune it.
//!
//! References
//! - J. O'Rourke, A. Aggarwal, S. Maddila, M. Baldwin, "An optimal algorithm
//!   for finding minimal enclosing triangles", J. Algorithms 7 (1986) 258–269.
//! - B. Chandran, D. Mount, "A parallel algorithm for enclosed and enclosing
//!   triangles", IJCGA 2 (1992), for the γ construction.

mod classify;
mod gamma;
mod sweep;
mod types;
mod validate;

use nalgebra::Vector2;
use tracing::debug;

use crate::geom2::{GeomCfg, Polygon};

pub use types::{AsPoint2, Crossing, MinTriangle, Side, Sides, TriangleError, ValidationFlag};

/// Minimum enclosing triangle of `points` with the default tolerance.
pub fn min_enclosing_triangle<P: AsPoint2>(points: &[P]) -> Result<MinTriangle, TriangleError> {
    min_enclosing_triangle_with(points, GeomCfg::default())
}

/// Minimum enclosing triangle of `points` with an explicit tolerance.
///
/// Errors
/// - `EmptyInput` for an empty slice, `NonFiniteInput` for NaN/∞ coordinates.
/// - `SideBGamma`, `VertexCOnSideB` when the sweep meets geometry a convex
///   polygon cannot produce (see `TriangleError::is_invariant_violation`).
pub fn min_enclosing_triangle_with<P: AsPoint2>(
    points: &[P],
    cfg: GeomCfg,
) -> Result<MinTriangle, TriangleError> {
    let pts = to_finite_points(points)?;
    let poly = Polygon::hull_of(&pts);
    debug!(points = pts.len(), hull = poly.len(), "convex hull built");
    min_enclosing_triangle_of_polygon(&poly, cfg)
}

/// Minimum enclosing triangle of a polygon that is already convex and CCW.
pub fn min_enclosing_triangle_of_polygon(
    poly: &Polygon,
    cfg: GeomCfg,
) -> Result<MinTriangle, TriangleError> {
    if poly.is_empty() {
        return Err(TriangleError::EmptyInput);
    }
    if poly.len() <= 3 {
        return Ok(sweep::trivial_triangle(poly));
    }
    sweep::Sweep::new(poly, cfg).run()
}

fn to_finite_points<P: AsPoint2>(points: &[P]) -> Result<Vec<Vector2<f64>>, TriangleError> {
    if points.is_empty() {
        return Err(TriangleError::EmptyInput);
    }
    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let q = p.to_point2();
            if q.x.is_finite() && q.y.is_finite() {
                Ok(q)
            } else {
                Err(TriangleError::NonFiniteInput { index })
            }
        })
        .collect()
}
