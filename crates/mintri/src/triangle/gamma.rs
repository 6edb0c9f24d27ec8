//! Heights above the flush side C and the γ construction.
//!
//! γ(p) is the point on side A whose distance to C is `2·height(p)`, taken on
//! the polygon's side of C. If the triangle vertex on side B were pinned at
//! γ(p), then p would be the midpoint of the triangle side through it.

use nalgebra::Vector2;

use super::types::{Side, TriangleError};
use crate::geom2::predicates::{
    are_identical_lines, distance_to_line, intersect_coeffs, same_side_of_line,
};
use crate::geom2::{GeomCfg, Polygon};

/// Distance from `P[i]` to the line through `P[c−1]` and `P[c]`.
#[inline]
pub(crate) fn height(poly: &Polygon, i: usize, c: usize) -> f64 {
    height_of_point(poly, poly[i], c)
}

/// Distance from an arbitrary point to the flush line of `c`.
#[inline]
pub(crate) fn height_of_point(poly: &Polygon, p: Vector2<f64>, c: usize) -> f64 {
    distance_to_line(p, poly[c], poly[poly.pred(c)])
}

/// Intersect `side1` with both lines parallel to `side2` at distance
/// `2·height(point_index)`.
///
/// `None` if either pair is parallel. If `side1` coincides with one of the
/// displaced lines its endpoints are returned as the two witnesses.
fn gamma_intersections(
    poly: &Polygon,
    c: usize,
    point_index: usize,
    side1: Side,
    side2: Side,
    cfg: GeomCfg,
) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let l1 = side1.line();
    let l2 = side2.line();
    let extra = 2.0 * height(poly, point_index, c) * l2.normal_norm();

    let base = (l1.a, l1.b, -l1.c);
    let lower = (l2.a, l2.b, -l2.c - extra);
    let upper = (l2.a, l2.b, -l2.c + extra);
    let p1 = intersect_coeffs(base, lower, cfg)?;
    let p2 = intersect_coeffs(base, upper, cfg)?;
    if are_identical_lines(base, lower, cfg) || are_identical_lines(base, upper, cfg) {
        return Some((side1.start, side1.end));
    }
    Some((p1, p2))
}

/// Of two candidates, the one on the same side of C as `P[c+1]`.
#[inline]
fn on_polygon_side(poly: &Polygon, c: usize, (p1, p2): (Vector2<f64>, Vector2<f64>)) -> Vector2<f64> {
    if same_side_of_line(p1, poly[poly.succ(c)], poly[c], poly[poly.pred(c)]) {
        p1
    } else {
        p2
    }
}

/// γ(P[point_index]) on the side A through `P[a]` and `P[a−1]`.
pub(crate) fn gamma(
    poly: &Polygon,
    point_index: usize,
    a: usize,
    c: usize,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let side_a = Side::new(poly[a], poly[poly.pred(a)]);
    let side_c = Side::new(poly[c], poly[poly.pred(c)]);
    let candidates = gamma_intersections(poly, c, point_index, side_a, side_c, cfg)?;
    Some(on_polygon_side(poly, c, candidates))
}

/// Point on side B at distance `2·height(a−1)` from side C.
///
/// Used when side A is made tangent at `P[a−1]`: this becomes the triangle
/// vertex shared by sides A and B.
pub(crate) fn find_vertex_c_on_side_b(
    poly: &Polygon,
    a: usize,
    c: usize,
    side_b: Side,
    side_c: Side,
    cfg: GeomCfg,
) -> Result<Vector2<f64>, TriangleError> {
    let candidates = gamma_intersections(poly, c, poly.pred(a), side_b, side_c, cfg)
        .ok_or(TriangleError::VertexCOnSideB { c })?;
    Ok(on_polygon_side(poly, c, candidates))
}
