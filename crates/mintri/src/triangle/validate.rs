//! Candidate construction and the midpoint-touch test.
//!
//! A triangle is locally minimal only if the midpoint of every side touches
//! the polygon. How "touches" is checked depends on the validation flag.

use nalgebra::Vector2;

use super::types::{Side, Sides, ValidationFlag};
use crate::geom2::predicates::{is_point_on_segment, line_intersection, middle_point};
use crate::geom2::{GeomCfg, Polygon};

#[inline]
fn intersect_sides(s: Side, t: Side, cfg: GeomCfg) -> Option<Vector2<f64>> {
    line_intersection(s.start, s.end, t.start, t.end, cfg)
}

/// Midpoint of side B between its intersections with C and with A.
pub(crate) fn middle_point_of_side_b(sides: &Sides, cfg: GeomCfg) -> Option<Vector2<f64>> {
    let vertex_a = intersect_sides(sides.b, sides.c, cfg)?;
    let vertex_c = intersect_sides(sides.b, sides.a, cfg)?;
    Some(middle_point(vertex_a, vertex_c))
}

/// Triangle `[A, B, C]` bounded by the three sides, if it is locally minimal.
///
/// `None` when two sides are parallel or a midpoint misses the polygon.
pub(crate) fn local_minimal_triangle(
    poly: &Polygon,
    a: usize,
    b: usize,
    flag: ValidationFlag,
    sides: &Sides,
    cfg: GeomCfg,
) -> Option<[Vector2<f64>; 3]> {
    let vertex_c = intersect_sides(sides.a, sides.b, cfg)?;
    let vertex_b = intersect_sides(sides.a, sides.c, cfg)?;
    let vertex_a = intersect_sides(sides.b, sides.c, cfg)?;
    let vertices = [vertex_a, vertex_b, vertex_c];
    is_valid_minimal_triangle(poly, a, b, flag, sides, &vertices, cfg).then_some(vertices)
}

/// Midpoint-touch property for each side.
///
/// - Side A: equals `P[a−1]` when A is tangent, else lies on side A's segment.
/// - Side B: equals `P[b]` when B is tangent, else lies on side B's segment.
/// - Side C: accepted when both A and B are flush, else lies on side C's segment.
pub(crate) fn is_valid_minimal_triangle(
    poly: &Polygon,
    a: usize,
    b: usize,
    flag: ValidationFlag,
    sides: &Sides,
    [vertex_a, vertex_b, vertex_c]: &[Vector2<f64>; 3],
    cfg: GeomCfg,
) -> bool {
    let mid_a = middle_point(*vertex_b, *vertex_c);
    let mid_b = middle_point(*vertex_a, *vertex_c);
    let mid_c = middle_point(*vertex_a, *vertex_b);

    let side_a_valid = match flag {
        ValidationFlag::SideATangent => cfg.points_equal(mid_a, poly[poly.pred(a)]),
        _ => is_point_on_segment(mid_a, sides.a.start, sides.a.end, cfg),
    };
    let side_b_valid = match flag {
        ValidationFlag::SideBTangent => cfg.points_equal(mid_b, poly[b]),
        _ => is_point_on_segment(mid_b, sides.b.start, sides.b.end, cfg),
    };
    let side_c_valid = flag == ValidationFlag::SidesFlush
        || is_point_on_segment(mid_c, sides.c.start, sides.c.end, cfg);

    side_a_valid && side_b_valid && side_c_valid
}
