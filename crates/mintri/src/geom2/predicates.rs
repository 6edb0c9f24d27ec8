//! Point/line primitives with ε-tolerant predicates.
//!
//! Expression order is kept fixed so results are reproducible bit for bit on
//! a given platform.

use nalgebra::Vector2;

use super::types::{GeomCfg, LineEq};

/// Sign of `x` as -1, 0 or 1 (`sign(0) = 0`).
#[inline]
pub fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn middle_point(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    Vector2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Distance from `p` to the line through `b` and `c`; 0 if `b == c` exactly.
pub fn distance_to_line(p: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let t1 = c.x - b.x;
    let t2 = b.y - p.y;
    let t3 = b.x - p.x;
    let t4 = c.y - b.y;
    let num = (t1 * t2 - t3 * t4).abs();
    let den = (t1 * t1 + t4 * t4).sqrt();
    if den != 0.0 {
        num / den
    } else {
        0.0
    }
}

/// Unsigned triangle area (expanded determinant).
pub fn area_of_triangle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let pos = a.x * b.y + a.y * c.x + b.x * c.y;
    let neg = b.y * c.x + a.x * c.y + a.y * b.x;
    (pos - neg).abs() / 2.0
}

/// Intersection of `a1·x + b1·y = c1` and `a2·x + b2·y = c2`.
///
/// `None` when the determinant is ε-close to zero (parallel or coincident).
pub fn intersect_coeffs(
    (a1, b1, c1): (f64, f64, f64),
    (a2, b2, c2): (f64, f64, f64),
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let det = a1 * b2 - a2 * b1;
    if cfg.almost_equal(det, 0.0) {
        return None;
    }
    Some(Vector2::new(
        (c1 * b2 - c2 * b1) / det,
        (c2 * a1 - c1 * a2) / det,
    ))
}

/// Intersection of line `(p1, q1)` with line `(p2, q2)`.
pub fn line_intersection(
    p1: Vector2<f64>,
    q1: Vector2<f64>,
    p2: Vector2<f64>,
    q2: Vector2<f64>,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let l1 = LineEq::through(p1, q1);
    let l2 = LineEq::through(p2, q2);
    intersect_coeffs((l1.a, l1.b, -l1.c), (l2.a, l2.b, -l2.c), cfg)
}

/// Proportional coefficients: `a1·b2 ≈ a2·b1 ∧ b1·c2 ≈ b2·c1 ∧ a1·c2 ≈ a2·c1`.
pub fn are_identical_lines(
    (a1, b1, c1): (f64, f64, f64),
    (a2, b2, c2): (f64, f64, f64),
    cfg: GeomCfg,
) -> bool {
    cfg.almost_equal(a1 * b2, a2 * b1)
        && cfg.almost_equal(b1 * c2, b2 * c1)
        && cfg.almost_equal(a1 * c2, a2 * c1)
}

/// Whether `p1` and `p2` evaluate to the same sign on the line through `a`, `b`.
/// A point exactly on the line only matches another point on the line.
pub fn same_side_of_line(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
) -> bool {
    let line = LineEq::through(a, b);
    sign(line.eval(p1)) == sign(line.eval(p2))
}

/// `|ps| + |pe| ≈ |se|`.
pub fn is_point_on_segment(
    p: Vector2<f64>,
    start: Vector2<f64>,
    end: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let d1 = distance(p, start);
    let d2 = distance(p, end);
    cfg.almost_equal(d1 + d2, distance(start, end))
}
