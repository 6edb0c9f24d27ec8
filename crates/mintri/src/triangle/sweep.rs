//! Rotating-support sweep over the flush side C.
//!
//! For every hull edge `(P[c−1], P[c])` the sweep moves two monotone
//! indices `a` and `b` forward until side B is tangent to the polygon (or
//! side B is flush and side A is re-made tangent), then builds and validates
//! the candidate triangle. Each index wraps at most a bounded number of times
//! per step, so the sweep is linear in the hull size.

use nalgebra::Vector2;
use tracing::{debug, trace, warn};

use super::classify::{intersects_above, intersects_below};
use super::gamma::{find_vertex_c_on_side_b, gamma, height, height_of_point};
use super::types::{MinTriangle, Side, Sides, TriangleError, ValidationFlag};
use super::validate::{local_minimal_triangle, middle_point_of_side_b};
use crate::geom2::predicates::area_of_triangle;
use crate::geom2::{GeomCfg, Polygon};

/// Sweep state for one polygon.
pub(crate) struct Sweep<'p> {
    poly: &'p Polygon,
    cfg: GeomCfg,
    a: usize,
    b: usize,
    c: usize,
    best: Option<MinTriangle>,
}

impl<'p> Sweep<'p> {
    /// Requires a CCW convex polygon with more than three vertices.
    pub(crate) fn new(poly: &'p Polygon, cfg: GeomCfg) -> Self {
        Self {
            poly,
            cfg,
            a: 1,
            b: 2,
            c: 0,
            best: None,
        }
    }

    /// Upper bound on index advances per loop; hit only on degenerate input.
    #[inline]
    fn step_cap(&self) -> usize {
        2 * self.poly.len()
    }

    /// Run every flush edge and return the smallest validated triangle.
    pub(crate) fn run(mut self) -> Result<MinTriangle, TriangleError> {
        for c in 0..self.poly.len() {
            self.c = c;
            self.advance_b_to_right_chain();
            self.move_a_if_low_and_b_if_high();
            self.search_for_b_tangency();

            let (flag, sides) = self.update_sides()?;
            trace!(c, a = self.a, b = self.b, ?flag, "sides set");

            match local_minimal_triangle(self.poly, self.a, self.b, flag, &sides, self.cfg) {
                Some(vertices) => self.offer(vertices),
                None => trace!(c, "candidate rejected"),
            }
        }
        self.best.ok_or(TriangleError::NoValidTriangle)
    }

    fn offer(&mut self, vertices: [Vector2<f64>; 3]) {
        let area = area_of_triangle(vertices[0], vertices[1], vertices[2]);
        let improves = self.best.map_or(true, |best| area < best.area);
        if improves {
            debug!(c = self.c, area, "new minimum");
            self.best = Some(MinTriangle { vertices, area });
        }
    }

    #[inline]
    fn h(&self, i: usize) -> f64 {
        height(self.poly, i, self.c)
    }

    #[inline]
    fn gamma_of(&self, i: usize) -> Option<Vector2<f64>> {
        gamma(self.poly, i, self.a, self.c, self.cfg)
    }

    fn cap_hit(&self, stage: &'static str) {
        warn!(
            stage,
            c = self.c,
            a = self.a,
            b = self.b,
            n = self.poly.len(),
            "index advance cap reached"
        );
    }

    /// Move `b` while the next vertex is at least as high above C.
    fn advance_b_to_right_chain(&mut self) {
        let mut steps = 0;
        while self.cfg.greater_or_equal(self.h(self.poly.succ(self.b)), self.h(self.b)) {
            if steps == self.step_cap() {
                self.cap_hit("advance_b_to_right_chain");
                break;
            }
            self.poly.advance(&mut self.b);
            steps += 1;
        }
    }

    /// While `b` is higher than `a`: advance `b` if the line through γ(a)
    /// and `P[b]` enters the polygon below `P[b]`, otherwise advance `a`.
    fn move_a_if_low_and_b_if_high(&mut self) {
        let mut steps = 0;
        while self.h(self.b) > self.h(self.a) {
            if steps == self.step_cap() {
                self.cap_hit("move_a_if_low_and_b_if_high");
                break;
            }
            let move_b = self
                .gamma_of(self.a)
                .is_some_and(|g| intersects_below(self.poly, g, self.b, self.c, self.cfg));
            if move_b {
                self.poly.advance(&mut self.b);
            } else {
                self.poly.advance(&mut self.a);
            }
            steps += 1;
        }
    }

    /// Advance `b` while the line through γ(b) and `P[b]` still enters the
    /// polygon below `P[b]` and `b` is not lower than `a−1`.
    fn search_for_b_tangency(&mut self) {
        let mut steps = 0;
        loop {
            let below = self
                .gamma_of(self.b)
                .is_some_and(|g| intersects_below(self.poly, g, self.b, self.c, self.cfg));
            let high_enough = self
                .cfg
                .greater_or_equal(self.h(self.b), self.h(self.poly.pred(self.a)));
            if !(below && high_enough) {
                break;
            }
            if steps == self.step_cap() {
                self.cap_hit("search_for_b_tangency");
                break;
            }
            self.poly.advance(&mut self.b);
            steps += 1;
        }
    }

    /// Ties in height go to the flush branch: B-tangency needs `b` strictly
    /// above `a−1` beyond ε, otherwise rounding on parallel edges reaches the
    /// tangent branch with side A parallel to C.
    fn is_not_b_tangency(&self) -> bool {
        let above = self
            .gamma_of(self.b)
            .is_some_and(|g| intersects_above(self.poly, g, self.b, self.c, self.cfg));
        above
            || self
                .cfg
                .less_or_equal(self.h(self.b), self.h(self.poly.pred(self.a)))
    }

    /// Sides C and A flush with their edges, then side B (and maybe A again)
    /// depending on whether B reached tangency.
    fn update_sides(&self) -> Result<(ValidationFlag, Sides), TriangleError> {
        let poly = self.poly;
        let (a, b, c) = (self.a, self.b, self.c);
        let side_c = Side::new(poly[poly.pred(c)], poly[c]);
        let mut side_a = Side::new(poly[poly.pred(a)], poly[a]);

        if self.is_not_b_tangency() {
            let side_b = Side::new(poly[poly.pred(b)], poly[b]);
            let sides = Sides {
                a: side_a,
                b: side_b,
                c: side_c,
            };
            let a_low = middle_point_of_side_b(&sides, self.cfg)
                .is_some_and(|m| height_of_point(poly, m, c) < self.h(poly.pred(a)));
            if a_low {
                let vertex = find_vertex_c_on_side_b(poly, a, c, side_b, side_c, self.cfg)?;
                side_a = Side::new(poly[poly.pred(a)], vertex);
                Ok((
                    ValidationFlag::SideATangent,
                    Sides {
                        a: side_a,
                        ..sides
                    },
                ))
            } else {
                Ok((ValidationFlag::SidesFlush, sides))
            }
        } else {
            let start = self.gamma_of(b).ok_or(TriangleError::SideBGamma { c })?;
            Ok((
                ValidationFlag::SideBTangent,
                Sides {
                    a: side_a,
                    b: Side::new(start, poly[b]),
                    c: side_c,
                },
            ))
        }
    }
}

/// Hulls with at most three vertices are their own answer, repeated
/// cyclically to three points.
pub(crate) fn trivial_triangle(poly: &Polygon) -> MinTriangle {
    let n = poly.len();
    let vertices = [poly[0], poly[1 % n], poly[2 % n]];
    MinTriangle {
        vertices,
        area: area_of_triangle(vertices[0], vertices[1], vertices[2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Polygon {
        Polygon::from_ccw(vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ])
    }

    #[test]
    fn first_step_on_square_is_b_tangent() {
        let p = unit_square();
        let mut s = Sweep::new(&p, GeomCfg::default());
        s.advance_b_to_right_chain();
        s.move_a_if_low_and_b_if_high();
        s.search_for_b_tangency();
        assert_eq!((s.a, s.b), (1, 2));
        let (flag, sides) = s.update_sides().unwrap();
        assert_eq!(flag, ValidationFlag::SideBTangent);
        assert!(GeomCfg::default().points_equal(sides.b.start, vector![2.0, 0.0]));
        assert_eq!(sides.b.end, p[2]);
    }

    #[test]
    fn square_sweep_area_is_two() {
        let p = unit_square();
        let t = Sweep::new(&p, GeomCfg::default()).run().unwrap();
        assert!((t.area - 2.0).abs() < 1e-9, "area = {}", t.area);
    }

    #[test]
    fn trivial_cases_repeat_vertices() {
        let one = Polygon::from_ccw(vec![vector![3.0, 4.0]]);
        let t = trivial_triangle(&one);
        assert_eq!(t.vertices, [vector![3.0, 4.0]; 3]);
        assert_eq!(t.area, 0.0);

        let two = Polygon::from_ccw(vec![vector![0.0, 0.0], vector![2.0, 0.0]]);
        let t = trivial_triangle(&two);
        assert_eq!(t.vertices[2], vector![0.0, 0.0]);
        assert_eq!(t.area, 0.0);
    }
}
