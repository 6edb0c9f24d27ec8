//! Basic 2D types and the tolerance used by every predicate.
//!
//! - `GeomCfg`: carries the ε used by all tolerant comparisons.
//! - `LineEq`: line `a·x + b·y + c = 0` derived from two points.
//!
//! Code cross-refs: `predicates`, `angles`, `triangle::sweep`

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
///
/// All comparisons scale ε by `max(1, |x|, |y|)`, so it acts as an absolute
/// tolerance below 1 and a relative one above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-5 }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }

    /// `|x − y| ≤ ε·max(1, |x|, |y|)`.
    #[inline]
    pub fn almost_equal(&self, x: f64, y: f64) -> bool {
        (x - y).abs() <= self.eps * 1f64.max(x.abs()).max(y.abs())
    }

    #[inline]
    pub fn greater_or_equal(&self, x: f64, y: f64) -> bool {
        x > y || self.almost_equal(x, y)
    }

    #[inline]
    pub fn less_or_equal(&self, x: f64, y: f64) -> bool {
        x < y || self.almost_equal(x, y)
    }

    /// Coordinate-wise `almost_equal`.
    #[inline]
    pub fn points_equal(&self, p: Vector2<f64>, q: Vector2<f64>) -> bool {
        self.almost_equal(p.x, q.x) && self.almost_equal(p.y, q.y)
    }
}

/// Line `a·x + b·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEq {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEq {
    /// Line through `p` and `q`.
    ///
    /// Pre: `p != q`. Coincident points give the null line `(0, 0, 0)`, which
    /// every intersection routine reports as parallel.
    #[inline]
    pub fn through(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        let a = q.y - p.y;
        let b = p.x - q.x;
        let c = (-p.y) * b - p.x * a;
        Self { a, b, c }
    }

    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Length of the normal `(a, b)`.
    #[inline]
    pub fn normal_norm(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}
