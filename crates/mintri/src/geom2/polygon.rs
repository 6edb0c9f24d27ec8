//! Convex polygon with cyclic index arithmetic.
//!
//! Invariants (not re-checked here):
//! - Vertices are distinct and in counterclockwise order.
//! - Indices passed to `succ`/`pred`/`advance` are `< len()`.

use std::ops::Index;

use nalgebra::Vector2;

use super::util::convex_hull;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pts: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Wrap vertices that are already a CCW convex polygon.
    pub fn from_ccw(pts: Vec<Vector2<f64>>) -> Self {
        Self { pts }
    }

    /// Convex hull of an arbitrary point set.
    pub fn hull_of(points: &[Vector2<f64>]) -> Self {
        Self {
            pts: convex_hull(points),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    #[inline]
    pub fn succ(&self, i: usize) -> usize {
        (i + 1) % self.pts.len()
    }

    #[inline]
    pub fn pred(&self, i: usize) -> usize {
        if i == 0 {
            self.pts.len() - 1
        } else {
            i - 1
        }
    }

    #[inline]
    pub fn advance(&self, i: &mut usize) {
        *i = self.succ(*i);
    }
}

impl Index<usize> for Polygon {
    type Output = Vector2<f64>;

    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.pts[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn cyclic_indices_wrap() {
        let p = Polygon::from_ccw(vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]);
        assert_eq!(p.succ(3), 0);
        assert_eq!(p.pred(0), 3);
        assert_eq!(p.pred(2), 1);
        let mut i = 3;
        p.advance(&mut i);
        assert_eq!(i, 0);
        assert_eq!(p[2], vector![1.0, 1.0]);
    }

    #[test]
    fn hull_of_unordered_square_is_ccw() {
        let p = Polygon::hull_of(&[
            vector![1.0, 1.0],
            vector![0.0, 0.0],
            vector![0.5, 0.5],
            vector![0.0, 1.0],
            vector![1.0, 0.0],
        ]);
        assert_eq!(
            p.vertices(),
            &[
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0]
            ]
        );
    }
}
