//! Data types for the enclosing-triangle sweep.
//!
//! Kept small and explicit so `gamma`, `classify`, `sweep` and `validate` read
//! as straight geometry.

use std::fmt;

use nalgebra::Vector2;

use crate::geom2::LineEq;

/// Side of the enclosing triangle, carried by the line through `start` and `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Side {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Side {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn line(&self) -> LineEq {
        LineEq::through(self.start, self.end)
    }
}

/// The three support sides of the current sweep step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sides {
    pub a: Side,
    pub b: Side,
    pub c: Side,
}

/// Which tangency configuration produced a candidate; decides how its side
/// midpoints are validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationFlag {
    /// Side A touches the polygon only at `P[a−1]`.
    SideATangent,
    /// Side B touches the polygon only at `P[b]`.
    SideBTangent,
    /// Sides A and B are flush with polygon edges.
    SidesFlush,
}

/// Where a line through a polygon vertex leaves the polygon, relative to the
/// flush side C.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Above,
    Below,
    Critical,
}

/// Minimum-area enclosing triangle.
///
/// `vertices` are `[A, B, C]` with A = B∩C, B = A∩C, C = A∩B for the sweep's
/// sides. For hulls with at most three vertices the hull itself is returned
/// (repeated cyclically), possibly with zero area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinTriangle {
    pub vertices: [Vector2<f64>; 3],
    pub area: f64,
}

/// Errors surfaced by `min_enclosing_triangle`.
#[derive(Clone, Debug, PartialEq)]
pub enum TriangleError {
    /// No input points.
    EmptyInput,
    /// A coordinate is NaN or infinite.
    NonFiniteInput { index: usize },
    /// γ(b) was required for a B-tangent side but could not be computed.
    SideBGamma { c: usize },
    /// The vertex on side B at height 2·h(a−1) could not be computed.
    VertexCOnSideB { c: usize },
    /// No sweep step produced a candidate that passed validation.
    NoValidTriangle,
}

impl TriangleError {
    /// True for the two fatal sweep conditions (`SideBGamma`,
    /// `VertexCOnSideB`) that a valid convex polygon cannot trigger.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            TriangleError::SideBGamma { .. } | TriangleError::VertexCOnSideB { .. }
        )
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangleError::EmptyInput => write!(f, "point set is empty"),
            TriangleError::NonFiniteInput { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            TriangleError::SideBGamma { c } => {
                write!(f, "side B gamma undefined (flush edge c = {})", c)
            }
            TriangleError::VertexCOnSideB { c } => {
                write!(f, "vertex C on side B undefined (flush edge c = {})", c)
            }
            TriangleError::NoValidTriangle => {
                write!(f, "no locally minimal triangle passed validation")
            }
        }
    }
}

impl std::error::Error for TriangleError {}

/// Conversion of caller point types (integer or float) into `Vector2<f64>`.
pub trait AsPoint2 {
    fn to_point2(&self) -> Vector2<f64>;
}

impl AsPoint2 for Vector2<f64> {
    #[inline]
    fn to_point2(&self) -> Vector2<f64> {
        *self
    }
}

impl AsPoint2 for Vector2<f32> {
    #[inline]
    fn to_point2(&self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl AsPoint2 for Vector2<i32> {
    #[inline]
    fn to_point2(&self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl AsPoint2 for [f64; 2] {
    #[inline]
    fn to_point2(&self) -> Vector2<f64> {
        Vector2::new(self[0], self[1])
    }
}

impl AsPoint2 for [i32; 2] {
    #[inline]
    fn to_point2(&self) -> Vector2<f64> {
        Vector2::new(self[0] as f64, self[1] as f64)
    }
}

impl AsPoint2 for (f64, f64) {
    #[inline]
    fn to_point2(&self) -> Vector2<f64> {
        Vector2::new(self.0, self.1)
    }
}

impl AsPoint2 for (i32, i32) {
    #[inline]
    fn to_point2(&self) -> Vector2<f64> {
        Vector2::new(self.0 as f64, self.1 as f64)
    }
}
