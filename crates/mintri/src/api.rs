//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Not a public API. A convenience surface for the CLI, benches and the
//!   Python bindings; breaking changes are allowed.

// Enclosing triangle
pub use crate::triangle::{
    min_enclosing_triangle, min_enclosing_triangle_of_polygon, min_enclosing_triangle_with,
    AsPoint2, MinTriangle, TriangleError,
};
// 2D kernel
pub use crate::geom2::predicates::area_of_triangle;
pub use crate::geom2::{convex_hull, polygon_area, GeomCfg, Polygon};
// Samplers
pub use crate::geom2::rand::{
    draw_point_cloud, draw_polygon_radial, Bounds2 as Bounds2D, CloudCfg, PointCount, RadialCfg,
    ReplayToken as CloudReplay,
};
