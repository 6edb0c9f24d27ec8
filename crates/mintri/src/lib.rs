//! Minimum-area enclosing triangles of planar point sets.
//!
//! Layout
//! - `geom2`: ε-tolerant 2D kernel (lines, angles, cyclic convex polygon,
//!   monotone-chain hull) and deterministic point samplers.
//! - `triangle`: the rotating-support sweep and its public entry points.
//! - `api`: curated re-exports for the CLI and the Python bindings.
//!
//! API Policy
//! - Internal to this workspace. Breaking changes are fine when they make the
//!   geometry clearer.

pub mod api;
pub mod geom2;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Polygon};
pub use nalgebra::Vector2 as Vec2;
pub use triangle::{
    min_enclosing_triangle, min_enclosing_triangle_of_polygon, min_enclosing_triangle_with,
    MinTriangle, TriangleError,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_point_cloud, draw_polygon_radial, Bounds2, CloudCfg, PointCount, RadialCfg,
        ReplayToken,
    };
    pub use crate::geom2::{convex_hull, polygon_area, GeomCfg, Polygon};
    pub use crate::triangle::{
        min_enclosing_triangle, min_enclosing_triangle_with, AsPoint2, MinTriangle, TriangleError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
