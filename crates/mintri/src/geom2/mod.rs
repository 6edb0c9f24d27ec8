//! 2D geometry kernel for the enclosing-triangle sweep.
//!
//! Purpose
//! - Points are `nalgebra::Vector2<f64>`; convex polygons are CCW vertex lists
//!   with cyclic indexing (`Polygon`).
//! - Every predicate takes the ε tolerance from a `GeomCfg` so callers (and
//!   tests) can tune it; nothing reads a global.
//!
//! Contents
//! - `types`: `GeomCfg` (tolerant comparisons), `LineEq`.
//! - `predicates`: distances, areas, line intersections, side/segment tests.
//! - `angles`: angle-in-degrees predicates used by the intersection classifier.
//! - `polygon`, `util`: cyclic polygon and the monotone-chain hull.
//! - `rand`: deterministic samplers for tests, benches and the CLI.

pub mod angles;
pub mod polygon;
pub mod predicates;
pub mod rand;
mod types;
mod util;

pub use polygon::Polygon;
pub use types::{GeomCfg, LineEq};
pub use util::{convex_hull, polygon_area};

#[cfg(test)]
mod tests;
