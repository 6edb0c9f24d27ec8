//! Random point sets in 2D (uniform clouds, radial-jitter polygons, replay tokens).
//!
//! Purpose
//! - Provide small, deterministic samplers for tests, benches and the CLI
//!   `random` command.
//!
//! Model
//! - `draw_point_cloud`: `count` points uniform in an axis-aligned box,
//!   optionally snapped to integers. The defaults mirror the classic regression
//!   harness: 4..=29 integer points in the central half of a 500×500 canvas.
//! - `draw_polygon_radial`: `n` equally spaced angles with bounded angular and
//!   radial jitter, reduced to their convex hull (CCW).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::util::convex_hull;

/// Point or vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Axis-aligned sampling box `[min, max)`.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

/// Uniform cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    pub bounds: Bounds2,
    /// Snap coordinates to integers (floor), like pixel input.
    pub integer: bool,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 4, max: 29 },
            bounds: Bounds2 {
                min: Vector2::new(125.0, 125.0),
                max: Vector2::new(375.0, 375.0),
            },
            integer: true,
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: PointCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: PointCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a uniform point cloud.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let Bounds2 { min, max } = cfg.bounds;
    (0..n)
        .map(|_| {
            let x = min.x + rng.gen::<f64>() * (max.x - min.x);
            let y = min.y + rng.gen::<f64>() * (max.y - min.y);
            if cfg.integer {
                Vector2::new(x.floor(), y.floor())
            } else {
                Vector2::new(x, y)
            }
        })
        .collect()
}

/// Draw a random convex polygon (CCW vertices) via radial jitter + convex hull.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Vector2<f64>> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    convex_hull(&pts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draws() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_point_cloud(CloudCfg::default(), tok);
        let b = draw_point_cloud(CloudCfg::default(), tok);
        assert_eq!(a, b);
        let c = draw_point_cloud(CloudCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);

        let p1 = draw_polygon_radial(RadialCfg::default(), tok);
        let p2 = draw_polygon_radial(RadialCfg::default(), tok);
        assert_eq!(p1, p2);
    }

    #[test]
    fn cloud_respects_count_and_bounds() {
        for index in 0..20 {
            let pts = draw_point_cloud(CloudCfg::default(), ReplayToken { seed: 3, index });
            assert!((4..=29).contains(&pts.len()));
            for p in pts {
                assert!((125.0..375.0).contains(&p.x) && (125.0..375.0).contains(&p.y));
                assert_eq!(p.x.fract(), 0.0);
            }
        }
    }

    #[test]
    fn radial_polygon_is_convex_ccw() {
        let poly = draw_polygon_radial(
            RadialCfg {
                vertex_count: PointCount::Fixed(9),
                ..RadialCfg::default()
            },
            ReplayToken { seed: 1, index: 0 },
        );
        assert!(poly.len() >= 3);
        for k in 0..poly.len() {
            let a = poly[k];
            let b = poly[(k + 1) % poly.len()];
            let c = poly[(k + 2) % poly.len()];
            assert!(super::super::util::cross(a, b, c) > 0.0);
        }
    }
}
