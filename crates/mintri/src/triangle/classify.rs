//! Where does the line (γ(p), p) leave the polygon at vertex p?
//!
//! The answer is relative to the flush side C: `Below` means the line enters
//! the polygon towards lower heights, `Above` towards higher heights, and
//! `Critical` means it only touches the polygon at p.

use nalgebra::Vector2;

use super::gamma::height;
use super::types::Crossing;
use crate::geom2::angles::{angle_of_line, flush_angle_between, is_angle_between_non_reflex};
use crate::geom2::{GeomCfg, Polygon};

/// Classify a line through `P[i]` with direction `line_angle` (degrees).
pub(crate) fn intersects(
    poly: &Polygon,
    line_angle: f64,
    i: usize,
    c: usize,
    cfg: GeomCfg,
) -> Crossing {
    let pred_idx = poly.pred(i);
    let succ_idx = poly.succ(i);
    let angle_pred = angle_of_line(poly[pred_idx], poly[i]);
    let angle_succ = angle_of_line(poly[succ_idx], poly[i]);
    let angle_flush = angle_of_line(poly[poly.pred(c)], poly[c]);

    match flush_angle_between(angle_flush, angle_pred, angle_succ, cfg) {
        Some(flush) => {
            if is_angle_between_non_reflex(line_angle, angle_pred, flush, cfg)
                || cfg.almost_equal(line_angle, angle_pred)
            {
                return intersects_above_or_below(poly, pred_idx, i, c);
            }
            if is_angle_between_non_reflex(line_angle, angle_succ, flush, cfg)
                || cfg.almost_equal(line_angle, angle_succ)
            {
                return intersects_above_or_below(poly, succ_idx, i, c);
            }
        }
        None => {
            let through_pred =
                cfg.almost_equal(line_angle, angle_pred) && !cfg.almost_equal(line_angle, angle_flush);
            let through_succ =
                cfg.almost_equal(line_angle, angle_succ) && !cfg.almost_equal(line_angle, angle_flush);
            if is_angle_between_non_reflex(line_angle, angle_pred, angle_succ, cfg)
                || through_pred
                || through_succ
            {
                return Crossing::Below;
            }
        }
    }
    Crossing::Critical
}

/// `Above` iff the neighbour `j` of `i` is strictly higher than `i`.
#[inline]
pub(crate) fn intersects_above_or_below(poly: &Polygon, j: usize, i: usize, c: usize) -> Crossing {
    if height(poly, j, c) > height(poly, i, c) {
        Crossing::Above
    } else {
        Crossing::Below
    }
}

/// Does the line `P[i] → γ` cross the polygon below `P[i]`?
#[inline]
pub(crate) fn intersects_below(
    poly: &Polygon,
    gamma: Vector2<f64>,
    i: usize,
    c: usize,
    cfg: GeomCfg,
) -> bool {
    let angle = angle_of_line(poly[i], gamma);
    intersects(poly, angle, i, c, cfg) == Crossing::Below
}

/// Does the line `γ → P[i]` cross the polygon above `P[i]`?
#[inline]
pub(crate) fn intersects_above(
    poly: &Polygon,
    gamma: Vector2<f64>,
    i: usize,
    c: usize,
    cfg: GeomCfg,
) -> bool {
    let angle = angle_of_line(gamma, poly[i]);
    intersects(poly, angle, i, c, cfg) == Crossing::Above
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn hexagon() -> Polygon {
        let s = 3f64.sqrt() / 2.0;
        Polygon::from_ccw(vec![
            vector![-1.0, 0.0],
            vector![-0.5, -s],
            vector![0.5, -s],
            vector![1.0, 0.0],
            vector![0.5, s],
            vector![-0.5, s],
        ])
    }

    #[test]
    fn line_into_the_polygon_is_below() {
        let cfg = GeomCfg::default();
        let p = hexagon();
        // From P3 = (1, 0) towards a point far down-right along the bottom edge line.
        let g = vector![2.5, -3f64.sqrt() / 2.0];
        assert_eq!(intersects(&p, angle_of_line(p[3], g), 3, 0, cfg), Crossing::Below);
        assert!(intersects_below(&p, g, 3, 0, cfg));
    }

    #[test]
    fn line_touching_only_at_vertex_is_critical() {
        let cfg = GeomCfg::default();
        let p = hexagon();
        // Down-left from P3, outside the hexagon.
        let g = vector![0.0, -3f64.sqrt()];
        assert_eq!(intersects(&p, angle_of_line(p[3], g), 3, 0, cfg), Crossing::Critical);
        assert!(!intersects_below(&p, g, 3, 0, cfg));
    }

    #[test]
    fn flush_branch_compares_neighbour_heights() {
        let cfg = GeomCfg::default();
        let p = hexagon();
        // Vertical line up into P4 from below: it runs between P3 and the flush
        // direction, and P3 is higher than P4 over the flush edge P5→P0.
        let g = vector![0.5, -3f64.sqrt() / 2.0];
        assert_eq!(intersects(&p, angle_of_line(g, p[4]), 4, 0, cfg), Crossing::Above);
        assert!(intersects_above(&p, g, 4, 0, cfg));
        assert_eq!(intersects_above_or_below(&p, 3, 4, 0), Crossing::Above);
        assert_eq!(intersects_above_or_below(&p, 5, 4, 0), Crossing::Below);
    }
}
