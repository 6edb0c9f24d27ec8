//! Angle predicates in degrees, range `[0, 360)`.
//!
//! The interval tests below decide on which side of a polygon vertex a line
//! leaves the polygon. They reproduce a fixed arithmetic (including the
//! integer truncation in `is_angle_between` and `opposite_angle(180) = 360`)
//! so that the sweep is deterministic across implementations.

use nalgebra::Vector2;

use super::types::GeomCfg;

/// Angle of the directed segment `a → b` w.r.t. the +x axis, in `[0, 360)`.
pub fn angle_of_line(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let y = b.y - a.y;
    let x = b.x - a.x;
    let angle = y.atan2(x) * 180.0 / std::f64::consts::PI;
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// `θ − 180` if `θ > 180`, else `θ + 180` (so 180 maps to 360).
#[inline]
pub fn opposite_angle(theta: f64) -> f64 {
    if theta > 180.0 {
        theta - 180.0
    } else {
        theta + 180.0
    }
}

/// Open-interval membership of `a1` between `a2` and `a3`.
///
/// Arc direction is picked from the sign of `trunc(a2 − a3) mod 180`; sub-degree
/// differences truncate to 0 and select the `(a2, a3)` ordering.
pub fn is_angle_between(a1: f64, a2: f64, a3: f64) -> bool {
    if ((a2 - a3) as i64) % 180 > 0 {
        a3 < a1 && a1 < a2
    } else {
        a2 < a1 && a1 < a3
    }
}

/// Membership of `a1` in the non-reflex arc spanned by `a2` and `a3`,
/// including arcs that wrap through 0/360.
pub fn is_angle_between_non_reflex(a1: f64, a2: f64, a3: f64, cfg: GeomCfg) -> bool {
    if (a2 - a3).abs() > 180.0 {
        let (hi, lo) = if a2 > a3 { (a2, a3) } else { (a3, a2) };
        (hi < a1 && cfg.less_or_equal(a1, 360.0)) || (cfg.less_or_equal(0.0, a1) && a1 < lo)
    } else {
        is_angle_between(a1, a2, a3)
    }
}

#[inline]
pub fn is_opposite_angle_between_non_reflex(a1: f64, a2: f64, a3: f64, cfg: GeomCfg) -> bool {
    is_angle_between_non_reflex(opposite_angle(a1), a2, a3, cfg)
}

/// Normalise the flush-edge angle to the half-plane facing a vertex.
///
/// Returns `Some(flush)` if the flush angle lies in the non-reflex arc
/// `(pred, succ)`, `Some(opposite_angle(flush))` if its opposite does, and
/// `None` otherwise.
pub fn flush_angle_between(flush: f64, pred: f64, succ: f64, cfg: GeomCfg) -> Option<f64> {
    if is_angle_between_non_reflex(flush, pred, succ, cfg) {
        Some(flush)
    } else if is_opposite_angle_between_non_reflex(flush, pred, succ, cfg) {
        Some(opposite_angle(flush))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn angle_of_line_covers_full_turn() {
        let o = vector![0.0, 0.0];
        assert_eq!(angle_of_line(o, vector![1.0, 0.0]), 0.0);
        assert!((angle_of_line(o, vector![0.0, 1.0]) - 90.0).abs() < 1e-12);
        assert!((angle_of_line(o, vector![-1.0, 0.0]) - 180.0).abs() < 1e-12);
        assert!((angle_of_line(o, vector![0.0, -1.0]) - 270.0).abs() < 1e-12);
        assert!((angle_of_line(o, vector![1.0, -1.0]) - 315.0).abs() < 1e-12);
    }

    #[test]
    fn opposite_angle_keeps_asymmetry_at_180() {
        assert_eq!(opposite_angle(10.0), 190.0);
        assert_eq!(opposite_angle(190.0), 10.0);
        assert_eq!(opposite_angle(180.0), 360.0);
        assert_eq!(opposite_angle(0.0), 180.0);
    }

    #[test]
    fn between_follows_truncated_difference() {
        // a2 > a3 by more than a degree: interval (a3, a2)
        assert!(is_angle_between(45.0, 90.0, 0.0));
        assert!(!is_angle_between(135.0, 90.0, 0.0));
        // a2 < a3: interval (a2, a3)
        assert!(is_angle_between(45.0, 0.0, 90.0));
        // open interval
        assert!(!is_angle_between(90.0, 90.0, 0.0));
        // sub-degree difference truncates to zero: only (a2, a3) is tested
        assert!(!is_angle_between(10.25, 10.5, 10.0));
    }

    #[test]
    fn non_reflex_handles_wrap() {
        let cfg = GeomCfg::default();
        // arc from 300 through 0 to 60
        assert!(is_angle_between_non_reflex(330.0, 60.0, 300.0, cfg));
        assert!(is_angle_between_non_reflex(30.0, 300.0, 60.0, cfg));
        assert!(is_angle_between_non_reflex(0.0, 300.0, 60.0, cfg));
        assert!(!is_angle_between_non_reflex(180.0, 60.0, 300.0, cfg));
        // no wrap
        assert!(is_angle_between_non_reflex(100.0, 60.0, 120.0, cfg));
        assert!(is_opposite_angle_between_non_reflex(280.0, 60.0, 120.0, cfg));
    }

    #[test]
    fn flush_angle_is_normalised_to_facing_half_plane() {
        let cfg = GeomCfg::default();
        assert_eq!(flush_angle_between(100.0, 60.0, 120.0, cfg), Some(100.0));
        assert_eq!(flush_angle_between(280.0, 60.0, 120.0, cfg), Some(100.0));
        assert_eq!(flush_angle_between(0.0, 60.0, 120.0, cfg), None);
    }
}
