use super::angles::{angle_of_line, flush_angle_between, opposite_angle};
use super::predicates::{distance_to_line, line_intersection};
use super::*;
use nalgebra::{vector, Vector2};
use ::rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn hull_is_permutation_invariant() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pts: Vec<Vector2<f64>> = (0..40)
        .map(|_| Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
        .collect();
    let h1 = convex_hull(&pts);
    pts.reverse();
    pts.swap(3, 17);
    let h2 = convex_hull(&pts);
    assert_eq!(h1, h2);
    assert!(polygon_area(&h1) > 0.0);
}

#[test]
fn opposite_angles_of_a_segment_differ_by_half_turn() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let a = Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let b = Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let fwd = angle_of_line(a, b);
        let back = angle_of_line(b, a);
        assert!((0.0..360.0).contains(&fwd));
        let diff = (opposite_angle(fwd) - back).abs();
        assert!(diff < 1e-9 || (diff - 360.0).abs() < 1e-9);
    }
}

#[test]
fn flush_edge_angle_faces_square_corner() {
    // Corner (1, 1) of the CCW unit square; flush edge is the left side (0,1)→(0,0).
    let cfg = GeomCfg::default();
    let pred = angle_of_line(vector![1.0, 0.0], vector![1.0, 1.0]);
    let succ = angle_of_line(vector![0.0, 1.0], vector![1.0, 1.0]);
    let flush = angle_of_line(vector![0.0, 1.0], vector![0.0, 0.0]);
    assert_eq!(flush_angle_between(flush, pred, succ, cfg), None);
    // Bottom edge (0,0)→(1,0) seen from the top-left corner (0, 1).
    let pred = angle_of_line(vector![1.0, 1.0], vector![0.0, 1.0]);
    let succ = angle_of_line(vector![0.0, 0.0], vector![0.0, 1.0]);
    let flush = angle_of_line(vector![0.0, 0.0], vector![1.0, 0.0]);
    assert_eq!(flush_angle_between(flush, pred, succ, cfg), None);
}

#[test]
fn intersection_lies_on_both_lines() {
    let cfg = GeomCfg::default();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let pts: Vec<Vector2<f64>> = (0..4)
            .map(|_| Vector2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)))
            .collect();
        if let Some(x) = line_intersection(pts[0], pts[1], pts[2], pts[3], cfg) {
            assert!(distance_to_line(x, pts[0], pts[1]) < 1e-6);
            assert!(distance_to_line(x, pts[2], pts[3]) < 1e-6);
        }
    }
}
