//! Print the enclosing triangle for a few random integer clouds, the way the
//! classic regression harness draws them (4..=29 points in [125, 375)²).
//!
//! Usage:
//!   cargo run -p mintri --example regression_sets -- [count] [seed]

use mintri::api::{convex_hull, draw_point_cloud, min_enclosing_triangle, CloudCfg, CloudReplay};

fn main() {
    let mut args = std::env::args().skip(1);
    let count: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    for index in 0..count {
        let pts = draw_point_cloud(CloudCfg::default(), CloudReplay { seed, index });
        let hull = convex_hull(&pts);
        match min_enclosing_triangle(&pts) {
            Ok(t) => println!(
                "#{index:>3} n={:>2} hull={:>2} area={:>10.3} tri=[({:.2}, {:.2}) ({:.2}, {:.2}) ({:.2}, {:.2})]",
                pts.len(),
                hull.len(),
                t.area,
                t.vertices[0].x,
                t.vertices[0].y,
                t.vertices[1].x,
                t.vertices[1].y,
                t.vertices[2].x,
                t.vertices[2].y,
            ),
            Err(e) => println!("#{index:>3} n={:>2} error: {e}", pts.len()),
        }
    }
}
