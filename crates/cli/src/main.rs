use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mintri::api::{
    convex_hull, draw_point_cloud, min_enclosing_triangle_with, CloudCfg, CloudReplay, GeomCfg,
    PointCount,
};
use mintri::Vec2;
use serde::Serialize;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Minimum-area enclosing triangle of a planar point set")]
struct Cmd {
    /// Tolerance for the sweep's ε-comparisons
    #[arg(long, global = true, default_value_t = 1e-5)]
    eps: f64,

    /// Log sweep progress (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read points from CSV (x,y columns) or JSON ([[x, y], ...]) and write the triangle
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Draw a random integer cloud (regression-harness style) and write the triangle
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Fixed point count; default draws 4..=29 points
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Result file written by `run` and `random`.
#[derive(Debug, Serialize)]
struct TriangleOut {
    triangle: [[f64; 2]; 3],
    area: f64,
    hull_vertices: Vec<[f64; 2]>,
    input_points: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    let cfg = GeomCfg::with_eps(cmd.eps);
    match cmd.action {
        Action::Run { input, out } => run(&input, &out, cfg),
        Action::Random {
            seed,
            index,
            count,
            out,
        } => random(seed, index, count, &out, cfg),
        Action::Report => report(),
    }
}

fn run(input: &str, out: &str, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input, out, eps = cfg.eps, "run");
    let pts = input::read_points(input)?;
    let result = solve(&pts, cfg).with_context(|| format!("enclosing triangle of {input}"))?;
    write_result(out, &result)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(serde_json::json!({
            "command": "run",
            "input": input,
            "eps": cfg.eps,
        })),
    )?;
    println!("area = {}", result.area);
    Ok(())
}

fn random(seed: u64, index: u64, count: Option<usize>, out: &str, cfg: GeomCfg) -> Result<()> {
    tracing::info!(seed, index, count = ?count, out, "random");
    let cloud = CloudCfg {
        count: count.map_or(CloudCfg::default().count, PointCount::Fixed),
        ..CloudCfg::default()
    };
    let pts = draw_point_cloud(cloud, CloudReplay { seed, index });
    let result = solve(&pts, cfg).with_context(|| format!("random cloud seed={seed} index={index}"))?;
    write_result(out, &result)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(serde_json::json!({
            "command": "random",
            "seed": seed,
            "index": index,
            "count": pts.len(),
            "eps": cfg.eps,
            "points": pts.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        })),
    )?;
    println!("area = {}", result.area);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document(serde_json::json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn solve(pts: &[Vec2<f64>], cfg: GeomCfg) -> Result<TriangleOut> {
    let t = min_enclosing_triangle_with(pts, cfg)?;
    let hull = convex_hull(pts);
    tracing::info!(
        points = pts.len(),
        hull = hull.len(),
        area = t.area,
        "triangle"
    );
    Ok(TriangleOut {
        triangle: t.vertices.map(|v| [v.x, v.y]),
        area: t.area,
        hull_vertices: hull.iter().map(|p| [p.x, p.y]).collect(),
        input_points: pts.len(),
    })
}

fn write_result(out: &str, result: &TriangleOut) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(result)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}
