//! Point-set readers for the `run` command.
//!
//! - `.csv`: columns `x` and `y` (any numeric dtype), read lazily with polars.
//! - `.json`: an array of `[x, y]` pairs.

use anyhow::{anyhow, bail, Context, Result};
use mintri::Vec2;
use polars::prelude::*;
use std::path::Path;

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vec2<f64>>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        _ => bail!("unsupported input {} (expected .csv or .json)", path.display()),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("{}: row {} has a missing coordinate", path.display(), row)),
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n4,1\n0,1\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[1], Vec2::new(4.0, 0.0));
    }

    #[test]
    fn reads_json_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0.5, 1.0], [2, 3]]").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Vec2::new(0.5, 1.0), Vec2::new(2.0, 3.0)]);
    }

    #[test]
    fn rejects_unknown_extension_and_missing_values() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("pts.txt");
        fs::write(&txt, "0 0").unwrap();
        assert!(read_points(&txt).is_err());

        let csv = dir.path().join("gap.csv");
        fs::write(&csv, "x,y\n0,0\n1,\n").unwrap();
        let err = read_points(&csv).unwrap_err().to_string();
        assert!(err.contains("row 1"), "{err}");
    }
}
