//! Point-file loading (CSV / Parquet via polars, JSON via serde) and JSON output.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hullcmp::api::Point;
use nalgebra::Vector2;
use polars::prelude::*;
use serde::Serialize;

/// Load points from `.csv`, `.parquet` (integer columns `x`, `y`) or
/// `.json` (array of `[x, y]`).
pub fn load_points(input: &str) -> Result<Vec<Point>> {
    let path = Path::new(input);
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("reading {input}"))?;
            frame_to_points(lf).with_context(|| format!("parsing {input}"))
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {input}"))?;
            frame_to_points(lf).with_context(|| format!("parsing {input}"))
        }
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {input}"))?;
            let pairs: Vec<[i32; 2]> =
                serde_json::from_slice(&bytes).with_context(|| format!("parsing {input}"))?;
            Ok(from_pairs(&pairs))
        }
        _ => bail!("unsupported input {input}: expected .csv, .parquet or .json"),
    }
}

fn frame_to_points(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf.select([col("x"), col("y")]).collect()?;
    let xs = integer_column(&df, "x")?;
    let ys = integer_column(&df, "y")?;
    xs.i32()?
        .into_iter()
        .zip(ys.i32()?.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => bail!("missing coordinate in row {row}"),
        })
        .collect()
}

/// Column `name` as `Int32`. Float or string columns are rejected rather than
/// truncated; integers outside the `i32` range fail the strict cast.
fn integer_column(df: &DataFrame, name: &str) -> Result<Series> {
    let s = df.column(name)?;
    if !s.dtype().is_integer() {
        bail!("column {name} must hold integers, found {}", s.dtype());
    }
    s.strict_cast(&DataType::Int32)
        .with_context(|| format!("column {name} does not fit in i32"))
}

pub fn to_pairs(points: &[Point]) -> Vec<[i32; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn from_pairs(pairs: &[[i32; 2]]) -> Vec<Point> {
    pairs.iter().map(|&[x, y]| Vector2::new(x, y)).collect()
}

/// Pretty-print `value` to `out`, creating parent directories.
pub fn write_json<T: Serialize>(out: &str, value: &T) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out_path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}
