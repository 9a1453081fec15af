//! Curve loading from CSV (columns `x`, `y`).

use anyhow::{anyhow, Context, Result};
use curvediff::Point;
use polars::prelude::*;
use std::path::Path;

/// How the `x` column is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxis {
    Plain,
    /// POSIX seconds; points keep the instant for duration-based ratios.
    PosixSeconds,
}

pub fn read_curve(path: &Path, axis: XAxis) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(match axis {
                XAxis::Plain => Point::new(x, y),
                XAxis::PosixSeconds => Point::from_posix_x(x, y),
            }),
            _ => Err(anyhow!("{}: missing value in row {}", path.display(), row + 1)),
        })
        .collect()
}
