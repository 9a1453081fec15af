use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use curvediff::CurveDiffCalculator;

mod input;
mod report;

use input::{read_curve, XAxis};
use report::{DiffReport, PointOut, PolygonOut};

#[derive(Parser)]
#[command(name = "curvediff-cli")]
#[command(about = "Compare two sampled curves: crossings, regions, relative difference")]
struct Cmd {
    /// Log level for diagnostics on stderr
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Args)]
struct CurvePair {
    /// CSV with numeric `x` and `y` columns
    #[arg(long)]
    curve1: PathBuf,
    #[arg(long)]
    curve2: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Print the crossings between the curves as JSON
    Intersections {
        #[command(flatten)]
        curves: CurvePair,
    },
    /// Print the regions between the curves (area + corners) as JSON
    Polygons {
        #[command(flatten)]
        curves: CurvePair,
    },
    /// Relative difference; `x` is read as POSIX seconds
    Diff {
        #[command(flatten)]
        curves: CurvePair,
        /// Normalization maximum (e.g. venue capacity)
        #[arg(long)]
        max: f64,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Intersections { curves } => intersections(&curves),
        Action::Polygons { curves } => polygons(&curves),
        Action::Diff { curves, max, out } => diff(&curves, max, out.as_deref()),
    }
}

fn calculator(curves: &CurvePair, axis: XAxis, max: f64) -> Result<CurveDiffCalculator> {
    let c1 = read_curve(&curves.curve1, axis)?;
    let c2 = read_curve(&curves.curve2, axis)?;
    tracing::info!(
        curve1 = %curves.curve1.display(),
        curve2 = %curves.curve2.display(),
        len1 = c1.len(),
        len2 = c2.len(),
        "curves loaded"
    );
    Ok(CurveDiffCalculator::new(c1, c2, max)?)
}

fn intersections(curves: &CurvePair) -> Result<()> {
    let calc = calculator(curves, XAxis::Plain, 1.0)?;
    let found: Vec<PointOut> = calc.get_intersections()?.iter().map(PointOut::from).collect();
    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

fn polygons(curves: &CurvePair) -> Result<()> {
    let calc = calculator(curves, XAxis::Plain, 1.0)?;
    let polys: Vec<PolygonOut> = calc.get_polygons()?.iter().map(PolygonOut::from).collect();
    println!("{}", serde_json::to_string_pretty(&polys)?);
    Ok(())
}

fn diff(curves: &CurvePair, max: f64, out: Option<&Path>) -> Result<()> {
    let mut calc = calculator(curves, XAxis::PosixSeconds, max)?;
    let report = DiffReport::compute(&mut calc)?;
    tracing::info!(ratio = report.relative_difference, "diff");
    let body = serde_json::to_vec_pretty(&report)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating report dir {}", parent.display()))?;
                }
            }
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{}", String::from_utf8(body)?),
    }
    Ok(())
}
