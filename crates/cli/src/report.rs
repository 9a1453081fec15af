//! JSON shapes printed by the CLI.

use anyhow::Result;
use curvediff::{CurveDiffCalculator, Point, Polygon};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PointOut {
    pub x: f64,
    pub y: f64,
    /// RFC 3339, present for dated points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

impl From<&Point> for PointOut {
    fn from(p: &Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            at: p.instant().map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PolygonOut {
    pub area: f64,
    pub corners: Vec<PointOut>,
}

impl From<&Polygon> for PolygonOut {
    fn from(poly: &Polygon) -> Self {
        Self {
            area: poly.area(),
            corners: poly.corners().iter().map(PointOut::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub intersections: Vec<PointOut>,
    pub polygon_areas: Vec<f64>,
    pub total_area: f64,
    pub duration_seconds: f64,
    pub max: f64,
    pub relative_difference: f64,
}

impl DiffReport {
    /// Runs the pipeline once. Sorts the calculator's curves in place.
    pub fn compute(calc: &mut CurveDiffCalculator) -> Result<Self> {
        let summary = calc.summarize()?;
        Ok(Self {
            intersections: summary.intersections.iter().map(PointOut::from).collect(),
            polygon_areas: summary.polygons.iter().map(Polygon::area).collect(),
            total_area: summary.area,
            duration_seconds: summary.duration_seconds,
            max: calc.max(),
            relative_difference: summary.relative_difference,
        })
    }
}
