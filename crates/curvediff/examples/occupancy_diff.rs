//! Relative difference between a predicted and a measured occupancy curve.
//!
//! Two hourly curves over one evening, normalized by a venue capacity of 200.
//! Prints the crossings, the per-region areas and the final ratio.

use chrono::{DateTime, Duration, Utc};
use curvediff::{CurveDiffCalculator, Point};

fn hourly(start: DateTime<Utc>, values: &[f64]) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(h, &y)| Point::at(start + Duration::hours(h as i64), y))
        .collect()
}

fn main() -> Result<(), curvediff::CurveError> {
    let start = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
    let predicted = hourly(start, &[20.0, 60.0, 140.0, 180.0, 120.0, 40.0]);
    let measured = hourly(start, &[10.0, 80.0, 120.0, 190.0, 90.0, 50.0]);

    let mut calc = CurveDiffCalculator::new(predicted, measured, 200.0)?;
    for p in calc.get_intersections()? {
        println!("crossing at {:?}: {:.2}", p.instant(), p.y);
    }
    for (i, poly) in calc.get_polygons()?.iter().enumerate() {
        println!("region {i}: area {:.1}", poly.area());
    }
    println!("relative difference: {:.4}", calc.get_relative_difference()?);
    Ok(())
}
