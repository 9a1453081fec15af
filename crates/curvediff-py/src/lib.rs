//! PyO3 bindings for the `curvediff` engine.
//!
//! Notes
//! - Keep bindings thin: curves cross the boundary as lists of `(x, y)`
//!   tuples, results as floats and tuples.
//! - For `relative_difference`, x is POSIX seconds.

use curvediff::{CurveDiffCalculator, CurveError, Point};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_curve(raw: Vec<(f64, f64)>, dated: bool) -> Vec<Point> {
    raw.into_iter()
        .map(|(x, y)| {
            if dated {
                Point::from_posix_x(x, y)
            } else {
                Point::new(x, y)
            }
        })
        .collect()
}

fn map_curve_err(err: CurveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn calculator(
    curve1: Vec<(f64, f64)>,
    curve2: Vec<(f64, f64)>,
    max: f64,
    dated: bool,
) -> PyResult<CurveDiffCalculator> {
    CurveDiffCalculator::new(to_curve(curve1, dated), to_curve(curve2, dated), max)
        .map_err(map_curve_err)
}

/// Crossings between two x-sorted curves, ascending by x.
#[pyfunction]
fn intersections(curve1: Vec<(f64, f64)>, curve2: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    let calc = calculator(curve1, curve2, 1.0, false)?;
    let found = calc.get_intersections().map_err(map_curve_err)?;
    Ok(found.iter().map(|p| (p.x, p.y)).collect())
}

/// Areas of the regions between two x-sorted curves.
#[pyfunction]
fn polygon_areas(curve1: Vec<(f64, f64)>, curve2: Vec<(f64, f64)>) -> PyResult<Vec<f64>> {
    let calc = calculator(curve1, curve2, 1.0, false)?;
    let polygons = calc.get_polygons().map_err(map_curve_err)?;
    Ok(polygons.iter().map(|p| p.area()).collect())
}

/// Summed region area / (max × duration in seconds).
#[pyfunction]
fn relative_difference(
    curve1: Vec<(f64, f64)>,
    curve2: Vec<(f64, f64)>,
    max: f64,
) -> PyResult<f64> {
    let mut calc = calculator(curve1, curve2, max, true)?;
    calc.get_relative_difference().map_err(map_curve_err)
}

#[pymodule]
fn curvediff_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(intersections, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_areas, m)?)?;
    m.add_function(wrap_pyfunction!(relative_difference, m)?)?;
    m.add("__version__", curvediff::VERSION)?;
    Ok(())
}
