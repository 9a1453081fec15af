//! Curve-difference pipeline.
//!
//! Data flow
//! - `get_intersections`: for each segment of curve 1, search the overlapping
//!   segments of curve 2 and keep the first in-range crossing.
//! - `get_polygons`: split the region between the curves at the crossings.
//! - `get_relative_difference`: summed polygon area / (max × duration).
//!
//! Pure computation: no I/O, no retries. Malformed input fails fast with a
//! `CurveError`.

mod calculator;
mod search;

pub use calculator::{CurveDiffCalculator, DiffSummary};
