//! Curve-difference engine.
//!
//! Quantifies the mismatch between two sampled piecewise-linear curves (for
//! example a predicted occupancy curve and its ground truth): find where the
//! curves cross, split the region between them into polygons at those
//! crossings, and reduce the summed polygon area to a single ratio.
//!
//! Layout
//! - `geom`: `Point` (x-only identity, optional retained instant),
//!   `LineEquation`, `Line`, `Polygon`.
//! - `diff`: `CurveDiffCalculator` (intersections → polygons → ratio).
//! - `cfg`: tolerances; `error`: `CurveError`; `sample`: seeded curve sampler.

pub mod cfg;
pub mod diff;
pub mod error;
pub mod geom;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::DiffCfg;
pub use diff::{CurveDiffCalculator, DiffSummary};
pub use error::CurveError;
pub use geom::{Line, LineEquation, Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::diff::{CurveDiffCalculator, DiffSummary};
    pub use crate::geom::{dedup_x, sort_curve, Line, LineEquation, Point, Polygon};
    pub use crate::sample::{sample_curve, sample_curve_pair, CurveSampleCfg};
    pub use crate::{CurveError, DiffCfg};
}
