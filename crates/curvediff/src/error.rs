//! Errors surfaced by the curve-difference engine.
//!
//! Every variant is a fail-fast condition: no partial result is returned.
//! Degenerate geometry (parallel lines, collinear corners) is not an error and
//! shows up as `None` or a zero area instead.

use thiserror::Error;

/// Which input curve an error refers to (1 or 2).
pub type CurveIndex = u8;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve needs at least two points to form a segment.
    #[error("curve {curve} has {len} point(s); at least 2 are required")]
    CurveTooShort { curve: CurveIndex, len: usize },
    /// The normalization constant must be positive and finite.
    #[error("normalization maximum must be positive and finite, got {0}")]
    InvalidMax(f64),
    /// Intersection search requires x-sorted curves (NaN x also lands here).
    #[error("curve {curve} is not sorted by x")]
    UnsortedCurve { curve: CurveIndex },
    /// No segment of the searched curve covers the requested x-range; the
    /// x-domains of the two curves do not overlap far enough.
    #[error("no segment of the other curve spans x in [{from}, {to}]")]
    NoAbsorbingSegment { from: f64, to: f64 },
    /// `get_x` on a horizontal line.
    #[error("cannot solve for x on a line with slope 0")]
    ZeroSlope,
    /// `get_y` on a vertical line.
    #[error("cannot evaluate y on the vertical line x = {x}")]
    VerticalLine { x: f64 },
    /// Duration-based normalization needs dated endpoints.
    #[error("curve {curve} has no retained instant at its first or last point")]
    MissingInstant { curve: CurveIndex },
    #[error("curve 1 spans zero seconds; nothing to normalize against")]
    ZeroDuration,
    #[error("curves span different durations: {curve1} s vs {curve2} s")]
    DurationMismatch { curve1: f64, curve2: f64 },
}
