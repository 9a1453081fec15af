//! Segment lookup on an x-sorted curve.

use crate::error::CurveError;
use crate::geom::{Line, Point};

/// Segments of `curve` that can cross the x-range `[from.x, to.x]`.
///
/// Pre: `curve` is x-sorted and has at least two points.
///
/// Takes every curve point inside the range plus one neighbour on each side,
/// so segments straddling the range edges are included. When no point falls
/// inside, the range sits within a single segment, which is returned alone.
pub(crate) fn lines_between(
    curve: &[Point],
    from: &Point,
    to: &Point,
) -> Result<Vec<Line>, CurveError> {
    let mut first = None;
    let mut last = None;
    for (i, p) in curve.iter().enumerate() {
        if from <= p && p <= to {
            first.get_or_insert(i);
            last = Some(i);
        } else if p > to {
            break;
        }
    }
    let span = match (first, last) {
        (Some(lo), Some(hi)) => &curve[lo.saturating_sub(1)..(hi + 2).min(curve.len())],
        _ => absorbing_segment(curve, from, to)?,
    };
    debug_assert!(span.len() > 1, "segment span needs two points");
    Ok(span.windows(2).map(|w| Line::new(w[0], w[1])).collect())
}

/// The segment `[curve[i-1], curve[i]]` whose x-range contains `[from.x, to.x]`.
pub(crate) fn absorbing_segment<'a>(
    curve: &'a [Point],
    from: &Point,
    to: &Point,
) -> Result<&'a [Point], CurveError> {
    curve
        .windows(2)
        .find(|w| &w[0] <= from && to <= &w[1])
        .ok_or(CurveError::NoAbsorbingSegment {
            from: from.x,
            to: to.x,
        })
}
