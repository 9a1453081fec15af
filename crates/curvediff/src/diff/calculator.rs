use crate::cfg::DiffCfg;
use crate::error::{CurveError, CurveIndex};
use crate::geom::{dedup_x, sort_curve, Line, Point, Polygon};

use super::search::lines_between;

/// Relative difference between two curves, normalized by a caller-supplied
/// maximum (e.g. a venue capacity).
///
/// The calculator owns both curves. `get_relative_difference` sorts them in
/// place; clone before handing them over if the original order matters.
#[derive(Clone, Debug)]
pub struct CurveDiffCalculator {
    curve1: Vec<Point>,
    curve2: Vec<Point>,
    max: f64,
    cfg: DiffCfg,
}

impl CurveDiffCalculator {
    pub fn new(curve1: Vec<Point>, curve2: Vec<Point>, max: f64) -> Result<Self, CurveError> {
        Self::with_cfg(curve1, curve2, max, DiffCfg::default())
    }

    pub fn with_cfg(
        curve1: Vec<Point>,
        curve2: Vec<Point>,
        max: f64,
        cfg: DiffCfg,
    ) -> Result<Self, CurveError> {
        for (curve, points) in [(1, &curve1), (2, &curve2)] {
            if points.len() < 2 {
                return Err(CurveError::CurveTooShort {
                    curve,
                    len: points.len(),
                });
            }
        }
        if !(max.is_finite() && max > 0.0) {
            return Err(CurveError::InvalidMax(max));
        }
        Ok(Self {
            curve1,
            curve2,
            max,
            cfg,
        })
    }

    #[inline]
    pub fn curve1(&self) -> &[Point] {
        &self.curve1
    }

    #[inline]
    pub fn curve2(&self) -> &[Point] {
        &self.curve2
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn cfg(&self) -> DiffCfg {
        self.cfg
    }

    /// Crossings between the curves, ascending by x, one per x.
    ///
    /// Pre: both curves are x-sorted (`UnsortedCurve` otherwise).
    ///
    /// Each segment of curve 1 is tested against the curve 2 segments that
    /// overlap its x-range; the first candidate whose crossing lies inside
    /// both segments wins. Well-formed curves cross at most once per segment
    /// pair, so the search order only matters for degenerate input.
    pub fn get_intersections(&self) -> Result<Vec<Point>, CurveError> {
        ensure_sorted(&self.curve1, 1)?;
        ensure_sorted(&self.curve2, 2)?;
        let eps = self.cfg.eps_range;
        let mut found = Vec::new();
        for w in self.curve1.windows(2) {
            let line1 = Line::new(w[0], w[1]);
            for line2 in lines_between(&self.curve2, &w[0], &w[1])? {
                let Some(p) = line1.get_intersection_point(&line2) else {
                    continue;
                };
                if line1.contains_eps(&p, eps) && line2.contains_eps(&p, eps) {
                    found.push(p);
                    break;
                }
            }
        }
        sort_curve(&mut found);
        dedup_x(&mut found);
        tracing::debug!(count = found.len(), "intersections");
        Ok(found)
    }

    /// Regions enclosed between the curves.
    ///
    /// Without crossings the whole region is one polygon over both curves.
    /// Otherwise: one polygon per consecutive pair of crossings (ascending x),
    /// then the region before the first crossing and the region after the last,
    /// each only when it holds more than the crossing itself.
    pub fn get_polygons(&self) -> Result<Vec<Polygon>, CurveError> {
        let intersections = self.get_intersections()?;
        Ok(self.polygons_from(&intersections))
    }

    fn polygons_from(&self, intersections: &[Point]) -> Vec<Polygon> {
        let (Some(&first), Some(&last)) = (intersections.first(), intersections.last()) else {
            let corners = self.curve1.iter().chain(&self.curve2).copied().collect();
            return vec![Polygon::new(corners)];
        };

        let mut polygons = Vec::with_capacity(intersections.len() + 1);
        for pair in intersections.windows(2) {
            let bounds = Line::new(pair[0], pair[1]);
            let mut corners = vec![pair[0]];
            corners.extend(corners_where(&self.curve1, |p| bounds.within_x_range(p)));
            corners.push(pair[1]);
            corners.extend(corners_where(&self.curve2, |p| bounds.within_x_range(p)));
            polygons.push(Polygon::new(corners));
        }

        let mut before: Vec<Point> = corners_where(&self.curve1, |p| p <= &first).collect();
        before.push(first);
        before.extend(corners_where(&self.curve2, |p| p <= &first));
        if before.len() > 1 {
            polygons.push(Polygon::new(before));
        }

        let mut after: Vec<Point> = corners_where(&self.curve1, |p| p >= &last).collect();
        after.push(last);
        after.extend(corners_where(&self.curve2, |p| p >= &last));
        if after.len() > 1 {
            polygons.push(Polygon::new(after));
        }
        tracing::debug!(count = polygons.len(), "polygons");
        polygons
    }

    /// Summed polygon area divided by `max × duration_seconds`.
    ///
    /// Sorts both curves in place. The duration comes from the retained
    /// instants of curve 1's first and last points; curve 2 must span the same
    /// duration (within `eps_duration`). Not clamped to [0, 1].
    pub fn get_relative_difference(&mut self) -> Result<f64, CurveError> {
        Ok(self.summarize()?.relative_difference)
    }

    /// `get_relative_difference` with every intermediate kept: crossings,
    /// polygons, the summed area and the duration it was normalized by.
    /// Runs the pipeline once. Same preconditions and side effect.
    pub fn summarize(&mut self) -> Result<DiffSummary, CurveError> {
        sort_curve(&mut self.curve1);
        sort_curve(&mut self.curve2);
        let duration1 = duration_seconds(&self.curve1, 1)?;
        let duration2 = duration_seconds(&self.curve2, 2)?;
        if duration1 <= 0.0 {
            return Err(CurveError::ZeroDuration);
        }
        if (duration1 - duration2).abs() > self.cfg.eps_duration {
            return Err(CurveError::DurationMismatch {
                curve1: duration1,
                curve2: duration2,
            });
        }
        let intersections = self.get_intersections()?;
        let polygons = self.polygons_from(&intersections);
        let area: f64 = polygons.iter().map(Polygon::area).sum();
        let ratio = area / (self.max * duration1);
        tracing::debug!(
            polygons = polygons.len(),
            area,
            duration = duration1,
            max = self.max,
            ratio,
            "relative difference"
        );
        Ok(DiffSummary {
            intersections,
            polygons,
            area,
            duration_seconds: duration1,
            relative_difference: ratio,
        })
    }
}

/// One pass of the pipeline, as returned by `CurveDiffCalculator::summarize`.
#[derive(Clone, Debug)]
pub struct DiffSummary {
    pub intersections: Vec<Point>,
    pub polygons: Vec<Polygon>,
    /// Sum of the polygon areas.
    pub area: f64,
    /// Curve 1's span, from its retained instants.
    pub duration_seconds: f64,
    pub relative_difference: f64,
}

fn corners_where<'a>(
    curve: &'a [Point],
    keep: impl Fn(&Point) -> bool + 'a,
) -> impl Iterator<Item = Point> + 'a {
    curve.iter().filter(move |p| keep(p)).copied()
}

fn ensure_sorted(curve: &[Point], index: CurveIndex) -> Result<(), CurveError> {
    if curve.windows(2).all(|w| w[0] <= w[1]) {
        Ok(())
    } else {
        Err(CurveError::UnsortedCurve { curve: index })
    }
}

/// Elapsed seconds between the first and last instant of a sorted curve.
fn duration_seconds(curve: &[Point], index: CurveIndex) -> Result<f64, CurveError> {
    let missing = CurveError::MissingInstant { curve: index };
    let start = curve.first().and_then(Point::instant).ok_or(missing.clone())?;
    let end = curve.last().and_then(Point::instant).ok_or(missing)?;
    let elapsed = end - start;
    Ok(match elapsed.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => elapsed.num_milliseconds() as f64 / 1e3,
    })
}
