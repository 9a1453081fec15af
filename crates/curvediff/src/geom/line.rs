use crate::error::CurveError;

use super::point::Point;

/// Infinite line through two points.
///
/// Invariants:
/// - `Sloped` is only built from points with distinct x.
/// - Points sharing an x produce `Vertical`, never a zero slope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineEquation {
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
    /// `x = x`
    Vertical { x: f64 },
}

impl LineEquation {
    pub fn from_points(p1: &Point, p2: &Point) -> Self {
        let dx = p2.x - p1.x;
        if dx == 0.0 {
            tracing::debug!(x = p1.x, y1 = p1.y, y2 = p2.y, "vertical segment");
            return LineEquation::Vertical { x: p1.x };
        }
        let slope = (p2.y - p1.y) / dx;
        LineEquation::Sloped {
            slope,
            intercept: p1.y - slope * p1.x,
        }
    }

    /// `None` for vertical lines.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            LineEquation::Sloped { slope, .. } => Some(slope),
            LineEquation::Vertical { .. } => None,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, LineEquation::Vertical { .. })
    }

    pub fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        match *self {
            LineEquation::Sloped { slope, intercept } => Ok(slope * x + intercept),
            LineEquation::Vertical { x } => Err(CurveError::VerticalLine { x }),
        }
    }

    pub fn get_x(&self, y: f64) -> Result<f64, CurveError> {
        match *self {
            LineEquation::Sloped { slope, .. } if slope == 0.0 => Err(CurveError::ZeroSlope),
            LineEquation::Sloped { slope, intercept } => Ok((y - intercept) / slope),
            LineEquation::Vertical { x } => Ok(x),
        }
    }

    /// Crossing of two infinite lines; `None` when parallel or coincident.
    pub fn intersect(&self, other: &LineEquation) -> Option<(f64, f64)> {
        match (*self, *other) {
            (
                LineEquation::Sloped {
                    slope: m1,
                    intercept: b1,
                },
                LineEquation::Sloped {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    return None;
                }
                let x = (b2 - b1) / (m1 - m2);
                Some((x, m1 * x + b1))
            }
            (LineEquation::Vertical { x }, LineEquation::Sloped { slope, intercept })
            | (LineEquation::Sloped { slope, intercept }, LineEquation::Vertical { x }) => {
                Some((x, slope * x + intercept))
            }
            (LineEquation::Vertical { .. }, LineEquation::Vertical { .. }) => None,
        }
    }
}

/// Bounded segment `p1–p2` plus the equation of its supporting line.
///
/// Intersections are solved on the infinite lines; membership in the segment
/// is a separate x-range test.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    p1: Point,
    p2: Point,
    equation: LineEquation,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        let equation = LineEquation::from_points(&p1, &p2);
        Self { p1, p2, equation }
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    #[inline]
    pub fn equation(&self) -> &LineEquation {
        &self.equation
    }

    /// Both endpoints carry an instant.
    #[inline]
    pub fn is_dated(&self) -> bool {
        self.p1.is_dated() && self.p2.is_dated()
    }

    /// Crossing of the two supporting lines, not clipped to either segment.
    ///
    /// When both segments are dated the result is dated too, its instant
    /// rebuilt from x.
    pub fn get_intersection_point(&self, other: &Line) -> Option<Point> {
        let (x, y) = self.equation.intersect(&other.equation)?;
        if self.is_dated() && other.is_dated() {
            Some(Point::from_posix_x(x, y))
        } else {
            Some(Point::new(x, y))
        }
    }

    /// Inclusive x-range membership.
    #[inline]
    pub fn within_x_range(&self, point: &Point) -> bool {
        self.within_x_range_eps(point, 0.0)
    }

    /// x-range membership with slack `eps` on both ends.
    #[inline]
    pub fn within_x_range_eps(&self, point: &Point, eps: f64) -> bool {
        let lo = self.p1.x.min(self.p2.x);
        let hi = self.p1.x.max(self.p2.x);
        lo - eps <= point.x && point.x <= hi + eps
    }

    /// Whether `point` lies on this segment's span: its x-range, and for a
    /// vertical segment also its y-range.
    ///
    /// Slack is `eps` plus a few ulps of the coordinate magnitude, so large x
    /// (POSIX seconds) still tolerates rounding at shared vertices.
    pub fn contains_eps(&self, point: &Point, eps: f64) -> bool {
        if !self.within_x_range_eps(point, range_slack(eps, self.p1.x, self.p2.x)) {
            return false;
        }
        match self.equation {
            LineEquation::Sloped { .. } => true,
            LineEquation::Vertical { .. } => {
                let lo = self.p1.y.min(self.p2.y);
                let hi = self.p1.y.max(self.p2.y);
                let slack = range_slack(eps, lo, hi);
                lo - slack <= point.y && point.y <= hi + slack
            }
        }
    }
}

const RANGE_ULPS: f64 = 4.0;

#[inline]
fn range_slack(eps: f64, a: f64, b: f64) -> f64 {
    eps + RANGE_ULPS * f64::EPSILON * a.abs().max(b.abs())
}
