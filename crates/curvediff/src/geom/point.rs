use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use nalgebra::Vector2;

const NANOS_PER_SEC: f64 = 1e9;

/// A curve sample.
///
/// Equality, ordering and hashing look at `x` only: `Point::new(1.0, 2.0)` and
/// `Point::new(1.0, 5.0)` compare equal. Curves rely on this to treat samples
/// as positions along the x axis (duplicate x values are vertical jumps).
///
/// A dated point (`Point::at`) derives `x` from an instant (POSIX seconds,
/// fractional) and keeps the instant for later reconstruction.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    instant: Option<DateTime<Utc>>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, instant: None }
    }

    /// Dated point: `x` is `instant` in POSIX seconds.
    pub fn at(instant: DateTime<Utc>, y: f64) -> Self {
        let x =
            instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 / NANOS_PER_SEC;
        Self {
            x,
            y,
            instant: Some(instant),
        }
    }

    /// Rebuild a dated point from POSIX seconds (nanosecond rounding).
    /// Falls back to an undated point when `x` is outside chrono's range.
    pub fn from_posix_x(x: f64, y: f64) -> Self {
        if !x.is_finite() {
            return Self::new(x, y);
        }
        let mut secs = x.floor();
        let mut nanos = ((x - secs) * NANOS_PER_SEC).round();
        if nanos >= NANOS_PER_SEC {
            secs += 1.0;
            nanos = 0.0;
        }
        match DateTime::from_timestamp(secs as i64, nanos as u32) {
            Some(instant) => Self {
                x,
                y,
                instant: Some(instant),
            },
            None => Self::new(x, y),
        }
    }

    #[inline]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    #[inline]
    pub fn is_dated(&self) -> bool {
        self.instant.is_some()
    }

    #[inline]
    pub fn vec(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// x-only comparator. Incomparable (NaN) pairs are treated as equal so the
    /// sort stays total; sortedness checks reject NaN separately.
    #[inline]
    pub fn cmp_x(&self, other: &Point) -> Ordering {
        self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.x.partial_cmp(&other.x)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0, so both must hash alike.
        let x = if self.x == 0.0 { 0.0 } else { self.x };
        x.to_bits().hash(state);
    }
}

/// Stable sort by x; points sharing an x keep their relative order.
pub fn sort_curve(curve: &mut [Point]) {
    curve.sort_by(Point::cmp_x);
}

/// Drop adjacent points with equal x (keeps the first). Sort first for a
/// full dedup.
pub fn dedup_x(points: &mut Vec<Point>) {
    points.dedup_by(|a, b| *a == *b);
}
