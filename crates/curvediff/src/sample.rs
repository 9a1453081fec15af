//! Seeded random curves for benches and property tests.
//!
//! Model
//! - Curve 1 samples `len` evenly spaced x values on `[x_start, x_end]`.
//! - Curve 2 samples a coarser grid (`len / 2 + 1` points, at least 2) on the
//!   same domain, so every curve 1 segment has an overlapping curve 2 segment.
//! - Both endpoints are pinned to exactly `x_start` and `x_end`.
//! - y values are uniform in `y_range`.
//!
//! Determinism: the same `(cfg, seed)` always yields the same pair.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

#[derive(Clone, Copy, Debug)]
pub struct CurveSampleCfg {
    /// Number of points on curve 1 (clamped to ≥ 2).
    pub len: usize,
    pub x_start: f64,
    pub x_end: f64,
    /// Half-open y range `[lo, hi)`.
    pub y_range: (f64, f64),
}

impl Default for CurveSampleCfg {
    fn default() -> Self {
        Self {
            len: 16,
            x_start: 0.0,
            x_end: 15.0,
            y_range: (0.0, 10.0),
        }
    }
}

/// One x-sorted curve with `len` points on the configured domain.
pub fn sample_curve<R: Rng>(cfg: &CurveSampleCfg, len: usize, rng: &mut R) -> Vec<Point> {
    let len = len.max(2);
    let (lo, hi) = cfg.y_range;
    let step = (cfg.x_end - cfg.x_start) / (len - 1) as f64;
    (0..len)
        .map(|i| {
            let x = if i + 1 == len {
                cfg.x_end
            } else {
                cfg.x_start + i as f64 * step
            };
            let y = if hi > lo { rng.gen_range(lo..hi) } else { lo };
            Point::new(x, y)
        })
        .collect()
}

/// Curve pair sharing one x-domain.
pub fn sample_curve_pair(cfg: &CurveSampleCfg, seed: u64) -> (Vec<Point>, Vec<Point>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let len1 = cfg.len.max(2);
    let len2 = (len1 / 2 + 1).max(2);
    let c1 = sample_curve(cfg, len1, &mut rng);
    let c2 = sample_curve(cfg, len2, &mut rng);
    (c1, c2)
}

/// Like `sample_curve_pair`, with x read as seconds after `start`.
pub fn sample_dated_curve_pair(
    cfg: &CurveSampleCfg,
    seed: u64,
    start: DateTime<Utc>,
) -> (Vec<Point>, Vec<Point>) {
    let (c1, c2) = sample_curve_pair(cfg, seed);
    let origin = start.timestamp() as f64;
    let date = |p: Point| Point::from_posix_x(origin + p.x, p.y);
    (
        c1.into_iter().map(date).collect(),
        c2.into_iter().map(date).collect(),
    )
}
