use std::cmp::Ordering;
use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::point::Point;

/// Polygon from an unordered corner set.
///
/// Corners are sorted counterclockwise by polar angle around their centroid
/// (mean of all corners, duplicates weighted fully), then the area is taken
/// with the shoelace formula. Correct for corner sets that are star-shaped
/// with respect to the centroid, which covers the regions cut between two
/// curves. Collinear or fewer than three corners give area 0.
#[derive(Clone, Debug)]
pub struct Polygon {
    corners: Vec<Point>,
    centroid: Vector2<f64>,
    area: f64,
}

impl Polygon {
    pub fn new(corners: Vec<Point>) -> Self {
        if corners.is_empty() {
            return Self {
                corners,
                centroid: Vector2::zeros(),
                area: 0.0,
            };
        }
        let centroid = centroid(&corners);
        let corners = sort_ccw(corners, centroid);
        let area = shoelace_area(&corners);
        Self {
            corners,
            centroid,
            area,
        }
    }

    /// Corners in counterclockwise order.
    #[inline]
    pub fn corners(&self) -> &[Point] {
        &self.corners
    }

    #[inline]
    pub fn centroid(&self) -> Vector2<f64> {
        self.centroid
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }
}

fn centroid(corners: &[Point]) -> Vector2<f64> {
    let sum = corners
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.vec());
    sum / corners.len() as f64
}

/// Polar angle of `p` around `c`, in [0, 2π).
#[inline]
fn angle_around(c: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let d = p - c;
    d.y.atan2(d.x).rem_euclid(TAU)
}

fn sort_ccw(corners: Vec<Point>, c: Vector2<f64>) -> Vec<Point> {
    let mut keyed: Vec<(f64, Point)> = corners
        .into_iter()
        .map(|p| (angle_around(c, p.vec()), p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, p)| p).collect()
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// |Σ (x_i y_{i+1} − x_{i+1} y_i)| / 2 over the cyclically closed sequence.
fn shoelace_area(corners: &[Point]) -> f64 {
    let n = corners.len();
    let twice: f64 = (0..n)
        .map(|i| cross(corners[i].vec(), corners[(i + 1) % n].vec()))
        .sum();
    twice.abs() / 2.0
}
