use super::*;
use crate::error::CurveError;
use chrono::DateTime;
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(p: &Point) -> u64 {
    let mut h = DefaultHasher::new();
    p.hash(&mut h);
    h.finish()
}

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn points_compare_by_x_only() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, -7.5));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.5, 2.0));
    assert!(Point::new(0.0, 9.0) < Point::new(1.0, 0.0));
    assert!(Point::new(1.0, 9.0) <= Point::new(1.0, 0.0));
    assert_eq!(hash_of(&Point::new(3.0, 1.0)), hash_of(&Point::new(3.0, 4.0)));
    assert_eq!(hash_of(&Point::new(0.0, 1.0)), hash_of(&Point::new(-0.0, 4.0)));
}

#[test]
fn sort_is_stable_and_dedup_keeps_first() {
    let mut curve = pts(&[(2.0, 0.0), (0.0, 1.0), (2.0, 5.0), (1.0, 3.0)]);
    sort_curve(&mut curve);
    let ys: Vec<f64> = curve.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![1.0, 3.0, 0.0, 5.0]);
    dedup_x(&mut curve);
    assert_eq!(curve.len(), 3);
    assert_eq!(curve[2].y, 0.0);
}

#[test]
fn dated_point_keeps_instant() {
    let t = DateTime::from_timestamp(1_500_000_000, 250_000_000).unwrap();
    let p = Point::at(t, 4.0);
    assert!(p.is_dated());
    assert_eq!(p.instant(), Some(t));
    assert!((p.x - 1_500_000_000.25).abs() < 1e-6);
    let q = Point::from_posix_x(p.x, 4.0);
    assert_eq!(q.instant(), Some(t));
    assert!(!Point::new(1.0, 1.0).is_dated());
}

#[test]
fn equation_from_points() {
    let eq = LineEquation::from_points(&Point::new(1.0, 3.0), &Point::new(3.0, 7.0));
    assert_eq!(
        eq,
        LineEquation::Sloped {
            slope: 2.0,
            intercept: 1.0
        }
    );
    assert_eq!(eq.get_y(4.0), Ok(9.0));
    assert_eq!(eq.get_x(9.0), Ok(4.0));
    assert_eq!(eq.slope(), Some(2.0));
}

#[test]
fn get_x_on_flat_line_fails() {
    let eq = LineEquation::from_points(&Point::new(0.0, 2.0), &Point::new(5.0, 2.0));
    assert_eq!(eq.get_x(2.0), Err(CurveError::ZeroSlope));
}

#[test]
fn equal_x_is_vertical_not_flat() {
    let eq = LineEquation::from_points(&Point::new(2.0, 0.0), &Point::new(2.0, 5.0));
    assert!(eq.is_vertical());
    assert_eq!(eq.slope(), None);
    assert_eq!(eq.get_x(3.0), Ok(2.0));
    assert_eq!(eq.get_y(2.0), Err(CurveError::VerticalLine { x: 2.0 }));
}

#[test]
fn intersection_general_case() {
    // y = x + 1 and y = -x + 5 meet at (2, 3)
    let a = Line::new(Point::new(0.0, 1.0), Point::new(4.0, 5.0));
    let b = Line::new(Point::new(0.0, 5.0), Point::new(4.0, 1.0));
    let p = a.get_intersection_point(&b).unwrap();
    assert_eq!((p.x, p.y), (2.0, 3.0));
}

#[test]
fn intersection_with_shared_intercept_off_origin() {
    // Both lines cross the y axis at 3; they meet at (0, 3), not the origin.
    let a = Line::new(Point::new(-1.0, 2.0), Point::new(1.0, 4.0));
    let b = Line::new(Point::new(-1.0, 5.0), Point::new(1.0, 1.0));
    let p = a.get_intersection_point(&b).unwrap();
    assert_eq!((p.x, p.y), (0.0, 3.0));
}

#[test]
fn intersection_of_lines_not_through_origin() {
    // y = 2x - 4 and y = -x + 8 meet at (4, 4)
    let a = Line::new(Point::new(3.0, 2.0), Point::new(5.0, 6.0));
    let b = Line::new(Point::new(3.0, 5.0), Point::new(5.0, 3.0));
    let p = a.get_intersection_point(&b).unwrap();
    assert_eq!((p.x, p.y), (4.0, 4.0));
    assert!(a.within_x_range(&p) && b.within_x_range(&p));
}

#[test]
fn parallel_and_coincident_lines_do_not_intersect() {
    let a = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let b = Line::new(Point::new(0.0, 1.0), Point::new(1.0, 2.0));
    let c = Line::new(Point::new(2.0, 2.0), Point::new(3.0, 3.0));
    assert!(a.get_intersection_point(&b).is_none());
    assert!(a.get_intersection_point(&c).is_none());
    let v1 = Line::new(Point::new(1.0, 0.0), Point::new(1.0, 1.0));
    let v2 = Line::new(Point::new(2.0, 0.0), Point::new(2.0, 1.0));
    assert!(v1.get_intersection_point(&v2).is_none());
}

#[test]
fn vertical_meets_sloped_line() {
    let step = Line::new(Point::new(2.0, 0.0), Point::new(2.0, 5.0));
    let ramp = Line::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
    let p = step.get_intersection_point(&ramp).unwrap();
    assert_eq!((p.x, p.y), (2.0, 2.0));
    let q = ramp.get_intersection_point(&step).unwrap();
    assert_eq!((q.x, q.y), (2.0, 2.0));
    assert!(step.within_x_range(&p));
}

#[test]
fn dated_lines_give_dated_intersection() {
    let t = |s: i64| DateTime::from_timestamp(s, 0).unwrap();
    let a = Line::new(Point::at(t(0), 0.0), Point::at(t(4), 4.0));
    let b = Line::new(Point::at(t(0), 4.0), Point::at(t(4), 0.0));
    let p = a.get_intersection_point(&b).unwrap();
    assert_eq!(p.instant(), Some(t(2)));
    let plain = Line::new(Point::new(0.0, 4.0), Point::new(4.0, 0.0));
    assert!(!a.get_intersection_point(&plain).unwrap().is_dated());
}

#[test]
fn x_range_is_inclusive() {
    let l = Line::new(Point::new(3.0, 0.0), Point::new(1.0, 0.0));
    assert!(l.within_x_range(&Point::new(1.0, 10.0)));
    assert!(l.within_x_range(&Point::new(3.0, -10.0)));
    assert!(!l.within_x_range(&Point::new(3.0 + 1e-12, 0.0)));
    assert!(l.within_x_range_eps(&Point::new(3.0 + 1e-12, 0.0), 1e-9));
}

#[test]
fn vertical_segment_contains_only_its_y_span() {
    let jump = Line::new(Point::new(2.0, 0.0), Point::new(2.0, 1.0));
    assert!(jump.contains_eps(&Point::new(2.0, 0.5), 1e-9));
    assert!(jump.contains_eps(&Point::new(2.0, 1.0), 1e-9));
    assert!(!jump.contains_eps(&Point::new(2.0, 5.0), 1e-9));
    assert!(!jump.contains_eps(&Point::new(2.0, -0.1), 1e-9));
    // Sloped segments only check x.
    let flat = Line::new(Point::new(0.0, 5.0), Point::new(4.0, 5.0));
    assert!(flat.contains_eps(&Point::new(2.0, 100.0), 1e-9));
    assert!(!flat.contains_eps(&Point::new(4.1, 5.0), 1e-9));
}

#[test]
fn range_slack_scales_with_epoch_seconds() {
    let hi = 1_700_000_000.0;
    let l = Line::new(Point::new(hi - 60.0, 0.0), Point::new(hi, 1.0));
    // One ulp past the end at this magnitude (~2.4e-7).
    let just_past = Point::new(hi + 2.4e-7, 1.0);
    assert!(just_past.x > hi);
    assert!(!l.within_x_range_eps(&just_past, 1e-9));
    assert!(l.contains_eps(&just_past, 1e-9));
    assert!(!l.contains_eps(&Point::new(hi + 1e-3, 1.0), 1e-9));
}

const IRREGULAR: [(f64, f64); 5] = [(3.0, 4.0), (5.0, 11.0), (12.0, 8.0), (9.0, 5.0), (5.0, 6.0)];

#[test]
fn polygon_area_shoelace() {
    let poly = Polygon::new(pts(&IRREGULAR));
    assert_eq!(poly.area(), 30.0);
    assert_eq!(poly.len(), 5);
    assert!((poly.centroid().x - 6.8).abs() < 1e-12);
}

#[test]
fn polygon_area_ignores_corner_order() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let mut corners = pts(&IRREGULAR);
        corners.shuffle(&mut rng);
        assert_eq!(Polygon::new(corners).area(), 30.0);
    }
    let square = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
    assert_eq!(Polygon::new(square).area(), 1.0);
}

#[test]
fn polygon_corners_are_counterclockwise() {
    let poly = Polygon::new(pts(&[(1.0, 1.0), (0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]));
    let c = poly.corners();
    let signed: f64 = (0..c.len())
        .map(|i| {
            let j = (i + 1) % c.len();
            c[i].x * c[j].y - c[j].x * c[i].y
        })
        .sum();
    assert!(signed > 0.0);
}

#[test]
fn degenerate_polygons_have_no_area() {
    assert_eq!(Polygon::new(pts(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)])).area(), 0.0);
    assert_eq!(Polygon::new(pts(&[(0.0, 1.0), (4.0, 3.0)])).area(), 0.0);
    assert_eq!(Polygon::new(pts(&[(2.0, 2.0)])).area(), 0.0);
    let empty = Polygon::new(Vec::new());
    assert!(empty.is_empty());
    assert_eq!(empty.area(), 0.0);
}

proptest! {
    #[test]
    fn prop_identity_is_x_only(x in -1e6f64..1e6, y1 in -1e6f64..1e6, y2 in -1e6f64..1e6) {
        let a = Point::new(x, y1);
        let b = Point::new(x, y2);
        prop_assert_eq!(a, b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn prop_get_x_inverts_get_y(
        slope in prop_oneof![-100.0f64..-0.01, 0.01f64..100.0],
        intercept in -100.0f64..100.0,
        y in -1e3f64..1e3,
    ) {
        let eq = LineEquation::Sloped { slope, intercept };
        let back = eq.get_y(eq.get_x(y).unwrap()).unwrap();
        prop_assert!((back - y).abs() <= 1e-9 * (1.0 + y.abs() + intercept.abs()));
    }
}
