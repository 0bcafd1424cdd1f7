use super::*;
use crate::geometry::cache::{CacheStats, build_geometry};

fn polyline(raw: &[(f64, f64)]) -> Polyline {
    let points: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let (geometry, _) = build_geometry(&points, FillRule::EvenOdd, &mut CacheStats::default());
    match geometry {
        PathGeometry::Polyline(p) => p,
        PathGeometry::Empty => panic!("expected a polyline"),
    }
}

#[test]
fn empty_sentinel_has_no_bounds() {
    let g = PathGeometry::default();
    assert!(g.is_empty());
    assert!(g.as_polyline().is_none());
    assert!(g.bounds().is_none());
}

#[test]
fn bez_path_is_open_move_then_lines() {
    let p = polyline(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    assert!(!p.is_closed());
    assert_eq!(p.to_bez_path().to_svg(), "M0,0 L100,0 L100,100");
}

#[test]
fn point_at_length_walks_segments() {
    let p = polyline(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    assert_eq!(p.point_at_length(0.0), Point::new(0.0, 0.0));
    assert_eq!(p.point_at_length(50.0), Point::new(50.0, 0.0));
    assert_eq!(p.point_at_length(100.0), Point::new(100.0, 0.0));
    assert_eq!(p.point_at_length(150.0), Point::new(100.0, 50.0));
    assert_eq!(p.point_at_length(200.0), Point::new(100.0, 100.0));
}

#[test]
fn point_at_length_clamps_out_of_range() {
    let p = polyline(&[(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(p.point_at_length(-5.0), p.start());
    assert_eq!(p.point_at_length(99.0), p.end());
    assert_eq!(p.point_at_length(f64::NAN), p.start());
}

#[test]
fn zero_length_segments_are_skipped() {
    let p = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert_eq!(p.length(), 20.0);
    assert_eq!(p.point_at_length(15.0), Point::new(10.0, 5.0));
}

#[test]
fn progress_is_proportional_to_arc_length() {
    let p = polyline(&[(0.0, 0.0), (30.0, 0.0), (30.0, 10.0)]);
    assert_eq!(p.point_at_progress(0.75), Point::new(30.0, 0.0));
    assert_eq!(p.point_at_progress(0.5), Point::new(20.0, 0.0));
}
