use super::*;
use crate::{foundation::core::Rgba8Premul, foundation::error::DotlineError};

fn corner() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
    ]
}

#[test]
fn new_widget_is_empty_with_defaults() {
    let w = AnimatedPolyline::new();
    assert!(w.points().is_empty());
    assert!(w.geometry().is_empty());
    assert_eq!(w.length(), 0.0);
    assert_eq!(w.fill_rule(), FillRule::EvenOdd);
    assert_eq!(*w.config(), AnimationConfig::default());
    assert!(w.bounds().is_none());
    assert!(w.schedule().is_empty());
}

#[test]
fn setting_points_rebuilds_eagerly() {
    let mut w = AnimatedPolyline::new();
    let before = w.cache_stats().rebuilds;
    w.set_points(corner()).unwrap();
    assert_eq!(w.cache_stats().rebuilds, before + 1);
    assert_eq!(w.length(), 200.0);
    assert!(!w.geometry().is_empty());
}

#[test]
fn non_finite_points_are_rejected() {
    let mut w = AnimatedPolyline::new();
    w.set_points(corner()).unwrap();
    let err = w
        .set_points(vec![Point::new(0.0, 0.0), Point::new(f64::INFINITY, 0.0)])
        .unwrap_err();
    assert!(matches!(err, DotlineError::Validation(_)));
    assert_eq!(w.points(), corner().as_slice());
    assert_eq!(w.length(), 200.0);
}

#[test]
fn invalid_fill_rule_keeps_previous() {
    let mut w = AnimatedPolyline::new();
    w.set_points(corner()).unwrap();
    w.set_fill_rule(FillRule::Nonzero);

    assert!(w.set_fill_rule_raw(7).is_err());
    assert_eq!(w.fill_rule(), FillRule::Nonzero);
    assert!(w.set_fill_rule_name("winding").is_err());
    assert_eq!(w.fill_rule(), FillRule::Nonzero);

    w.set_fill_rule_raw(0).unwrap();
    assert_eq!(w.fill_rule(), FillRule::EvenOdd);
    assert_eq!(
        w.geometry().as_polyline().unwrap().fill_rule(),
        FillRule::EvenOdd
    );
}

#[test]
fn fill_rule_change_rebuilds() {
    let mut w = AnimatedPolyline::new();
    w.set_points(corner()).unwrap();
    let before = w.cache_stats().rebuilds;
    w.set_fill_rule_name("nonzero").unwrap();
    assert_eq!(w.cache_stats().rebuilds, before + 1);
    assert_eq!(
        w.geometry().as_polyline().unwrap().fill_rule(),
        FillRule::Nonzero
    );
}

#[test]
fn rejected_interval_keeps_previous() {
    let mut w = AnimatedPolyline::new();
    w.set_dot_interval(50.0).unwrap();
    assert!(w.set_dot_interval(0.0).is_err());
    assert!(w.set_dot_interval(-10.0).is_err());
    assert_eq!(w.config().dot_interval(), 50.0);
}

#[test]
fn config_changes_do_not_rebuild_geometry() {
    let mut w = AnimatedPolyline::new();
    w.set_points(corner()).unwrap();
    let stats = w.cache_stats();
    w.set_dot_interval(20.0).unwrap();
    w.set_dot_speed(10.0).unwrap();
    w.set_dot_radius(2.0).unwrap();
    w.set_animated(false);
    assert_eq!(w.cache_stats(), stats);
}

#[test]
fn schedule_follows_config() {
    let mut w = AnimatedPolyline::new();
    w.set_points(corner()).unwrap();
    w.set_dot_interval(50.0).unwrap();
    w.set_dot_speed(50.0).unwrap();
    assert_eq!(w.schedule().len(), 4);

    w.set_animated(false);
    assert!(w.schedule().is_empty());
    assert!(w.sample_dots(1.0).is_empty());
}

#[test]
fn bounds_include_half_stroke() {
    let mut w = AnimatedPolyline::new();
    w.set_points(corner()).unwrap();
    w.set_appearance(Appearance {
        stroke_width: 4.0,
        ..Appearance::default()
    })
    .unwrap();
    assert_eq!(w.bounds(), Some(Rect::new(-2.0, -2.0, 102.0, 102.0)));
}

#[test]
fn negative_stroke_width_is_rejected() {
    let mut w = AnimatedPolyline::new();
    let bad = Appearance {
        stroke: Rgba8Premul::black(),
        stroke_width: -1.0,
        fill: None,
    };
    assert!(w.set_appearance(bad).is_err());
    assert_eq!(*w.appearance(), Appearance::default());
}

#[test]
fn frame_sampling_matches_seconds() {
    let mut w = AnimatedPolyline::new();
    w.set_points(corner()).unwrap();
    w.set_dot_interval(50.0).unwrap();
    w.set_dot_speed(50.0).unwrap();

    let fps = Fps::new(30, 1).unwrap();
    let by_frame = w.sample_dots_at_frame(FrameIndex(45), fps);
    assert_eq!(by_frame, w.sample_dots(1.5));
    assert_eq!(by_frame[0].center, Point::new(75.0, 0.0));
    assert_eq!(by_frame[1].center, Point::new(25.0, 0.0));
    assert_eq!(by_frame[2].radius, 0.0);
}
