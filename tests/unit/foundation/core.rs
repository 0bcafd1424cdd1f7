use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_to_secs_uses_rational_rate() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frame_to_secs(FrameIndex(45)), 1.5);

    let ntsc = Fps::new(30000, 1001).unwrap();
    let secs = ntsc.frame_to_secs(FrameIndex(30000));
    assert!((secs - 1001.0).abs() < 1e-9);
}

#[test]
fn premultiply_scales_channels_by_alpha() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
    assert_eq!(c.g, 64);
    assert_eq!(c.b, 0);
    assert_eq!(Rgba8Premul::black().a, 255);
}

#[test]
fn fill_rule_defaults_to_even_odd() {
    assert_eq!(FillRule::default(), FillRule::EvenOdd);
}

#[test]
fn fill_rule_raw_discriminants() {
    assert_eq!(FillRule::try_from(0u8).unwrap(), FillRule::EvenOdd);
    assert_eq!(FillRule::try_from(1u8).unwrap(), FillRule::Nonzero);
    assert!(matches!(
        FillRule::try_from(2u8),
        Err(DotlineError::Validation(_))
    ));
}

#[test]
fn fill_rule_names_are_case_insensitive() {
    assert_eq!("EvenOdd".parse::<FillRule>().unwrap(), FillRule::EvenOdd);
    assert_eq!(" non_zero ".parse::<FillRule>().unwrap(), FillRule::Nonzero);
    assert!("winding".parse::<FillRule>().is_err());
}
