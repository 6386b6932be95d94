use super::*;

#[test]
fn endpoints_are_stable() {
    for curve in [
        Curve::Linear,
        Curve::Ease,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::parse("friction"),
        Curve::Steps(4, StepPosition::End),
    ] {
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for curve in [
        Curve::Linear,
        Curve::Ease,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::parse("sharp"),
    ] {
        let a = curve.apply(0.25);
        let b = curve.apply(0.5);
        let c = curve.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn bezier_matches_linear_control_points() {
    let c = Curve::CubicBezier(0.25, 0.25, 0.75, 0.75);
    for t in [0.1, 0.3, 0.5, 0.9] {
        assert!((c.apply(t) - t).abs() < 1e-4);
    }
}

#[test]
fn parses_functions_and_presets() {
    assert_eq!(Curve::try_parse("linear"), Some(Curve::Linear));
    assert_eq!(
        Curve::try_parse("cubic-bezier(0.1, 0.2, 0.3, 0.4)"),
        Some(Curve::CubicBezier(0.1, 0.2, 0.3, 0.4))
    );
    assert_eq!(
        Curve::try_parse("steps(3, start)"),
        Some(Curve::Steps(3, StepPosition::Start))
    );
    assert_eq!(Curve::try_parse("steps(0)"), None);
    assert_eq!(Curve::try_parse("cubic-bezier(2, 0, 0, 1)"), None);
    assert_eq!(Curve::parse("bouncy"), Curve::Ease);
}

#[test]
fn steps_quantize() {
    let end = Curve::Steps(4, StepPosition::End);
    assert_eq!(end.apply(0.3), 0.25);
    let start = Curve::Steps(4, StepPosition::Start);
    assert_eq!(start.apply(0.3), 0.5);
}
