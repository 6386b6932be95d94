use super::*;

#[test]
fn defaults_match_framework_baseline() {
    let s = NodeStyle::default();
    assert!(!s.width.is_valid());
    assert!(!s.height.is_valid());
    assert_eq!(s.flex.shrink, 1.0);
    assert_eq!(s.flex.display_index, 1);
    assert_eq!(s.flex.aspect_ratio, -1.0);
    assert_eq!(s.opacity, 1.0);
    assert!(s.max_width.value.is_infinite());
    assert_eq!(s.border.edges.top.color, Color::BLACK);
}

#[test]
fn reset_keeps_position_and_timing() {
    let mut s = NodeStyle::default();
    s.width = Dimension::px(10.0);
    s.opacity = 0.3;
    s.position.kind = PositionType::Fixed;
    s.z_index = 4;
    s.animation.duration_ms = 200.0;
    s.transform.ops.push(TransformOp::Rotate(10.0));
    s.transform.origin = Some(DimensionOffset::default());

    s.reset_cascaded();

    assert!(!s.width.is_valid());
    assert_eq!(s.opacity, 1.0);
    assert!(s.transform.ops.is_empty());
    assert!(s.transform.origin.is_some());
    assert_eq!(s.position.kind, PositionType::Fixed);
    assert_eq!(s.z_index, 4);
    assert_eq!(s.animation.duration_ms, 200.0);
}

#[test]
fn affine_composes_pixel_ops() {
    let t = TransformStyle {
        ops: vec![
            TransformOp::TranslateX(Dimension::px(10.0)),
            TransformOp::Scale(2.0, 2.0),
        ],
        origin: None,
    };
    let m = t.to_affine().unwrap();
    let p = m * kurbo::Point::new(1.0, 1.0);
    assert_eq!((p.x, p.y), (12.0, 2.0));
}

#[test]
fn affine_rejects_percent_and_3d() {
    let percent = TransformStyle {
        ops: vec![TransformOp::TranslateY(Dimension::percent(0.5))],
        origin: None,
    };
    assert!(percent.to_affine().is_none());

    let rot_x = TransformStyle {
        ops: vec![TransformOp::RotateX(30.0)],
        origin: None,
    };
    assert!(rot_x.to_affine().is_none());
}
