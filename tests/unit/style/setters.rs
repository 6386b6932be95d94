use super::*;
use crate::foundation::core::{Color, DimensionOffset};
use crate::style::props::TransformOp;

fn apply(decls: &[(&str, &str)], rtl: bool) -> (NodeStyle, StyleFlags) {
    let mut style = NodeStyle::default();
    let mut flags = StyleFlags::default();
    {
        let mut ctx = StyleCtx {
            style: &mut style,
            flags: &mut flags,
            parser: ValueParser::default(),
            rtl,
        };
        for (k, v) in decls {
            apply_style(k, v, &mut ctx);
        }
    }
    (style, flags)
}

fn px(v: f64) -> Dimension {
    Dimension::px(v)
}

#[test]
fn width_sets_box_flag() {
    let (style, flags) = apply(&[("width", "100px")], false);
    assert_eq!(style.width, px(100.0));
    assert!(flags.has_box_style);
    assert!(!flags.has_display_style);
}

#[test]
fn unknown_key_is_ignored() {
    let mut style = NodeStyle::default();
    let mut flags = StyleFlags::default();
    let mut ctx = StyleCtx {
        style: &mut style,
        flags: &mut flags,
        parser: ValueParser::default(),
        rtl: false,
    };
    assert!(!apply_style("fontVariant", "small-caps", &mut ctx));
    assert_eq!(style, NodeStyle::default());
}

#[test]
fn margin_shorthand_variants() {
    let cases: [(&str, [f64; 4]); 4] = [
        ("5px", [5.0, 5.0, 5.0, 5.0]),
        ("1px 2px", [1.0, 2.0, 1.0, 2.0]),
        ("1px 2px 3px", [1.0, 2.0, 3.0, 2.0]),
        ("1px 2px 3px 4px", [1.0, 2.0, 3.0, 4.0]),
    ];
    for (raw, [t, r, b, l]) in cases {
        let (style, _) = apply(&[("margin", raw)], false);
        assert_eq!(style.margin.top, px(t), "{raw}");
        assert_eq!(style.margin.right, px(r), "{raw}");
        assert_eq!(style.margin.bottom, px(b), "{raw}");
        assert_eq!(style.margin.left, px(l), "{raw}");
    }
}

#[test]
fn padding_shorthand_with_five_values_is_skipped() {
    let (style, _) = apply(&[("padding", "1px 1px 1px 1px 1px")], false);
    assert_eq!(style.padding, NodeStyle::default().padding);
}

#[test]
fn start_end_follow_direction() {
    let (ltr, _) = apply(&[("paddingStart", "3px"), ("marginEnd", "4px")], false);
    assert_eq!(ltr.padding.left, px(3.0));
    assert_eq!(ltr.margin.right, px(4.0));

    let (rtl, _) = apply(&[("paddingStart", "3px"), ("marginEnd", "4px")], true);
    assert_eq!(rtl.padding.right, px(3.0));
    assert_eq!(rtl.margin.left, px(4.0));
}

#[test]
fn border_shorthand_token_counts() {
    let (one_width, _) = apply(&[("border", "2px")], false);
    assert_eq!(one_width.border.edges.left.width, px(2.0));

    let (one_style, _) = apply(&[("border", "dashed")], false);
    assert_eq!(one_style.border.edges.top.style, BorderStyle::Dashed);

    let (one_color, _) = apply(&[("border", "#FF0000")], false);
    assert_eq!(
        one_color.border.edges.bottom.color,
        Color::rgba(255, 0, 0, 255)
    );

    let (three, _) = apply(&[("border", "3px dotted #00FF00")], false);
    let e = three.border.edges.right;
    assert_eq!(e.width, px(3.0));
    assert_eq!(e.style, BorderStyle::Dotted);
    assert_eq!(e.color, Color::rgba(0, 255, 0, 255));
}

#[test]
fn malformed_border_token_keeps_prior_value() {
    let (style, _) = apply(
        &[("borderColor", "#0000FF"), ("border", "1px solid nonsense")],
        false,
    );
    let top = style.border.edges.top;
    assert_eq!(top.width, px(1.0));
    assert_eq!(top.style, BorderStyle::Solid);
    assert_eq!(top.color, Color::rgba(0, 0, 255, 255));

    let (garbage, _) = apply(&[("border", "~~~")], false);
    assert_eq!(garbage.border, NodeStyle::default().border);

    let (too_many, _) = apply(&[("border", "1px solid red extra")], false);
    assert_eq!(too_many.border, NodeStyle::default().border);
}

#[test]
fn per_edge_border_values() {
    let (style, _) = apply(
        &[
            ("borderWidth", "1px 2px 3px 4px"),
            ("borderLeftColor", "#123456"),
            ("borderTopLeftRadius", "6px"),
        ],
        false,
    );
    assert_eq!(style.border.edges.top.width, px(1.0));
    assert_eq!(style.border.edges.left.width, px(4.0));
    assert_eq!(style.border.edges.left.color, Color::rgba(0x12, 0x34, 0x56, 255));
    assert_eq!(style.border.radius.top_left, px(6.0));
}

#[test]
fn linear_gradient_background() {
    let raw = r##"{"values":[{"type":"linearGradient","directions":["to","right"],"values":["#FF0000 0%","rgba(0, 0, 255, 0.5) 100%"]}]}"##;
    let (style, _) = apply(&[("background", raw)], false);
    let g = style.background.gradient.unwrap();
    assert_eq!(g.kind, GradientKind::Linear);
    assert_eq!(g.direction, GradientDirection::Side(Side::Right));
    assert_eq!(g.stops.len(), 2);
    assert_eq!(g.stops[1].color, Color::rgba(0, 0, 255, 128));
    assert_eq!(g.stops[1].position, Some(Dimension::percent(1.0)));
}

#[test]
fn gradient_with_bad_direction_length_is_skipped() {
    let raw = r##"{"values":[{"type":"linearGradient","directions":["to","left","top","x"],"values":["#FF0000"]}]}"##;
    let (style, _) = apply(&[("background", raw), ("backgroundColor", "#FFFFFF")], false);
    assert!(style.background.gradient.is_none());
    assert_eq!(style.background.color, Color::WHITE);
}

#[test]
fn shadow_components_accumulate() {
    let (style, flags) = apply(
        &[
            ("boxShadowH", "10px"),
            ("boxShadowV", "20px"),
            ("boxShadowBlur", "5px"),
            ("boxShadowColor", "#000000"),
        ],
        false,
    );
    let s = style.shadow.unwrap();
    assert_eq!((s.offset_x, s.offset_y, s.blur), (10.0, 20.0, 5.0));
    assert_eq!(s.color, Color::BLACK);
    assert!(flags.has_box_style);
}

#[test]
fn position_edges_only_when_non_empty() {
    let (style, flags) = apply(&[("position", "fixed"), ("left", "5px"), ("top", "")], false);
    assert_eq!(style.position.kind, PositionType::Fixed);
    assert_eq!(style.position.left, Some(px(5.0)));
    assert_eq!(style.position.top, None);
    assert!(flags.has_position_style);
}

#[test]
fn transform_replaces_previous_ops() {
    let (style, flags) = apply(
        &[("transform", "rotate(10deg)"), ("transform", "translate(1px, 2px)")],
        false,
    );
    assert_eq!(
        style.transform.ops,
        vec![TransformOp::Translate(DimensionOffset::new(px(1.0), px(2.0)))]
    );
    assert!(flags.has_transform_style);
}

#[test]
fn flex_shorthand_forms() {
    let (grow_only, _) = apply(&[("flex", "2")], false);
    assert_eq!(grow_only.flex.grow, 2.0);

    let (basis_only, _) = apply(&[("flex", "40px")], false);
    assert_eq!(basis_only.flex.basis, px(40.0));

    let (full, flags) = apply(&[("flex", "1 0 10px")], false);
    assert_eq!(full.flex.grow, 1.0);
    assert_eq!(full.flex.shrink, 0.0);
    assert_eq!(full.flex.basis, px(10.0));
    assert!(flags.has_flex_style);
}

#[test]
fn timing_styles() {
    let (style, _) = apply(
        &[
            ("animationDuration", "2s"),
            ("animationDelay", "150ms"),
            ("animationIterationCount", "infinite"),
            ("animationTimingFunction", "ease-in"),
            ("animationFillMode", "forwards"),
            ("transitionEffect", "unfold"),
        ],
        false,
    );
    assert_eq!(style.animation.duration_ms, 2000.0);
    assert_eq!(style.animation.delay_ms, 150.0);
    assert_eq!(style.animation.iterations, -1);
    assert_eq!(style.animation.curve, Curve::EaseIn);
    assert_eq!(style.animation.fill_mode, FillMode::Forwards);
    assert_eq!(style.transition.effect, TransitionEffect::Unfold);
}

#[test]
fn filters_accept_blur_only() {
    let (style, _) = apply(&[("filter", "blur(20px)"), ("backdropFilter", "sepia(1)")], false);
    assert_eq!(style.blur, Some(px(20.0)));
    assert_eq!(style.backdrop_blur, None);
}
