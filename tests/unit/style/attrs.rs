use super::*;

struct Fixture {
    attrs: NodeAttrs,
    style: NodeStyle,
    flags: StyleFlags,
}

fn apply(pairs: &[(&str, &str)], lite: bool) -> Fixture {
    let mut f = Fixture {
        attrs: NodeAttrs::default(),
        style: NodeStyle::default(),
        flags: StyleFlags::default(),
    };
    let mut ctx = AttrCtx {
        attrs: &mut f.attrs,
        style: &mut f.style,
        flags: &mut f.flags,
        lite,
    };
    for (k, v) in pairs {
        apply_attr(k, v, &mut ctx);
    }
    f
}

#[test]
fn state_attrs_are_recognized() {
    let mut state = InteractionState::default();
    assert!(apply_state_attr("disabled", "true", &mut state));
    assert!(apply_state_attr("waiting", "true", &mut state));
    assert!(!apply_state_attr("focusable", "true", &mut state));
    assert_eq!(state.status(), PseudoState::DISABLED | PseudoState::WAITING);
    assert!(apply_state_attr("disabled", "false", &mut state));
    assert_eq!(state.status(), PseudoState::WAITING);
}

#[test]
fn click_effect_levels() {
    for (raw, want) in [
        ("spring-small", ClickSpringEffect::Small),
        ("spring-medium", ClickSpringEffect::Medium),
        ("spring-large", ClickSpringEffect::Large),
    ] {
        assert_eq!(apply(&[("clickEffect", raw)], false).attrs.click_effect, Some(want));
    }
    assert_eq!(apply(&[("clickEffect", "wobble")], false).attrs.click_effect, None);
}

#[test]
fn show_false_hides_by_display_or_visibility() {
    let full = apply(&[("show", "false")], false);
    assert_eq!(full.style.display, Display::None);
    assert!(full.flags.has_display_style);
    assert_eq!(full.attrs.show.as_deref(), Some("false"));

    let lite = apply(&[("show", "false")], true);
    assert_eq!(lite.style.visibility, Visibility::Hidden);
    assert_eq!(lite.style.display, Display::Unset);
}

#[test]
fn focusable_is_user_defined_once_set() {
    assert_eq!(NodeAttrs::default().focusable, None);
    assert_eq!(apply(&[("focusable", "false")], false).attrs.focusable, Some(false));
}

#[test]
fn misc_attributes() {
    let f = apply(
        &[
            ("id", "x"),
            ("dir", "rtl"),
            ("sceneLabel", "switch"),
            ("shareid", "hero"),
            ("subscriptFlag", "auto"),
            ("touchable", "false"),
            ("voiceLabel", "ok"),
            ("unknownAttr", "1"),
        ],
        false,
    );
    assert!(f.attrs.has_id);
    assert_eq!(f.attrs.direction, TextDirection::Rtl);
    assert_eq!(f.attrs.scene_label, SceneLabel::Switch);
    assert_eq!(f.attrs.share_id.as_deref(), Some("hero"));
    assert_eq!(f.attrs.subscript_flag, SubscriptFlag::Auto);
    assert!(!f.attrs.touchable);
    assert_eq!(f.attrs.voice_label.as_deref(), Some("ok"));
}
