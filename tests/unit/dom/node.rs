use super::*;
use crate::dom::kind::kind_for_tag;
use crate::foundation::core::{Color, Dimension};
use crate::style::props::Display;

fn node(tag: &str) -> DomNode {
    DomNode::new(NodeId(7), tag, kind_for_tag(tag))
}

fn ctx() -> NodeCtx<'static> {
    NodeCtx {
        parser: ValueParser::default(),
        opts: TreeOpts::default(),
    }
}

#[test]
fn disabled_attr_then_width_style() {
    let mut n = node("div");
    n.set_attrs(&[("disabled", "true")], &ctx());
    n.set_styles(&[("width", "100px")], &ctx());

    assert!(n.state().disabled);
    assert_eq!(n.style().width, Dimension::px(100.0));
    assert!(n.flags().has_box_style);
}

#[test]
fn pseudo_keys_are_cached_not_applied() {
    let mut n = node("div");
    n.set_styles(
        &[
            ("backgroundColor:active", "#FF0000"),
            ("backgroundColor", "#00FF00"),
        ],
        &ctx(),
    );
    assert_eq!(n.style().background.color, Color::rgba(0, 255, 0, 255));
    assert!(n.pseudo().declares(PseudoState::ACTIVE));

    n.state.active = true;
    n.resolve_pseudo(n.state().status(), &ctx());
    assert_eq!(n.style().background.color, Color::rgba(255, 0, 0, 255));

    n.state.active = false;
    n.resolve_pseudo(n.state().status(), &ctx());
    assert_eq!(n.style().background.color, Color::rgba(0, 255, 0, 255));
}

#[test]
fn show_attr_survives_cascade_reset() {
    let mut n = node("div");
    n.set_attrs(&[("show", "false")], &ctx());
    n.set_styles(&[("opacity:focus", "0.5")], &ctx());
    assert_eq!(n.style().display, Display::None);

    n.state.focus = true;
    n.resolve_pseudo(n.state().status(), &ctx());
    assert_eq!(n.style().display, Display::None);
    assert_eq!(n.style().opacity, 0.5);
    assert!(n.flags().has_display_style);
}

#[test]
fn kind_hooks_consume_before_generic_table() {
    let mut n = node("text");
    n.set_attrs(&[("value", "hi"), ("id", "title")], &ctx());
    assert!(n.attrs().has_id);

    n.set_styles(&[("color", "#FF0000")], &ctx());
    assert!(!n.flags().has_box_style);
}

#[test]
fn button_click_is_owned_by_the_kind() {
    let mut n = node("button");
    let changes = n.add_events(PageId(3), &["click", "touchstart", "bogus"]);
    assert_eq!(changes.bound.len(), 2);
    assert!(!n.events().has(crate::dom::events::EventKind::Click));
    assert!(n.events().has_touch());

    let released = n.take_markers();
    assert_eq!(released.len(), 2);
    assert!(n.take_markers().is_empty());
}

#[test]
fn rebinding_a_kind_event_keeps_one_marker() {
    let mut n = node("button");
    n.add_events(PageId(1), &["click"]);
    let changes = n.add_events(PageId(2), &["click"]);
    assert_eq!(changes.replaced.len(), 1);
    assert_eq!(changes.replaced[0].page, PageId(1));

    let owned = n.take_markers();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].page, PageId(2));
}

#[test]
fn empty_keyframes_leave_tween_untouched() {
    let mut n = node("div");
    assert!(!n.set_animation_style(&[], &ctx()));
    assert!(!n.tween().is_valid());
}

#[test]
fn generate_component_node_composes_once_per_call() {
    let mut n = node("div");
    n.set_styles(&[("width", "10px"), ("opacity", "0.3")], &ctx());
    n.generate_component_node(UpdateType::All, &ctx());

    let snap = n.composition().snapshot();
    assert_eq!(
        snap.wrappers,
        [
            crate::compose::component::WrapperKind::Display,
            crate::compose::component::WrapperKind::Box
        ]
    );
    assert_eq!(snap.leaf, "flex");
    assert!(snap.needs_update);
}
