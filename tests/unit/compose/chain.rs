use super::*;
use crate::dom::events::EventChanges;
use crate::foundation::core::Dimension;
use crate::foundation::ids::PageId;
use crate::style::props::PositionStyle;

struct Fixture {
    tag: &'static str,
    style: NodeStyle,
    flags: StyleFlags,
    attrs: NodeAttrs,
    state: InteractionState,
    pseudo: PseudoState,
    events: EventBindings,
    tween: TweenOption,
    transitions: TransitionOptions,
    has_box: bool,
    flex_parent: Option<FlexParent>,
    wearable: bool,
}

impl Fixture {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            style: NodeStyle::default(),
            flags: StyleFlags::default(),
            attrs: NodeAttrs::default(),
            state: InteractionState::default(),
            pseudo: PseudoState::NORMAL,
            events: EventBindings::default(),
            tween: TweenOption::default(),
            transitions: TransitionOptions::default(),
            has_box: false,
            flex_parent: None,
            wearable: false,
        }
    }

    fn bind(&mut self, name: &str) {
        let mut changes = EventChanges::default();
        self.events.bind(name, NodeId(1), PageId(0), &mut changes);
    }

    fn input(&self) -> CompositionInput<'_> {
        CompositionInput {
            tag: self.tag,
            style: &self.style,
            flags: &self.flags,
            attrs: &self.attrs,
            state: self.state,
            pseudo: self.pseudo,
            events: &self.events,
            tween: &self.tween,
            tween_updated: false,
            transitions: &self.transitions,
            shared_tracks: None,
            has_box: self.has_box,
            ui_components: self.tag != "span",
            is_leaf: true,
            flex_parent: self.flex_parent,
            wearable: self.wearable,
        }
    }
}

fn composition() -> Composition {
    Composition::new(NodeId(1), LeafComponent::new(NodeId(1), "flex"))
}

fn wrapper_id(kind: WrapperKind) -> ComponentId {
    ComponentId::new(NodeId(1), ComponentSlot::Wrapper(kind))
}

#[test]
fn bare_node_roots_at_leaf() {
    let f = Fixture::new("text");
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);

    assert_eq!(c.root().child, Some(c.leaf().id));
    let snap = c.snapshot();
    assert!(snap.wrappers.is_empty());
    assert_eq!(snap.leaf, "flex");
    assert!(snap.needs_update);
}

#[test]
fn wrappers_link_in_fixed_order() {
    let mut f = Fixture::new("text");
    f.bind("touchstart");
    f.bind("click");
    f.flags.has_display_style = true;
    f.has_box = true;
    f.flex_parent = Some(FlexParent { column: Some(false) });

    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);

    let expected = [
        WrapperKind::FlexItem,
        WrapperKind::Focusable,
        WrapperKind::Touch,
        WrapperKind::Gesture,
        WrapperKind::Display,
        WrapperKind::Box,
    ];
    assert_eq!(c.snapshot().wrappers, expected);
    assert_eq!(c.linked(), expected);

    assert_eq!(c.root().child, Some(wrapper_id(WrapperKind::FlexItem)));
    assert_eq!(
        c.child_of(wrapper_id(WrapperKind::Display)),
        Some(wrapper_id(WrapperKind::Box))
    );
    assert_eq!(c.child_of(wrapper_id(WrapperKind::Box)), Some(c.leaf().id));
}

#[test]
fn unlinked_instances_survive_recomposition() {
    let mut f = Fixture::new("text");
    f.attrs.has_id = true;
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    assert_eq!(c.linked(), [WrapperKind::Gesture]);

    f.attrs.has_id = false;
    c.compose(&f.input(), UpdateType::Style);
    assert!(c.linked().is_empty());
    assert!(c.wrappers().contains(WrapperKind::Gesture));
    assert_eq!(c.child_of(wrapper_id(WrapperKind::Gesture)), None);
    assert_eq!(c.root().child, Some(c.leaf().id));
}

#[test]
fn positioned_wrapper_only_links_for_fixed() {
    let mut f = Fixture::new("text");
    f.flags.has_position_style = true;
    f.style.position = PositionStyle {
        kind: PositionType::Absolute,
        left: Some(Dimension::px(4.0)),
        ..PositionStyle::default()
    };
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    assert!(c.wrappers().contains(WrapperKind::Positioned));
    assert!(c.linked().is_empty());
    assert_eq!(c.root().position.map(|p| p.kind), Some(PositionType::Absolute));

    f.style.position.kind = PositionType::Fixed;
    c.compose(&f.input(), UpdateType::All);
    assert_eq!(c.linked(), [WrapperKind::Positioned]);
    assert_eq!(c.root().position, None);
}

#[test]
fn pending_full_update_is_not_downgraded() {
    let f = Fixture::new("text");
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    c.compose(&f.input(), UpdateType::Style);
    assert_eq!(c.root().update_type, UpdateType::All);

    c.root_mut().needs_update = false;
    c.compose(&f.input(), UpdateType::Style);
    assert_eq!(c.root().update_type, UpdateType::Style);
}

#[test]
fn multimodal_needs_voice_and_not_wearable() {
    let mut f = Fixture::new("text");
    f.bind("click");
    f.attrs.voice_label = Some("open".to_owned());
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    assert!(c.linked().contains(&WrapperKind::Multimodal));

    f.wearable = true;
    c.compose(&f.input(), UpdateType::All);
    assert!(!c.linked().contains(&WrapperKind::Multimodal));

    f.wearable = false;
    f.attrs.scene_label = SceneLabel::Switch;
    c.compose(&f.input(), UpdateType::All);
    assert!(!c.linked().contains(&WrapperKind::Multimodal));
}

#[test]
fn scroll_requires_sized_non_container() {
    let mut f = Fixture::new("list");
    f.style.overflow = Overflow::Scroll;
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    assert!(!c.linked().contains(&WrapperKind::Scroll));

    f.style.width = Dimension::px(100.0);
    f.style.height = Dimension::px(50.0);
    c.compose(&f.input(), UpdateType::All);
    assert!(c.linked().contains(&WrapperKind::Scroll));

    f.tag = "div";
    c.compose(&f.input(), UpdateType::All);
    assert!(!c.linked().contains(&WrapperKind::Scroll));
}

#[test]
fn focus_rules_follow_tag_and_pseudo() {
    let mut f = Fixture::new("span");
    f.pseudo = PseudoState::FOCUS;
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    assert!(!c.wrappers().contains(WrapperKind::Focusable));

    f.tag = "text";
    c.compose(&f.input(), UpdateType::All);
    let focus = c.wrappers().focusable.as_ref().map(|w| &w.props);
    assert_eq!(focus.map(|p| p.focus_node), Some(true));
    assert_eq!(focus.map(|p| p.reports_focus), Some(true));

    f.tag = "div";
    c.compose(&f.input(), UpdateType::All);
    let focus = c.wrappers().focusable.as_ref().map(|w| &w.props);
    assert_eq!(focus.map(|p| p.focus_node), Some(false));
}

#[test]
fn untouchable_node_gets_touch_wrapper() {
    let mut f = Fixture::new("text");
    f.attrs.touchable = false;
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    assert_eq!(c.linked(), [WrapperKind::Touch]);
    assert!(!c.leaf().touchable);
}

#[test]
fn flex_item_stretches_in_column_without_width() {
    let mut f = Fixture::new("text");
    f.flex_parent = Some(FlexParent { column: Some(true) });
    let mut c = composition();
    c.compose(&f.input(), UpdateType::All);
    let stretch = c.wrappers().flex_item.as_ref().map(|w| w.props.stretch);
    assert_eq!(stretch, Some(true));

    f.style.width = Dimension::px(10.0);
    c.compose(&f.input(), UpdateType::All);
    let stretch = c.wrappers().flex_item.as_ref().map(|w| w.props.stretch);
    assert_eq!(stretch, Some(false));
}
