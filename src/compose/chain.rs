use serde::Serialize;
use smallvec::SmallVec;

use crate::animation::tween::{
    AnimationTracks, SharedTransitionOption, TransitionOptions, TweenOption,
};
use crate::compose::component::{
    BoxProps, DisplayProps, FlexItemProps, FocusableProps, GestureProps, LeafComponent,
    MouseProps, MultimodalProps, PositionedProps, RootComponent, ScrollProps,
    SharedTransitionProps, TouchProps, TransformProps, TweenProps, UpdateType, Wrapper,
    WrapperKind,
};
use crate::dom::events::{EventBindings, EventKind};
use crate::foundation::ids::{ComponentId, ComponentSlot, NodeId};
use crate::style::attrs::{InteractionState, NodeAttrs, SceneLabel, SubscriptFlag};
use crate::style::props::{Display, NodeStyle, Overflow, PositionType, StyleFlags, Visibility};
use crate::style::pseudo::PseudoState;

/// Tags whose nodes delegate focus to descendants.
pub(crate) const FOCUSABLE_CONTAINER_TAGS: &[&str] = &[
    "button",
    "div",
    "list",
    "list-item",
    "refresh",
    "input",
    "option",
    "progress",
    "popup",
    "rating",
    "select",
    "slider",
    "stack",
    "stepper",
    "stepper-item",
    "swiper",
    "switch",
    "tabs",
    "tab-bar",
    "tab-content",
    "textarea",
    "toggle",
    "search",
    "video",
    "calendar",
    "picker-dialog",
    "piece",
];

/// Parent tags that lay their children out as flex items.
pub(crate) const FLEX_PARENT_TAGS: &[&str] = &[
    "div",
    "grid-column",
    "list-item",
    "list-item-group",
    "tabs",
    "refresh",
    "stepper-item",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Flex container a node was mounted into.
pub(crate) struct FlexParent {
    /// Main axis of a `div` style container; `None` for other containers.
    pub(crate) column: Option<bool>,
}

/// Everything a composition pass reads from its node.
pub(crate) struct CompositionInput<'a> {
    pub(crate) tag: &'a str,
    pub(crate) style: &'a NodeStyle,
    pub(crate) flags: &'a StyleFlags,
    pub(crate) attrs: &'a NodeAttrs,
    pub(crate) state: InteractionState,
    pub(crate) pseudo: PseudoState,
    pub(crate) events: &'a EventBindings,
    pub(crate) tween: &'a TweenOption,
    pub(crate) tween_updated: bool,
    pub(crate) transitions: &'a TransitionOptions,
    pub(crate) shared_tracks: Option<&'a AnimationTracks>,
    pub(crate) has_box: bool,
    /// `false` for inline kinds that only contribute a leaf.
    pub(crate) ui_components: bool,
    pub(crate) is_leaf: bool,
    pub(crate) flex_parent: Option<FlexParent>,
    pub(crate) wearable: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Every wrapper instance a node has constructed so far.
///
/// An instance, once created, outlives compositions that leave it unlinked.
pub struct Wrappers {
    /// Fixed position.
    pub positioned: Option<Wrapper<PositionedProps>>,
    /// Flex item.
    pub flex_item: Option<Wrapper<FlexItemProps>>,
    /// Focus.
    pub focusable: Option<Wrapper<FocusableProps>>,
    /// Touch.
    pub touch: Option<Wrapper<TouchProps>>,
    /// Click and long press.
    pub gesture: Option<Wrapper<GestureProps>>,
    /// Voice interaction.
    pub multimodal: Option<Wrapper<MultimodalProps>>,
    /// Mouse.
    pub mouse: Option<Wrapper<MouseProps>>,
    /// Display and opacity.
    pub display: Option<Wrapper<DisplayProps>>,
    /// Transform.
    pub transform: Option<Wrapper<TransformProps>>,
    /// Animation.
    pub tween: Option<Wrapper<TweenProps>>,
    /// Box decoration.
    pub r#box: Option<Wrapper<BoxProps>>,
    /// Scroll.
    pub scroll: Option<Wrapper<ScrollProps>>,
    /// Shared transition.
    pub shared_transition: Option<Wrapper<SharedTransitionProps>>,
}

impl Wrappers {
    /// An instance of `kind` exists, linked or not.
    pub fn contains(&self, kind: WrapperKind) -> bool {
        match kind {
            WrapperKind::Positioned => self.positioned.is_some(),
            WrapperKind::FlexItem => self.flex_item.is_some(),
            WrapperKind::Focusable => self.focusable.is_some(),
            WrapperKind::Touch => self.touch.is_some(),
            WrapperKind::Gesture => self.gesture.is_some(),
            WrapperKind::Multimodal => self.multimodal.is_some(),
            WrapperKind::Mouse => self.mouse.is_some(),
            WrapperKind::Display => self.display.is_some(),
            WrapperKind::Transform => self.transform.is_some(),
            WrapperKind::Tween => self.tween.is_some(),
            WrapperKind::Box => self.r#box.is_some(),
            WrapperKind::Scroll => self.scroll.is_some(),
            WrapperKind::SharedTransition => self.shared_transition.is_some(),
        }
    }

    fn child(&self, kind: WrapperKind) -> Option<ComponentId> {
        match kind {
            WrapperKind::Positioned => self.positioned.as_ref()?.child,
            WrapperKind::FlexItem => self.flex_item.as_ref()?.child,
            WrapperKind::Focusable => self.focusable.as_ref()?.child,
            WrapperKind::Touch => self.touch.as_ref()?.child,
            WrapperKind::Gesture => self.gesture.as_ref()?.child,
            WrapperKind::Multimodal => self.multimodal.as_ref()?.child,
            WrapperKind::Mouse => self.mouse.as_ref()?.child,
            WrapperKind::Display => self.display.as_ref()?.child,
            WrapperKind::Transform => self.transform.as_ref()?.child,
            WrapperKind::Tween => self.tween.as_ref()?.child,
            WrapperKind::Box => self.r#box.as_ref()?.child,
            WrapperKind::Scroll => self.scroll.as_ref()?.child,
            WrapperKind::SharedTransition => self.shared_transition.as_ref()?.child,
        }
    }

    fn set_child(&mut self, kind: WrapperKind, child: Option<ComponentId>) {
        let slot = match kind {
            WrapperKind::Positioned => self.positioned.as_mut().map(|w| &mut w.child),
            WrapperKind::FlexItem => self.flex_item.as_mut().map(|w| &mut w.child),
            WrapperKind::Focusable => self.focusable.as_mut().map(|w| &mut w.child),
            WrapperKind::Touch => self.touch.as_mut().map(|w| &mut w.child),
            WrapperKind::Gesture => self.gesture.as_mut().map(|w| &mut w.child),
            WrapperKind::Multimodal => self.multimodal.as_mut().map(|w| &mut w.child),
            WrapperKind::Mouse => self.mouse.as_mut().map(|w| &mut w.child),
            WrapperKind::Display => self.display.as_mut().map(|w| &mut w.child),
            WrapperKind::Transform => self.transform.as_mut().map(|w| &mut w.child),
            WrapperKind::Tween => self.tween.as_mut().map(|w| &mut w.child),
            WrapperKind::Box => self.r#box.as_mut().map(|w| &mut w.child),
            WrapperKind::Scroll => self.scroll.as_mut().map(|w| &mut w.child),
            WrapperKind::SharedTransition => self.shared_transition.as_mut().map(|w| &mut w.child),
        };
        if let Some(slot) = slot {
            *slot = child;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Serializable view of one node's composed chain.
pub struct ChainSnapshot {
    /// Owning node.
    pub node: NodeId,
    /// Linked wrappers, outermost first.
    pub wrappers: Vec<WrapperKind>,
    /// Leaf primitive name.
    pub leaf: String,
    /// Pending update kind.
    pub update_type: UpdateType,
    /// The renderer has not consumed the last composition yet.
    pub needs_update: bool,
    /// Root disabled flag.
    pub disabled: bool,
}

/// A node's root, wrappers and leaf.
#[derive(Clone, Debug)]
pub struct Composition {
    node: NodeId,
    wrappers: Wrappers,
    leaf: LeafComponent,
    root: RootComponent,
    linked: SmallVec<[WrapperKind; 13]>,
}

fn refresh<T: Default>(
    slot: &mut Option<Wrapper<T>>,
    node: NodeId,
    kind: WrapperKind,
    construct: bool,
    update: impl FnOnce(&mut T),
) {
    if construct && slot.is_none() {
        *slot = Some(Wrapper::new(node, kind));
    }
    if let Some(w) = slot {
        update(&mut w.props);
    }
}

impl Composition {
    pub(crate) fn new(node: NodeId, leaf: LeafComponent) -> Self {
        let mut root = RootComponent::new(node);
        root.child = Some(leaf.id);
        Self {
            node,
            wrappers: Wrappers::default(),
            leaf,
            root,
            linked: SmallVec::new(),
        }
    }

    /// Constructed wrappers.
    pub fn wrappers(&self) -> &Wrappers {
        &self.wrappers
    }

    pub(crate) fn wrappers_mut(&mut self) -> &mut Wrappers {
        &mut self.wrappers
    }

    /// The leaf component.
    pub fn leaf(&self) -> &LeafComponent {
        &self.leaf
    }

    pub(crate) fn leaf_mut(&mut self) -> &mut LeafComponent {
        &mut self.leaf
    }

    /// The stable root.
    pub fn root(&self) -> &RootComponent {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut RootComponent {
        &mut self.root
    }

    /// Wrappers linked by the last composition, outermost first.
    pub fn linked(&self) -> &[WrapperKind] {
        &self.linked
    }

    /// Component directly inside `id`.
    pub fn child_of(&self, id: ComponentId) -> Option<ComponentId> {
        if id.node != self.node {
            return None;
        }
        match id.slot {
            ComponentSlot::Root => self.root.child,
            ComponentSlot::Wrapper(kind) => self.wrappers.child(kind),
            ComponentSlot::Leaf => None,
        }
    }

    /// Walk the chain from the root.
    pub fn snapshot(&self) -> ChainSnapshot {
        let mut wrappers = Vec::with_capacity(self.linked.len());
        let mut cursor = self.root.child;
        while let Some(id) = cursor {
            match id.slot {
                ComponentSlot::Wrapper(kind) => wrappers.push(kind),
                ComponentSlot::Root | ComponentSlot::Leaf => break,
            }
            cursor = self.child_of(id);
        }
        ChainSnapshot {
            node: self.node,
            wrappers,
            leaf: self.leaf.name.clone(),
            update_type: self.root.update_type,
            needs_update: self.root.needs_update,
            disabled: self.root.disabled,
        }
    }

    /// Refresh wrapper properties from `input`, then relink the chain.
    pub(crate) fn compose(&mut self, input: &CompositionInput<'_>, update: UpdateType) {
        self.sync(input);
        self.link(update);
        tracing::debug!(
            node = self.node.0,
            wrappers = self.linked.len(),
            ?update,
            "composed"
        );
    }

    fn sync(&mut self, input: &CompositionInput<'_>) {
        let node = self.node;
        let style = input.style;
        let attrs = input.attrs;
        let events = input.events;
        let w = &mut self.wrappers;

        let fixed = style.position.kind == PositionType::Fixed;
        let ui = input.ui_components;
        let visible =
            style.display != Display::None && style.visibility != Visibility::Hidden;
        let need_positioned = ui && input.flags.has_position_style && fixed;
        refresh(
            &mut w.positioned,
            node,
            WrapperKind::Positioned,
            ui && input.flags.has_position_style,
            |p| p.position = style.position,
        );

        let need_flex = input.flex_parent.is_some();
        refresh(&mut w.flex_item, node, WrapperKind::FlexItem, need_flex, |p| {
            p.flex = style.flex;
            p.hidden = style.display == Display::None;
            // A fixed cross size or an aspect ratio rules stretching out.
            p.stretch = match input.flex_parent.and_then(|f| f.column) {
                Some(true) => !style.width.is_valid(),
                Some(false) => !style.height.is_valid(),
                None => false,
            } && style.flex.aspect_ratio <= 0.0;
        });

        let focus_events = [
            EventKind::Click,
            EventKind::Focus,
            EventKind::Blur,
            EventKind::Key,
        ];
        let need_focus = ui
            && (attrs.focusable.is_some()
                || focus_events.iter().any(|e| events.has(*e))
                || input.pseudo.contains(PseudoState::FOCUS)
                || style.display == Display::None);
        let focus_node = !FOCUSABLE_CONTAINER_TAGS.contains(&input.tag);
        refresh(
            &mut w.focusable,
            node,
            WrapperKind::Focusable,
            need_focus,
            |p| {
                p.focus_node = focus_node;
                p.focusable = attrs.focusable.unwrap_or(true);
                p.show = style.display != Display::None;
                p.reports_focus = input.pseudo.contains(PseudoState::FOCUS);
                p.markers = focus_events
                    .iter()
                    .filter_map(|e| events.get(*e).cloned())
                    .collect();
            },
        );

        let swipe = events.get(EventKind::Swipe).cloned();
        let reports_active = input.pseudo.contains(PseudoState::ACTIVE);
        let need_touch = ui
            && (events.has_touch() || reports_active || swipe.is_some() || !attrs.touchable);
        refresh(&mut w.touch, node, WrapperKind::Touch, need_touch, |p| {
            p.markers = events.touch_markers().cloned().collect();
            p.swipe = swipe;
            p.reports_active = reports_active;
            p.touchable = attrs.touchable;
            p.visible = visible;
        });

        let click = events.get(EventKind::Click).cloned();
        let long_press = events.get(EventKind::LongPress).cloned();
        let need_gesture = ui && (click.is_some() || long_press.is_some() || attrs.has_id);
        refresh(&mut w.gesture, node, WrapperKind::Gesture, need_gesture, |p| {
            p.click = click.clone();
            p.long_press = long_press;
            p.visible = visible;
        });

        let need_multimodal = ui
            && click.is_some()
            && (attrs.voice_label.is_some() || attrs.subscript_flag != SubscriptFlag::Off)
            && attrs.scene_label != SceneLabel::Switch
            && !input.wearable;
        refresh(
            &mut w.multimodal,
            node,
            WrapperKind::Multimodal,
            need_multimodal,
            |p| {
                p.voice_label = attrs.voice_label.clone();
                p.subscript_label = attrs.subscript_label.clone();
                p.subscript_flag = attrs.subscript_flag;
                p.scene = attrs.scene_label;
                p.click = click.clone();
            },
        );

        let mouse = events.get(EventKind::Mouse).cloned();
        let need_mouse = ui && mouse.is_some();
        refresh(&mut w.mouse, node, WrapperKind::Mouse, need_mouse, |p| {
            p.marker = mouse;
        });

        let need_display = ui && input.flags.has_display_style;
        refresh(&mut w.display, node, WrapperKind::Display, need_display, |p| {
            p.opacity = style.opacity;
            p.visibility = style.visibility;
            p.display = style.display;
            p.disable_layer = input.is_leaf;
        });

        let need_transform = input.flags.has_transform_style || attrs.click_effect.is_some();
        refresh(
            &mut w.transform,
            node,
            WrapperKind::Transform,
            need_transform,
            |p| {
                p.ops = style.transform.ops.clone();
                p.origin = style.transform.origin;
                p.affine = style.transform.to_affine();
                p.click_effect = attrs.click_effect;
                p.transition_effect = style.transition.effect;
            },
        );

        let need_tween = ui
            && ((input.tween.is_valid() && input.tween_updated)
                || input.transitions.enter.is_some()
                || input.transitions.exit.is_some());
        refresh(&mut w.tween, node, WrapperKind::Tween, need_tween, |p| {
            p.option = input.tween.clone();
            p.transitions = input.transitions.clone();
            p.is_leaf = input.is_leaf;
        });

        let need_box = ui && input.has_box;
        refresh(&mut w.r#box, node, WrapperKind::Box, need_box, |p| {
            p.width = style.width;
            p.height = style.height;
            p.min_width = style.min_width;
            p.min_height = style.min_height;
            p.max_width = style.max_width;
            p.max_height = style.max_height;
            p.padding = style.padding;
            p.margin = style.margin;
            p.border = style.border;
            p.background = style.background.clone();
            p.shadow = style.shadow;
            p.blur = style.blur;
            p.backdrop_blur = style.backdrop_blur;
            p.window_blur = style.window_blur;
        });

        let need_scroll = ui
            && style.overflow == Overflow::Scroll
            && style.width.is_valid()
            && style.height.is_valid()
            && !matches!(input.tag, "div" | "stack");
        refresh(&mut w.scroll, node, WrapperKind::Scroll, need_scroll, |p| {
            p.bar_color = style.scroll.bar_color;
            p.bar_width = style.scroll.bar_width;
            p.overscroll = style.scroll.overscroll;
        });

        let share_id = attrs.share_id.as_deref().filter(|s| !s.is_empty());
        refresh(
            &mut w.shared_transition,
            node,
            WrapperKind::SharedTransition,
            share_id.is_some(),
            |p| {
                p.option = share_id.map(|id| SharedTransitionOption {
                    share_id: id.to_owned(),
                    curve: style.transition.shared_curve,
                    effect: style.transition.shared_effect,
                    tracks: input.shared_tracks.cloned(),
                });
            },
        );

        let needed = |kind: WrapperKind| match kind {
            WrapperKind::Positioned => need_positioned,
            WrapperKind::FlexItem => need_flex,
            WrapperKind::Focusable => need_focus,
            WrapperKind::Touch => need_touch,
            WrapperKind::Gesture => need_gesture,
            WrapperKind::Multimodal => need_multimodal,
            WrapperKind::Mouse => need_mouse,
            WrapperKind::Display => need_display,
            WrapperKind::Transform => need_transform,
            WrapperKind::Tween => need_tween,
            WrapperKind::Box => need_box,
            WrapperKind::Scroll => need_scroll,
            WrapperKind::SharedTransition => share_id.is_some(),
        };
        self.linked = WrapperKind::ORDER
            .into_iter()
            .filter(|k| needed(*k))
            .collect();

        self.leaf.touchable = attrs.touchable;
        self.root.disabled = input.state.disabled;
        self.root.z_index = style.z_index;
        self.root.position = (input.flags.has_position_style && !fixed).then_some(style.position);
    }

    fn link(&mut self, update: UpdateType) {
        for kind in WrapperKind::ORDER {
            self.wrappers.set_child(kind, None);
        }
        let leaf = self.leaf.id;
        let ids: SmallVec<[ComponentId; 13]> = self
            .linked
            .iter()
            .map(|k| ComponentId::new(self.node, ComponentSlot::Wrapper(*k)))
            .collect();
        for (i, kind) in self.linked.iter().enumerate() {
            let next = ids.get(i + 1).copied().unwrap_or(leaf);
            self.wrappers.set_child(*kind, Some(next));
        }
        self.root.child = Some(ids.first().copied().unwrap_or(leaf));

        // A pending full update is never downgraded.
        let pending_all = self.root.needs_update && self.root.update_type == UpdateType::All;
        self.root.update_type = if pending_all { UpdateType::All } else { update };
        self.root.needs_update = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/chain.rs"]
mod tests;
