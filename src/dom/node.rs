use crate::animation::builder::{KeyframeMap, build_animation};
use crate::animation::tween::{AnimationTracks, TransitionOptions, TweenOption};
use crate::compose::chain::{Composition, CompositionInput, FlexParent};
use crate::compose::component::{LeafComponent, UpdateType};
use crate::dom::events::{EventBindings, EventChanges, EventMarker};
use crate::dom::kind::NodeKind;
use crate::dom::opts::TreeOpts;
use crate::foundation::ids::{NodeHandle, NodeId, PageId};
use crate::style::attrs::{
    AttrCtx, InteractionState, NodeAttrs, TextDirection, apply_attr, apply_show,
    apply_state_attr,
};
use crate::style::cascade;
use crate::style::props::{NodeStyle, StyleFlags};
use crate::style::pseudo::{PseudoClassCache, PseudoState};
use crate::style::setters::{StyleCtx, apply_style};
use crate::style::value::ValueParser;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which page transition a keyframe list describes.
pub enum TransitionDirection {
    /// `transitionEnter`.
    Enter,
    /// `transitionExit`.
    Exit,
}

/// Per-call environment a node needs from its tree.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeCtx<'a> {
    pub(crate) parser: ValueParser<'a>,
    pub(crate) opts: TreeOpts,
}

/// One DOM node: declared styles, attributes, events and its composition.
#[derive(Debug)]
pub struct DomNode {
    id: NodeId,
    tag: String,
    kind: Box<dyn NodeKind>,
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,
    style: NodeStyle,
    flags: StyleFlags,
    attrs: NodeAttrs,
    pub(crate) state: InteractionState,
    pseudo: PseudoClassCache,
    events: EventBindings,
    kind_markers: Vec<EventMarker>,
    tween: TweenOption,
    tween_updated: bool,
    transitions: TransitionOptions,
    shared_tracks: Option<AnimationTracks>,
    pub(crate) flex_parent: Option<FlexParent>,
    pub(crate) is_root: bool,
    pub(crate) mounted: bool,
    composition: Composition,
}

fn set_current_style(
    kind: &mut dyn NodeKind,
    ctx: &mut StyleCtx<'_, '_>,
    key: &str,
    value: &str,
) {
    if kind.try_set_style(key, value, &ctx.parser) {
        return;
    }
    apply_style(key, value, ctx);
}

impl DomNode {
    pub(crate) fn new(id: NodeId, tag: &str, kind: Box<dyn NodeKind>) -> Self {
        let leaf = LeafComponent::new(id, kind.leaf_name());
        Self {
            id,
            tag: tag.to_owned(),
            kind,
            parent: None,
            children: Vec::new(),
            style: NodeStyle::default(),
            flags: StyleFlags::default(),
            attrs: NodeAttrs::default(),
            state: InteractionState::default(),
            pseudo: PseudoClassCache::default(),
            events: EventBindings::default(),
            kind_markers: Vec::new(),
            tween: TweenOption::default(),
            tween_updated: false,
            transitions: TransitionOptions::default(),
            shared_tracks: None,
            flex_parent: None,
            is_root: false,
            mounted: false,
            composition: Composition::new(id, leaf),
        }
    }

    /// Document id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Parent handle, if mounted under one.
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Child handles in slot order.
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Current typed style.
    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    /// Style groups seen so far.
    pub fn flags(&self) -> &StyleFlags {
        &self.flags
    }

    /// Generic attributes.
    pub fn attrs(&self) -> &NodeAttrs {
        &self.attrs
    }

    /// Interaction flags.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Pseudo-class declarations.
    pub fn pseudo(&self) -> &PseudoClassCache {
        &self.pseudo
    }

    /// Generic event bindings.
    pub fn events(&self) -> &EventBindings {
        &self.events
    }

    /// Keyframe animation option.
    pub fn tween(&self) -> &TweenOption {
        &self.tween
    }

    /// Page transition options.
    pub fn transitions(&self) -> &TransitionOptions {
        &self.transitions
    }

    /// Root, wrappers and leaf.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub(crate) fn composition_mut(&mut self) -> &mut Composition {
        &mut self.composition
    }

    pub(crate) fn kind(&self) -> &dyn NodeKind {
        self.kind.as_ref()
    }

    pub(crate) fn kind_mut(&mut self) -> &mut dyn NodeKind {
        self.kind.as_mut()
    }

    fn rtl(&self, opts: &TreeOpts) -> bool {
        match self.attrs.direction {
            TextDirection::Rtl => true,
            TextDirection::Ltr => false,
            TextDirection::Auto => opts.right_to_left,
        }
    }

    pub(crate) fn set_attrs<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        attrs: &[(K, V)],
        ctx: &NodeCtx<'_>,
    ) {
        self.composition.root_mut().update_type = UpdateType::All;
        for (key, value) in attrs {
            let (key, value) = (key.as_ref(), value.as_ref());
            apply_state_attr(key, value, &mut self.state);
            if self.kind.try_set_attr(key, value) {
                continue;
            }
            let mut attr_ctx = AttrCtx {
                attrs: &mut self.attrs,
                style: &mut self.style,
                flags: &mut self.flags,
                lite: ctx.opts.lite_style,
            };
            apply_attr(key, value, &mut attr_ctx);
        }
    }

    /// Pairs without a pseudo marker apply immediately; every pair is cached.
    pub(crate) fn set_styles<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        styles: &[(K, V)],
        ctx: &NodeCtx<'_>,
    ) {
        let rtl = self.rtl(&ctx.opts);
        for (key, value) in styles {
            let (key, value) = (key.as_ref(), value.as_ref());
            self.pseudo.cache_style(key, value);
            if key.contains(':') {
                continue;
            }
            let mut style_ctx = StyleCtx {
                style: &mut self.style,
                flags: &mut self.flags,
                parser: ctx.parser,
                rtl,
            };
            set_current_style(self.kind.as_mut(), &mut style_ctx, key, value);
        }
    }

    /// Bind events; a name bound again displaces its earlier marker.
    pub(crate) fn add_events<S: AsRef<str>>(&mut self, page: PageId, names: &[S]) -> EventChanges {
        let mut changes = EventChanges::default();
        for name in names {
            let name = name.as_ref();
            let marker = EventMarker::new(self.id, name, page);
            if self.kind.try_add_event(&marker) {
                if let Some(pos) = self.kind_markers.iter().position(|m| m.event == name) {
                    changes.replaced.push(self.kind_markers.remove(pos));
                }
                self.kind_markers.push(marker.clone());
                changes.bound.push(marker);
                continue;
            }
            if !self.events.bind(name, self.id, page, &mut changes) {
                tracing::trace!(event = name, "unknown event");
            }
        }
        changes
    }

    /// Every marker this node owns, leaving none behind.
    pub(crate) fn take_markers(&mut self) -> Vec<EventMarker> {
        let mut markers = self.events.take_all();
        markers.append(&mut self.kind_markers);
        markers
    }

    pub(crate) fn set_animation_style(&mut self, frames: &[KeyframeMap], ctx: &NodeCtx<'_>) -> bool {
        let Some(tracks) = build_animation(frames, &ctx.parser, self.rtl(&ctx.opts)) else {
            tracing::warn!(node = self.id.0, "animation keyframes produced no tracks");
            return false;
        };
        self.tween.tracks = tracks;
        self.tween_updated = true;
        true
    }

    pub(crate) fn set_transition_style(
        &mut self,
        frames: &[KeyframeMap],
        direction: TransitionDirection,
        ctx: &NodeCtx<'_>,
    ) -> bool {
        let tracks = build_animation(frames, &ctx.parser, self.rtl(&ctx.opts));
        let built = tracks.is_some();
        match direction {
            TransitionDirection::Enter => self.transitions.enter = tracks,
            TransitionDirection::Exit => self.transitions.exit = tracks,
        }
        built
    }

    pub(crate) fn set_shared_transition_style(
        &mut self,
        frames: &[KeyframeMap],
        ctx: &NodeCtx<'_>,
    ) -> bool {
        self.shared_tracks = build_animation(frames, &ctx.parser, self.rtl(&ctx.opts));
        self.shared_tracks.is_some()
    }

    /// Restore defaults, then layer the normal and best matching declarations.
    pub(crate) fn resolve_pseudo(&mut self, status: PseudoState, ctx: &NodeCtx<'_>) {
        let rtl = self.rtl(&ctx.opts);
        let id = self.id;
        let Self {
            kind,
            style,
            flags,
            attrs,
            pseudo,
            composition,
            ..
        } = self;

        style.reset_cascaded();
        flags.has_display_style = false;
        if let Some(show) = attrs.show.as_deref() {
            apply_show(show, style, flags, ctx.opts.lite_style);
        }
        kind.reset_style();

        let plan = cascade::plan(pseudo, status);
        tracing::debug!(
            node = id.0,
            status = status.bits(),
            selected = plan.selected.map(|s| s.bits()),
            "cascade"
        );
        let mut style_ctx = StyleCtx {
            style,
            flags: &mut *flags,
            parser: ctx.parser,
            rtl,
        };
        for (key, value) in plan.declarations() {
            set_current_style(kind.as_mut(), &mut style_ctx, key, value);
        }
        if !flags.has_display_style {
            composition.wrappers_mut().display = None;
        }
    }

    /// Synchronous resolution used while building the composition.
    fn update_pseudo_style(&mut self, ctx: &NodeCtx<'_>) {
        if !self.pseudo.has_pseudo() {
            return;
        }
        self.resolve_pseudo(self.state.status(), ctx);
    }

    /// Resolution driven by an interaction signal: restyle and recompose.
    pub(crate) fn resolve_backend(&mut self, status: PseudoState, ctx: &NodeCtx<'_>) {
        self.resolve_pseudo(status, ctx);
        self.compose(UpdateType::Style, ctx);
    }

    /// Resolve, prepare the leaf and compose.
    pub(crate) fn generate_component_node(&mut self, update: UpdateType, ctx: &NodeCtx<'_>) {
        self.update_pseudo_style(ctx);
        self.compose(update, ctx);
    }

    pub(crate) fn compose(&mut self, update: UpdateType, ctx: &NodeCtx<'_>) {
        if self.tween.is_valid() {
            self.tween.timing = Some(self.style.animation);
            self.tween.origin = self.style.transform.origin;
        }
        self.kind.prepare_leaf(self.composition.leaf_mut());
        let input = CompositionInput {
            tag: &self.tag,
            style: &self.style,
            flags: &self.flags,
            attrs: &self.attrs,
            state: self.state,
            pseudo: self.pseudo.cached_mask(),
            events: &self.events,
            tween: &self.tween,
            tween_updated: self.tween_updated,
            transitions: &self.transitions,
            shared_tracks: self.shared_tracks.as_ref(),
            has_box: self.kind.has_box(),
            ui_components: self.kind.ui_components(),
            is_leaf: self.children.is_empty(),
            flex_parent: self.flex_parent,
            wearable: ctx.opts.wearable,
        };
        self.composition.compose(&input, update);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/node.rs"]
mod tests;
