use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::animation::tween::{SharedTransitionOption, TransitionOptions, TweenOption};
use crate::dom::events::EventMarker;
use crate::foundation::core::{Affine, Color, Dimension, DimensionOffset, Edges};
use crate::foundation::ids::{ComponentId, ComponentSlot, NodeId};
use crate::style::attrs::{ClickSpringEffect, SceneLabel, SubscriptFlag};
use crate::style::props::{
    Background, Border, Display, FlexStyle, OverscrollEffect, PositionStyle, Shadow,
    TransformOp, TransitionEffect, Visibility,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Wrapper categories, declared outermost first.
pub enum WrapperKind {
    /// Escapes layout for `position: fixed`.
    Positioned,
    /// Flex participation inside a flex container.
    FlexItem,
    /// Focus handling.
    Focusable,
    /// Raw touch listeners and the active state.
    Touch,
    /// Click and long press recognition.
    Gesture,
    /// Voice interaction.
    Multimodal,
    /// Mouse listener.
    Mouse,
    /// Opacity, visibility and display.
    Display,
    /// Transform and click spring effect.
    Transform,
    /// Keyframe animation and transitions.
    Tween,
    /// Size, padding, border and background.
    Box,
    /// Scroll container.
    Scroll,
    /// Cross-page shared element.
    SharedTransition,
}

impl WrapperKind {
    /// Every kind in chain order.
    pub const ORDER: [Self; 13] = [
        Self::Positioned,
        Self::FlexItem,
        Self::Focusable,
        Self::Touch,
        Self::Gesture,
        Self::Multimodal,
        Self::Mouse,
        Self::Display,
        Self::Transform,
        Self::Tween,
        Self::Box,
        Self::Scroll,
        Self::SharedTransition,
    ];
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One wrapper instance. `child` is relinked on every composition.
pub struct Wrapper<T> {
    /// Stable identity.
    pub id: ComponentId,
    /// Next component inward, if linked.
    pub child: Option<ComponentId>,
    /// Kind specific properties.
    pub props: T,
}

impl<T: Default> Wrapper<T> {
    pub(crate) fn new(node: NodeId, kind: WrapperKind) -> Self {
        Self {
            id: ComponentId::new(node, ComponentSlot::Wrapper(kind)),
            child: None,
            props: T::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Positioned`] properties.
pub struct PositionedProps {
    /// Fixed position and edge offsets.
    pub position: PositionStyle,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::FlexItem`] properties.
pub struct FlexItemProps {
    /// Grow, shrink, basis and alignment.
    pub flex: FlexStyle,
    /// Hidden with `display: none`.
    pub hidden: bool,
    /// Stretches across a column container's cross axis.
    pub stretch: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Focusable`] properties.
pub struct FocusableProps {
    /// Takes focus itself rather than delegating to a descendant.
    pub focus_node: bool,
    /// Author or default focusability.
    pub focusable: bool,
    /// Not hidden by `display: none`.
    pub show: bool,
    /// A focus pseudo style exists, so focus changes must be reported.
    pub reports_focus: bool,
    /// Bound click, focus, blur and key markers.
    pub markers: Vec<EventMarker>,
    /// Set by the `focus` method, consumed by the renderer.
    pub focus_requested: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Touch`] properties.
pub struct TouchProps {
    /// Bound touch markers.
    pub markers: Vec<EventMarker>,
    /// Bound swipe marker.
    pub swipe: Option<EventMarker>,
    /// An active pseudo style exists, so presses must be reported.
    pub reports_active: bool,
    /// `touchable` attribute.
    pub touchable: bool,
    /// Neither `display: none` nor `visibility: hidden`.
    pub visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Gesture`] properties.
pub struct GestureProps {
    /// Click marker.
    pub click: Option<EventMarker>,
    /// Long press marker.
    pub long_press: Option<EventMarker>,
    /// Neither `display: none` nor `visibility: hidden`.
    pub visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Multimodal`] properties.
pub struct MultimodalProps {
    /// `voiceLabel`.
    pub voice_label: Option<String>,
    /// `subscriptLabel`.
    pub subscript_label: Option<String>,
    /// `subscriptFlag`.
    pub subscript_flag: SubscriptFlag,
    /// `sceneLabel`.
    pub scene: SceneLabel,
    /// Click marker fired by a voice command.
    pub click: Option<EventMarker>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Mouse`] properties.
pub struct MouseProps {
    /// Mouse marker.
    pub marker: Option<EventMarker>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// [`WrapperKind::Display`] properties.
pub struct DisplayProps {
    /// `opacity`.
    pub opacity: f64,
    /// `visibility`, or `show` in lite mode.
    pub visibility: Visibility,
    /// `display`, or `show`.
    pub display: Display,
    /// The node has no children, so no separate layer is needed.
    pub disable_layer: bool,
}

impl Default for DisplayProps {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            visibility: Visibility::Unset,
            display: Display::Unset,
            disable_layer: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Transform`] properties.
pub struct TransformProps {
    /// Operations in application order.
    pub ops: Vec<TransformOp>,
    /// `transformOrigin`.
    pub origin: Option<DimensionOffset>,
    /// Flattened matrix when every operation is 2D and in px.
    pub affine: Option<Affine>,
    /// `clickEffect`.
    pub click_effect: Option<ClickSpringEffect>,
    /// `transitionEffect`.
    pub transition_effect: TransitionEffect,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Tween`] properties.
pub struct TweenProps {
    /// Keyframe animation.
    pub option: TweenOption,
    /// Page enter and exit animations.
    pub transitions: TransitionOptions,
    /// The node has no children.
    pub is_leaf: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// [`WrapperKind::Box`] properties.
pub struct BoxProps {
    /// `width`; negative when unset.
    pub width: Dimension,
    /// `height`; negative when unset.
    pub height: Dimension,
    /// `minWidth`.
    pub min_width: Dimension,
    /// `minHeight`.
    pub min_height: Dimension,
    /// `maxWidth`.
    pub max_width: Dimension,
    /// `maxHeight`.
    pub max_height: Dimension,
    /// Padding per edge.
    pub padding: Edges<Dimension>,
    /// Margin per edge.
    pub margin: Edges<Dimension>,
    /// Border edges and radii.
    pub border: Border,
    /// Background decoration.
    pub background: Background,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
    /// Content blur.
    pub blur: Option<Dimension>,
    /// Backdrop blur.
    pub backdrop_blur: Option<Dimension>,
    /// Window blur.
    pub window_blur: Option<Dimension>,
}

impl Default for BoxProps {
    fn default() -> Self {
        Self {
            width: Dimension::px(-1.0),
            height: Dimension::px(-1.0),
            min_width: Dimension::px(0.0),
            min_height: Dimension::px(0.0),
            max_width: Dimension::px(f64::INFINITY),
            max_height: Dimension::px(f64::INFINITY),
            padding: Edges::all(Dimension::px(0.0)),
            margin: Edges::all(Dimension::px(0.0)),
            border: Border::default(),
            background: Background::default(),
            shadow: None,
            blur: None,
            backdrop_blur: None,
            window_blur: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::Scroll`] properties.
pub struct ScrollProps {
    /// `scrollbarColor`.
    pub bar_color: Option<Color>,
    /// `scrollbarWidth`.
    pub bar_width: Option<Dimension>,
    /// `overscrollEffect`.
    pub overscroll: OverscrollEffect,
    /// Accumulated `scrollBy` offset not yet consumed by the renderer.
    pub pending_scroll: Option<DimensionOffset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// [`WrapperKind::SharedTransition`] properties.
pub struct SharedTransitionProps {
    /// Share id, curve and tracks.
    pub option: Option<SharedTransitionOption>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Node-kind specific rendering primitive at the end of the chain.
pub struct LeafComponent {
    /// Stable identity.
    pub id: ComponentId,
    /// Primitive name, e.g. `text` or `flex`.
    pub name: String,
    /// Mirrors the `touchable` attribute.
    pub touchable: bool,
    /// Kind specific values.
    pub props: BTreeMap<String, serde_json::Value>,
}

impl LeafComponent {
    /// Leaf named `name` for `node`.
    pub fn new(node: NodeId, name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::new(node, ComponentSlot::Leaf),
            name: name.into(),
            touchable: true,
            props: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How much the consumer must redo after a composition.
pub enum UpdateType {
    /// Restyle only.
    Style,
    #[default]
    /// Full rebuild and relayout.
    All,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Stable handle the renderer keeps for a node.
pub struct RootComponent {
    /// Stable identity.
    pub id: ComponentId,
    /// Outermost present component.
    pub child: Option<ComponentId>,
    /// Pending update kind.
    pub update_type: UpdateType,
    /// Set by every composition; cleared by [`crate::DomTree::take_root_update`].
    pub needs_update: bool,
    /// Mirrors the `disabled` interaction flag.
    pub disabled: bool,
    /// `zIndex`.
    pub z_index: i32,
    /// Positioning handled by the parent layout (not `fixed`).
    pub position: Option<PositionStyle>,
}

impl RootComponent {
    pub(crate) fn new(node: NodeId) -> Self {
        Self {
            id: ComponentId::new(node, ComponentSlot::Root),
            child: None,
            update_type: UpdateType::All,
            needs_update: false,
            disabled: false,
            z_index: 0,
            position: None,
        }
    }
}
