//! domweave is the style cascade and component composition core of a
//! declarative UI node tree.
//!
//! - Build nodes in a [`DomTree`] from tags, attributes, styles and events
//! - Declare pseudo-class styles (`key:active`, `key:focus`, ...) and let
//!   interaction signals resolve them through the deferred task queue
//! - Read the composed chain of each node through [`DomTree::chain_snapshot`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compose;
pub(crate) mod dom;
pub(crate) mod style;

pub use crate::foundation::core::{
    Affine, BorderEdge, BorderStyle, Color, Dimension, DimensionOffset, DimensionUnit, Edges, Vec2,
};
pub use crate::foundation::error::{DomError, DomResult};
pub use crate::foundation::ids::{ComponentId, ComponentSlot, NodeHandle, NodeId, PageId};

pub use crate::animation::builder::{KeyframeMap, build_animation};
pub use crate::animation::curve::{Curve, StepPosition};
pub use crate::animation::keyframes::{Keyframe, KeyframeTrack};
pub use crate::animation::tween::{
    AnimatableProperty, AnimationTracks, SharedTransitionOption, TransitionOptions, Track,
    TweenOption,
};

pub use crate::compose::chain::{ChainSnapshot, Composition, Wrappers};
pub use crate::compose::component::{
    BoxProps, DisplayProps, FlexItemProps, FocusableProps, GestureProps, LeafComponent,
    MouseProps, MultimodalProps, PositionedProps, RootComponent, ScrollProps,
    SharedTransitionProps, TouchProps, TransformProps, TweenProps, UpdateType, Wrapper,
    WrapperKind,
};

pub use crate::dom::events::{
    EventAction, EventDispatcher, EventKind, EventMarker, EventStage, TouchEvent, TouchType,
    lookup_event,
};
pub use crate::dom::kind::{NodeKind, kind_for_tag};
pub use crate::dom::node::{DomNode, TransitionDirection};
pub use crate::dom::opts::TreeOpts;
pub use crate::dom::tree::{DomTree, Interaction};

pub use crate::style::attrs::{InteractionState, NodeAttrs, TextDirection};
pub use crate::style::props::{
    Display, NodeStyle, Overflow, PositionStyle, PositionType, StyleFlags, TransformOp, Visibility,
};
pub use crate::style::pseudo::{PseudoClassCache, PseudoState};
pub use crate::style::theme::{StaticTheme, ThemeRef, ThemeStore};
pub use crate::style::value::ValueParser;
