use std::collections::BTreeMap;

use serde::Serialize;

use crate::animation::curve::Curve;
use crate::animation::keyframes::KeyframeTrack;
use crate::foundation::core::{Color, DimensionOffset};
use crate::style::props::{AnimationTiming, SharedTransitionEffect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
/// Property driven by a keyframe track.
pub enum AnimatableProperty {
    /// Width in the declared unit.
    Width,
    /// Height in the declared unit.
    Height,
    /// Opacity.
    Opacity,
    /// Background color.
    BackgroundColor,
    /// Background image position.
    BackgroundPosition,
    /// Top padding.
    PaddingTop,
    /// Right padding.
    PaddingRight,
    /// Bottom padding.
    PaddingBottom,
    /// Left padding.
    PaddingLeft,
    /// Top margin.
    MarginTop,
    /// Right margin.
    MarginRight,
    /// Bottom margin.
    MarginBottom,
    /// Left margin.
    MarginLeft,
    /// Two-axis translation.
    Translate,
    /// Horizontal translation.
    TranslateX,
    /// Vertical translation.
    TranslateY,
    /// Uniform scale.
    Scale,
    /// Horizontal scale.
    ScaleX,
    /// Vertical scale.
    ScaleY,
    /// Rotation around Z, degrees.
    Rotate,
    /// Rotation around X, degrees.
    RotateX,
    /// Rotation around Y, degrees.
    RotateY,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Typed keyframe track.
pub enum Track {
    /// Scalar track.
    Float(KeyframeTrack<f64>),
    /// Color track.
    Color(KeyframeTrack<Color>),
    /// Two-axis offset track.
    Offset(KeyframeTrack<DimensionOffset>),
}

impl Track {
    /// Number of keyframes.
    pub fn len(&self) -> usize {
        match self {
            Self::Float(t) => t.len(),
            Self::Color(t) => t.len(),
            Self::Offset(t) => t.len(),
        }
    }

    /// `true` when the track has no keyframes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Non-empty keyframe tracks keyed by property.
pub struct AnimationTracks {
    tracks: BTreeMap<AnimatableProperty, Track>,
    /// Largest scale factor reached by any scale track.
    pub max_scale_xy: Option<f64>,
}

impl AnimationTracks {
    /// Attach `track` unless it is empty. A later track for the same property replaces the earlier one.
    pub fn insert(&mut self, property: AnimatableProperty, track: Track) {
        if track.is_empty() {
            return;
        }
        self.tracks.insert(property, track);
    }

    /// Track for `property`.
    pub fn get(&self, property: AnimatableProperty) -> Option<&Track> {
        self.tracks.get(&property)
    }

    /// Scalar track for `property`.
    pub fn float(&self, property: AnimatableProperty) -> Option<&KeyframeTrack<f64>> {
        match self.tracks.get(&property)? {
            Track::Float(t) => Some(t),
            _ => None,
        }
    }

    /// Color track for `property`.
    pub fn color(&self, property: AnimatableProperty) -> Option<&KeyframeTrack<Color>> {
        match self.tracks.get(&property)? {
            Track::Color(t) => Some(t),
            _ => None,
        }
    }

    /// Offset track for `property`.
    pub fn offset(&self, property: AnimatableProperty) -> Option<&KeyframeTrack<DimensionOffset>> {
        match self.tracks.get(&property)? {
            Track::Offset(t) => Some(t),
            _ => None,
        }
    }

    /// Attached properties in stable order.
    pub fn properties(&self) -> impl Iterator<Item = AnimatableProperty> + '_ {
        self.tracks.keys().copied()
    }

    /// Number of attached tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// `true` when no track is attached.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Declarative animation of one node: tracks plus timing.
pub struct TweenOption {
    /// Timing captured from the node's `animation*` styles.
    pub timing: Option<AnimationTiming>,
    /// Transform origin captured from `transformOrigin`.
    pub origin: Option<DimensionOffset>,
    /// Keyframe tracks.
    pub tracks: AnimationTracks,
}

impl TweenOption {
    /// An option drives a tween wrapper only when it animates something.
    pub fn is_valid(&self) -> bool {
        !self.tracks.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Page transition animations.
pub struct TransitionOptions {
    /// Played when the page enters.
    pub enter: Option<AnimationTracks>,
    /// Played when the page exits.
    pub exit: Option<AnimationTracks>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Shared element handoff between pages.
pub struct SharedTransitionOption {
    /// Correlation id; the same on both pages.
    pub share_id: String,
    /// Curve of the handoff.
    pub curve: Curve,
    /// Exchange or static.
    pub effect: SharedTransitionEffect,
    /// Custom keyframes, if declared.
    pub tracks: Option<AnimationTracks>,
}
