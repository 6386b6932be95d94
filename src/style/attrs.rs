use std::sync::LazyLock;

use serde::Serialize;

use crate::style::props::{Display, NodeStyle, StyleFlags, Visibility};
use crate::style::pseudo::PseudoState;
use crate::style::table::PropertyTable;
use crate::style::value::parse_bool;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Press feedback requested by `clickEffect`.
pub enum ClickSpringEffect {
    /// `spring-small`.
    Small,
    /// `spring-medium`.
    Medium,
    /// `spring-large`.
    Large,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Layout direction requested by `dir`.
pub enum TextDirection {
    #[default]
    /// Inherit the document direction.
    Auto,
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Voice interaction scene from `sceneLabel`.
pub enum SceneLabel {
    #[default]
    /// `common`.
    Common,
    /// `audio`.
    Audio,
    /// `page`.
    Page,
    /// `switch`.
    Switch,
    /// `video`.
    Video,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Voice subscript visibility from `subscriptFlag`.
pub enum SubscriptFlag {
    #[default]
    /// Never shown.
    Off,
    /// Always shown.
    On,
    /// Shown on demand.
    Auto,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Generic attributes. Unlike styles these survive cascade resets.
pub struct NodeAttrs {
    /// `clickEffect`.
    pub click_effect: Option<ClickSpringEffect>,
    /// `dir`.
    pub direction: TextDirection,
    /// `focusable`; `Some` once the author set it.
    pub focusable: Option<bool>,
    /// An `id` attribute was present.
    pub has_id: bool,
    /// `sceneLabel`.
    pub scene_label: SceneLabel,
    /// `shareid`.
    pub share_id: Option<String>,
    /// Raw `show` value, re-applied after every reset.
    pub show: Option<String>,
    /// `subscriptFlag`.
    pub subscript_flag: SubscriptFlag,
    /// `subscriptLabel`.
    pub subscript_label: Option<String>,
    /// `touchable`.
    pub touchable: bool,
    /// `voiceLabel`.
    pub voice_label: Option<String>,
}

impl Default for NodeAttrs {
    fn default() -> Self {
        Self {
            click_effect: None,
            direction: TextDirection::Auto,
            focusable: None,
            has_id: false,
            scene_label: SceneLabel::Common,
            share_id: None,
            show: None,
            subscript_flag: SubscriptFlag::Off,
            subscript_label: None,
            touchable: true,
            voice_label: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Interaction flags that select pseudo-class styles.
pub struct InteractionState {
    /// Pressed.
    pub active: bool,
    /// Disabled.
    pub disabled: bool,
    /// Focused.
    pub focus: bool,
    /// Checked.
    pub checked: bool,
    /// Waiting.
    pub waiting: bool,
}

impl InteractionState {
    /// Bitwise OR of the set flags.
    pub fn status(&self) -> PseudoState {
        let mut s = PseudoState::NORMAL;
        for (on, bit) in [
            (self.active, PseudoState::ACTIVE),
            (self.disabled, PseudoState::DISABLED),
            (self.focus, PseudoState::FOCUS),
            (self.checked, PseudoState::CHECKED),
            (self.waiting, PseudoState::WAITING),
        ] {
            s.set(bit, on);
        }
        s
    }
}

/// Mutable view of the node state an attribute setter may touch.
pub(crate) struct AttrCtx<'a> {
    pub(crate) attrs: &'a mut NodeAttrs,
    pub(crate) style: &'a mut NodeStyle,
    pub(crate) flags: &'a mut StyleFlags,
    pub(crate) lite: bool,
}

pub(crate) type AttrSetter = fn(&str, &mut AttrCtx<'_>);

/// Interaction attributes recognized before any other handler sees the key.
pub(crate) fn apply_state_attr(key: &str, value: &str, state: &mut InteractionState) -> bool {
    let flag = match key {
        "disabled" => &mut state.disabled,
        "checked" => &mut state.checked,
        "waiting" => &mut state.waiting,
        _ => return false,
    };
    *flag = parse_bool(value);
    true
}

/// Apply one attribute through the generic table; `false` when unknown.
pub(crate) fn apply_attr(key: &str, value: &str, ctx: &mut AttrCtx<'_>) -> bool {
    match ATTR_TABLE.get(key) {
        Some(setter) => {
            setter(value, ctx);
            true
        }
        None => {
            tracing::trace!(key, "unknown attribute");
            false
        }
    }
}

/// Apply a `show` value to the display fields.
pub(crate) fn apply_show(show: &str, style: &mut NodeStyle, flags: &mut StyleFlags, lite: bool) {
    flags.has_display_style = true;
    let hidden = show.trim() == "false";
    if lite {
        style.visibility = if hidden {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    } else {
        style.display = if hidden { Display::None } else { Display::Unset };
    }
}

static ATTR_TABLE: LazyLock<PropertyTable<AttrSetter>> =
    LazyLock::new(|| PropertyTable::new(ATTR_ENTRIES));

static ATTR_ENTRIES: &[(&str, AttrSetter)] = &[
    ("clickEffect", |v, c| {
        c.attrs.click_effect = match v.trim() {
            "spring-small" => Some(ClickSpringEffect::Small),
            "spring-medium" => Some(ClickSpringEffect::Medium),
            "spring-large" => Some(ClickSpringEffect::Large),
            _ => None,
        };
    }),
    ("dir", |v, c| {
        c.attrs.direction = match v.trim() {
            "rtl" => TextDirection::Rtl,
            "ltr" => TextDirection::Ltr,
            _ => TextDirection::Auto,
        };
    }),
    ("focusable", |v, c| c.attrs.focusable = Some(parse_bool(v))),
    ("id", |_, c| c.attrs.has_id = true),
    ("sceneLabel", |v, c| {
        c.attrs.scene_label = match v.trim() {
            "audio" => SceneLabel::Audio,
            "page" => SceneLabel::Page,
            "switch" => SceneLabel::Switch,
            "video" => SceneLabel::Video,
            _ => SceneLabel::Common,
        };
    }),
    ("shareid", |v, c| {
        c.attrs.share_id = Some(v.to_owned()).filter(|s| !s.is_empty());
    }),
    ("show", |v, c| {
        c.attrs.show = Some(v.to_owned());
        apply_show(v, c.style, c.flags, c.lite);
    }),
    ("subscriptFlag", |v, c| {
        c.attrs.subscript_flag = match v.trim() {
            "on" => SubscriptFlag::On,
            "auto" => SubscriptFlag::Auto,
            _ => SubscriptFlag::Off,
        };
    }),
    ("subscriptLabel", |v, c| c.attrs.subscript_label = Some(v.to_owned())),
    ("touchable", |v, c| c.attrs.touchable = parse_bool(v)),
    ("voiceLabel", |v, c| c.attrs.voice_label = Some(v.to_owned())),
];

#[cfg(test)]
#[path = "../../tests/unit/style/attrs.rs"]
mod tests;
