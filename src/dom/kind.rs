use std::fmt;

use serde_json::{Value, json};

use crate::compose::component::LeafComponent;
use crate::dom::events::EventMarker;
use crate::foundation::core::{Color, Dimension};
use crate::style::value::{ValueParser, parse_bool, parse_i32};

/// Node-type specific behavior plugged into the generic cascade.
///
/// Every hook runs before the generic tables; returning `true` consumes the
/// key so the generic table never sees it.
pub trait NodeKind: fmt::Debug + Send + Sync {
    /// Name of the leaf primitive this kind produces.
    fn leaf_name(&self) -> &str;

    /// Kind specific attribute.
    fn try_set_attr(&mut self, _key: &str, _value: &str) -> bool {
        false
    }

    /// Kind specific style. Also called during cascade passes.
    fn try_set_style(&mut self, _key: &str, _value: &str, _parser: &ValueParser<'_>) -> bool {
        false
    }

    /// Kind specific event binding.
    fn try_add_event(&mut self, _marker: &EventMarker) -> bool {
        false
    }

    /// Kind specific method; `false` when unsupported.
    fn call_method(&mut self, _method: &str, _args: &Value) -> bool {
        false
    }

    /// Whether the node gets a box wrapper.
    fn has_box(&self) -> bool {
        true
    }

    /// `false` for inline kinds whose nodes only contribute a leaf.
    fn ui_components(&self) -> bool {
        true
    }

    /// Main axis for flex children: `Some(true)` for a column.
    fn flex_column(&self) -> Option<bool> {
        None
    }

    /// Restore the kind's own style fields before a cascade pass.
    fn reset_style(&mut self) {}

    /// Write the kind's state into its leaf before composition.
    fn prepare_leaf(&self, _leaf: &mut LeafComponent) {}
}

/// Built-in kind for `tag`; unknown tags get a pass-through kind.
pub fn kind_for_tag(tag: &str) -> Box<dyn NodeKind> {
    match tag {
        "div" => Box::new(DivKind::default()),
        "text" => Box::new(TextKind::new(false)),
        "span" => Box::new(TextKind::new(true)),
        "button" => Box::new(ButtonKind::default()),
        _ => Box::new(GenericKind {
            leaf: tag.to_owned(),
        }),
    }
}

fn color_value(c: Color) -> Value {
    json!(format!("#{:02X}{:02X}{:02X}{:02X}", c.a, c.r, c.g, c.b))
}

fn dimension_value(d: Dimension) -> Value {
    json!(d)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "row-reverse" => Self::RowReverse,
            "column" => Self::Column,
            "column-reverse" => Self::ColumnReverse,
            _ => Self::Row,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        }
    }
}

/// `div`: a flex (or wrap) container.
#[derive(Clone, Debug, PartialEq)]
pub struct DivKind {
    direction: FlexDirection,
    wrap: bool,
    justify_content: String,
    align_items: String,
    align_content: String,
    card: bool,
    card_blur: bool,
}

impl Default for DivKind {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            wrap: false,
            justify_content: "flex-start".to_owned(),
            align_items: "stretch".to_owned(),
            align_content: "flex-start".to_owned(),
            card: false,
            card_blur: false,
        }
    }
}

impl NodeKind for DivKind {
    fn leaf_name(&self) -> &str {
        if self.wrap { "wrap" } else { "flex" }
    }

    fn try_set_attr(&mut self, key: &str, value: &str) -> bool {
        match key {
            "card" => self.card = parse_bool(value),
            "cardBlur" => self.card_blur = parse_bool(value),
            _ => return false,
        }
        true
    }

    fn try_set_style(&mut self, key: &str, value: &str, _parser: &ValueParser<'_>) -> bool {
        match key {
            "alignContent" => self.align_content = value.trim().to_owned(),
            "alignItems" => self.align_items = value.trim().to_owned(),
            "flexDirection" => self.direction = FlexDirection::parse(value),
            "flexWrap" => self.wrap = value.trim() == "wrap",
            "justifyContent" => self.justify_content = value.trim().to_owned(),
            _ => return false,
        }
        true
    }

    fn flex_column(&self) -> Option<bool> {
        Some(matches!(
            self.direction,
            FlexDirection::Column | FlexDirection::ColumnReverse
        ))
    }

    fn reset_style(&mut self) {
        *self = Self {
            card: self.card,
            card_blur: self.card_blur,
            ..Self::default()
        };
    }

    fn prepare_leaf(&self, leaf: &mut LeafComponent) {
        leaf.name = self.leaf_name().to_owned();
        leaf.props.insert("direction".into(), json!(self.direction.as_str()));
        leaf.props.insert("justifyContent".into(), json!(self.justify_content));
        leaf.props.insert("alignItems".into(), json!(self.align_items));
        if self.wrap {
            leaf.props.insert("alignContent".into(), json!(self.align_content));
        } else {
            leaf.props.remove("alignContent");
        }
        leaf.props.insert("card".into(), json!(self.card));
        leaf.props.insert("cardBlur".into(), json!(self.card_blur));
    }
}

/// `text` and the inline `span`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextKind {
    span: bool,
    value: String,
    color: Option<Color>,
    font_size: Option<Dimension>,
    font_weight: Option<String>,
    font_families: Vec<String>,
    line_height: Option<Dimension>,
    text_align: Option<String>,
    max_lines: Option<i32>,
}

impl TextKind {
    fn new(span: bool) -> Self {
        Self {
            span,
            value: String::new(),
            color: None,
            font_size: None,
            font_weight: None,
            font_families: Vec::new(),
            line_height: None,
            text_align: None,
            max_lines: None,
        }
    }
}

impl NodeKind for TextKind {
    fn leaf_name(&self) -> &str {
        if self.span { "text_span" } else { "text" }
    }

    fn try_set_attr(&mut self, key: &str, value: &str) -> bool {
        if key != "value" {
            return false;
        }
        self.value = value.to_owned();
        true
    }

    fn try_set_style(&mut self, key: &str, value: &str, parser: &ValueParser<'_>) -> bool {
        match key {
            "color" => self.color = Some(parser.color(value)),
            "fontSize" => self.font_size = Some(parser.dimension(value)),
            "fontWeight" => self.font_weight = Some(value.trim().to_owned()),
            "fontFamily" => self.font_families = parser.font_families(value),
            "lineHeight" => self.line_height = Some(parser.line_height(value)),
            "textAlign" if !self.span => self.text_align = Some(value.trim().to_owned()),
            "maxLines" if !self.span => self.max_lines = Some(parse_i32(value)),
            _ => return false,
        }
        true
    }

    fn has_box(&self) -> bool {
        !self.span
    }

    fn ui_components(&self) -> bool {
        !self.span
    }

    fn reset_style(&mut self) {
        let value = std::mem::take(&mut self.value);
        *self = Self {
            value,
            ..Self::new(self.span)
        };
    }

    fn prepare_leaf(&self, leaf: &mut LeafComponent) {
        leaf.props.insert("value".into(), json!(self.value));
        let optional = [
            ("color", self.color.map(color_value)),
            ("fontSize", self.font_size.map(dimension_value)),
            ("fontWeight", self.font_weight.as_ref().map(|w| json!(w))),
            ("lineHeight", self.line_height.map(dimension_value)),
            ("textAlign", self.text_align.as_ref().map(|a| json!(a))),
            ("maxLines", self.max_lines.map(|n| json!(n))),
        ];
        for (key, value) in optional {
            match value {
                Some(v) => leaf.props.insert(key.into(), v),
                None => leaf.props.remove(key),
            };
        }
        if self.font_families.is_empty() {
            leaf.props.remove("fontFamily");
        } else {
            leaf.props
                .insert("fontFamily".into(), json!(self.font_families));
        }
    }
}

/// `button`: consumes its own click so presses drive the button state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonKind {
    text: String,
    button_type: Option<String>,
    icon: Option<String>,
    placement: Option<String>,
    auto_focus: bool,
    waiting: bool,
    progress: Option<u32>,
    click: Option<EventMarker>,
    text_color: Option<Color>,
    font_size: Option<Dimension>,
    radius: Option<Dimension>,
}

impl NodeKind for ButtonKind {
    fn leaf_name(&self) -> &str {
        "button"
    }

    fn try_set_attr(&mut self, key: &str, value: &str) -> bool {
        match key {
            "autofocus" => self.auto_focus = parse_bool(value),
            "icon" => self.icon = Some(value.to_owned()),
            "placement" => self.placement = Some(value.to_owned()),
            "type" => self.button_type = Some(value.to_owned()),
            "value" => self.text = value.to_owned(),
            "waiting" => self.waiting = parse_bool(value),
            _ => return false,
        }
        true
    }

    fn try_set_style(&mut self, key: &str, value: &str, parser: &ValueParser<'_>) -> bool {
        match key {
            "textColor" => self.text_color = Some(parser.color(value)),
            "fontSize" => self.font_size = Some(parser.dimension(value)),
            "radius" => self.radius = Some(parser.dimension(value)),
            _ => return false,
        }
        true
    }

    fn try_add_event(&mut self, marker: &EventMarker) -> bool {
        if marker.event != "click" {
            return false;
        }
        self.click = Some(marker.clone());
        true
    }

    fn call_method(&mut self, method: &str, args: &Value) -> bool {
        if method != "setProgress" {
            return false;
        }
        let progress = args
            .as_array()
            .filter(|a| a.len() == 1)
            .and_then(|a| a[0].get("progress"))
            .and_then(Value::as_u64)
            .and_then(|p| u32::try_from(p).ok());
        match progress {
            Some(p) => self.progress = Some(p.min(100)),
            None => tracing::warn!(%args, "setProgress expects [{{\"progress\": n}}]"),
        }
        true
    }

    fn reset_style(&mut self) {
        self.text_color = None;
        self.font_size = None;
        self.radius = None;
    }

    fn prepare_leaf(&self, leaf: &mut LeafComponent) {
        leaf.props.insert("value".into(), json!(self.text));
        leaf.props.insert("autofocus".into(), json!(self.auto_focus));
        leaf.props.insert("waiting".into(), json!(self.waiting));
        let optional = [
            ("type", self.button_type.as_ref().map(|t| json!(t))),
            ("icon", self.icon.as_ref().map(|i| json!(i))),
            ("placement", self.placement.as_ref().map(|p| json!(p))),
            ("progress", self.progress.map(|p| json!(p))),
            ("onClick", self.click.as_ref().map(|m| json!(m))),
            ("textColor", self.text_color.map(color_value)),
            ("fontSize", self.font_size.map(dimension_value)),
            ("radius", self.radius.map(dimension_value)),
        ];
        for (key, value) in optional {
            match value {
                Some(v) => leaf.props.insert(key.into(), v),
                None => leaf.props.remove(key),
            };
        }
    }
}

/// Any tag without dedicated behavior; its leaf carries the tag name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericKind {
    leaf: String,
}

impl NodeKind for GenericKind {
    fn leaf_name(&self) -> &str {
        &self.leaf
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/kind.rs"]
mod tests;
