use std::sync::LazyLock;

use crate::animation::curve::Curve;
use crate::foundation::core::{BorderEdge, BorderStyle, Dimension, Edges};
use crate::style::props::{
    AlignSelf, AnimationDirection, ColorStop, Corners, Display, FillMode, Gradient,
    GradientDirection, GradientKind, ImageRepeat, NodeStyle, OverscrollEffect, Overflow,
    PositionType, SharedTransitionEffect, Shadow, Side, StyleFlags, TransitionEffect, Visibility,
};
use crate::style::table::PropertyTable;
use crate::style::transform::{split_transform, to_op};
use crate::style::value::{ValueParser, function_arg, parse_duration_ms, parse_i32, tokens};

/// Mutable view of the node state a style setter may touch.
pub(crate) struct StyleCtx<'a, 'p> {
    pub(crate) style: &'a mut NodeStyle,
    pub(crate) flags: &'a mut StyleFlags,
    pub(crate) parser: ValueParser<'p>,
    pub(crate) rtl: bool,
}

pub(crate) type StyleSetter = fn(&str, &mut StyleCtx<'_, '_>);

/// Apply one style declaration through the generic table.
///
/// Returns `false` when the key is unknown.
pub(crate) fn apply_style(key: &str, value: &str, ctx: &mut StyleCtx<'_, '_>) -> bool {
    match STYLE_TABLE.get(key) {
        Some(setter) => {
            setter(value, ctx);
            true
        }
        None => {
            tracing::trace!(key, "unknown style key");
            false
        }
    }
}

static STYLE_TABLE: LazyLock<PropertyTable<StyleSetter>> =
    LazyLock::new(|| PropertyTable::new(STYLE_ENTRIES));

static STYLE_ENTRIES: &[(&str, StyleSetter)] = &[
    // box
    ("width", |v, c| box_dim(c, v, |s| &mut s.width)),
    ("height", |v, c| box_dim(c, v, |s| &mut s.height)),
    ("minWidth", |v, c| box_dim(c, v, |s| &mut s.min_width)),
    ("minHeight", |v, c| box_dim(c, v, |s| &mut s.min_height)),
    ("maxWidth", |v, c| box_dim(c, v, |s| &mut s.max_width)),
    ("maxHeight", |v, c| box_dim(c, v, |s| &mut s.max_height)),
    ("padding", |v, c| edge_shorthand(c, v, |s| &mut s.padding)),
    ("paddingTop", |v, c| box_dim(c, v, |s| &mut s.padding.top)),
    ("paddingRight", |v, c| box_dim(c, v, |s| &mut s.padding.right)),
    ("paddingBottom", |v, c| box_dim(c, v, |s| &mut s.padding.bottom)),
    ("paddingLeft", |v, c| box_dim(c, v, |s| &mut s.padding.left)),
    ("paddingStart", |v, c| start_end(c, v, true, |s| &mut s.padding)),
    ("paddingEnd", |v, c| start_end(c, v, false, |s| &mut s.padding)),
    ("margin", |v, c| edge_shorthand(c, v, |s| &mut s.margin)),
    ("marginTop", |v, c| box_dim(c, v, |s| &mut s.margin.top)),
    ("marginRight", |v, c| box_dim(c, v, |s| &mut s.margin.right)),
    ("marginBottom", |v, c| box_dim(c, v, |s| &mut s.margin.bottom)),
    ("marginLeft", |v, c| box_dim(c, v, |s| &mut s.margin.left)),
    ("marginStart", |v, c| start_end(c, v, true, |s| &mut s.margin)),
    ("marginEnd", |v, c| start_end(c, v, false, |s| &mut s.margin)),
    // border
    ("border", set_border),
    ("borderWidth", |v, c| border_edges(c, v, set_edge_width)),
    ("borderColor", |v, c| border_edges(c, v, set_edge_color)),
    ("borderStyle", |v, c| border_edges(c, v, set_edge_style)),
    ("borderTopWidth", |v, c| border_edge(c, v, |e| &mut e.top, set_edge_width)),
    ("borderRightWidth", |v, c| border_edge(c, v, |e| &mut e.right, set_edge_width)),
    ("borderBottomWidth", |v, c| border_edge(c, v, |e| &mut e.bottom, set_edge_width)),
    ("borderLeftWidth", |v, c| border_edge(c, v, |e| &mut e.left, set_edge_width)),
    ("borderTopColor", |v, c| border_edge(c, v, |e| &mut e.top, set_edge_color)),
    ("borderRightColor", |v, c| border_edge(c, v, |e| &mut e.right, set_edge_color)),
    ("borderBottomColor", |v, c| border_edge(c, v, |e| &mut e.bottom, set_edge_color)),
    ("borderLeftColor", |v, c| border_edge(c, v, |e| &mut e.left, set_edge_color)),
    ("borderTopStyle", |v, c| border_edge(c, v, |e| &mut e.top, set_edge_style)),
    ("borderRightStyle", |v, c| border_edge(c, v, |e| &mut e.right, set_edge_style)),
    ("borderBottomStyle", |v, c| border_edge(c, v, |e| &mut e.bottom, set_edge_style)),
    ("borderLeftStyle", |v, c| border_edge(c, v, |e| &mut e.left, set_edge_style)),
    ("borderRadius", |v, c| {
        c.flags.has_box_style = true;
        c.style.border.radius = Corners::all(c.parser.dimension(v));
    }),
    ("borderTopLeftRadius", |v, c| box_dim(c, v, |s| &mut s.border.radius.top_left)),
    ("borderTopRightRadius", |v, c| box_dim(c, v, |s| &mut s.border.radius.top_right)),
    ("borderBottomRightRadius", |v, c| box_dim(c, v, |s| &mut s.border.radius.bottom_right)),
    ("borderBottomLeftRadius", |v, c| box_dim(c, v, |s| &mut s.border.radius.bottom_left)),
    // background and decoration
    ("backgroundColor", |v, c| {
        c.flags.has_box_style = true;
        c.style.background.color = c.parser.color(v);
    }),
    ("backgroundImage", |v, c| {
        c.flags.has_box_style = true;
        let src = function_arg(v, "url").unwrap_or(v).trim_matches(['"', '\'']);
        c.style.background.image = Some(src.to_owned());
    }),
    ("backgroundSize", |v, c| {
        c.flags.has_box_style = true;
        c.style.background.size = Some(v.trim().to_owned());
    }),
    ("backgroundPosition", |v, c| {
        c.flags.has_box_style = true;
        match c.parser.position(v) {
            Some(pos) => c.style.background.position = Some(pos),
            None => tracing::warn!(value = v, "malformed background position"),
        }
    }),
    ("backgroundRepeat", |v, c| {
        c.flags.has_box_style = true;
        c.style.background.repeat = match v.trim() {
            "repeat-x" => ImageRepeat::RepeatX,
            "repeat-y" => ImageRepeat::RepeatY,
            "no-repeat" => ImageRepeat::NoRepeat,
            _ => ImageRepeat::Repeat,
        };
    }),
    ("background", |v, c| {
        c.flags.has_box_style = true;
        match parse_gradient(v, &c.parser) {
            Some(g) => c.style.background.gradient = Some(g),
            None => tracing::warn!(value = v, "unsupported background, skipping"),
        }
    }),
    ("boxShadowH", |v, c| shadow(c).offset_x = c.parser.dimension(v).value),
    ("boxShadowV", |v, c| shadow(c).offset_y = c.parser.dimension(v).value),
    ("boxShadowBlur", |v, c| shadow(c).blur = c.parser.dimension(v).value),
    ("boxShadowSpread", |v, c| shadow(c).spread = c.parser.dimension(v).value),
    ("boxShadowColor", |v, c| shadow(c).color = c.parser.color(v)),
    ("filter", |v, c| c.style.blur = blur(c, v)),
    ("backdropFilter", |v, c| c.style.backdrop_blur = blur(c, v)),
    ("windowFilter", |v, c| c.style.window_blur = blur(c, v)),
    // flex item
    ("flex", set_flex),
    ("flexGrow", |v, c| flex(c).grow = c.parser.double(v)),
    ("flexShrink", |v, c| flex(c).shrink = c.parser.double(v)),
    ("flexBasis", |v, c| flex(c).basis = c.parser.dimension(v)),
    ("flexWeight", |v, c| flex(c).weight = c.parser.double(v)),
    ("displayIndex", |v, c| flex(c).display_index = parse_i32(v)),
    ("aspectRatio", |v, c| flex(c).aspect_ratio = c.parser.double(v)),
    ("alignSelf", |v, c| {
        flex(c).align_self = match v.trim() {
            "flex-start" => AlignSelf::FlexStart,
            "flex-end" => AlignSelf::FlexEnd,
            "center" => AlignSelf::Center,
            "stretch" => AlignSelf::Stretch,
            "baseline" => AlignSelf::Baseline,
            _ => AlignSelf::Auto,
        };
    }),
    // display
    ("opacity", |v, c| {
        c.flags.has_display_style = true;
        c.style.opacity = c.parser.double(v).clamp(0.0, 1.0);
    }),
    ("display", |v, c| {
        c.flags.has_display_style = true;
        c.style.display = match v.trim() {
            "none" => Display::None,
            "flex" => Display::Flex,
            "grid" => Display::Grid,
            "block" => Display::Block,
            other => {
                tracing::warn!(value = other, "unknown display");
                c.style.display
            }
        };
    }),
    ("visibility", |v, c| {
        c.flags.has_display_style = true;
        c.style.visibility = if v.trim() == "hidden" {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }),
    ("overflow", |v, c| {
        c.flags.has_overflow_style = true;
        c.style.overflow = match v.trim() {
            "hidden" => Overflow::Hidden,
            "scroll" | "auto" => Overflow::Scroll,
            _ => Overflow::Visible,
        };
    }),
    ("zIndex", |v, c| c.style.z_index = parse_i32(v)),
    // position
    ("position", |v, c| {
        c.flags.has_position_style = true;
        c.style.position.kind = match v.trim() {
            "fixed" => PositionType::Fixed,
            "absolute" => PositionType::Absolute,
            _ => PositionType::Relative,
        };
    }),
    ("left", |v, c| position_edge(c, v, |s| &mut s.position.left)),
    ("top", |v, c| position_edge(c, v, |s| &mut s.position.top)),
    ("right", |v, c| position_edge(c, v, |s| &mut s.position.right)),
    ("bottom", |v, c| position_edge(c, v, |s| &mut s.position.bottom)),
    // transform
    ("transform", |v, c| {
        c.flags.has_transform_style = true;
        c.style.transform.ops.clear();
        for (name, args) in split_transform(v) {
            match to_op(&name, &args, &c.parser) {
                Some(op) => c.style.transform.ops.push(op),
                None => tracing::warn!(name = name.as_str(), args = args.as_str(), "malformed transform"),
            }
        }
    }),
    ("transformOrigin", |v, c| {
        c.flags.has_transform_style = true;
        c.style.transform.origin = c.parser.position(v);
    }),
    // animation timing
    ("animationDelay", |v, c| c.style.animation.delay_ms = parse_duration_ms(v)),
    ("animationDuration", |v, c| c.style.animation.duration_ms = parse_duration_ms(v)),
    ("animationIterationCount", |v, c| {
        c.style.animation.iterations = if v.trim() == "infinite" { -1 } else { parse_i32(v) };
    }),
    ("animationTimingFunction", |v, c| c.style.animation.curve = Curve::parse(v)),
    ("animationFillMode", |v, c| {
        c.style.animation.fill_mode = match v.trim() {
            "forwards" => FillMode::Forwards,
            "backwards" => FillMode::Backwards,
            "both" => FillMode::Both,
            _ => FillMode::None,
        };
    }),
    ("animationDirection", |v, c| {
        c.style.animation.direction = match v.trim() {
            "reverse" => AnimationDirection::Reverse,
            "alternate" => AnimationDirection::Alternate,
            "alternate-reverse" => AnimationDirection::AlternateReverse,
            _ => AnimationDirection::Normal,
        };
    }),
    // transitions
    ("transitionDuration", |v, c| c.style.transition.duration_ms = parse_duration_ms(v)),
    ("transitionTimingFunction", |v, c| c.style.transition.curve = Curve::parse(v)),
    ("transitionEffect", |v, c| {
        c.flags.has_transform_style = true;
        c.style.transition.effect = if v.trim() == "unfold" {
            TransitionEffect::Unfold
        } else {
            TransitionEffect::None
        };
    }),
    ("sharedTransitionTimingFunction", |v, c| c.style.transition.shared_curve = Curve::parse(v)),
    ("sharedTransitionEffect", |v, c| {
        c.style.transition.shared_effect = if v.trim() == "static" {
            SharedTransitionEffect::Static
        } else {
            SharedTransitionEffect::Exchange
        };
    }),
    // scrolling
    ("scrollbarColor", |v, c| c.style.scroll.bar_color = c.parser.try_color(v)),
    ("scrollbarWidth", |v, c| c.style.scroll.bar_width = c.parser.try_dimension(v)),
    ("overscrollEffect", |v, c| {
        c.style.scroll.overscroll = match v.trim() {
            "spring" => OverscrollEffect::Spring,
            "fade" => OverscrollEffect::Fade,
            _ => OverscrollEffect::None,
        };
    }),
];

fn box_dim(c: &mut StyleCtx<'_, '_>, v: &str, field: fn(&mut NodeStyle) -> &mut Dimension) {
    c.flags.has_box_style = true;
    let d = c.parser.dimension(v);
    *field(c.style) = d;
}

fn edge_shorthand(
    c: &mut StyleCtx<'_, '_>,
    v: &str,
    field: fn(&mut NodeStyle) -> &mut Edges<Dimension>,
) {
    c.flags.has_box_style = true;
    let dims: Vec<Dimension> = tokens(v).into_iter().map(|t| c.parser.dimension(t)).collect();
    match Edges::from_shorthand(&dims) {
        Some(edges) => *field(c.style) = edges,
        None => tracing::warn!(value = v, "edge shorthand needs 1 to 4 values"),
    }
}

fn start_end(
    c: &mut StyleCtx<'_, '_>,
    v: &str,
    start: bool,
    field: fn(&mut NodeStyle) -> &mut Edges<Dimension>,
) {
    c.flags.has_box_style = true;
    let d = c.parser.dimension(v);
    let edges = field(c.style);
    // start is the leading edge: left in LTR, right in RTL
    if start != c.rtl {
        edges.left = d;
    } else {
        edges.right = d;
    }
}

fn set_edge_width(e: &mut BorderEdge, token: &str, parser: &ValueParser<'_>) -> bool {
    parser.try_dimension(token).map(|d| e.width = d).is_some()
}

fn set_edge_color(e: &mut BorderEdge, token: &str, parser: &ValueParser<'_>) -> bool {
    parser.try_color(token).map(|col| e.color = col).is_some()
}

fn set_edge_style(e: &mut BorderEdge, token: &str, _parser: &ValueParser<'_>) -> bool {
    BorderStyle::parse(token).map(|s| e.style = s).is_some()
}

type EdgeSetter = fn(&mut BorderEdge, &str, &ValueParser<'_>) -> bool;

fn border_all(c: &mut StyleCtx<'_, '_>, token: &str, set: EdgeSetter) {
    let mut trial = c.style.border.edges.top;
    if !set(&mut trial, token, &c.parser) {
        tracing::warn!(value = token, "malformed border token, keeping previous value");
        return;
    }
    let parser = c.parser;
    c.style.border.edges.for_each_mut(|e| {
        set(e, token, &parser);
    });
}

fn border_edges(c: &mut StyleCtx<'_, '_>, v: &str, set: EdgeSetter) {
    c.flags.has_box_style = true;
    let parts = tokens(v);
    if parts.len() == 1 {
        border_all(c, parts[0], set);
        return;
    }
    let Some(per_edge) = Edges::from_shorthand(&parts) else {
        tracing::warn!(value = v, "border shorthand needs 1 to 4 values");
        return;
    };
    let parser = c.parser;
    let edges = &mut c.style.border.edges;
    for (edge, token) in [
        (&mut edges.top, per_edge.top),
        (&mut edges.right, per_edge.right),
        (&mut edges.bottom, per_edge.bottom),
        (&mut edges.left, per_edge.left),
    ] {
        if !set(edge, token, &parser) {
            tracing::warn!(value = token, "malformed border token, keeping previous value");
        }
    }
}

fn border_edge(
    c: &mut StyleCtx<'_, '_>,
    v: &str,
    pick: fn(&mut Edges<BorderEdge>) -> &mut BorderEdge,
    set: EdgeSetter,
) {
    c.flags.has_box_style = true;
    let parser = c.parser;
    if !set(pick(&mut c.style.border.edges), v, &parser) {
        tracing::warn!(value = v, "malformed border value, keeping previous value");
    }
}

fn has_length_unit(token: &str) -> bool {
    ["px", "vp", "fp"].iter().any(|u| token.ends_with(u))
}

fn set_border(v: &str, c: &mut StyleCtx<'_, '_>) {
    c.flags.has_box_style = true;
    match tokens(v).as_slice() {
        &[one] => {
            if has_length_unit(one) {
                border_all(c, one, set_edge_width);
            } else if BorderStyle::parse(one).is_some() {
                border_all(c, one, set_edge_style);
            } else {
                border_all(c, one, set_edge_color);
            }
        }
        &[width, style] => {
            border_all(c, width, set_edge_width);
            border_all(c, style, set_edge_style);
        }
        &[width, style, color] => {
            border_all(c, width, set_edge_width);
            border_all(c, style, set_edge_style);
            border_all(c, color, set_edge_color);
        }
        _ => tracing::warn!(value = v, "border shorthand needs 1 to 3 values"),
    }
}

fn shadow<'s>(c: &'s mut StyleCtx<'_, '_>) -> &'s mut Shadow {
    c.flags.has_box_style = true;
    c.style.shadow.get_or_insert_with(Shadow::default)
}

fn flex<'s>(c: &'s mut StyleCtx<'_, '_>) -> &'s mut crate::style::props::FlexStyle {
    c.flags.has_flex_style = true;
    &mut c.style.flex
}

fn set_flex(v: &str, c: &mut StyleCtx<'_, '_>) {
    let parser = c.parser;
    let parts = tokens(v);
    let f = flex(c);
    match parts.as_slice() {
        &[one] if has_length_unit(one) || one.ends_with('%') => f.basis = parser.dimension(one),
        &[grow] => f.grow = parser.double(grow),
        &[grow, second] if has_length_unit(second) || second.ends_with('%') => {
            f.grow = parser.double(grow);
            f.basis = parser.dimension(second);
        }
        &[grow, shrink] => {
            f.grow = parser.double(grow);
            f.shrink = parser.double(shrink);
        }
        &[grow, shrink, basis] => {
            f.grow = parser.double(grow);
            f.shrink = parser.double(shrink);
            f.basis = parser.dimension(basis);
        }
        _ => tracing::warn!(value = v, "flex shorthand needs 1 to 3 values"),
    }
}

fn position_edge(
    c: &mut StyleCtx<'_, '_>,
    v: &str,
    field: fn(&mut NodeStyle) -> &mut Option<Dimension>,
) {
    c.flags.has_position_style = true;
    if v.trim().is_empty() {
        return;
    }
    let d = c.parser.dimension(v);
    *field(c.style) = Some(d);
}

fn blur(c: &mut StyleCtx<'_, '_>, v: &str) -> Option<Dimension> {
    c.flags.has_box_style = true;
    match function_arg(v, "blur") {
        Some(radius) => Some(c.parser.dimension(radius)),
        None => {
            tracing::warn!(value = v, "only blur() filters are supported");
            None
        }
    }
}

/// Parse a `background` gradient declaration.
///
/// `{"values":[{"type":"linearGradient","directions":["to","right"],"values":["#FF0000 0%","#0000FF 100%"]}]}`
pub(crate) fn parse_gradient(raw: &str, parser: &ValueParser<'_>) -> Option<Gradient> {
    let root: serde_json::Value = serde_json::from_str(raw).ok()?;
    let first = root.get("values")?.as_array()?.first()?;
    let kind = match first.get("type")?.as_str()? {
        "linearGradient" => GradientKind::Linear,
        "repeatingLinearGradient" => GradientKind::RepeatingLinear,
        other => {
            tracing::warn!(kind = other, "unsupported gradient type");
            return None;
        }
    };

    let direction = match first.get("directions").and_then(|d| d.as_array()) {
        None => GradientDirection::default(),
        Some(dirs) => {
            let words: Vec<&str> = dirs.iter().filter_map(|d| d.as_str()).collect();
            gradient_direction(&words)?
        }
    };

    let mut stops = Vec::new();
    for stop in first.get("values")?.as_array()? {
        let Some(text) = stop.as_str() else {
            continue;
        };
        let (color, position) = split_stop(text);
        let Some(color) = parser.try_color(color) else {
            tracing::warn!(stop = text, "malformed gradient stop");
            continue;
        };
        stops.push(ColorStop {
            color,
            position: position.and_then(|p| parser.try_dimension(p)),
        });
    }

    Some(Gradient {
        kind,
        direction,
        stops,
    })
}

fn gradient_direction(words: &[&str]) -> Option<GradientDirection> {
    match *words {
        [angle] => crate::style::value::parse_degrees(angle).map(GradientDirection::Angle),
        ["to", side] => Side::parse(side).map(GradientDirection::Side),
        ["to", a, b] => Some(GradientDirection::Corner(Side::parse(a)?, Side::parse(b)?)),
        _ => {
            tracing::warn!(len = words.len(), "unexpected gradient direction");
            None
        }
    }
}

fn split_stop(text: &str) -> (&str, Option<&str>) {
    let text = text.trim();
    // functional colors contain spaces, so split after the closing paren
    let split_at = match text.rfind(')') {
        Some(close) => text[close + 1..].find(char::is_whitespace).map(|i| close + 1 + i),
        None => text.find(char::is_whitespace),
    };
    match split_at {
        Some(i) => (text[..i].trim(), Some(text[i..].trim())),
        None => (text, None),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/setters.rs"]
mod tests;
