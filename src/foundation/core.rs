use serde::{Deserialize, Serialize};

use crate::foundation::error::{DomError, DomResult};

pub use kurbo::{Affine, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Unit attached to a [`Dimension`].
pub enum DimensionUnit {
    /// Physical pixels.
    #[default]
    Px,
    /// Virtual (density independent) pixels.
    Vp,
    /// Font-scaled pixels.
    Fp,
    /// Fraction of the parent size; `value` is stored in `0..=1`.
    Percent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// A length with a unit, as written in a style value.
pub struct Dimension {
    /// Magnitude, already divided by 100 for percentages.
    pub value: f64,
    /// Unit of `value`.
    pub unit: DimensionUnit,
}

impl Dimension {
    /// Build a dimension from raw parts.
    pub const fn new(value: f64, unit: DimensionUnit) -> Self {
        Self { value, unit }
    }

    /// Build a pixel dimension.
    pub const fn px(value: f64) -> Self {
        Self::new(value, DimensionUnit::Px)
    }

    /// Build a percentage dimension from a `0..=1` fraction.
    pub const fn percent(fraction: f64) -> Self {
        Self::new(fraction, DimensionUnit::Percent)
    }

    /// Parse `"100px"`, `"10vp"`, `"12fp"`, `"50%"` or a bare number (pixels).
    pub fn try_parse(raw: &str) -> DomResult<Self> {
        let s = raw.trim();
        let (num, unit) = if let Some(n) = s.strip_suffix('%') {
            (n, DimensionUnit::Percent)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, DimensionUnit::Px)
        } else if let Some(n) = s.strip_suffix("vp") {
            (n, DimensionUnit::Vp)
        } else if let Some(n) = s.strip_suffix("fp") {
            (n, DimensionUnit::Fp)
        } else {
            (s, DimensionUnit::Px)
        };

        let value = num
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DomError::parse(format!("invalid dimension \"{raw}\"")))?;

        Ok(match unit {
            DimensionUnit::Percent => Self::percent(value / 100.0),
            unit => Self::new(value, unit),
        })
    }

    /// Negative values mean "unset" for sizes.
    pub fn is_valid(&self) -> bool {
        self.value >= 0.0
    }

    /// Pixel magnitude when the unit is absolute pixels.
    pub fn as_px(&self) -> Option<f64> {
        (self.unit == DimensionUnit::Px).then_some(self.value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Two-axis offset (translate values, background positions).
pub struct DimensionOffset {
    /// Horizontal component.
    pub x: Dimension,
    /// Vertical component.
    pub y: Dimension,
}

impl DimensionOffset {
    /// Build an offset from both axes.
    pub const fn new(x: Dimension, y: Dimension) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Straight (non-premultiplied) RGBA8 color. The default is fully transparent.
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Build a color from channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a literal color.
    ///
    /// Accepts `#RGB`, `#RRGGBB`, `#AARRGGBB`, `rgb()`, `rgba()`, `hsl()`, `hsla()`
    /// and a handful of names.
    pub fn try_parse(raw: &str) -> DomResult<Self> {
        let s = raw.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| DomError::parse(format!("invalid color \"{raw}\"")));
        }
        if let Some(args) = function_args(&s, "rgba").or_else(|| function_args(&s, "rgb")) {
            return parse_rgb_args(args).ok_or_else(|| DomError::parse(format!("invalid color \"{raw}\"")));
        }
        if let Some(args) = function_args(&s, "hsla").or_else(|| function_args(&s, "hsl")) {
            return parse_hsl_args(args).ok_or_else(|| DomError::parse(format!("invalid color \"{raw}\"")));
        }
        named(&s).ok_or_else(|| DomError::parse(format!("invalid color \"{raw}\"")))
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    fn byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut c = hex.chars().map(|ch| ch.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color::rgba(c.next()??, c.next()??, c.next()??, 255))
        }
        6 => Some(Color::rgba(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            255,
        )),
        // alpha leads in the eight digit form
        8 => Some(Color::rgba(
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
            byte(&hex[0..2])?,
        )),
        _ => None,
    }
}

fn split_args(args: &str) -> Vec<&str> {
    args.split(',').map(str::trim).collect()
}

fn unit_alpha(s: &str) -> Option<u8> {
    let a = s.parse::<f64>().ok()?;
    Some((a.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| s.parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);
    let a = match parts.get(3) {
        Some(a) => unit_alpha(a)?,
        None => 255,
    };
    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        a,
    ))
}

fn parse_hsl_args(args: &str) -> Option<Color> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let frac = |s: &str| {
        s.strip_suffix('%')
            .unwrap_or(s)
            .trim()
            .parse::<f64>()
            .ok()
            .map(|v| v / 100.0)
    };
    let h = parts[0].strip_suffix("deg").unwrap_or(parts[0]).parse::<f64>().ok()?;
    let a = match parts.get(3) {
        Some(a) => unit_alpha(a)?,
        None => 255,
    };
    let (r, g, b) = hsl_to_rgb(h, frac(parts[1])?, frac(parts[2])?);
    Some(Color::rgba(r, g, b, a))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    fn to_u8(x: f64) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return (to_u8(l), to_u8(l), to_u8(l));
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, h)),
        to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn named(s: &str) -> Option<Color> {
    Some(match s {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::rgba(255, 0, 0, 255),
        "green" => Color::rgba(0, 128, 0, 255),
        "blue" => Color::rgba(0, 0, 255, 255),
        "gray" | "grey" => Color::rgba(128, 128, 128, 255),
        "yellow" => Color::rgba(255, 255, 0, 255),
        _ => return None,
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Per-edge values in CSS order.
pub struct Edges<T> {
    /// Top edge.
    pub top: T,
    /// Right edge.
    pub right: T,
    /// Bottom edge.
    pub bottom: T,
    /// Left edge.
    pub left: T,
}

impl<T: Clone> Edges<T> {
    /// Same value on every edge.
    pub fn all(v: T) -> Self {
        Self {
            top: v.clone(),
            right: v.clone(),
            bottom: v.clone(),
            left: v,
        }
    }

    /// Expand a 1 to 4 value shorthand; any other count yields `None`.
    pub fn from_shorthand(values: &[T]) -> Option<Self> {
        let (top, right, bottom, left) = match values {
            [all] => (all, all, all, all),
            [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
            [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
            [top, right, bottom, left] => (top, right, bottom, left),
            _ => return None,
        };
        Some(Self {
            top: top.clone(),
            right: right.clone(),
            bottom: bottom.clone(),
            left: left.clone(),
        })
    }

    /// Apply `f` to every edge.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        f(&mut self.top);
        f(&mut self.right);
        f(&mut self.bottom);
        f(&mut self.left);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Line style of a border edge.
pub enum BorderStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dotted line.
    Dotted,
    /// Dashed line.
    Dashed,
    /// No line.
    None,
}

impl BorderStyle {
    /// Parse `solid`, `dotted`, `dashed` or `none`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "solid" => Some(Self::Solid),
            "dotted" => Some(Self::Dotted),
            "dashed" => Some(Self::Dashed),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
/// One border edge.
pub struct BorderEdge {
    /// Stroke width.
    pub width: Dimension,
    /// Stroke color.
    pub color: Color,
    /// Stroke style.
    pub style: BorderStyle,
}

impl Default for BorderEdge {
    fn default() -> Self {
        Self {
            width: Dimension::px(0.0),
            color: Color::BLACK,
            style: BorderStyle::Solid,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
