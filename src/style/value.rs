use std::borrow::Cow;

use crate::foundation::core::{Color, Dimension, DimensionOffset};
use crate::style::theme::{ThemeRef, ThemeStore};

/// Typed value parsing with optional theme resolution.
///
/// Every parser degrades to a default and logs instead of failing.
#[derive(Clone, Copy, Default)]
pub struct ValueParser<'a> {
    theme: Option<&'a dyn ThemeStore>,
}

impl std::fmt::Debug for ValueParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueParser")
            .field("has_theme", &self.theme.is_some())
            .finish()
    }
}

impl<'a> ValueParser<'a> {
    /// Parser that resolves references through `theme` when one is available.
    pub fn new(theme: Option<&'a dyn ThemeStore>) -> Self {
        Self { theme }
    }

    /// Replace a theme reference with its literal; literals pass through.
    ///
    /// Returns `None` when `raw` is a reference that cannot be resolved.
    pub fn resolve<'s>(&self, raw: &'s str) -> Option<Cow<'s, str>> {
        let Some(reference) = ThemeRef::parse(raw) else {
            return Some(Cow::Borrowed(raw));
        };
        let Some(theme) = self.theme else {
            tracing::warn!(value = raw, "theme reference without a theme store");
            return None;
        };
        match theme.resolve(&reference) {
            Some(v) => Some(Cow::Owned(v)),
            None => {
                tracing::warn!(value = raw, "unresolved theme reference");
                None
            }
        }
    }

    /// Parse a color; transparent on failure.
    pub fn color(&self, raw: &str) -> Color {
        self.try_color(raw).unwrap_or_else(|| {
            tracing::warn!(value = raw, "malformed color, using transparent");
            Color::TRANSPARENT
        })
    }

    /// Parse a color without logging.
    pub fn try_color(&self, raw: &str) -> Option<Color> {
        Color::try_parse(&self.resolve(raw)?).ok()
    }

    /// Parse a dimension; `0px` on failure.
    pub fn dimension(&self, raw: &str) -> Dimension {
        self.try_dimension(raw).unwrap_or_else(|| {
            tracing::warn!(value = raw, "malformed dimension, using 0px");
            Dimension::default()
        })
    }

    /// Parse a dimension without logging.
    pub fn try_dimension(&self, raw: &str) -> Option<Dimension> {
        Dimension::try_parse(&self.resolve(raw)?).ok()
    }

    /// Parse a floating point number; `0.0` on failure.
    pub fn double(&self, raw: &str) -> f64 {
        self.resolve(raw)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or_else(|| {
                tracing::warn!(value = raw, "malformed number, using 0");
                0.0
            })
    }

    /// Split a comma separated family list, resolving each entry independently.
    pub fn font_families(&self, raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| self.resolve(s).map(Cow::into_owned))
            .collect()
    }

    /// Comma separated font sizes, largest first.
    pub fn preferred_font_sizes(&self, raw: &str) -> Vec<Dimension> {
        let mut sizes: Vec<Dimension> = raw
            .split(',')
            .filter_map(|s| self.try_dimension(s))
            .collect();
        sizes.sort_by(|a, b| b.value.total_cmp(&a.value));
        sizes
    }

    /// Two-axis position such as `"10px 20px"`, `"50%"` or `"left top"`.
    ///
    /// A single value centers the other axis.
    pub fn position(&self, raw: &str) -> Option<DimensionOffset> {
        fn keyword(s: &str) -> Option<Dimension> {
            match s {
                "left" | "top" => Some(Dimension::percent(0.0)),
                "center" => Some(Dimension::percent(0.5)),
                "right" | "bottom" => Some(Dimension::percent(1.0)),
                _ => None,
            }
        }

        let axis = |s: &str| keyword(s).or_else(|| self.try_dimension(s));
        match tokens(raw).as_slice() {
            &[x] => Some(DimensionOffset::new(axis(x)?, Dimension::percent(0.5))),
            &[x, y] => Some(DimensionOffset::new(axis(x)?, axis(y)?)),
            _ => None,
        }
    }

    /// Line height is a plain dimension.
    pub fn line_height(&self, raw: &str) -> Dimension {
        self.dimension(raw)
    }
}

/// Only the exact string `"true"` is true.
pub fn parse_bool(raw: &str) -> bool {
    raw.trim() == "true"
}

/// Integer with a default of 0.
pub fn parse_i32(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// `"300ms"` is milliseconds, `"2s"` or `"2"` seconds.
pub fn parse_duration_ms(raw: &str) -> f64 {
    let s = raw.trim();
    let ms = if let Some(v) = s.strip_suffix("ms") {
        v.trim().parse::<f64>().ok()
    } else {
        s.strip_suffix('s')
            .unwrap_or(s)
            .trim()
            .parse::<f64>()
            .ok()
            .map(|v| v * 1000.0)
    };
    ms.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Angle in degrees from `deg` (default), `rad` or `turn` input.
pub fn parse_degrees(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let (num, factor) = if let Some(v) = s.strip_suffix("deg") {
        (v, 1.0)
    } else if let Some(v) = s.strip_suffix("rad") {
        (v, 180.0 / std::f64::consts::PI)
    } else if let Some(v) = s.strip_suffix("turn") {
        (v, 360.0)
    } else {
        (s, 1.0)
    };
    num.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v * factor)
}

/// Argument of a single CSS-like function such as `blur(4px)`.
pub fn function_arg<'s>(raw: &'s str, name: &str) -> Option<&'s str> {
    raw.trim()
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

/// Whitespace separated tokens of a shorthand value.
pub fn tokens(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/style/value.rs"]
mod tests;
