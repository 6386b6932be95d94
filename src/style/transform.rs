use crate::foundation::core::{Dimension, DimensionOffset};
use crate::style::props::TransformOp;
use crate::style::value::{ValueParser, parse_degrees, tokens};

/// Split a transform value into `(function, arguments)` pairs.
///
/// Accepts a JSON object (`{"rotate":"45deg"}`), a JSON array of such objects,
/// or CSS function syntax (`rotate(45deg) scale(2, 3)`). Arguments come back
/// space separated.
pub fn split_transform(raw: &str) -> Vec<(String, String)> {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return split_json(trimmed);
    }

    let mut out = Vec::new();
    let mut rest = trimmed;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|c| open + c) else {
            tracing::warn!(value = raw, "unterminated transform function");
            break;
        };
        let name = rest[..open].trim();
        if !name.is_empty() {
            out.push((name.to_owned(), rest[open + 1..close].replace(',', " ")));
        }
        rest = &rest[close + 1..];
    }
    out
}

fn split_json(raw: &str) -> Vec<(String, String)> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(value = raw, %err, "malformed transform json");
            return Vec::new();
        }
    };
    let objects = match &value {
        serde_json::Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut out = Vec::new();
    for obj in objects {
        let Some(map) = obj.as_object() else {
            continue;
        };
        for (name, v) in map {
            let arg = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => continue,
            };
            out.push((name.clone(), arg));
        }
    }
    out
}

/// Convert one `(function, arguments)` pair to a [`TransformOp`].
pub fn to_op(name: &str, args: &str, parser: &ValueParser<'_>) -> Option<TransformOp> {
    let parts = tokens(args);
    let dim = |s: &str| parser.try_dimension(s);
    let num = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());

    let op = match (name, parts.as_slice()) {
        ("translate", &[x]) => {
            let x = dim(x)?;
            TransformOp::Translate(DimensionOffset::new(x, Dimension::new(0.0, x.unit)))
        }
        ("translate", &[x, y]) => TransformOp::Translate(DimensionOffset::new(dim(x)?, dim(y)?)),
        ("translateX", &[x]) => TransformOp::TranslateX(dim(x)?),
        ("translateY", &[y]) => TransformOp::TranslateY(dim(y)?),
        ("scale", &[s]) => {
            let s = num(s)?;
            TransformOp::Scale(s, s)
        }
        ("scale", &[x, y]) => TransformOp::Scale(num(x)?, num(y)?),
        ("scaleX", &[x]) => TransformOp::ScaleX(num(x)?),
        ("scaleY", &[y]) => TransformOp::ScaleY(num(y)?),
        ("rotate", &[a]) => TransformOp::Rotate(parse_degrees(a)?),
        ("rotateX", &[a]) => TransformOp::RotateX(parse_degrees(a)?),
        ("rotateY", &[a]) => TransformOp::RotateY(parse_degrees(a)?),
        _ => return None,
    };
    Some(op)
}

#[cfg(test)]
#[path = "../../tests/unit/style/transform.rs"]
mod tests;
