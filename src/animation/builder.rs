use std::collections::BTreeMap;

use crate::animation::keyframes::KeyframeTrack;
use crate::animation::tween::{AnimatableProperty as P, AnimationTracks, Track};
use crate::foundation::core::{Color, Dimension, DimensionOffset, Edges};
use crate::foundation::error::{DomError, DomResult};
use crate::style::props::TransformOp;
use crate::style::transform::{split_transform, to_op};
use crate::style::value::{ValueParser, tokens};

/// Reserved key carrying the keyframe position as a percent (`"0"` to `"100"`).
pub const TIME_KEY: &str = "time";

/// One keyframe declaration: property name to raw value, plus [`TIME_KEY`].
pub type KeyframeMap = BTreeMap<String, String>;

/// Build per-property tracks from ordered keyframe maps.
///
/// Returns `None` for an empty sequence. Maps without a usable time are skipped.
/// Only non-empty tracks are attached.
pub fn build_animation(
    frames: &[KeyframeMap],
    parser: &ValueParser<'_>,
    rtl: bool,
) -> Option<AnimationTracks> {
    if frames.is_empty() {
        return None;
    }

    let mut builder = KeyframeBuilder::new(parser, rtl);
    for frame in frames {
        let time = match keyframe_time(frame) {
            Ok(time) => time,
            Err(err) => {
                tracing::warn!(%err, "skipping keyframe");
                continue;
            }
        };
        for (key, value) in frame {
            if key != TIME_KEY {
                builder.add(key, value, time);
            }
        }
    }
    Some(builder.finish())
}

/// Normalized position of one keyframe, from its percent [`TIME_KEY`].
pub(crate) fn keyframe_time(frame: &KeyframeMap) -> DomResult<f64> {
    let raw = frame
        .get(TIME_KEY)
        .ok_or_else(|| DomError::animation("keyframe without a time key"))?;
    let s = raw.trim();
    let percent = s
        .strip_suffix('%')
        .unwrap_or(s)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| DomError::animation(format!("malformed keyframe time {raw:?}")))?;
    Ok((percent / 100.0).clamp(0.0, 1.0))
}

struct KeyframeBuilder<'p, 'a> {
    parser: &'p ValueParser<'a>,
    rtl: bool,
    floats: BTreeMap<P, KeyframeTrack<f64>>,
    colors: BTreeMap<P, KeyframeTrack<Color>>,
    offsets: BTreeMap<P, KeyframeTrack<DimensionOffset>>,
    scale_x: KeyframeTrack<f64>, // from `scale`
    scale_y: KeyframeTrack<f64>, // from `scale`
    same_scale: bool,
}

impl<'p, 'a> KeyframeBuilder<'p, 'a> {
    fn new(parser: &'p ValueParser<'a>, rtl: bool) -> Self {
        Self {
            parser,
            rtl,
            floats: BTreeMap::new(),
            colors: BTreeMap::new(),
            offsets: BTreeMap::new(),
            scale_x: KeyframeTrack::default(),
            scale_y: KeyframeTrack::default(),
            same_scale: true,
        }
    }

    fn float(&mut self, property: P, time: f64, value: f64) {
        self.floats.entry(property).or_default().push(time, value);
    }

    fn offset(&mut self, property: P, time: f64, value: DimensionOffset) {
        self.offsets.entry(property).or_default().push(time, value);
    }

    fn edges(&mut self, props: [P; 4], time: f64, value: &str) {
        let dims: Vec<Dimension> = tokens(value)
            .into_iter()
            .map(|t| self.parser.dimension(t))
            .collect();
        let Some(e) = Edges::from_shorthand(&dims) else {
            tracing::warn!(value, "malformed edge shorthand in keyframe");
            return;
        };
        let [top, right, bottom, left] = props;
        self.float(top, time, e.top.value);
        self.float(right, time, e.right.value);
        self.float(bottom, time, e.bottom.value);
        self.float(left, time, e.left.value);
    }

    fn start_end(&self, start: P, end: P) -> (P, P) {
        if self.rtl { (end, start) } else { (start, end) }
    }

    fn add(&mut self, key: &str, value: &str, time: f64) {
        const MARGINS: [P; 4] = [P::MarginTop, P::MarginRight, P::MarginBottom, P::MarginLeft];
        const PADDINGS: [P; 4] = [
            P::PaddingTop,
            P::PaddingRight,
            P::PaddingBottom,
            P::PaddingLeft,
        ];

        let parser = self.parser;
        let dim = |s: &str| parser.dimension(s).value;
        match key {
            "backgroundColor" => {
                let c = parser.color(value);
                self.colors.entry(P::BackgroundColor).or_default().push(time, c);
            }
            "backgroundPosition" => match parser.position(value) {
                Some(pos) => self.offset(P::BackgroundPosition, time, pos),
                None => tracing::warn!(value, "malformed background position in keyframe"),
            },
            "width" => self.float(P::Width, time, dim(value)),
            "height" => self.float(P::Height, time, dim(value)),
            "opacity" => self.float(P::Opacity, time, parser.double(value)),
            "margin" => self.edges(MARGINS, time, value),
            "padding" => self.edges(PADDINGS, time, value),
            "marginTop" => self.float(P::MarginTop, time, dim(value)),
            "marginRight" => self.float(P::MarginRight, time, dim(value)),
            "marginBottom" => self.float(P::MarginBottom, time, dim(value)),
            "marginLeft" => self.float(P::MarginLeft, time, dim(value)),
            "paddingTop" => self.float(P::PaddingTop, time, dim(value)),
            "paddingRight" => self.float(P::PaddingRight, time, dim(value)),
            "paddingBottom" => self.float(P::PaddingBottom, time, dim(value)),
            "paddingLeft" => self.float(P::PaddingLeft, time, dim(value)),
            "marginStart" | "marginEnd" | "paddingStart" | "paddingEnd" => {
                let (start, end) = if key.starts_with("margin") {
                    self.start_end(P::MarginLeft, P::MarginRight)
                } else {
                    self.start_end(P::PaddingLeft, P::PaddingRight)
                };
                let target = if key.ends_with("Start") { start } else { end };
                let v = dim(value);
                self.float(target, time, v);
            }
            "transform" => {
                for (name, args) in split_transform(value) {
                    self.transform(&name, &args, time);
                }
            }
            "translate" | "translateX" | "translateY" | "scale" | "scaleX" | "scaleY"
            | "rotate" | "rotateX" | "rotateY" => self.transform(key, value, time),
            _ => tracing::trace!(key, "not animatable"),
        }
    }

    fn transform(&mut self, name: &str, args: &str, time: f64) {
        let Some(op) = to_op(name, args, self.parser) else {
            tracing::warn!(name, args, "malformed transform keyframe");
            return;
        };
        match op {
            TransformOp::Translate(o) => self.offset(P::Translate, time, o),
            TransformOp::TranslateX(x) => self.offset(
                P::TranslateX,
                time,
                DimensionOffset::new(x, Dimension::new(0.0, x.unit)),
            ),
            TransformOp::TranslateY(y) => self.offset(
                P::TranslateY,
                time,
                DimensionOffset::new(Dimension::new(0.0, y.unit), y),
            ),
            TransformOp::Scale(x, y) => {
                if x != y {
                    self.same_scale = false;
                }
                self.scale_x.push(time, x);
                self.scale_y.push(time, y);
            }
            TransformOp::ScaleX(x) => {
                self.same_scale = false;
                self.float(P::ScaleX, time, x);
            }
            TransformOp::ScaleY(y) => {
                self.same_scale = false;
                self.float(P::ScaleY, time, y);
            }
            TransformOp::Rotate(deg) => self.float(P::Rotate, time, deg),
            TransformOp::RotateX(deg) => self.float(P::RotateX, time, deg),
            TransformOp::RotateY(deg) => self.float(P::RotateY, time, deg),
        }
    }

    fn finish(self) -> AnimationTracks {
        let mut out = AnimationTracks::default();
        let mut max_scale: Option<f64> = None;
        let mut note_scale = |track: &KeyframeTrack<f64>| {
            if let Some(m) = track.max_by(|v| *v) {
                max_scale = Some(max_scale.map_or(m, |cur| cur.max(m)));
            }
        };

        let mut floats = self.floats;
        if self.same_scale {
            note_scale(&self.scale_x);
            out.insert(P::Scale, Track::Float(self.scale_x));
        } else {
            // explicit per-axis keyframes win over the axis split of `scale`
            if !self.scale_x.is_empty() {
                floats.entry(P::ScaleX).or_insert(self.scale_x);
            }
            if !self.scale_y.is_empty() {
                floats.entry(P::ScaleY).or_insert(self.scale_y);
            }
        }

        for (property, track) in floats {
            if matches!(property, P::ScaleX | P::ScaleY) {
                note_scale(&track);
            }
            out.insert(property, Track::Float(track));
        }
        for (property, track) in self.colors {
            out.insert(property, Track::Color(track));
        }
        for (property, track) in self.offsets {
            out.insert(property, Track::Offset(track));
        }
        out.max_scale_xy = max_scale;
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/builder.rs"]
mod tests;
