use serde::Serialize;

use crate::animation::curve::Curve;
use crate::foundation::core::{
    Affine, BorderEdge, Color, Dimension, DimensionOffset, DimensionUnit, Edges, Vec2,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `display` value; `Unset` means no style chose one.
pub enum Display {
    #[default]
    /// Not set by any style.
    Unset,
    /// Flex container.
    Flex,
    /// Grid container.
    Grid,
    /// Block.
    Block,
    /// Removed from layout.
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `visibility` value.
pub enum Visibility {
    #[default]
    /// Not set by any style.
    Unset,
    /// Painted.
    Visible,
    /// Laid out but not painted.
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `overflow` value.
pub enum Overflow {
    #[default]
    /// Content may overflow.
    Visible,
    /// Content is clipped.
    Hidden,
    /// Content scrolls.
    Scroll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `position` value.
pub enum PositionType {
    #[default]
    /// In flow, offset by left/top/right/bottom.
    Relative,
    /// Out of flow, relative to the parent.
    Absolute,
    /// Out of flow, relative to the page.
    Fixed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `alignSelf` value.
pub enum AlignSelf {
    #[default]
    /// Inherit the container alignment.
    Auto,
    /// Start of the cross axis.
    FlexStart,
    /// End of the cross axis.
    FlexEnd,
    /// Centered.
    Center,
    /// Stretched across the cross axis.
    Stretch,
    /// Baseline aligned.
    Baseline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `backgroundRepeat` value.
pub enum ImageRepeat {
    #[default]
    /// Tile both axes.
    Repeat,
    /// Tile horizontally.
    RepeatX,
    /// Tile vertically.
    RepeatY,
    /// Draw once.
    NoRepeat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `transitionEffect` value.
pub enum TransitionEffect {
    #[default]
    /// No page transition effect.
    None,
    /// Unfold the node during page transitions.
    Unfold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// `sharedTransitionEffect` value.
pub enum SharedTransitionEffect {
    #[default]
    /// Move the shared node between pages.
    Exchange,
    /// Keep the shared node in place while pages change.
    Static,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Edge effect while scrolling past the content bounds.
pub enum OverscrollEffect {
    #[default]
    /// No effect.
    None,
    /// Elastic bounce.
    Spring,
    /// Fading edge.
    Fade,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Flex item fields.
pub struct FlexStyle {
    /// `flexGrow`.
    pub grow: f64,
    /// `flexShrink`.
    pub shrink: f64,
    /// `flexBasis`.
    pub basis: Dimension,
    /// `flexWeight`.
    pub weight: f64,
    /// `displayIndex`.
    pub display_index: i32,
    /// `aspectRatio`; negative means unset.
    pub aspect_ratio: f64,
    /// `alignSelf`.
    pub align_self: AlignSelf,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            grow: 0.0,
            shrink: 1.0,
            basis: Dimension::px(0.0),
            weight: 0.0,
            display_index: 1,
            aspect_ratio: -1.0,
            align_self: AlignSelf::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
/// Positioning fields. An edge is `Some` once a non-empty value was declared.
pub struct PositionStyle {
    /// `position`.
    pub kind: PositionType,
    /// `left`.
    pub left: Option<Dimension>,
    /// `top`.
    pub top: Option<Dimension>,
    /// `right`.
    pub right: Option<Dimension>,
    /// `bottom`.
    pub bottom: Option<Dimension>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
/// Corner radii, clockwise from the top left.
pub struct Corners {
    /// Top left.
    pub top_left: Dimension,
    /// Top right.
    pub top_right: Dimension,
    /// Bottom right.
    pub bottom_right: Dimension,
    /// Bottom left.
    pub bottom_left: Dimension,
}

impl Corners {
    /// Same radius on every corner.
    pub fn all(r: Dimension) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
/// Border edges and radii.
pub struct Border {
    /// Per-edge stroke.
    pub edges: Edges<BorderEdge>,
    /// Corner radii.
    pub radius: Corners,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Gradient flavour.
pub enum GradientKind {
    #[default]
    /// `linearGradient`.
    Linear,
    /// `repeatingLinearGradient`.
    RepeatingLinear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Side keyword in `to <side>` directions.
pub enum Side {
    /// `left`.
    Left,
    /// `top`.
    Top,
    /// `right`.
    Right,
    /// `bottom`.
    Bottom,
}

impl Side {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "left" => Some(Self::Left),
            "top" => Some(Self::Top),
            "right" => Some(Self::Right),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Direction of a linear gradient.
pub enum GradientDirection {
    /// Angle in degrees.
    Angle(f64),
    /// `to <side>`.
    Side(Side),
    /// `to <side> <side>`.
    Corner(Side, Side),
}

impl Default for GradientDirection {
    fn default() -> Self {
        Self::Side(Side::Bottom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Gradient color stop.
pub struct ColorStop {
    /// Stop color.
    pub color: Color,
    /// Stop position, if given.
    pub position: Option<Dimension>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Background gradient.
pub struct Gradient {
    /// Flavour.
    pub kind: GradientKind,
    /// Direction.
    pub direction: GradientDirection,
    /// Color stops in order.
    pub stops: Vec<ColorStop>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Background decoration.
pub struct Background {
    /// `backgroundColor`.
    pub color: Color,
    /// `backgroundImage` source.
    pub image: Option<String>,
    /// `backgroundSize`, kept raw (`cover`, `contain`, `auto`, or lengths).
    pub size: Option<String>,
    /// `backgroundPosition`.
    pub position: Option<DimensionOffset>,
    /// `backgroundRepeat`.
    pub repeat: ImageRepeat,
    /// `background` gradient.
    pub gradient: Option<Gradient>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
/// Drop shadow.
pub struct Shadow {
    /// Horizontal offset.
    pub offset_x: f64,
    /// Vertical offset.
    pub offset_y: f64,
    /// Blur radius.
    pub blur: f64,
    /// Spread radius.
    pub spread: f64,
    /// Color.
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
/// One transform function.
pub enum TransformOp {
    /// `translate(x[, y])`.
    Translate(DimensionOffset),
    /// `translateX(x)`.
    TranslateX(Dimension),
    /// `translateY(y)`.
    TranslateY(Dimension),
    /// `scale(x[, y])`.
    Scale(f64, f64),
    /// `scaleX(x)`.
    ScaleX(f64),
    /// `scaleY(y)`.
    ScaleY(f64),
    /// `rotate(deg)`.
    Rotate(f64),
    /// `rotateX(deg)`.
    RotateX(f64),
    /// `rotateY(deg)`.
    RotateY(f64),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Transform functions in declaration order, plus origin.
pub struct TransformStyle {
    /// Functions, applied left to right.
    pub ops: Vec<TransformOp>,
    /// `transformOrigin`.
    pub origin: Option<DimensionOffset>,
}

impl TransformStyle {
    /// 2D affine for pixel-only operations. `None` if any op needs layout
    /// information (percent units) or is a 3D rotation.
    pub fn to_affine(&self) -> Option<Affine> {
        fn px(d: Dimension) -> Option<f64> {
            match d.unit {
                DimensionUnit::Px | DimensionUnit::Vp | DimensionUnit::Fp => Some(d.value),
                DimensionUnit::Percent => None,
            }
        }

        let mut m = Affine::IDENTITY;
        for op in &self.ops {
            let step = match *op {
                TransformOp::Translate(o) => Affine::translate(Vec2::new(px(o.x)?, px(o.y)?)),
                TransformOp::TranslateX(x) => Affine::translate(Vec2::new(px(x)?, 0.0)),
                TransformOp::TranslateY(y) => Affine::translate(Vec2::new(0.0, px(y)?)),
                TransformOp::Scale(x, y) => Affine::scale_non_uniform(x, y),
                TransformOp::ScaleX(x) => Affine::scale_non_uniform(x, 1.0),
                TransformOp::ScaleY(y) => Affine::scale_non_uniform(1.0, y),
                TransformOp::Rotate(deg) => Affine::rotate(deg.to_radians()),
                TransformOp::RotateX(_) | TransformOp::RotateY(_) => return None,
            };
            m *= step;
        }
        Some(m)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Which keyframes apply before and after the active interval.
pub enum FillMode {
    /// Neither.
    None,
    /// Keep the last keyframe.
    Forwards,
    /// Apply the first keyframe during the delay.
    Backwards,
    /// Both.
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Playback direction of each iteration.
pub enum AnimationDirection {
    /// Forward.
    Normal,
    /// Backward.
    Reverse,
    /// Forward, then backward.
    Alternate,
    /// Backward, then forward.
    AlternateReverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// `animation*` timing styles.
pub struct AnimationTiming {
    /// `animationDelay` in milliseconds.
    pub delay_ms: f64,
    /// `animationDuration` in milliseconds.
    pub duration_ms: f64,
    /// `animationIterationCount`; `-1` is infinite.
    pub iterations: i32,
    /// `animationTimingFunction`.
    pub curve: Curve,
    /// `animationFillMode`.
    pub fill_mode: FillMode,
    /// `animationDirection`.
    pub direction: AnimationDirection,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms: 0.0,
            iterations: 1,
            curve: Curve::Ease,
            fill_mode: FillMode::None,
            direction: AnimationDirection::Normal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// `transition*` and `sharedTransition*` styles.
pub struct TransitionTiming {
    /// `transitionDuration` in milliseconds.
    pub duration_ms: f64,
    /// `transitionTimingFunction`.
    pub curve: Curve,
    /// `transitionEffect`.
    pub effect: TransitionEffect,
    /// `sharedTransitionTimingFunction`.
    pub shared_curve: Curve,
    /// `sharedTransitionEffect`.
    pub shared_effect: SharedTransitionEffect,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration_ms: 0.0,
            curve: Curve::Ease,
            effect: TransitionEffect::None,
            shared_curve: Curve::Ease,
            shared_effect: SharedTransitionEffect::Exchange,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
/// Scrollbar appearance and overscroll behaviour.
pub struct ScrollStyle {
    /// `scrollbarColor`.
    pub bar_color: Option<Color>,
    /// `scrollbarWidth`.
    pub bar_width: Option<Dimension>,
    /// `overscrollEffect`.
    pub overscroll: OverscrollEffect,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Typed style state of one node, as produced by the style table.
pub struct NodeStyle {
    /// `width`; negative means unset.
    pub width: Dimension,
    /// `height`; negative means unset.
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
    /// Flex item fields.
    pub flex: FlexStyle,
    /// `opacity`.
    pub opacity: f64,
    /// `display`.
    pub display: Display,
    /// `visibility`.
    pub visibility: Visibility,
    /// `overflow`.
    pub overflow: Overflow,
    /// `zIndex`.
    pub z_index: i32,
    /// Positioning.
    pub position: PositionStyle,
    /// Border.
    pub border: Border,
    /// Background decoration.
    pub background: Background,
    /// Drop shadow, once any shadow key was declared.
    pub shadow: Option<Shadow>,
    /// `filter: blur()` radius.
    pub blur: Option<Dimension>,
    /// `backdropFilter: blur()` radius.
    pub backdrop_blur: Option<Dimension>,
    /// `windowFilter: blur()` radius.
    pub window_blur: Option<Dimension>,
    /// Transform functions.
    pub transform: TransformStyle,
    /// Animation timing.
    pub animation: AnimationTiming,
    /// Transition timing.
    pub transition: TransitionTiming,
    /// Scroll appearance.
    pub scroll: ScrollStyle,
}

impl Default for NodeStyle {
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
            flex: FlexStyle::default(),
            opacity: 1.0,
            display: Display::Unset,
            visibility: Visibility::Unset,
            overflow: Overflow::Visible,
            z_index: 0,
            position: PositionStyle::default(),
            border: Border::default(),
            background: Background::default(),
            shadow: None,
            blur: None,
            backdrop_blur: None,
            window_blur: None,
            transform: TransformStyle::default(),
            animation: AnimationTiming::default(),
            transition: TransitionTiming::default(),
            scroll: ScrollStyle::default(),
        }
    }
}

impl NodeStyle {
    /// Restore everything a cascade pass recomputes.
    ///
    /// Positioning, stacking, overflow and timing styles survive.
    pub fn reset_cascaded(&mut self) {
        let fresh = Self::default();
        self.width = fresh.width;
        self.height = fresh.height;
        self.min_width = fresh.min_width;
        self.min_height = fresh.min_height;
        self.max_width = fresh.max_width;
        self.max_height = fresh.max_height;
        self.padding = fresh.padding;
        self.margin = fresh.margin;
        self.flex = FlexStyle {
            align_self: self.flex.align_self,
            ..fresh.flex
        };
        self.opacity = fresh.opacity;
        self.display = fresh.display;
        self.visibility = fresh.visibility;
        self.border = fresh.border;
        self.background = fresh.background;
        self.shadow = fresh.shadow;
        self.blur = fresh.blur;
        self.backdrop_blur = fresh.backdrop_blur;
        self.window_blur = fresh.window_blur;
        self.transform.ops.clear();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Which style groups were ever declared; drives wrapper creation.
pub struct StyleFlags {
    /// Size, padding, margin, border or background.
    pub has_box_style: bool,
    /// `display`, `visibility`, `opacity` or the `show` attribute.
    pub has_display_style: bool,
    /// `position` or an edge offset.
    pub has_position_style: bool,
    /// `transform` or `transformOrigin`.
    pub has_transform_style: bool,
    /// Any flex item field.
    pub has_flex_style: bool,
    /// `overflow`.
    pub has_overflow_style: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/style/props.rs"]
mod tests;
