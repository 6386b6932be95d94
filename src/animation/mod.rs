pub(crate) mod builder;
pub(crate) mod curve;
pub(crate) mod keyframes;
pub(crate) mod tween;
