use serde::Serialize;

use crate::foundation::core::{Color, Dimension, DimensionOffset};

/// Linear interpolation between two keyframe values.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (0) and `b` (1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

impl Lerp for Dimension {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // mixed units cannot be interpolated without layout; step at the midpoint
        if a.unit != b.unit {
            return if t < 0.5 { *a } else { *b };
        }
        Dimension::new(f64::lerp(&a.value, &b.value, t), a.unit)
    }
}

impl Lerp for DimensionOffset {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: Dimension::lerp(&a.x, &b.x, t),
            y: Dimension::lerp(&a.y, &b.y, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One keyframe at a normalized time.
pub struct Keyframe<T> {
    /// Normalized time in `[0, 1]`.
    pub time: f64,
    /// Value at `time`.
    pub value: T,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Keyframes of one animatable property, sorted by time.
pub struct KeyframeTrack<T> {
    keys: Vec<Keyframe<T>>, // sorted by time; equal times keep insertion order
}

impl<T> Default for KeyframeTrack<T> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<T> KeyframeTrack<T>
where
    T: Lerp + Clone,
{
    /// Insert a keyframe, keeping time order.
    pub fn push(&mut self, time: f64, value: T) {
        let time = time.clamp(0.0, 1.0);
        let idx = self.keys.partition_point(|k| k.time <= time);
        self.keys.insert(idx, Keyframe { time, value });
    }

    /// Keyframes in time order.
    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// `true` when the track has no keyframes.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Value at normalized time `t`; held before the first and after the last key.
    pub fn sample(&self, t: f64) -> Option<T> {
        let first = self.keys.first()?;
        let idx = self.keys.partition_point(|k| k.time <= t);
        if idx == 0 {
            return Some(first.value.clone());
        }
        if idx >= self.keys.len() {
            return self.keys.last().map(|k| k.value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.time - a.time;
        if span <= 0.0 {
            return Some(a.value.clone());
        }
        Some(T::lerp(&a.value, &b.value, (t - a.time) / span))
    }

    /// Largest value according to `key`, used for scale bounds.
    pub fn max_by(&self, key: impl Fn(&T) -> f64) -> Option<f64> {
        self.keys.iter().map(|k| key(&k.value)).reduce(f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
