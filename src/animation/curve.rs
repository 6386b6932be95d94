use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Where a `steps()` curve jumps.
pub enum StepPosition {
    /// Jump at the start of each interval.
    Start,
    /// Jump at the end of each interval.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Timing curve named by a `*TimingFunction` style.
pub enum Curve {
    /// `linear`.
    Linear,
    /// `ease`.
    Ease,
    /// `ease-in`.
    EaseIn,
    /// `ease-out`.
    EaseOut,
    /// `ease-in-out`.
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)` and the named presets built on it.
    CubicBezier(f64, f64, f64, f64),
    /// `steps(n, start|end)`.
    Steps(u32, StepPosition),
}

const NAMED_BEZIERS: [(&str, [f64; 4]); 8] = [
    ("friction", [0.2, 0.0, 0.2, 1.0]),
    ("extreme-deceleration", [0.0, 0.0, 0.0, 1.0]),
    ("sharp", [0.33, 0.0, 0.67, 1.0]),
    ("rhythm", [0.7, 0.0, 0.2, 1.0]),
    ("smooth", [0.4, 0.0, 0.4, 1.0]),
    ("fast-out-slow-in", [0.4, 0.0, 0.2, 1.0]),
    ("linear-out-slow-in", [0.0, 0.0, 0.2, 1.0]),
    ("fast-out-linear-in", [0.4, 0.0, 1.0, 1.0]),
];

impl Curve {
    /// Parse a timing function; unknown input falls back to `ease`.
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_else(|| {
            tracing::warn!(value = raw, "unknown timing function, using ease");
            Self::Ease
        })
    }

    /// Parse a timing function.
    pub fn try_parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        match s {
            "linear" => return Some(Self::Linear),
            "ease" => return Some(Self::Ease),
            "ease-in" => return Some(Self::EaseIn),
            "ease-out" => return Some(Self::EaseOut),
            "ease-in-out" => return Some(Self::EaseInOut),
            _ => {}
        }
        if let Some((_, [a, b, c, d])) = NAMED_BEZIERS.iter().find(|(name, _)| *name == s) {
            return Some(Self::CubicBezier(*a, *b, *c, *d));
        }
        if let Some(args) = crate::style::value::function_arg(s, "cubic-bezier") {
            let v: Vec<f64> = args
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .ok()?;
            return match v.as_slice() {
                [x1, y1, x2, y2] if (0.0..=1.0).contains(x1) && (0.0..=1.0).contains(x2) => {
                    Some(Self::CubicBezier(*x1, *y1, *x2, *y2))
                }
                _ => None,
            };
        }
        if let Some(args) = crate::style::value::function_arg(s, "steps") {
            let mut parts = args.split(',').map(str::trim);
            let n = parts.next()?.parse::<u32>().ok().filter(|n| *n > 0)?;
            let pos = match parts.next() {
                None | Some("end") => StepPosition::End,
                Some("start") => StepPosition::Start,
                Some(_) => return None,
            };
            return Some(Self::Steps(n, pos));
        }
        None
    }

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
            Self::Steps(n, pos) => {
                let n = f64::from(n);
                let step = match pos {
                    StepPosition::Start => (t * n).ceil(),
                    StepPosition::End => (t * n).floor(),
                };
                (step / n).clamp(0.0, 1.0)
            }
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    // Newton first, bisection when the slope is too flat.
    let mut t = x;
    for _ in 0..8 {
        let err = sample(x1, x2, t) - x;
        if err.abs() < 1e-7 {
            return sample(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..50 {
        let v = sample(x1, x2, t);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    sample(y1, y2, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
