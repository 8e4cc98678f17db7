use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::error::{FolioError, FolioResult};

/// Interpolation contract for track value types.
///
/// Composite values interpolate component-wise.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// `false` when any component is NaN or infinite.
    fn is_finite(&self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    fn is_finite(&self) -> bool {
        Vec2::is_finite(*self)
    }
}

impl Lerp for Rgba8 {
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

/// One `(progress breakpoint, value)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe<T> {
    /// Progress breakpoint.
    pub at: f64,
    /// Value at `at`.
    pub value: T,
}

/// Ordered breakpoint list defining one property as a function of progress.
///
/// Invariants (checked on construction): at least one key, every breakpoint and value finite,
/// breakpoints non-decreasing. Two keys may share a breakpoint to express a hold followed by an
/// instantaneous jump.
#[derive(Clone, Debug, PartialEq)]
pub struct Track<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T: Lerp> Track<T> {
    /// Build a track from explicit keyframes.
    pub fn new(keys: Vec<Keyframe<T>>) -> FolioResult<Self> {
        if keys.is_empty() {
            return Err(FolioError::animation("Track must have at least one key"));
        }
        if let Some(k) = keys.iter().find(|k| !k.at.is_finite()) {
            return Err(FolioError::animation(format!(
                "Track breakpoint must be finite, got {}",
                k.at
            )));
        }
        if let Some(k) = keys.iter().find(|k| !k.value.is_finite()) {
            return Err(FolioError::animation(format!(
                "Track value at breakpoint {} must be finite",
                k.at
            )));
        }
        if !keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(FolioError::animation(
                "Track breakpoints must be non-decreasing",
            ));
        }
        Ok(Self { keys })
    }

    /// Build a track from parallel breakpoint and value lists.
    pub fn ramp(input: &[f64], output: &[T]) -> FolioResult<Self>
    where
        T: Clone,
    {
        if input.len() != output.len() {
            return Err(FolioError::animation(format!(
                "Track ramp needs as many values as breakpoints ({} vs {})",
                output.len(),
                input.len()
            )));
        }
        Self::new(
            input
                .iter()
                .zip(output)
                .map(|(&at, value)| Keyframe {
                    at,
                    value: value.clone(),
                })
                .collect(),
        )
    }
}

impl<T> Track<T> {
    /// Track holding `value` over the whole `[0, 1]` domain.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            keys: vec![
                Keyframe {
                    at: 0.0,
                    value: value.clone(),
                },
                Keyframe { at: 1.0, value },
            ],
        }
    }

    /// Keyframes in breakpoint order.
    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// First keyframe.
    pub fn first(&self) -> &Keyframe<T> {
        &self.keys[0]
    }

    /// Last keyframe.
    pub fn last(&self) -> &Keyframe<T> {
        &self.keys[self.keys.len() - 1]
    }

    /// `true` when the first breakpoint is `0` and the last is `1`.
    pub fn covers_unit_domain(&self) -> bool {
        self.first().at == 0.0 && self.last().at == 1.0
    }
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    /// Value of this track at `progress`.
    ///
    /// Progress before the first breakpoint (or NaN) yields the first value, progress at or past
    /// the last breakpoint yields the last value. Between breakpoints the value is linear. At a
    /// duplicated breakpoint the later key wins.
    pub fn evaluate(&self, progress: f64) -> T {
        let idx = self.keys.partition_point(|k| k.at <= progress);

        if idx == 0 {
            return self.first().value.clone();
        }
        if idx >= self.keys.len() {
            return self.last().value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return b.value.clone();
        }

        let t = ((progress - a.at) / span).clamp(0.0, 1.0);
        T::lerp(&a.value, &b.value, t)
    }
}

/// Free-function form of [`Track::evaluate`].
pub fn evaluate<T: Lerp + Clone>(track: &Track<T>, progress: f64) -> T {
    track.evaluate(progress)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
