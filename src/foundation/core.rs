pub use kurbo::Vec2;

/// Normalized scroll fraction through a tracked region.
///
/// Always finite and within `[0, 1]`; construction clamps, and NaN maps to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Start of the tracked region.
    pub const START: Self = Self(0.0);
    /// End of the tracked region.
    pub const END: Self = Self(1.0);

    /// Clamp an arbitrary value into the progress domain.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw `f64` value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Unit a module's translate offsets are expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetUnit {
    /// Signed percentage of the element's own size.
    #[default]
    Percent,
    /// Absolute CSS pixels.
    Pixels,
}

impl OffsetUnit {
    /// CSS suffix for this unit.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Pixels => "px",
        }
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// CSS `rgba(...)` notation.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            f64::from(self.a) / 255.0
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
