use crate::animation::track::Track;
use crate::foundation::core::OffsetUnit;
use crate::scroll::region::ScrollOffsets;

/// Kind of a named progress sub-range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActKind {
    /// Shared opening layout; every module may be visible.
    Grid,
    /// One module is visually focal.
    Focus,
}

/// A named sub-range of progress.
///
/// `[start, settle)` is the entry transition window, `[settle, end]` the hold window.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Act {
    /// Act name, referenced by focus modules.
    pub name: String,
    /// Act kind.
    pub kind: ActKind,
    /// First progress value of the act.
    pub start: f64,
    /// End of the entry transition.
    pub settle: f64,
    /// Last progress value of the act.
    pub end: f64,
}

impl Act {
    /// Grid act without an entry transition.
    pub fn grid(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            kind: ActKind::Grid,
            start,
            settle: start,
            end,
        }
    }

    /// Focus act entering over `[start, settle)` and holding until `end`.
    pub fn focus(name: impl Into<String>, start: f64, settle: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            kind: ActKind::Focus,
            start,
            settle,
            end,
        }
    }

    /// Entry transition window.
    pub fn entry_window(&self) -> (f64, f64) {
        (self.start, self.settle)
    }

    /// Hold window.
    pub fn hold_window(&self) -> (f64, f64) {
        (self.settle, self.end)
    }

    /// `true` when `progress` falls inside `[start, end]`.
    pub fn contains(&self, progress: f64) -> bool {
        self.start <= progress && progress <= self.end
    }
}

/// Which progress signal drives a module's position tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    /// The smoothed signal (raw when no filter is installed).
    #[default]
    Smoothed,
    /// Raw progress, bypassing the filter.
    Raw,
}

/// Narrative role of a module.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleRole {
    /// Visually focal during the named act; docks, holds, then exits off-canvas.
    Focus {
        /// Name of the act this module owns.
        act: String,
    },
    /// Background card with a bounded parallax drift.
    Scatter,
    /// Container, caption or strip with no act contract.
    Overlay,
}

/// Intrinsic placement of a module, as percentages of its container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridSlot {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height; `None` sizes the module to its content.
    pub height: Option<f64>,
}

impl GridSlot {
    /// Slot from `(left, top, width, height)` percentages.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height: Some(height),
        }
    }

    /// Slot whose height follows its content.
    pub const fn auto_height(left: f64, top: f64, width: f64) -> Self {
        Self {
            left,
            top,
            width,
            height: None,
        }
    }

    /// Slot covering the whole container.
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

/// One track per animated property.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleTracks {
    /// Horizontal offset.
    pub x: Track<f64>,
    /// Vertical offset.
    pub y: Track<f64>,
    /// Opacity in `[0, 1]`.
    pub opacity: Track<f64>,
    /// Uniform scale factor.
    pub scale: Track<f64>,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y: Track<f64>,
}

impl Default for ModuleTracks {
    fn default() -> Self {
        Self {
            x: Track::constant(0.0),
            y: Track::constant(0.0),
            opacity: Track::constant(1.0),
            scale: Track::constant(1.0),
            rotate_y: Track::constant(0.0),
        }
    }
}

/// One visual card or panel and its keyframe tracks.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleDef {
    /// Stable identifier.
    pub id: String,
    /// Narrative role.
    pub role: ModuleRole,
    /// Grid placement.
    pub slot: GridSlot,
    /// Stacking order.
    pub z_index: i32,
    /// Unit of the `x`/`y` tracks.
    pub unit: OffsetUnit,
    /// Signal driving the `x`/`y` tracks.
    pub position_driver: Driver,
    /// Animated properties.
    pub tracks: ModuleTracks,
}

impl ModuleDef {
    /// Module with identity tracks, percent offsets, smoothed driver and z-index 0.
    pub fn new(id: impl Into<String>, role: ModuleRole, slot: GridSlot) -> Self {
        Self {
            id: id.into(),
            role,
            slot,
            z_index: 0,
            unit: OffsetUnit::Percent,
            position_driver: Driver::Smoothed,
            tracks: ModuleTracks::default(),
        }
    }

    /// Set the stacking order.
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    /// Set the offset unit.
    pub fn unit(mut self, unit: OffsetUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the position driver.
    pub fn driven_by(mut self, driver: Driver) -> Self {
        self.position_driver = driver;
        self
    }

    /// Set the horizontal offset track.
    pub fn x(mut self, track: Track<f64>) -> Self {
        self.tracks.x = track;
        self
    }

    /// Set the vertical offset track.
    pub fn y(mut self, track: Track<f64>) -> Self {
        self.tracks.y = track;
        self
    }

    /// Set the opacity track.
    pub fn opacity(mut self, track: Track<f64>) -> Self {
        self.tracks.opacity = track;
        self
    }

    /// Set the scale track.
    pub fn scale(mut self, track: Track<f64>) -> Self {
        self.tracks.scale = track;
        self
    }

    /// Set the rotation track.
    pub fn rotate_y(mut self, track: Track<f64>) -> Self {
        self.tracks.rotate_y = track;
        self
    }

    /// Name of the owned act for focus modules.
    pub fn focus_act(&self) -> Option<&str> {
        match &self.role {
            ModuleRole::Focus { act } => Some(act.as_str()),
            ModuleRole::Scatter | ModuleRole::Overlay => None,
        }
    }

    /// Property tracks paired with their names.
    pub fn named_tracks(&self) -> [(&'static str, &Track<f64>); 5] {
        [
            ("x", &self.tracks.x),
            ("y", &self.tracks.y),
            ("opacity", &self.tracks.opacity),
            ("scale", &self.tracks.scale),
            ("rotateY", &self.tracks.rotate_y),
        ]
    }
}

/// Full per-module keyframe definition set for one view.
#[derive(Clone, Debug, PartialEq)]
pub struct Choreography {
    /// View name.
    pub name: String,
    /// How the view's tracked region is derived from its layout.
    pub offsets: ScrollOffsets,
    /// Acts in progress order; empty for views without a narrative.
    pub acts: Vec<Act>,
    /// Modules in paint order.
    pub modules: Vec<ModuleDef>,
    /// Largest absolute offset a scatter module may drift to.
    pub parallax_limit: f64,
}

impl Choreography {
    /// Look a module up by id.
    pub fn module(&self, id: &str) -> Option<&ModuleDef> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Look an act up by name.
    pub fn act(&self, name: &str) -> Option<&Act> {
        self.acts.iter().find(|a| a.name == name)
    }

    /// Act containing `progress`; on a shared boundary the later act wins.
    pub fn act_at(&self, progress: f64) -> Option<&Act> {
        self.acts.iter().rev().find(|a| a.contains(progress))
    }

    /// Entry windows of every focus act.
    pub fn transition_windows(&self) -> Vec<(f64, f64)> {
        self.acts
            .iter()
            .filter(|a| a.kind == ActKind::Focus)
            .map(Act::entry_window)
            .collect()
    }

    /// Focus module owning the act that contains `progress`.
    pub fn focus_at(&self, progress: f64) -> Option<&ModuleDef> {
        let act = self.act_at(progress)?;
        self.modules
            .iter()
            .find(|m| m.focus_act() == Some(act.name.as_str()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/model.rs"]
mod tests;
