pub mod hero;
pub mod model;
pub mod sections;
pub mod validate;

use crate::choreography::model::Choreography;
use crate::foundation::error::{FolioError, FolioResult};
use std::fmt;
use std::str::FromStr;

/// Built-in scroll-animated views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Dashboard grid exploding into the three-act story.
    Hero,
    /// Horizontally panning project strip.
    Showcase,
    /// About section parallax.
    About,
}

impl SceneKind {
    /// Every built-in scene.
    pub const ALL: [Self; 3] = [Self::Hero, Self::Showcase, Self::About];

    /// Stable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Showcase => "showcase",
            Self::About => "about",
        }
    }

    /// Build and validate this scene's choreography.
    pub fn build(self) -> FolioResult<Choreography> {
        let c = match self {
            Self::Hero => hero::hero()?,
            Self::Showcase => sections::showcase()?,
            Self::About => sections::about()?,
        };
        validate::validate_choreography(&c)?;
        Ok(c)
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| FolioError::validation(format!("unknown scene '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/scene.rs"]
mod tests;
