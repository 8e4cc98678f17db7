use crate::animation::track::Track;
use crate::choreography::model::{Choreography, GridSlot, ModuleDef, ModuleRole};
use crate::foundation::core::OffsetUnit;
use crate::foundation::error::FolioResult;
use crate::scroll::region::ScrollOffsets;

/// Horizontal project strip id.
pub const PROJECT_STRIP: &str = "project-strip";
/// About copy column id.
pub const ABOUT_COPY: &str = "about-copy";

/// Project showcase: vertical scroll pans the card strip sideways.
pub fn showcase() -> FolioResult<Choreography> {
    let strip = ModuleDef::new(PROJECT_STRIP, ModuleRole::Overlay, GridSlot::full())
        .z_index(1)
        .x(Track::ramp(&[0.0, 1.0], &[1.0, -75.0])?);

    Ok(Choreography {
        name: "showcase".to_owned(),
        offsets: ScrollOffsets::CONTAINED,
        acts: Vec::new(),
        modules: vec![strip],
        parallax_limit: 0.0,
    })
}

/// About section: the copy column drifts against the page while the section passes through
/// the viewport.
pub fn about() -> FolioResult<Choreography> {
    let copy = ModuleDef::new(ABOUT_COPY, ModuleRole::Overlay, GridSlot::new(0.0, 0.0, 50.0, 100.0))
        .z_index(10)
        .unit(OffsetUnit::Pixels)
        .y(Track::ramp(&[0.0, 1.0], &[100.0, -100.0])?);

    Ok(Choreography {
        name: "about".to_owned(),
        offsets: ScrollOffsets::PASS_THROUGH,
        acts: Vec::new(),
        modules: vec![copy],
        parallax_limit: 0.0,
    })
}
