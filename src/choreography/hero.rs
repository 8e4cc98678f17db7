//! Hero view: a dashboard grid that explodes into a three-act story.
//!
//! The grid shows six cards. Through the scroll range the system-performance graph, the
//! security card and the uptime globe each take a turn as the focal module, docking beside
//! a caption while the others fade out. The three background cards only drift.

use crate::animation::track::Track;
use crate::choreography::model::{Act, Choreography, Driver, GridSlot, ModuleDef, ModuleRole};
use crate::foundation::core::OffsetUnit;
use crate::foundation::error::FolioResult;
use crate::scroll::region::ScrollOffsets;

/// System performance graph.
pub const GRAPH: &str = "graph";
/// Security status card.
pub const SECURITY: &str = "security";
/// Uptime globe card.
pub const GLOBE: &str = "globe";
/// Active users card.
pub const USER_STATS: &str = "user-stats";
/// Revenue card.
pub const REVENUE: &str = "revenue";
/// Analytics card.
pub const ANALYTICS: &str = "analytics";

/// Shared grid act.
pub const INTRO: &str = "intro";
/// Graph act.
pub const RELIABILITY: &str = "reliability";
/// Security card act.
pub const SECURITY_ACT: &str = "security";
/// Globe act.
pub const GLOBAL_SCALE: &str = "global-scale";

const PARALLAX_PX: f64 = 200.0;

fn focus(act: &str) -> ModuleRole {
    ModuleRole::Focus {
        act: act.to_owned(),
    }
}

/// Build the hero choreography.
pub fn hero() -> FolioResult<Choreography> {
    let acts = vec![
        Act::grid(INTRO, 0.0, 0.15),
        Act::focus(RELIABILITY, 0.15, 0.25, 0.45),
        Act::focus(SECURITY_ACT, 0.45, 0.55, 0.75),
        Act::focus(GLOBAL_SCALE, 0.75, 0.85, 1.0),
    ];

    let mut modules = vec![
        ModuleDef::new("dashboard", ModuleRole::Overlay, GridSlot::full())
            .scale(Track::ramp(&[0.0, 0.2, 1.0], &[1.0, 1.1, 1.1])?),
    ];
    modules.extend(focus_modules()?);
    modules.extend(scatter_modules()?);
    modules.extend(captions()?);

    Ok(Choreography {
        name: "hero".to_owned(),
        offsets: ScrollOffsets::CONTAINED,
        acts,
        modules,
        parallax_limit: PARALLAX_PX,
    })
}

fn focus_modules() -> FolioResult<Vec<ModuleDef>> {
    // Docks left, lifted 20%, then slides out left as the security act settles.
    let graph = ModuleDef::new(GRAPH, focus(RELIABILITY), GridSlot::new(0.0, 0.0, 48.0, 64.0))
        .z_index(20)
        .x(Track::ramp(
            &[0.0, 0.45, 0.55, 1.0],
            &[0.0, 0.0, -150.0, -150.0],
        )?)
        .y(Track::ramp(&[0.0, 0.15, 0.25, 1.0], &[0.0, 0.0, 20.0, 20.0])?)
        .opacity(Track::ramp(
            &[0.0, 0.15, 0.25, 0.45, 0.55, 1.0],
            &[0.2, 1.0, 1.0, 1.0, 0.0, 0.0],
        )?)
        .rotate_y(Track::ramp(&[0.0, 0.15, 0.25, 1.0], &[0.0, 0.0, 5.0, 5.0])?);

    // Parks half off its slot during the graph act, flips into the left dock, exits right.
    let security = ModuleDef::new(
        SECURITY,
        focus(SECURITY_ACT),
        GridSlot::new(76.0, 0.0, 24.0, 31.0),
    )
    .z_index(30)
    .x(Track::ramp(
        &[0.0, 0.15, 0.45, 0.55, 0.75, 0.85, 1.0],
        &[0.0, 50.0, 50.0, -50.0, -50.0, 150.0, 150.0],
    )?)
    .y(Track::ramp(
        &[0.0, 0.15, 0.45, 0.55, 1.0],
        &[0.0, -50.0, -50.0, 120.0, 120.0],
    )?)
    .opacity(Track::ramp(
        &[0.0, 0.15, 0.25, 0.45, 0.55, 0.75, 0.85, 1.0],
        &[0.2, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
    )?)
    .scale(Track::ramp(&[0.0, 0.45, 0.55, 1.0], &[1.0, 1.0, 1.3, 1.3])?)
    .rotate_y(Track::ramp(
        &[0.0, 0.45, 0.55, 1.0],
        &[0.0, 0.0, -15.0, -15.0],
    )?);

    // Last act: never exits.
    let globe = ModuleDef::new(GLOBE, focus(GLOBAL_SCALE), GridSlot::new(50.0, 67.0, 24.0, 31.0))
        .z_index(30)
        .x(Track::ramp(
            &[0.0, 0.75, 0.85, 1.0],
            &[0.0, 0.0, -160.0, -160.0],
        )?)
        .y(Track::ramp(
            &[0.0, 0.75, 0.85, 1.0],
            &[0.0, 0.0, -110.0, -110.0],
        )?)
        .opacity(Track::ramp(
            &[0.0, 0.15, 0.25, 0.75, 0.85, 1.0],
            &[0.2, 1.0, 0.0, 0.0, 1.0, 1.0],
        )?)
        .scale(Track::ramp(&[0.0, 0.75, 0.85, 1.0], &[1.0, 1.0, 1.3, 1.3])?)
        .rotate_y(Track::ramp(&[0.0, 0.75, 0.85, 1.0], &[0.0, 0.0, 15.0, 15.0])?);

    Ok(vec![graph, security, globe])
}

fn scatter_modules() -> FolioResult<Vec<ModuleDef>> {
    let fade = || Track::ramp(&[0.0, 0.15, 0.25, 1.0], &[0.2, 1.0, 0.0, 0.0]);
    let drift = |to: f64| Track::ramp(&[0.0, 1.0], &[0.0, to]);

    let cards = [
        (USER_STATS, GridSlot::new(50.0, 0.0, 24.0, 31.0), -200.0, -100.0),
        (REVENUE, GridSlot::new(0.0, 67.0, 48.0, 31.0), 200.0, -100.0),
        (ANALYTICS, GridSlot::new(76.0, 67.0, 24.0, 32.0), -200.0, 200.0),
    ];

    cards
        .into_iter()
        .map(|(id, slot, dx, dy)| -> FolioResult<ModuleDef> {
            Ok(ModuleDef::new(id, ModuleRole::Scatter, slot)
                .z_index(10)
                .unit(OffsetUnit::Pixels)
                .driven_by(Driver::Raw)
                .x(drift(dx)?)
                .y(drift(dy)?)
                .opacity(fade()?))
        })
        .collect()
}

fn captions() -> FolioResult<Vec<ModuleDef>> {
    let intro = ModuleDef::new("intro-copy", ModuleRole::Overlay, GridSlot::full())
        .z_index(50)
        .unit(OffsetUnit::Pixels)
        .y(Track::ramp(&[0.0, 0.15, 1.0], &[0.0, -50.0, -50.0])?)
        .opacity(Track::ramp(&[0.0, 0.15, 1.0], &[1.0, 0.0, 0.0])?)
        .scale(Track::ramp(&[0.0, 0.15, 1.0], &[1.0, 0.8, 0.8])?);

    // Rise in, hold for an instant, rise out.
    let passing = |id: &str, left: f64, [from, mid, to]: [f64; 3]| -> FolioResult<ModuleDef> {
        Ok(
            ModuleDef::new(id, ModuleRole::Overlay, GridSlot::auto_height(left, 50.0, 40.0))
                .z_index(20)
                .unit(OffsetUnit::Pixels)
                .y(Track::ramp(
                    &[0.0, from, mid, to, 1.0],
                    &[50.0, 50.0, 0.0, -50.0, -50.0],
                )?)
                .opacity(Track::ramp(
                    &[0.0, from, mid, to, 1.0],
                    &[0.0, 0.0, 1.0, 0.0, 0.0],
                )?),
        )
    };

    let global = ModuleDef::new(
        "global-scale-copy",
        ModuleRole::Overlay,
        GridSlot::auto_height(55.0, 50.0, 40.0),
    )
    .z_index(20)
    .unit(OffsetUnit::Pixels)
    .y(Track::ramp(&[0.0, 0.8, 0.9, 1.0], &[50.0, 50.0, 0.0, 0.0])?)
    .opacity(Track::ramp(&[0.0, 0.8, 0.9, 1.0], &[0.0, 0.0, 1.0, 1.0])?);

    Ok(vec![
        intro,
        passing("reliability-copy", 55.0, [0.2, 0.3, 0.4])?,
        passing("security-copy", 5.0, [0.5, 0.6, 0.7])?,
        global,
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/hero.rs"]
mod tests;
