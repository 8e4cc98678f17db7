use crate::animation::track::Track;
use crate::choreography::model::{Act, ActKind, Choreography, Driver, ModuleDef, ModuleRole};
use crate::foundation::core::OffsetUnit;
use crate::foundation::error::{FolioError, FolioResult};
use std::collections::BTreeSet;

/// Smallest absolute percentage offset that places a module off-canvas.
pub const OFF_CANVAS_PERCENT: f64 = 150.0;

const EPS: f64 = 1e-9;

/// Validate a choreography, failing with every violation found.
pub fn validate_choreography(c: &Choreography) -> FolioResult<()> {
    let violations = check_choreography(c);
    if violations.is_empty() {
        return Ok(());
    }
    Err(FolioError::validation(format!(
        "choreography '{}' is invalid: {}",
        c.name,
        violations.join("; ")
    )))
}

impl Choreography {
    /// Validate this choreography; see [`check_choreography`] for the rules.
    pub fn validate(&self) -> FolioResult<()> {
        validate_choreography(self)
    }
}

/// Collect every contract violation of `c` as a human readable line.
///
/// - every track starts at progress 0 and ends at progress 1
/// - acts tile `[0, 1]` in order
/// - focus modules are invisible during every other act's hold, dock during their own hold
///   and leave the canvas once their act is over
/// - scatter modules are raw-driven, bounded, and gone once the first focus act settles
/// - dashboard modules only rotate or scale inside entry transitions
pub fn check_choreography(c: &Choreography) -> Vec<String> {
    let mut out = Vec::new();
    check_acts(c, &mut out);

    let mut seen = BTreeSet::new();
    for m in &c.modules {
        if m.id.trim().is_empty() {
            out.push("module id must be non-empty".to_owned());
        }
        if !seen.insert(m.id.as_str()) {
            out.push(format!("duplicate module id '{}'", m.id));
        }
        for (prop, track) in m.named_tracks() {
            if !track.covers_unit_domain() {
                out.push(format!(
                    "{}.{prop}: breakpoints must span 0..1, got {}..{}",
                    m.id,
                    track.first().at,
                    track.last().at
                ));
            }
        }

        match &m.role {
            ModuleRole::Focus { act } => check_focus(c, m, act, &mut out),
            ModuleRole::Scatter => check_scatter(c, m, &mut out),
            ModuleRole::Overlay => {}
        }
    }
    out
}

fn check_acts(c: &Choreography, out: &mut Vec<String>) {
    if c.acts.is_empty() {
        return;
    }
    let mut names = BTreeSet::new();
    for a in &c.acts {
        if !names.insert(a.name.as_str()) {
            out.push(format!("duplicate act '{}'", a.name));
        }
        if !(a.start <= a.settle && a.settle <= a.end) {
            out.push(format!(
                "act '{}' must satisfy start <= settle <= end",
                a.name
            ));
        }
    }
    if c.acts[0].start.abs() > EPS {
        out.push(format!("first act '{}' must start at 0", c.acts[0].name));
    }
    if let Some(last) = c.acts.last()
        && (last.end - 1.0).abs() > EPS
    {
        out.push(format!("last act '{}' must end at 1", last.name));
    }
    for w in c.acts.windows(2) {
        if (w[0].end - w[1].start).abs() > EPS {
            out.push(format!(
                "act '{}' must start where '{}' ends",
                w[1].name, w[0].name
            ));
        }
    }
}

fn check_focus(c: &Choreography, m: &ModuleDef, act_name: &str, out: &mut Vec<String>) {
    let Some(act) = c.act(act_name) else {
        out.push(format!("{}: focus act '{act_name}' does not exist", m.id));
        return;
    };
    if act.kind != ActKind::Focus {
        out.push(format!("{}: act '{act_name}' is not a focus act", m.id));
    }

    for other in c.acts.iter().filter(|a| a.kind == ActKind::Focus) {
        if other.name == act.name {
            continue;
        }
        if !is_constant_over(&m.tracks.opacity, other.hold_window(), 0.0) {
            out.push(format!(
                "{}.opacity must be 0 while '{}' holds",
                m.id, other.name
            ));
        }
    }

    let (hold_start, _) = act.hold_window();
    if m.tracks.opacity.evaluate(hold_start) <= 0.0 {
        out.push(format!(
            "{}.opacity must be visible while '{}' holds",
            m.id, act.name
        ));
    }

    for (prop, track) in [("x", &m.tracks.x), ("y", &m.tracks.y)] {
        let dock = track.evaluate(hold_start);
        if !is_constant_over(track, act.hold_window(), dock) {
            out.push(format!(
                "{}.{prop} must hold its dock position while '{}' holds",
                m.id, act.name
            ));
        }
    }

    if act.end < 1.0 - EPS {
        if m.unit != OffsetUnit::Percent {
            out.push(format!("{}: focus modules must use percent offsets", m.id));
        }
        let exit_at = exit_point(c, act);
        for p in [exit_at, 1.0] {
            let off = m.tracks.x.evaluate(p).abs().max(m.tracks.y.evaluate(p).abs());
            if off < OFF_CANVAS_PERCENT - EPS {
                out.push(format!(
                    "{} must be off-canvas (>= {OFF_CANVAS_PERCENT}%) at progress {p}, got {off}%",
                    m.id
                ));
            }
        }
    }

    check_transform_windows(c, m, out);
}

fn check_scatter(c: &Choreography, m: &ModuleDef, out: &mut Vec<String>) {
    if m.position_driver != Driver::Raw {
        out.push(format!("{}: scatter modules must be driven by raw progress", m.id));
    }
    for (prop, track) in [("x", &m.tracks.x), ("y", &m.tracks.y)] {
        if let Some(k) = track
            .keys()
            .iter()
            .find(|k| k.value.abs() > c.parallax_limit + EPS)
        {
            out.push(format!(
                "{}.{prop} drifts to {} beyond the parallax limit {}",
                m.id, k.value, c.parallax_limit
            ));
        }
    }
    for act in c.acts.iter().filter(|a| a.kind == ActKind::Focus) {
        if !is_constant_over(&m.tracks.opacity, act.hold_window(), 0.0) {
            out.push(format!(
                "{}.opacity must be 0 while '{}' holds",
                m.id, act.name
            ));
        }
    }
    check_transform_windows(c, m, out);
}

fn check_transform_windows(c: &Choreography, m: &ModuleDef, out: &mut Vec<String>) {
    let windows = c.transition_windows();
    for (prop, track) in [("scale", &m.tracks.scale), ("rotateY", &m.tracks.rotate_y)] {
        for w in track.keys().windows(2) {
            let (a, b) = (&w[0], &w[1]);
            if a.value == b.value {
                continue;
            }
            let inside = windows
                .iter()
                .any(|&(s, e)| s - EPS <= a.at && b.at <= e + EPS);
            if !inside {
                out.push(format!(
                    "{}.{prop} changes over {}..{} outside every transition window",
                    m.id, a.at, b.at
                ));
            }
        }
    }
}

/// Progress by which a focus module must have left: the settle point of the next act.
fn exit_point(c: &Choreography, act: &Act) -> f64 {
    c.acts
        .iter()
        .find(|a| (a.start - act.end).abs() <= EPS)
        .map_or(act.end, |next| next.settle)
}

/// `true` when `track` equals `value` everywhere in `[start, end]`.
///
/// Tracks are piecewise linear, so the window endpoints plus every key inside it decide.
fn is_constant_over(track: &Track<f64>, (start, end): (f64, f64), value: f64) -> bool {
    let same = |v: f64| (v - value).abs() <= EPS;
    same(track.evaluate(start))
        && same(track.evaluate(end))
        && track
            .keys()
            .iter()
            .filter(|k| start <= k.at && k.at <= end)
            .all(|k| same(k.value))
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/validate.rs"]
mod tests;
